//! Fluent construction of price records

use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::traits::*;
use crate::types::*;

/// Builder for creating validated price records
#[derive(Debug, Clone)]
pub struct PriceRecordBuilder {
    id: Option<String>,
    key: PriceKey,
    begin: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    value: BigDecimal,
}

impl PriceRecordBuilder {
    /// Create a new builder for the given product, number and department
    pub fn new(product_code: impl Into<String>, number: i32, department: i64) -> Self {
        Self::for_key(PriceKey::new(product_code, number, department))
    }

    /// Create a new builder for an existing key
    pub fn for_key(key: PriceKey) -> Self {
        Self {
            id: None,
            key,
            begin: None,
            end: None,
            value: BigDecimal::from(0),
        }
    }

    /// Set the identifier; a random one is generated otherwise
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the inclusive start
    pub fn begin(mut self, begin: NaiveDateTime) -> Self {
        self.begin = Some(begin);
        self
    }

    /// Set the exclusive end
    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    /// Set both bounds
    pub fn period(self, begin: NaiveDateTime, end: NaiveDateTime) -> Self {
        self.begin(begin).end(end)
    }

    /// Set the price value
    pub fn value(mut self, value: BigDecimal) -> Self {
        self.value = value;
        self
    }

    /// Build the price record
    pub fn build(self) -> PriceResult<PriceRecord> {
        let begin = self
            .begin
            .ok_or_else(|| PriceError::Validation(format!("Price for {} has no begin", self.key)))?;
        let end = self
            .end
            .ok_or_else(|| PriceError::Validation(format!("Price for {} has no end", self.key)))?;

        let price = PriceRecord::new(
            self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            self.key.product_code,
            self.key.number,
            self.key.department,
            begin,
            end,
            self.value,
        );

        DefaultPriceValidator.validate_price(&price)?;
        Ok(price)
    }
}
