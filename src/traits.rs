//! Traits for validation and extensibility

use bigdecimal::BigDecimal;

use crate::types::*;

/// Trait for implementing price validation rules
///
/// Incoming prices pass through a validator before any merging happens.
/// Prices already part of a timeline are trusted and never re-validated.
pub trait PriceValidator: Send + Sync {
    /// Validate a single incoming price
    fn validate_price(&self, price: &PriceRecord) -> PriceResult<()>;

    /// Validate a whole batch, stopping at the first failure
    fn validate_prices(&self, prices: &[PriceRecord]) -> PriceResult<()> {
        prices.iter().try_for_each(|price| self.validate_price(price))
    }
}

/// Default price validator: ordered interval and non-negative value
pub struct DefaultPriceValidator;

impl PriceValidator for DefaultPriceValidator {
    fn validate_price(&self, price: &PriceRecord) -> PriceResult<()> {
        if price.begin >= price.end {
            return Err(PriceError::InvalidInterval {
                id: price.id.clone(),
                begin: price.begin,
                end: price.end,
            });
        }

        if price.value < BigDecimal::from(0) {
            return Err(PriceError::NegativeValue {
                id: price.id.clone(),
                value: price.value.clone(),
            });
        }

        Ok(())
    }
}
