//! Core types and data structures for the pricing system

use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Grouping key for price records
///
/// Only records sharing the same key can affect each other's intervals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PriceKey {
    /// Product the price applies to
    pub product_code: String,
    /// Sub-variant of the product (package size, etc.)
    pub number: i32,
    /// Department owning the price
    pub department: i64,
}

impl PriceKey {
    /// Create a new price key
    pub fn new(product_code: impl Into<String>, number: i32, department: i64) -> Self {
        Self {
            product_code: product_code.into(),
            number,
            department,
        }
    }
}

impl fmt::Display for PriceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}@{}", self.product_code, self.number, self.department)
    }
}

/// A price valid over the half-open interval `[begin, end)`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Opaque identifier, carried through merges
    pub id: String,
    /// Product the price applies to
    pub product_code: String,
    /// Sub-variant of the product
    pub number: i32,
    /// Department owning the price
    pub department: i64,
    /// Start of the interval, inclusive
    pub begin: NaiveDateTime,
    /// End of the interval, exclusive
    pub end: NaiveDateTime,
    /// Price value, never negative for accepted records
    pub value: BigDecimal,
}

impl PriceRecord {
    /// Create a new price record
    pub fn new(
        id: impl Into<String>,
        product_code: impl Into<String>,
        number: i32,
        department: i64,
        begin: NaiveDateTime,
        end: NaiveDateTime,
        value: BigDecimal,
    ) -> Self {
        Self {
            id: id.into(),
            product_code: product_code.into(),
            number,
            department,
            begin,
            end,
            value,
        }
    }

    /// Grouping key of this record
    pub fn key(&self) -> PriceKey {
        PriceKey::new(self.product_code.clone(), self.number, self.department)
    }

    /// Check whether this record belongs to the given key without allocating
    pub fn has_key(&self, key: &PriceKey) -> bool {
        self.product_code == key.product_code
            && self.number == key.number
            && self.department == key.department
    }

    /// Whether `instant` falls inside `[begin, end)`
    pub fn contains_instant(&self, instant: NaiveDateTime) -> bool {
        instant >= self.begin && instant < self.end
    }

    /// Whether the intervals of two records overlap
    ///
    /// Checked from both sides so containment in either direction is caught.
    pub fn overlaps(&self, other: &PriceRecord) -> bool {
        self.contains_instant(other.begin) || other.contains_instant(self.begin)
    }

    /// Length of the interval
    pub fn duration(&self) -> chrono::Duration {
        self.end - self.begin
    }

    /// Copy of this record with new bounds
    ///
    /// Everything except `begin` and `end` is carried over, `id` included.
    pub fn with_bounds(&self, begin: NaiveDateTime, end: NaiveDateTime) -> Self {
        debug_assert!(begin < end, "price interval begin must be before end");
        Self {
            begin,
            end,
            ..self.clone()
        }
    }
}

// `id` is carried along but does not take part in equality.
impl PartialEq for PriceRecord {
    fn eq(&self, other: &Self) -> bool {
        self.product_code == other.product_code
            && self.number == other.number
            && self.department == other.department
            && self.begin == other.begin
            && self.end == other.end
            && self.value == other.value
    }
}

impl Eq for PriceRecord {}

/// Errors that can occur while reconciling prices
#[derive(Debug, thiserror::Error)]
pub enum PriceError {
    #[error("List of {0} prices can't be absent")]
    NullInput(&'static str),
    #[error("Price {id}: begin {begin} must be before end {end}")]
    InvalidInterval {
        id: String,
        begin: NaiveDateTime,
        end: NaiveDateTime,
    },
    #[error("Price {id}: value {value} can't be less than 0")]
    NegativeValue { id: String, value: BigDecimal },
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type for pricing operations
pub type PriceResult<T> = Result<T, PriceError>;
