//! # Pricing Core
//!
//! A library for keeping price timelines consistent: incoming priced
//! intervals are merged into an existing timeline so that, per product
//! and department, no two prices ever cover the same instant.
//!
//! ## Features
//!
//! - **Timeline reconciliation**: new prices override old ones where they conflict
//! - **Fragment splitting**: partially covered old prices keep their remaining parts
//! - **Same-value absorption**: overlapping prices with equal values collapse into one
//! - **Pluggable validation**: default and enhanced validators, or your own
//! - **Price book**: keep a current timeline and apply update batches to it
//!
//! ## Quick Start
//!
//! ```rust
//! use pricing_core::{merge_prices, PriceRecordBuilder};
//! use bigdecimal::BigDecimal;
//! use chrono::NaiveDate;
//!
//! let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap().and_hms_opt(0, 0, 0).unwrap();
//!
//! let old = PriceRecordBuilder::new("milk", 1, 10)
//!     .period(day(1), day(31))
//!     .value(BigDecimal::from(100))
//!     .build()
//!     .unwrap();
//! let promo = PriceRecordBuilder::new("milk", 1, 10)
//!     .period(day(10), day(15))
//!     .value(BigDecimal::from(80))
//!     .build()
//!     .unwrap();
//!
//! let merged = merge_prices(&[old], &[promo]).unwrap();
//! assert_eq!(merged.len(), 3);
//! ```

pub mod resolver;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use resolver::*;
pub use traits::*;
pub use types::*;
