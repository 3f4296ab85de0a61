//! Utility modules

pub mod timeline;
pub mod validation;

pub use timeline::*;
pub use validation::*;
