//! Validation utilities

use crate::traits::*;
use crate::types::*;

/// Validate that a product code is usable as part of a key
pub fn validate_product_code(product_code: &str) -> PriceResult<()> {
    if product_code.trim().is_empty() {
        return Err(PriceError::Validation(
            "Product code cannot be empty".to_string(),
        ));
    }

    if product_code.len() > 50 {
        return Err(PriceError::Validation(
            "Product code cannot exceed 50 characters".to_string(),
        ));
    }

    if !product_code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(PriceError::Validation(format!(
            "Product code '{}' can only contain alphanumeric characters, dashes, and underscores",
            product_code
        )));
    }

    Ok(())
}

/// Validate the numeric parts of a key
pub fn validate_key_numbers(number: i32, department: i64) -> PriceResult<()> {
    if number < 0 {
        return Err(PriceError::Validation(format!(
            "Product number cannot be negative: {}",
            number
        )));
    }

    if department < 0 {
        return Err(PriceError::Validation(format!(
            "Department cannot be negative: {}",
            department
        )));
    }

    Ok(())
}

/// Validator with key checks on top of the default rules
pub struct EnhancedPriceValidator;

impl PriceValidator for EnhancedPriceValidator {
    fn validate_price(&self, price: &PriceRecord) -> PriceResult<()> {
        DefaultPriceValidator.validate_price(price)?;

        validate_product_code(&price.product_code)?;
        validate_key_numbers(price.number, price.department)?;

        Ok(())
    }
}
