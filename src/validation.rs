// Validation utilities module
// Provides custom validation functions shared by the pricing engines

use rust_decimal::Decimal;
use validator::ValidationError;

/// Validates that a percentage lies within 0-100 inclusive
pub fn validate_percent_range(percent: Decimal) -> Result<(), ValidationError> {
    if percent < Decimal::ZERO || percent > Decimal::from(100) {
        Err(ValidationError::new("percent_out_of_range"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_percent_range_accepts_bounds() {
        assert!(validate_percent_range(dec!(0)).is_ok());
        assert!(validate_percent_range(dec!(100)).is_ok());
        assert!(validate_percent_range(dec!(3.33)).is_ok());
    }

    #[test]
    fn test_percent_range_rejects_out_of_bounds() {
        assert!(validate_percent_range(dec!(-0.01)).is_err());
        assert!(validate_percent_range(dec!(100.01)).is_err());
        assert!(validate_percent_range(dec!(150)).is_err());
    }
}
