//! # Validation Utilities
//!
//! Precondition checks applied to caller input before anything is sent to the
//! remote system.

/// Validate that an amount is finite and strictly positive.
pub fn validate_positive_amount(value: f64, field_name: &str) -> Result<(), String> {
    if !value.is_finite() {
        return Err(format!("{} must be a finite number", field_name));
    }
    if value <= 0.0 {
        return Err(format!("{} must be greater than 0", field_name));
    }
    Ok(())
}

/// Validate a currency or asset code such as `BTC` or `USDT`.
///
/// Codes are non-empty, at most 16 characters, ASCII alphanumeric.
pub fn validate_code(value: &str, field_name: &str) -> Result<(), String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(format!("{} cannot be empty", field_name));
    }
    if value.len() > 16 || !value.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(format!("{} '{}' is not a valid currency code", field_name, value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_amount() {
        assert!(validate_positive_amount(0.5, "amount").is_ok());
        assert!(validate_positive_amount(0.0, "amount").is_err());
        assert!(validate_positive_amount(-3.0, "amount").is_err());
        assert!(validate_positive_amount(f64::NAN, "amount").is_err());
        assert!(validate_positive_amount(f64::INFINITY, "amount").is_err());
    }

    #[test]
    fn test_code() {
        assert!(validate_code("USDT", "asset").is_ok());
        assert!(validate_code("", "asset").is_err());
        assert!(validate_code("  ", "asset").is_err());
        assert!(validate_code("US DT", "asset").is_err());
        assert_eq!(
            validate_code("", "from_currency").unwrap_err(),
            "from_currency cannot be empty"
        );
    }
}
