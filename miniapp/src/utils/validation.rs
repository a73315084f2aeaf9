//! Precondition checks run before any request is built.
//!
//! A failed check returns [`ClientError::Validation`] and the operation issues
//! no round trip.

use lib_utils::{validate_code, validate_positive_amount};

use crate::core::{ClientError, Result};

/// Telegram user ids are positive.
pub fn validate_telegram_id(telegram_id: i64) -> Result<()> {
    if telegram_id <= 0 {
        return Err(ClientError::Validation(format!(
            "telegram_id must be positive, got {}",
            telegram_id
        )));
    }
    Ok(())
}

/// Validate and normalize a currency code.
///
/// The returned code is what gets sent: surrounding whitespace is removed and
/// letters are upper-cased, so `" usdt"` becomes `"USDT"`. Rates, wallets and
/// provider currencies all use upper-case codes.
pub fn currency_code(value: &str, field_name: &str) -> Result<String> {
    validate_code(value, field_name).map_err(ClientError::Validation)?;
    Ok(value.trim().to_ascii_uppercase())
}

/// Validate a directed pair; both sides valid and distinct.
pub fn currency_pair(from: &str, to: &str) -> Result<(String, String)> {
    let from = currency_code(from, "from_currency")?;
    let to = currency_code(to, "to_currency")?;
    if from == to {
        return Err(ClientError::Validation(format!(
            "cannot exchange {} into itself",
            from
        )));
    }
    Ok((from, to))
}

pub fn positive_amount(value: f64, field_name: &str) -> Result<f64> {
    validate_positive_amount(value, field_name).map_err(ClientError::Validation)?;
    Ok(value)
}

/// Markup must keep the offered rate positive.
pub fn markup_percent(value: f64) -> Result<f64> {
    if !value.is_finite() || value <= -100.0 {
        return Err(ClientError::Validation(format!(
            "markup_percent must be a finite number above -100, got {}",
            value
        )));
    }
    Ok(value)
}

pub fn not_blank<'a>(value: &'a str, field_name: &str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(ClientError::Validation(format!("{} cannot be empty", field_name)));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_telegram_id() {
        assert!(validate_telegram_id(123).is_ok());
        assert!(validate_telegram_id(0).is_err());
        assert!(validate_telegram_id(-5).is_err());
    }

    #[test]
    fn test_currency_pair_normalizes_and_rejects_same_currency() {
        assert_eq!(
            currency_pair(" usdt", "btc").unwrap(),
            ("USDT".to_string(), "BTC".to_string())
        );
        assert!(matches!(currency_pair("BTC", "btc"), Err(ClientError::Validation(_))));
        assert!(matches!(currency_pair("", "BTC"), Err(ClientError::Validation(_))));
    }

    #[test]
    fn test_amount_and_markup() {
        assert_eq!(positive_amount(10.0, "amount").unwrap(), 10.0);
        assert!(positive_amount(0.0, "amount").is_err());
        assert!(markup_percent(2.5).is_ok());
        assert!(markup_percent(-100.0).is_err());
        assert!(markup_percent(f64::NAN).is_err());
    }

    #[test]
    fn test_not_blank() {
        assert_eq!(not_blank("Hi", "title").unwrap(), "Hi");
        assert!(not_blank("   ", "title").is_err());
    }
}
