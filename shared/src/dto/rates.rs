use serde::{Deserialize, Serialize};

use super::numeric::de_f64;

/// Directed exchange rate between two currencies.
///
/// At most one active row exists per ordered `(from, to)` pair; inactive rows
/// cannot be used for new orders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExchangeRate {
    pub id: i64,
    pub from_currency: String,
    pub to_currency: String,
    #[serde(deserialize_with = "de_f64")]
    pub rate: f64,
    #[serde(deserialize_with = "de_f64")]
    pub markup_percent: f64,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl ExchangeRate {
    /// Base rate with the markup percentage applied on top.
    pub fn offered_rate(&self) -> f64 {
        self.rate * (1.0 + self.markup_percent / 100.0)
    }

    pub fn is_pair(&self, from: &str, to: &str) -> bool {
        self.from_currency.eq_ignore_ascii_case(from) && self.to_currency.eq_ignore_ascii_case(to)
    }
}

/// Admin rate update (PUT rates). `markup_percent` is left unchanged when absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateRateRequest {
    pub from_currency: String,
    pub to_currency: String,
    pub rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markup_percent: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offered_rate_applies_markup() {
        let rate = ExchangeRate {
            id: 1,
            from_currency: "BTC".to_string(),
            to_currency: "USDT".to_string(),
            rate: 40000.0,
            markup_percent: 2.5,
            is_active: true,
            created_at: String::new(),
            updated_at: String::new(),
        };
        assert!((rate.offered_rate() - 41000.0).abs() < 1e-9);
        assert!(rate.is_pair("btc", "USDT"));
        assert!(!rate.is_pair("USDT", "BTC"));
    }

    #[test]
    fn test_update_request_without_markup() {
        let req = UpdateRateRequest {
            from_currency: "BTC".to_string(),
            to_currency: "USDT".to_string(),
            rate: 43210.5,
            markup_percent: None,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({"from_currency": "BTC", "to_currency": "USDT", "rate": 43210.5})
        );
    }
}
