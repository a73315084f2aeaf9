//! Lenient numeric decoding.
//!
//! Decimal columns reach the client either as JSON numbers or as strings
//! (`"43210.50"`), depending on which remote function produced them.

use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

impl NumberOrString {
    fn into_f64<E: de::Error>(self) -> Result<f64, E> {
        match self {
            NumberOrString::Number(value) => Ok(value),
            NumberOrString::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| E::custom(format!("invalid number '{}'", text))),
        }
    }
}

/// Deserialize an `f64` from a number or a numeric string.
pub fn de_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    NumberOrString::deserialize(deserializer)?.into_f64()
}

/// Deserialize an optional `f64`; `null` and a missing field give `None`.
///
/// Use together with `#[serde(default)]`.
pub fn de_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<NumberOrString>::deserialize(deserializer)?
        .map(NumberOrString::into_f64)
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "de_f64")]
        amount: f64,
        #[serde(default, deserialize_with = "de_opt_f64")]
        markup: Option<f64>,
    }

    #[test]
    fn test_number_and_string_amounts() {
        let p: Probe = serde_json::from_str(r#"{"amount": 1.5}"#).unwrap();
        assert_eq!(p.amount, 1.5);
        assert_eq!(p.markup, None);

        let p: Probe = serde_json::from_str(r#"{"amount": " 43210.50 ", "markup": "2.5"}"#).unwrap();
        assert_eq!(p.amount, 43210.5);
        assert_eq!(p.markup, Some(2.5));

        let p: Probe = serde_json::from_str(r#"{"amount": 3, "markup": null}"#).unwrap();
        assert_eq!(p.amount, 3.0);
        assert_eq!(p.markup, None);
    }

    #[test]
    fn test_rejects_non_numeric_text() {
        assert!(serde_json::from_str::<Probe>(r#"{"amount": "lots"}"#).is_err());
        assert!(serde_json::from_str::<Probe>(r#"{"amount": true}"#).is_err());
    }
}
