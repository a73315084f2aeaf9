//! # Payment Provider DTOs
//!
//! Invoices and reference data from the crypto payment provider. The provider
//! is reached through a thin proxy function, so field names follow the
//! provider's API (amounts as strings, several alternative payment URLs).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::numeric::{de_f64, de_opt_f64};

/// Invoice lifecycle as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InvoiceStatus {
    Active,
    Paid,
    Expired,
    Other(String),
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &str {
        match self {
            InvoiceStatus::Active => "active",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Expired => "expired",
            InvoiceStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for InvoiceStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "active" => InvoiceStatus::Active,
            "paid" => InvoiceStatus::Paid,
            "expired" => InvoiceStatus::Expired,
            _ => InvoiceStatus::Other(raw),
        }
    }
}

impl From<InvoiceStatus> for String {
    fn from(status: InvoiceStatus) -> Self {
        match status {
            InvoiceStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Invoice as the provider sends it, before normalization.
#[derive(Debug, Deserialize)]
struct RawInvoice {
    invoice_id: i64,
    status: InvoiceStatus,
    #[serde(default)]
    asset: Option<String>,
    #[serde(default)]
    fiat: Option<String>,
    #[serde(deserialize_with = "de_f64")]
    amount: f64,
    #[serde(default)]
    pay_url: Option<String>,
    #[serde(default)]
    bot_invoice_url: Option<String>,
    #[serde(default)]
    mini_app_invoice_url: Option<String>,
    #[serde(default)]
    web_app_invoice_url: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    paid_at: Option<String>,
}

/// Externally issued payment request used to fund a deposit.
///
/// Decoding accepts the provider's raw invoice shape: the payer-facing URL is
/// taken from `pay_url`, then `bot_invoice_url`, `mini_app_invoice_url` and
/// `web_app_invoice_url`, and `fiat` stands in for a missing `asset`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "RawInvoice")]
pub struct CryptoInvoice {
    pub invoice_id: i64,
    pub status: InvoiceStatus,
    pub asset: String,
    pub amount: f64,
    pub pay_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<String>,
}

impl CryptoInvoice {
    pub fn is_paid(&self) -> bool {
        self.status == InvoiceStatus::Paid
    }
}

impl TryFrom<RawInvoice> for CryptoInvoice {
    type Error = String;

    fn try_from(raw: RawInvoice) -> Result<Self, Self::Error> {
        let pay_url = raw
            .pay_url
            .or(raw.bot_invoice_url)
            .or(raw.mini_app_invoice_url)
            .or(raw.web_app_invoice_url)
            .ok_or_else(|| format!("invoice {} has no payment url", raw.invoice_id))?;
        let asset = raw
            .asset
            .or(raw.fiat)
            .ok_or_else(|| format!("invoice {} has no asset", raw.invoice_id))?;

        Ok(CryptoInvoice {
            invoice_id: raw.invoice_id,
            status: raw.status,
            asset,
            amount: raw.amount,
            pay_url,
            description: raw.description,
            created_at: raw.created_at,
            paid_at: raw.paid_at,
        })
    }
}

/// Invoice creation request (POST to the payment proxy).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateInvoiceRequest {
    pub asset: String,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Opaque value echoed back by the provider, typically the payer's id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
}

/// Currency supported by the provider (`getCurrencies`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderCurrency {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub decimals: Option<u32>,
    #[serde(default)]
    pub is_blockchain: bool,
    #[serde(default)]
    pub is_stablecoin: bool,
    #[serde(default)]
    pub is_fiat: bool,
}

/// Balance of the provider app account in one currency (`getBalance`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderBalance {
    pub currency_code: String,
    #[serde(deserialize_with = "de_f64")]
    pub available: f64,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub onhold: Option<f64>,
}

/// Provider's own exchange rate (`getExchangeRates`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderExchangeRate {
    pub is_valid: bool,
    pub source: String,
    pub target: String,
    #[serde(deserialize_with = "de_f64")]
    pub rate: f64,
}
