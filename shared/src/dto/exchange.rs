//! # Exchange Order DTOs

use serde::{Deserialize, Serialize};
use std::fmt;

use super::numeric::de_f64;

/// Lifecycle status of an exchange order.
///
/// The four canonical values are modelled explicitly. Anything else the remote
/// system sends (or a caller chooses to send) is carried through verbatim in
/// [`OrderStatus::Other`]; the remote system decides whether it is valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    Processing,
    Completed,
    Cancelled,
    Other(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Other(raw) => raw,
        }
    }

    /// Completed and cancelled orders never change again.
    pub fn is_final(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }
}

impl From<String> for OrderStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending" => OrderStatus::Pending,
            "processing" => OrderStatus::Processing,
            "completed" => OrderStatus::Completed,
            "cancelled" => OrderStatus::Cancelled,
            _ => OrderStatus::Other(raw),
        }
    }
}

impl From<&str> for OrderStatus {
    fn from(raw: &str) -> Self {
        OrderStatus::from(raw.to_string())
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request to convert `from_amount` of `from_currency` into `to_currency`.
///
/// Only the inputs are sent; the exchange function computes rate, fee and
/// `to_amount` on its side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateOrderRequest {
    pub telegram_id: i64,
    pub from_currency: String,
    pub to_currency: String,
    pub from_amount: f64,
}

/// Status change for an existing order (PUT exchange).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateOrderStatusRequest {
    pub order_id: i64,
    pub status: OrderStatus,
}

/// Exchange order as recorded by the remote system.
///
/// `to_amount`, `exchange_rate` and `fee` are fixed when the order is created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExchangeOrder {
    pub id: i64,
    pub user_id: i64,
    pub from_currency: String,
    pub to_currency: String,
    #[serde(deserialize_with = "de_f64")]
    pub from_amount: f64,
    #[serde(deserialize_with = "de_f64")]
    pub to_amount: f64,
    #[serde(deserialize_with = "de_f64")]
    pub exchange_rate: f64,
    #[serde(deserialize_with = "de_f64")]
    pub fee: f64,
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crypto_bot_invoice_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    pub created_at: String,
}
