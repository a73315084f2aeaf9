use serde::{Deserialize, Serialize};

use super::numeric::de_f64;

/// Per-currency wallet. A user has at most one wallet per currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Wallet {
    pub id: i64,
    pub user_id: i64,
    pub currency: String,
    #[serde(deserialize_with = "de_f64")]
    pub balance: f64,
    /// Deposit address, when one has been issued.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}
