//! # Admin DTOs
//!
//! Rows returned by the key-protected admin function. Listings are joins over
//! several tables, so columns outside the documented set are ignored and
//! columns a particular join may lack are optional.

use serde::{Deserialize, Serialize};

use super::numeric::{de_f64, de_opt_f64};

/// Platform totals (`?action=stats`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminStats {
    pub users: i64,
    pub transactions: TransactionTotals,
    #[serde(default)]
    pub balances: Vec<CurrencyBalance>,
}

/// Transaction counts and sums. Sums are `None` while no transaction exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionTotals {
    pub total_transactions: i64,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub total_deposits: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub total_exchanges: Option<f64>,
}

/// Sum of all wallet balances in one currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrencyBalance {
    pub currency: String,
    #[serde(deserialize_with = "de_f64")]
    pub total_balance: f64,
}

/// User row as the admin function lists it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminUser {
    pub id: i64,
    pub telegram_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub created_at: String,
    /// Present in listings, absent in `user_details`.
    #[serde(default)]
    pub wallets_count: i64,
    #[serde(default)]
    pub transactions_count: i64,
}

/// Balance movement (deposit, exchange, withdrawal).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminTransaction {
    pub id: i64,
    pub user_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(deserialize_with = "de_f64")]
    pub amount: f64,
    pub status: String,
    pub created_at: String,
    /// Owner, joined in by the transaction listing only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Wallet row joined with its currency name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminWallet {
    pub id: i64,
    pub user_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_name: Option<String>,
    #[serde(deserialize_with = "de_f64")]
    pub balance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// One user with wallets and latest transactions (`?action=user_details`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminUserDetails {
    pub user: AdminUser,
    #[serde(default)]
    pub wallets: Vec<AdminWallet>,
    #[serde(default)]
    pub transactions: Vec<AdminTransaction>,
}
