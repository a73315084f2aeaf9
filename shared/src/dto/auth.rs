use serde::{Deserialize, Serialize};

use super::numeric::de_f64;

/// Registration request (POST auth).
///
/// The auth function returns the existing user when `telegram_id` is already
/// registered, so this doubles as a sign-in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterUserRequest {
    pub telegram_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
}

/// Registered user.
///
/// `id` never changes once assigned and `referral_code` is unique across users.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub telegram_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    pub referral_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referred_by_id: Option<i64>,
    #[serde(deserialize_with = "de_f64")]
    pub balance_rub: f64,
    #[serde(deserialize_with = "de_f64")]
    pub referral_earnings: f64,
    pub is_admin: bool,
    pub is_blocked: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl User {
    /// Name to greet the user with: first name, then username, then the id.
    pub fn display_name(&self) -> String {
        self.first_name
            .as_deref()
            .or(self.username.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| format!("user {}", self.telegram_id))
    }
}

/// Error body the remote functions send with 4xx/5xx responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}
