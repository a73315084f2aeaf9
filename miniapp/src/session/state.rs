//! # Session State Types
//!
//! Cached per-user data held by the [`SessionStore`](super::SessionStore),
//! plus the markers recording which fields fell back to empty on the last
//! load.

use std::fmt;

use shared::{ExchangeOrder, ExchangeRate, User, Wallet};

use crate::core::ClientError;

/// Error text shown when the load itself could not be orchestrated.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load data";

/// Snapshot of everything the store holds for the current user.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub wallets: Vec<Wallet>,
    pub orders: Vec<ExchangeOrder>,
    pub rates: Vec<ExchangeRate>,
    pub loading: bool,
    pub error: Option<String>,
    /// Fields emptied by a failed fetch during the last applied load.
    pub degraded: Vec<DegradedField>,
    /// Identity of the last `load`.
    pub telegram_id: Option<i64>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            wallets: Vec::new(),
            orders: Vec::new(),
            rates: Vec::new(),
            loading: true,
            error: None,
            degraded: Vec::new(),
            telegram_id: None,
        }
    }
}

impl SessionState {
    /// Wallet holding `currency`, case-insensitive.
    pub fn wallet(&self, currency: &str) -> Option<&Wallet> {
        self.wallets
            .iter()
            .find(|w| w.currency.eq_ignore_ascii_case(currency))
    }

    /// The active rate for the directed pair `from -> to`.
    pub fn active_rate(&self, from: &str, to: &str) -> Option<&ExchangeRate> {
        self.rates.iter().find(|r| r.is_active && r.is_pair(from, to))
    }

    pub fn is_degraded(&self, field: SessionField) -> bool {
        self.degraded.iter().any(|d| d.field == field)
    }

    /// Drop everything cached for the previous identity.
    pub(crate) fn clear_data(&mut self) {
        self.user = None;
        self.wallets.clear();
        self.orders.clear();
        self.rates.clear();
        self.degraded.clear();
    }
}

/// Field of [`SessionState`] filled by the load fan-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionField {
    Wallets,
    Orders,
    Rates,
}

impl SessionField {
    pub fn name(&self) -> &'static str {
        match self {
            SessionField::Wallets => "wallets",
            SessionField::Orders => "orders",
            SessionField::Rates => "rates",
        }
    }
}

impl fmt::Display for SessionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a field fetch failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchFailure {
    /// The remote has no such resource (HTTP 404), e.g. an unregistered user.
    NotFound,
    /// No response: network failure, missing configuration or a rejected argument.
    Transport,
    /// Any other non-success answer, including payment provider rejections.
    Remote,
    /// The body did not match the expected shape.
    Decode,
}

impl From<&ClientError> for FetchFailure {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::Http { status: 404, .. } => FetchFailure::NotFound,
            ClientError::Http { .. } | ClientError::Provider(_) => FetchFailure::Remote,
            ClientError::Decode(_) => FetchFailure::Decode,
            ClientError::Network(_) | ClientError::Config(_) | ClientError::Validation(_) => {
                FetchFailure::Transport
            }
        }
    }
}

/// A field that was replaced by an empty list because its fetch failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegradedField {
    pub field: SessionField,
    pub failure: FetchFailure,
    pub message: String,
}

impl DegradedField {
    pub fn new(field: SessionField, err: &ClientError) -> Self {
        Self {
            field,
            failure: FetchFailure::from(err),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate(from: &str, to: &str, is_active: bool) -> ExchangeRate {
        ExchangeRate {
            id: 1,
            from_currency: from.to_string(),
            to_currency: to.to_string(),
            rate: 43210.5,
            markup_percent: 0.0,
            is_active,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn test_initial_state_is_loading_and_empty() {
        let state = SessionState::default();
        assert!(state.loading);
        assert!(state.error.is_none());
        assert!(state.wallets.is_empty() && state.orders.is_empty() && state.rates.is_empty());
        assert!(state.telegram_id.is_none());
    }

    #[test]
    fn test_active_rate_skips_inactive_and_reverse_pairs() {
        let state = SessionState {
            rates: vec![rate("BTC", "USDT", false), rate("USDT", "BTC", true), rate("BTC", "USDT", true)],
            ..SessionState::default()
        };

        let found = state.active_rate("btc", "usdt").unwrap();
        assert!(found.is_active);
        assert_eq!(found.from_currency, "BTC");
        assert!(state.active_rate("ETH", "USDT").is_none());
    }

    #[test]
    fn test_failure_classification() {
        let not_found = ClientError::Http { status: 404, message: "User not found".to_string() };
        assert_eq!(FetchFailure::from(&not_found), FetchFailure::NotFound);
        assert_eq!(
            FetchFailure::from(&ClientError::Http { status: 500, message: String::new() }),
            FetchFailure::Remote
        );
        assert_eq!(
            FetchFailure::from(&ClientError::Network("reset".to_string())),
            FetchFailure::Transport
        );
        assert_eq!(
            FetchFailure::from(&ClientError::Decode("bad".to_string())),
            FetchFailure::Decode
        );

        let marker = DegradedField::new(SessionField::Wallets, &not_found);
        assert_eq!(marker.message, "HTTP error 404: User not found");
    }
}
