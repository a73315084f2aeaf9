//! # Client Configuration
//!
//! Endpoint URLs and runtime knobs, read from the environment.
//!
//! | Variable | Meaning |
//! |---|---|
//! | `MINIAPP_FUNC2URL` | Path to a `func2url.json` mapping function names to URLs |
//! | `MINIAPP_AUTH_URL` ... `MINIAPP_PAYMENTS_URL` | Per-endpoint URLs, override the mapping |
//! | `MINIAPP_HTTP_TIMEOUT_SECS` | Optional request timeout; none when unset |
//! | `MINIAPP_DEFAULT_TELEGRAM_ID` | Identity used when no host is present (default `123`) |
//! | `MINIAPP_INIT_DATA` | Raw host init-data string for headless runs |
//! | `MINIAPP_ADMIN_URL` | Admin function URL; optional, admin calls fail without it |
//! | `MINIAPP_ADMIN_KEY` | Admin key sent as `X-Admin-Key` by the headless binary |

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use lib_utils::{get_env_opt, get_env_parse};

use crate::core::{ClientError, Result};

/// Identity used when the host supplies none.
pub const DEFAULT_TELEGRAM_ID: i64 = 123;

/// Named remote function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Auth,
    Wallets,
    Notifications,
    Exchange,
    Rates,
    /// Proxy in front of the crypto payment provider.
    Payments,
    /// Key-protected admin statistics and listings.
    Admin,
}

impl Endpoint {
    pub fn all() -> &'static [Endpoint] {
        &[
            Endpoint::Auth,
            Endpoint::Wallets,
            Endpoint::Notifications,
            Endpoint::Exchange,
            Endpoint::Rates,
            Endpoint::Payments,
            Endpoint::Admin,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Auth => "auth",
            Endpoint::Wallets => "wallets",
            Endpoint::Notifications => "notifications",
            Endpoint::Exchange => "exchange",
            Endpoint::Rates => "rates",
            Endpoint::Payments => "payments",
            Endpoint::Admin => "admin",
        }
    }

    /// Keys this endpoint may appear under in `func2url.json`.
    fn func_names(&self) -> &'static [&'static str] {
        match self {
            Endpoint::Payments => &["payments", "crypto-bot"],
            Endpoint::Auth => &["auth"],
            Endpoint::Wallets => &["wallets"],
            Endpoint::Notifications => &["notifications"],
            Endpoint::Exchange => &["exchange"],
            Endpoint::Rates => &["rates"],
            Endpoint::Admin => &["admin"],
        }
    }

    /// Regular users never reach the admin function, so it may be left out.
    pub fn is_required(&self) -> bool {
        !matches!(self, Endpoint::Admin)
    }

    fn env_var(&self) -> &'static str {
        match self {
            Endpoint::Auth => "MINIAPP_AUTH_URL",
            Endpoint::Wallets => "MINIAPP_WALLETS_URL",
            Endpoint::Notifications => "MINIAPP_NOTIFICATIONS_URL",
            Endpoint::Exchange => "MINIAPP_EXCHANGE_URL",
            Endpoint::Rates => "MINIAPP_RATES_URL",
            Endpoint::Payments => "MINIAPP_PAYMENTS_URL",
            Endpoint::Admin => "MINIAPP_ADMIN_URL",
        }
    }
}

/// Static mapping from endpoint name to base URL.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EndpointMap {
    urls: HashMap<Endpoint, String>,
}

impl EndpointMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, mostly for tests.
    pub fn with(mut self, endpoint: Endpoint, url: impl Into<String>) -> Self {
        self.set(endpoint, url);
        self
    }

    pub fn set(&mut self, endpoint: Endpoint, url: impl Into<String>) {
        self.urls.insert(endpoint, url.into());
    }

    pub fn get(&self, endpoint: Endpoint) -> Option<&str> {
        self.urls.get(&endpoint).map(String::as_str)
    }

    /// Parse a `func2url.json` document (`{"auth": "https://...", ...}`).
    ///
    /// Unknown keys are ignored; the payment proxy is accepted as either
    /// `payments` or `crypto-bot`.
    pub fn from_func2url(json: &str) -> Result<Self> {
        let raw: HashMap<String, String> = serde_json::from_str(json)
            .map_err(|e| ClientError::Config(format!("invalid func2url mapping: {}", e)))?;

        let mut map = Self::new();
        for endpoint in Endpoint::all() {
            if let Some(url) = endpoint.func_names().iter().find_map(|name| raw.get(*name)) {
                map.set(*endpoint, url.trim());
            }
        }
        Ok(map)
    }

    pub fn from_func2url_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            ClientError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_func2url(&json)
    }

    /// Every required endpoint must be present, and every configured one must
    /// be an absolute http(s) URL.
    pub fn validate(&self) -> Result<()> {
        for endpoint in Endpoint::all() {
            if !endpoint.is_required() && self.get(*endpoint).is_none() {
                continue;
            }
            let url = self.get(*endpoint).ok_or_else(|| {
                ClientError::Config(format!(
                    "no URL configured for the {} endpoint (set {})",
                    endpoint.name(),
                    endpoint.env_var()
                ))
            })?;

            let rest = url
                .strip_prefix("https://")
                .or_else(|| url.strip_prefix("http://"))
                .ok_or_else(|| {
                    ClientError::Config(format!(
                        "{} endpoint URL '{}' must start with http:// or https://",
                        endpoint.name(),
                        url
                    ))
                })?;
            if rest.is_empty() || rest.starts_with('/') {
                return Err(ClientError::Config(format!(
                    "{} endpoint URL '{}' has no host",
                    endpoint.name(),
                    url
                )));
            }
        }
        Ok(())
    }
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoints: EndpointMap,
    /// Per-request timeout. `None` leaves requests unbounded.
    pub http_timeout: Option<Duration>,
    pub default_telegram_id: i64,
    /// Raw host init data, for runs outside a real host.
    pub init_data: Option<String>,
    /// Admin key for the admin function, when the runner has one.
    pub admin_key: Option<String>,
}

impl ClientConfig {
    pub fn new(endpoints: EndpointMap) -> Self {
        Self {
            endpoints,
            http_timeout: None,
            default_telegram_id: DEFAULT_TELEGRAM_ID,
            init_data: None,
            admin_key: None,
        }
    }

    /// Load configuration from environment variables and validate it.
    pub fn from_env() -> Result<Self> {
        let mut endpoints = match get_env_opt("MINIAPP_FUNC2URL") {
            Some(path) => EndpointMap::from_func2url_file(path)?,
            None => EndpointMap::new(),
        };
        for endpoint in Endpoint::all() {
            if let Some(url) = get_env_opt(endpoint.env_var()) {
                endpoints.set(*endpoint, url);
            }
        }

        let http_timeout = match get_env_opt("MINIAPP_HTTP_TIMEOUT_SECS") {
            Some(_) => Some(Duration::from_secs(
                get_env_parse::<u64>("MINIAPP_HTTP_TIMEOUT_SECS")
                    .map_err(|e| ClientError::Config(e.to_string()))?,
            )),
            None => None,
        };

        let default_telegram_id = match get_env_opt("MINIAPP_DEFAULT_TELEGRAM_ID") {
            Some(_) => get_env_parse::<i64>("MINIAPP_DEFAULT_TELEGRAM_ID")
                .map_err(|e| ClientError::Config(e.to_string()))?,
            None => DEFAULT_TELEGRAM_ID,
        };

        let config = Self {
            endpoints,
            http_timeout,
            default_telegram_id,
            init_data: get_env_opt("MINIAPP_INIT_DATA"),
            admin_key: get_env_opt("MINIAPP_ADMIN_KEY"),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.endpoints.validate()?;
        if self.http_timeout == Some(Duration::ZERO) {
            return Err(ClientError::Config(
                "MINIAPP_HTTP_TIMEOUT_SECS must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn test_endpoints() -> EndpointMap {
    EndpointMap::new()
        .with(Endpoint::Auth, "https://functions.test/auth")
        .with(Endpoint::Wallets, "https://functions.test/wallets")
        .with(Endpoint::Notifications, "https://functions.test/notifications")
        .with(Endpoint::Exchange, "https://functions.test/exchange")
        .with(Endpoint::Rates, "https://functions.test/rates")
        .with(Endpoint::Payments, "https://functions.test/crypto-bot")
        .with(Endpoint::Admin, "https://functions.test/admin")
}
