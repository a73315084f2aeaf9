//! # Service Traits
//!
//! Seams for dependency injection:
//!
//! - [`Transport`] performs one HTTP round trip. The production implementation
//!   is [`crate::services::api::HttpTransport`]; tests script responses and
//!   count calls.
//! - [`ExchangeApi`] is the typed remote API. [`crate::services::api::RemoteClient`]
//!   implements it, and the session store and presentation code depend on the
//!   trait object rather than the concrete client.

use async_trait::async_trait;
use shared::{
    AdminStats, AdminTransaction, AdminUser, AdminUserDetails, CryptoInvoice, ExchangeOrder,
    ExchangeRate, Notification, OrderStatus, ProviderBalance, ProviderCurrency,
    ProviderExchangeRate, User, Wallet,
};

use super::error::Result;

/// HTTP method used by the remote functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }
}

/// A fully described request, independent of the HTTP library.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn with_body(method: HttpMethod, url: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: Some(body),
        }
    }

    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn header(mut self, name: &str, value: impl ToString) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Value of the first header named `name`, compared case-insensitively.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Value of the first query parameter named `key`.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response: status code and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One HTTP round trip.
///
/// Implementations return `Err` only when no response was received
/// ([`crate::core::ClientError::Network`]); every received response, whatever
/// its status, is `Ok`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// Typed operations against the remote functions.
///
/// Each call issues exactly one round trip, never retries and never touches
/// local state.
#[async_trait]
pub trait ExchangeApi: Send + Sync {
    /// Register the user, or return the existing record for `telegram_id`.
    async fn register_user(
        &self,
        telegram_id: i64,
        username: Option<&str>,
        first_name: Option<&str>,
        referral_code: Option<&str>,
    ) -> Result<User>;

    async fn list_wallets(&self, telegram_id: i64) -> Result<Vec<Wallet>>;

    async fn list_notifications(&self, telegram_id: i64) -> Result<Vec<Notification>>;

    async fn create_notification(
        &self,
        telegram_id: i64,
        kind: &str,
        title: &str,
        message: &str,
    ) -> Result<Notification>;

    async fn mark_notification_read(&self, notification_id: i64) -> Result<Notification>;

    async fn list_exchange_orders(&self, telegram_id: i64) -> Result<Vec<ExchangeOrder>>;

    /// Every user's orders (admin view).
    async fn list_all_orders(&self) -> Result<Vec<ExchangeOrder>>;

    /// Create an order. The remote system alone computes `to_amount`,
    /// `exchange_rate` and `fee`.
    async fn create_exchange_order(
        &self,
        telegram_id: i64,
        from_currency: &str,
        to_currency: &str,
        from_amount: f64,
    ) -> Result<ExchangeOrder>;

    async fn update_order_status(&self, order_id: i64, status: OrderStatus) -> Result<ExchangeOrder>;

    /// Active rates only.
    async fn list_rates(&self) -> Result<Vec<ExchangeRate>>;

    /// Active and inactive rates (admin view).
    async fn list_all_rates(&self) -> Result<Vec<ExchangeRate>>;

    async fn update_rate(
        &self,
        from_currency: &str,
        to_currency: &str,
        rate: f64,
        markup_percent: Option<f64>,
    ) -> Result<ExchangeRate>;

    async fn create_invoice(
        &self,
        asset: &str,
        amount: f64,
        description: Option<&str>,
        payload: Option<&str>,
    ) -> Result<CryptoInvoice>;

    async fn get_invoice(&self, invoice_id: i64) -> Result<CryptoInvoice>;

    async fn list_provider_currencies(&self) -> Result<Vec<ProviderCurrency>>;

    async fn provider_balance(&self) -> Result<Vec<ProviderBalance>>;

    async fn provider_exchange_rates(&self) -> Result<Vec<ProviderExchangeRate>>;

    /// Platform totals. Every admin call sends `admin_key` as `X-Admin-Key`;
    /// a wrong key fails with HTTP 403.
    async fn admin_stats(&self, admin_key: &str) -> Result<AdminStats>;

    async fn admin_users(&self, admin_key: &str, limit: u32, offset: u32) -> Result<Vec<AdminUser>>;

    async fn admin_transactions(
        &self,
        admin_key: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<AdminTransaction>>;

    async fn admin_user_details(&self, admin_key: &str, user_id: i64) -> Result<AdminUserDetails>;
}
