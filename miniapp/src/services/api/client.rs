//! # Remote Client
//!
//! Request plumbing shared by every endpoint module: URL resolution, one
//! round trip through the [`Transport`], status mapping and JSON decoding.

use std::time::Instant;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use shared::{
    AdminStats, AdminTransaction, AdminUser, AdminUserDetails, CryptoInvoice, ErrorResponse,
    ExchangeOrder, ExchangeRate, Notification, OrderStatus, ProviderBalance, ProviderCurrency,
    ProviderExchangeRate, User, Wallet,
};

use super::transport::HttpTransport;
use crate::config::{ClientConfig, Endpoint, EndpointMap};
use crate::core::{
    ApiRequest, ApiResponse, ClientError, ExchangeApi, HttpMethod, Result, Transport,
};

/// Typed client for the remote functions.
///
/// Generic over the transport so tests can substitute a scripted one; the
/// default is [`HttpTransport`].
pub struct RemoteClient<T = HttpTransport> {
    transport: T,
    endpoints: EndpointMap,
}

impl RemoteClient<HttpTransport> {
    /// Create a client over HTTP from validated configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(config.http_timeout)?;
        Ok(Self::with_transport(transport, config.endpoints.clone()))
    }
}

impl<T: Transport> RemoteClient<T> {
    pub fn with_transport(transport: T, endpoints: EndpointMap) -> Self {
        Self {
            transport,
            endpoints,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn endpoints(&self) -> &EndpointMap {
        &self.endpoints
    }

    fn url(&self, endpoint: Endpoint) -> Result<String> {
        self.endpoints
            .get(endpoint)
            .map(str::to_string)
            .ok_or_else(|| {
                ClientError::Config(format!("no URL configured for the {} endpoint", endpoint.name()))
            })
    }

    /// GET `endpoint` with `query` and decode the body as `R`.
    pub(crate) async fn fetch<R: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        query: &[(&str, String)],
    ) -> Result<R> {
        self.fetch_with_headers(endpoint, query, &[]).await
    }

    /// [`fetch`](Self::fetch) with extra request headers.
    pub(crate) async fn fetch_with_headers<R: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        query: &[(&str, String)],
        headers: &[(&str, &str)],
    ) -> Result<R> {
        let request = query
            .iter()
            .fold(ApiRequest::get(self.url(endpoint)?), |req, (key, value)| {
                req.query(key, value)
            });
        let request = headers
            .iter()
            .fold(request, |req, (name, value)| req.header(name, value));
        let value = self.execute(endpoint, request).await?;
        decode(endpoint, value)
    }

    /// Send `body` as JSON with `method` and decode the body as `R`.
    pub(crate) async fn submit<B: Serialize, R: DeserializeOwned>(
        &self,
        method: HttpMethod,
        endpoint: Endpoint,
        body: &B,
    ) -> Result<R> {
        let body = serde_json::to_value(body)
            .map_err(|e| ClientError::Decode(format!("cannot encode request body: {}", e)))?;
        let request = ApiRequest::with_body(method, self.url(endpoint)?, body);
        let value = self.execute(endpoint, request).await?;
        decode(endpoint, value)
    }

    /// One round trip; maps non-2xx to [`ClientError::Http`] and parses the body.
    async fn execute(&self, endpoint: Endpoint, request: ApiRequest) -> Result<Value> {
        let start = Instant::now();
        let method = request.method.as_str();

        tracing::debug!(
            endpoint = endpoint.name(),
            method,
            url = %request.url,
            "Sending request"
        );

        let response = self.transport.send(request).await.map_err(|e| {
            tracing::error!(
                endpoint = endpoint.name(),
                method,
                error = %e,
                duration_ms = start.elapsed().as_millis(),
                "Request failed before a response arrived"
            );
            e
        })?;

        let duration_ms = start.elapsed().as_millis();

        if !response.is_success() {
            let err = http_error(&response);
            tracing::warn!(
                endpoint = endpoint.name(),
                method,
                status = response.status,
                error = %err,
                duration_ms,
                "Request returned non-success status"
            );
            return Err(err);
        }

        let value = serde_json::from_str::<Value>(&response.body).map_err(|e| {
            tracing::error!(
                endpoint = endpoint.name(),
                method,
                error = %e,
                duration_ms,
                "Response body is not JSON"
            );
            ClientError::Decode(format!("{} response is not JSON: {}", endpoint.name(), e))
        })?;

        tracing::debug!(
            endpoint = endpoint.name(),
            method,
            status = response.status,
            duration_ms,
            "Request completed"
        );

        Ok(value)
    }
}

fn http_error(response: &ApiResponse) -> ClientError {
    let message = serde_json::from_str::<ErrorResponse>(&response.body)
        .map(|body| body.error)
        .unwrap_or_else(|_| {
            reqwest::StatusCode::from_u16(response.status)
                .ok()
                .and_then(|status| status.canonical_reason())
                .unwrap_or("unexpected status")
                .to_string()
        });

    ClientError::Http {
        status: response.status,
        message,
    }
}

/// Decode a JSON value into `R`, reporting shape mismatches as [`ClientError::Decode`].
pub(crate) fn decode<R: DeserializeOwned>(endpoint: Endpoint, value: Value) -> Result<R> {
    serde_json::from_value(value).map_err(|e| {
        tracing::error!(endpoint = endpoint.name(), error = %e, "Unexpected response shape");
        ClientError::Decode(format!("unexpected {} response: {}", endpoint.name(), e))
    })
}

/// Decode a list that arrives either bare (`[...]`) or wrapped (`{key: [...]}`).
pub(crate) fn decode_list<R: DeserializeOwned>(
    endpoint: Endpoint,
    value: Value,
    key: &str,
) -> Result<Vec<R>> {
    match value {
        Value::Object(mut map) if map.contains_key(key) => {
            decode(endpoint, map.remove(key).unwrap_or(Value::Null))
        }
        other => decode(endpoint, other),
    }
}

#[async_trait]
impl<T: Transport> ExchangeApi for RemoteClient<T> {
    async fn register_user(
        &self,
        telegram_id: i64,
        username: Option<&str>,
        first_name: Option<&str>,
        referral_code: Option<&str>,
    ) -> Result<User> {
        super::auth::register_user(self, telegram_id, username, first_name, referral_code).await
    }

    async fn list_wallets(&self, telegram_id: i64) -> Result<Vec<Wallet>> {
        super::wallet::list_wallets(self, telegram_id).await
    }

    async fn list_notifications(&self, telegram_id: i64) -> Result<Vec<Notification>> {
        super::notifications::list_notifications(self, telegram_id).await
    }

    async fn create_notification(
        &self,
        telegram_id: i64,
        kind: &str,
        title: &str,
        message: &str,
    ) -> Result<Notification> {
        super::notifications::create_notification(self, telegram_id, kind, title, message).await
    }

    async fn mark_notification_read(&self, notification_id: i64) -> Result<Notification> {
        super::notifications::mark_notification_read(self, notification_id).await
    }

    async fn list_exchange_orders(&self, telegram_id: i64) -> Result<Vec<ExchangeOrder>> {
        super::exchange::list_exchange_orders(self, telegram_id).await
    }

    async fn list_all_orders(&self) -> Result<Vec<ExchangeOrder>> {
        super::exchange::list_all_orders(self).await
    }

    async fn create_exchange_order(
        &self,
        telegram_id: i64,
        from_currency: &str,
        to_currency: &str,
        from_amount: f64,
    ) -> Result<ExchangeOrder> {
        super::exchange::create_exchange_order(self, telegram_id, from_currency, to_currency, from_amount)
            .await
    }

    async fn update_order_status(&self, order_id: i64, status: OrderStatus) -> Result<ExchangeOrder> {
        super::exchange::update_order_status(self, order_id, status).await
    }

    async fn list_rates(&self) -> Result<Vec<ExchangeRate>> {
        super::rates::list_rates(self).await
    }

    async fn list_all_rates(&self) -> Result<Vec<ExchangeRate>> {
        super::rates::list_all_rates(self).await
    }

    async fn update_rate(
        &self,
        from_currency: &str,
        to_currency: &str,
        rate: f64,
        markup_percent: Option<f64>,
    ) -> Result<ExchangeRate> {
        super::rates::update_rate(self, from_currency, to_currency, rate, markup_percent).await
    }

    async fn create_invoice(
        &self,
        asset: &str,
        amount: f64,
        description: Option<&str>,
        payload: Option<&str>,
    ) -> Result<CryptoInvoice> {
        super::invoice::create_invoice(self, asset, amount, description, payload).await
    }

    async fn get_invoice(&self, invoice_id: i64) -> Result<CryptoInvoice> {
        super::invoice::get_invoice(self, invoice_id).await
    }

    async fn list_provider_currencies(&self) -> Result<Vec<ProviderCurrency>> {
        super::invoice::list_provider_currencies(self).await
    }

    async fn provider_balance(&self) -> Result<Vec<ProviderBalance>> {
        super::invoice::provider_balance(self).await
    }

    async fn provider_exchange_rates(&self) -> Result<Vec<ProviderExchangeRate>> {
        super::invoice::provider_exchange_rates(self).await
    }

    async fn admin_stats(&self, admin_key: &str) -> Result<AdminStats> {
        super::admin::admin_stats(self, admin_key).await
    }

    async fn admin_users(&self, admin_key: &str, limit: u32, offset: u32) -> Result<Vec<AdminUser>> {
        super::admin::admin_users(self, admin_key, limit, offset).await
    }

    async fn admin_transactions(
        &self,
        admin_key: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<AdminTransaction>> {
        super::admin::admin_transactions(self, admin_key, limit, offset).await
    }

    async fn admin_user_details(&self, admin_key: &str, user_id: i64) -> Result<AdminUserDetails> {
        super::admin::admin_user_details(self, admin_key, user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_endpoints;
    use crate::services::api::mock::{MockTransport, Scripted};
    use serde_json::json;

    #[tokio::test]
    async fn test_non_success_carries_remote_error_message() {
        let client = RemoteClient::with_transport(
            MockTransport::always(404, json!({"error": "User not found"})),
            test_endpoints(),
        );

        let err = client.list_wallets(42).await.unwrap_err();
        assert_eq!(
            err,
            ClientError::Http { status: 404, message: "User not found".to_string() }
        );
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_non_success_without_error_body_uses_reason_phrase() {
        let client = RemoteClient::with_transport(
            MockTransport::new(|_| Scripted::raw(502, "<html>bad gateway</html>")),
            test_endpoints(),
        );

        let err = client.list_rates().await.unwrap_err();
        assert_eq!(
            err,
            ClientError::Http { status: 502, message: "Bad Gateway".to_string() }
        );
    }

    #[tokio::test]
    async fn test_transport_failure_is_network_error() {
        let client = RemoteClient::with_transport(
            MockTransport::new(|_| Scripted::network("connection refused")),
            test_endpoints(),
        );

        let err = client.list_rates().await.unwrap_err();
        assert_eq!(err, ClientError::Network("connection refused".to_string()));
        assert_eq!(client.transport().call_count(), 1);
    }

    #[tokio::test]
    async fn test_non_json_and_wrong_shape_are_decode_errors() {
        let client = RemoteClient::with_transport(
            MockTransport::new(|_| Scripted::raw(200, "")),
            test_endpoints(),
        );
        assert!(matches!(client.list_rates().await, Err(ClientError::Decode(_))));

        let client = RemoteClient::with_transport(
            MockTransport::always(200, json!({"unexpected": true})),
            test_endpoints(),
        );
        assert!(matches!(client.list_wallets(1).await, Err(ClientError::Decode(_))));
    }

    #[tokio::test]
    async fn test_missing_endpoint_fails_without_round_trip() {
        let client = RemoteClient::with_transport(
            MockTransport::always(200, json!([])),
            EndpointMap::new(),
        );

        assert!(matches!(client.list_rates().await, Err(ClientError::Config(_))));
        assert_eq!(client.transport().call_count(), 0);
    }

    #[test]
    fn test_decode_list_accepts_bare_and_wrapped() {
        let bare: Vec<i64> = decode_list(Endpoint::Rates, json!([1, 2]), "rates").unwrap();
        let wrapped: Vec<i64> =
            decode_list(Endpoint::Rates, json!({"rates": [1, 2]}), "rates").unwrap();
        assert_eq!(bare, wrapped);
        assert!(decode_list::<i64>(Endpoint::Rates, json!({"other": []}), "rates").is_err());
    }
}
