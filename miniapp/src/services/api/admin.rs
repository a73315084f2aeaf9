//! # Admin Endpoint
//!
//! The admin function requires the `X-Admin-Key` header on every call and
//! answers 403 when the key is wrong; that surfaces as
//! [`ClientError::Http`](crate::core::ClientError::Http) with status 403.

use shared::{AdminStats, AdminTransaction, AdminUser, AdminUserDetails};

use super::client::RemoteClient;
use crate::config::Endpoint;
use crate::core::{ClientError, Result, Transport};
use crate::utils::validation::not_blank;

pub const ADMIN_KEY_HEADER: &str = "X-Admin-Key";

/// Page size the admin function uses when none is given.
pub const DEFAULT_PAGE_LIMIT: u32 = 50;

async fn admin_fetch<T: Transport, R: serde::de::DeserializeOwned>(
    client: &RemoteClient<T>,
    admin_key: &str,
    query: &[(&str, String)],
) -> Result<R> {
    let admin_key = not_blank(admin_key, "admin_key")?;
    client
        .fetch_with_headers(Endpoint::Admin, query, &[(ADMIN_KEY_HEADER, admin_key)])
        .await
}

fn page(action: &str, limit: u32, offset: u32) -> Result<[(&str, String); 3]> {
    if limit == 0 {
        return Err(ClientError::Validation("limit must be greater than 0".to_string()));
    }
    Ok([
        ("action", action.to_string()),
        ("limit", limit.to_string()),
        ("offset", offset.to_string()),
    ])
}

#[tracing::instrument(skip(client, admin_key))]
pub async fn admin_stats<T: Transport>(client: &RemoteClient<T>, admin_key: &str) -> Result<AdminStats> {
    admin_fetch(client, admin_key, &[("action", "stats".to_string())]).await
}

#[tracing::instrument(skip(client, admin_key))]
pub async fn admin_users<T: Transport>(
    client: &RemoteClient<T>,
    admin_key: &str,
    limit: u32,
    offset: u32,
) -> Result<Vec<AdminUser>> {
    let query = page("users", limit, offset)?;
    admin_fetch(client, admin_key, &query).await
}

/// Latest transactions across all users, newest first.
#[tracing::instrument(skip(client, admin_key))]
pub async fn admin_transactions<T: Transport>(
    client: &RemoteClient<T>,
    admin_key: &str,
    limit: u32,
    offset: u32,
) -> Result<Vec<AdminTransaction>> {
    let query = page("transactions", limit, offset)?;
    admin_fetch(client, admin_key, &query).await
}

/// One user by internal id, with wallets and their 20 latest transactions.
#[tracing::instrument(skip(client, admin_key))]
pub async fn admin_user_details<T: Transport>(
    client: &RemoteClient<T>,
    admin_key: &str,
    user_id: i64,
) -> Result<AdminUserDetails> {
    admin_fetch(
        client,
        admin_key,
        &[
            ("action", "user_details".to_string()),
            ("user_id", user_id.to_string()),
        ],
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_endpoints;
    use crate::services::api::mock::{MockTransport, Scripted};
    use serde_json::json;

    fn stats_body() -> serde_json::Value {
        json!({
            "users": 3,
            "transactions": {"total_transactions": 5, "total_deposits": "150.00", "total_exchanges": "20.5"},
            "balances": [{"currency": "USDT", "total_balance": "120.00"}]
        })
    }

    #[tokio::test]
    async fn test_stats_sends_admin_key_header() {
        let client = RemoteClient::with_transport(MockTransport::always(200, stats_body()), test_endpoints());

        let stats = admin_stats(&client, "secret").await.unwrap();
        assert_eq!(stats.users, 3);
        assert_eq!(stats.transactions.total_deposits, Some(150.0));

        let request = client.transport().last_request().unwrap();
        assert_eq!(request.url, "https://functions.test/admin");
        assert_eq!(request.query_value("action"), Some("stats"));
        assert_eq!(request.header_value("x-admin-key"), Some("secret"));
    }

    #[tokio::test]
    async fn test_wrong_key_is_forbidden() {
        let client = RemoteClient::with_transport(
            MockTransport::new(|request| {
                if request.header_value(ADMIN_KEY_HEADER) == Some("secret") {
                    Scripted::json(200, stats_body())
                } else {
                    Scripted::json(403, json!({"error": "Unauthorized"}))
                }
            }),
            test_endpoints(),
        );

        let err = admin_stats(&client, "guess").await.unwrap_err();
        assert_eq!(
            err,
            ClientError::Http { status: 403, message: "Unauthorized".to_string() }
        );
        assert!(err.is_unauthorized());
        assert!(admin_stats(&client, "secret").await.is_ok());
    }

    #[tokio::test]
    async fn test_blank_key_and_zero_limit_never_reach_network() {
        let client = RemoteClient::with_transport(MockTransport::always(200, json!([])), test_endpoints());

        assert!(matches!(admin_stats(&client, "  ").await, Err(ClientError::Validation(_))));
        assert!(matches!(
            admin_users(&client, "secret", 0, 0).await,
            Err(ClientError::Validation(_))
        ));
        assert_eq!(client.transport().call_count(), 0);
    }

    #[tokio::test]
    async fn test_listings_pass_paging() {
        let client = RemoteClient::with_transport(
            MockTransport::new(|request| match request.query_value("action") {
                Some("users") => Scripted::json(200, json!([{
                    "id": 1, "telegram_id": 123, "username": "alice", "first_name": "Alice",
                    "last_name": null, "created_at": "2024-01-01 00:00:00",
                    "wallets_count": 4, "transactions_count": 2
                }])),
                _ => Scripted::json(200, json!([{
                    "id": 9, "user_id": 1, "type": "exchange", "currency": "USDT",
                    "amount": "1000.00", "status": "pending", "created_at": "2024-01-02 00:00:00",
                    "telegram_id": 123, "username": "alice"
                }])),
            }),
            test_endpoints(),
        );

        let users = admin_users(&client, "secret", DEFAULT_PAGE_LIMIT, 0).await.unwrap();
        assert_eq!(users[0].wallets_count, 4);

        let transactions = admin_transactions(&client, "secret", 10, 20).await.unwrap();
        assert_eq!(transactions[0].amount, 1000.0);
        assert_eq!(transactions[0].telegram_id, Some(123));

        let request = client.transport().last_request().unwrap();
        assert_eq!(request.query_value("limit"), Some("10"));
        assert_eq!(request.query_value("offset"), Some("20"));
    }

    #[tokio::test]
    async fn test_user_details_not_found() {
        let client = RemoteClient::with_transport(
            MockTransport::always(404, json!({"error": "User not found"})),
            test_endpoints(),
        );

        let err = admin_user_details(&client, "secret", 77).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(
            client.transport().last_request().unwrap().query_value("user_id"),
            Some("77")
        );
    }

    #[tokio::test]
    async fn test_missing_admin_url_is_config_error() {
        let client = RemoteClient::with_transport(
            MockTransport::always(200, stats_body()),
            crate::config::EndpointMap::new(),
        );

        assert!(matches!(admin_stats(&client, "secret").await, Err(ClientError::Config(_))));
        assert_eq!(client.transport().call_count(), 0);
    }
}
