//! # Exchange Order Endpoints
//!
//! Orders are priced entirely by the remote exchange function: the client
//! sends the pair and `from_amount`, and receives `to_amount`,
//! `exchange_rate` and `fee` already fixed.

use serde_json::Value;
use shared::{CreateOrderRequest, ExchangeOrder, OrderStatus, UpdateOrderStatusRequest};

use super::client::{decode_list, RemoteClient};
use crate::config::Endpoint;
use crate::core::{HttpMethod, Result, Transport};
use crate::utils::validation::{currency_pair, positive_amount, validate_telegram_id};

pub async fn list_exchange_orders<T: Transport>(
    client: &RemoteClient<T>,
    telegram_id: i64,
) -> Result<Vec<ExchangeOrder>> {
    validate_telegram_id(telegram_id)?;
    client
        .fetch(Endpoint::Exchange, &[("telegram_id", telegram_id.to_string())])
        .await
}

/// Every user's orders, for the admin panel.
#[tracing::instrument(skip(client))]
pub async fn list_all_orders<T: Transport>(client: &RemoteClient<T>) -> Result<Vec<ExchangeOrder>> {
    let value: Value = client
        .fetch(Endpoint::Exchange, &[("action", "admin_orders".to_string())])
        .await?;
    decode_list(Endpoint::Exchange, value, "orders")
}

/// Create an exchange order.
///
/// Rejects a non-positive or non-finite `from_amount`, invalid codes and
/// same-currency pairs before any request is issued. Currency codes are sent
/// trimmed and upper-cased (`" usdt"` goes out as `"USDT"`).
#[tracing::instrument(skip(client))]
pub async fn create_exchange_order<T: Transport>(
    client: &RemoteClient<T>,
    telegram_id: i64,
    from_currency: &str,
    to_currency: &str,
    from_amount: f64,
) -> Result<ExchangeOrder> {
    validate_telegram_id(telegram_id)?;
    let (from_currency, to_currency) = currency_pair(from_currency, to_currency)?;
    let from_amount = positive_amount(from_amount, "from_amount")?;

    let request = CreateOrderRequest {
        telegram_id,
        from_currency,
        to_currency,
        from_amount,
    };

    let order: ExchangeOrder = client
        .submit(HttpMethod::Post, Endpoint::Exchange, &request)
        .await?;

    tracing::info!(
        order_id = order.id,
        to_amount = order.to_amount,
        exchange_rate = order.exchange_rate,
        fee = order.fee,
        "Exchange order created"
    );
    Ok(order)
}

/// Change an order's status. Non-canonical statuses are sent as given.
#[tracing::instrument(skip(client, status), fields(status = %status))]
pub async fn update_order_status<T: Transport>(
    client: &RemoteClient<T>,
    order_id: i64,
    status: OrderStatus,
) -> Result<ExchangeOrder> {
    let request = UpdateOrderStatusRequest { order_id, status };
    client
        .submit(HttpMethod::Put, Endpoint::Exchange, &request)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_endpoints;
    use crate::core::ClientError;
    use crate::services::api::mock::{fixtures, MockTransport};
    use serde_json::json;

    fn client() -> RemoteClient<MockTransport> {
        RemoteClient::with_transport(
            MockTransport::always(200, fixtures::order(10, "pending")),
            test_endpoints(),
        )
    }

    #[tokio::test]
    async fn test_non_positive_amount_never_reaches_network() {
        let client = client();

        for amount in [0.0, -1.0, -0.000001, f64::NAN, f64::NEG_INFINITY] {
            let err = create_exchange_order(&client, 123, "USDT", "BTC", amount)
                .await
                .unwrap_err();
            assert!(matches!(err, ClientError::Validation(_)), "amount {amount}");
        }

        assert_eq!(client.transport().call_count(), 0);
    }

    #[tokio::test]
    async fn test_create_sends_only_inputs() {
        let client = client();

        let order = create_exchange_order(&client, 123, "usdt", "BTC", 1000.0)
            .await
            .unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.to_amount, 0.02291);

        assert_eq!(client.transport().call_count(), 1);
        let request = client.transport().last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(
            request.body,
            Some(json!({
                "telegram_id": 123,
                "from_currency": "USDT",
                "to_currency": "BTC",
                "from_amount": 1000.0
            }))
        );
    }

    #[tokio::test]
    async fn test_unknown_status_passed_through() {
        let client = client();

        update_order_status(&client, 10, OrderStatus::from("on_hold"))
            .await
            .unwrap();

        let request = client.transport().last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.body, Some(json!({"order_id": 10, "status": "on_hold"})));
    }

    #[tokio::test]
    async fn test_admin_orders_accepts_wrapped_list() {
        let client = RemoteClient::with_transport(
            MockTransport::always(200, json!({"orders": [fixtures::order(1, "completed"), fixtures::order(2, "cancelled")]})),
            test_endpoints(),
        );

        let orders = list_all_orders(&client).await.unwrap();
        assert_eq!(orders.len(), 2);
        assert!(orders.iter().all(|o| o.status.is_final()));
        assert_eq!(
            client.transport().last_request().unwrap().query_value("action"),
            Some("admin_orders")
        );
    }
}
