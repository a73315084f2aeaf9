//! # Wallet Endpoint

use shared::Wallet;

use super::client::RemoteClient;
use crate::config::Endpoint;
use crate::core::{Result, Transport};
use crate::utils::validation::validate_telegram_id;

/// List the user's wallets. An empty list is a valid result.
#[tracing::instrument(skip(client))]
pub async fn list_wallets<T: Transport>(
    client: &RemoteClient<T>,
    telegram_id: i64,
) -> Result<Vec<Wallet>> {
    validate_telegram_id(telegram_id)?;

    let wallets: Vec<Wallet> = client
        .fetch(Endpoint::Wallets, &[("telegram_id", telegram_id.to_string())])
        .await?;

    tracing::debug!(count = wallets.len(), "Wallets fetched");
    Ok(wallets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_endpoints;
    use crate::core::HttpMethod;
    use crate::services::api::mock::{fixtures, MockTransport};
    use serde_json::json;

    #[tokio::test]
    async fn test_list_wallets_sends_query() {
        let client = RemoteClient::with_transport(
            MockTransport::always(
                200,
                json!([fixtures::wallet(1, "BTC", "0.50000000"), fixtures::wallet(2, "USDT", "150.00")]),
            ),
            test_endpoints(),
        );

        let wallets = list_wallets(&client, 123).await.unwrap();
        assert_eq!(wallets.len(), 2);
        assert_eq!(wallets[0].balance, 0.5);

        let request = client.transport().last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.query_value("telegram_id"), Some("123"));
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn test_empty_list_is_not_an_error() {
        let client = RemoteClient::with_transport(MockTransport::always(200, json!([])), test_endpoints());
        assert!(list_wallets(&client, 123).await.unwrap().is_empty());
    }
}
