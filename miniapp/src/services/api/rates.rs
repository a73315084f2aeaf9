//! # Exchange Rate Endpoints

use serde_json::Value;
use shared::{ExchangeRate, UpdateRateRequest};

use super::client::{decode_list, RemoteClient};
use crate::config::Endpoint;
use crate::core::{HttpMethod, Result, Transport};
use crate::utils::validation::{currency_pair, markup_percent, positive_amount};

/// Active rates.
#[tracing::instrument(skip(client))]
pub async fn list_rates<T: Transport>(client: &RemoteClient<T>) -> Result<Vec<ExchangeRate>> {
    let value: Value = client.fetch(Endpoint::Rates, &[]).await?;
    let rates: Vec<ExchangeRate> = decode_list(Endpoint::Rates, value, "rates")?;
    tracing::debug!(count = rates.len(), "Rates fetched");
    Ok(rates)
}

/// All rates including inactive ones, for the admin panel.
#[tracing::instrument(skip(client))]
pub async fn list_all_rates<T: Transport>(client: &RemoteClient<T>) -> Result<Vec<ExchangeRate>> {
    let value: Value = client
        .fetch(Endpoint::Rates, &[("action", "list".to_string())])
        .await?;
    decode_list(Endpoint::Rates, value, "rates")
}

/// Set the base rate (and optionally the markup) of a pair.
///
/// Codes are sent trimmed and upper-cased, matching how rates are stored.
#[tracing::instrument(skip(client))]
pub async fn update_rate<T: Transport>(
    client: &RemoteClient<T>,
    from_currency: &str,
    to_currency: &str,
    rate: f64,
    markup: Option<f64>,
) -> Result<ExchangeRate> {
    let (from_currency, to_currency) = currency_pair(from_currency, to_currency)?;
    let rate = positive_amount(rate, "rate")?;
    let markup_percent = markup.map(markup_percent).transpose()?;

    let request = UpdateRateRequest {
        from_currency,
        to_currency,
        rate,
        markup_percent,
    };

    let updated: ExchangeRate = client.submit(HttpMethod::Put, Endpoint::Rates, &request).await?;
    tracing::info!(
        from = %updated.from_currency,
        to = %updated.to_currency,
        rate = updated.rate,
        markup_percent = updated.markup_percent,
        "Rate updated"
    );
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_endpoints;
    use crate::core::ClientError;
    use crate::services::api::mock::{fixtures, MockTransport};
    use serde_json::json;

    #[tokio::test]
    async fn test_list_rates() {
        let client = RemoteClient::with_transport(
            MockTransport::always(200, json!([fixtures::rate(1, "BTC", "USDT", 43210.50)])),
            test_endpoints(),
        );

        let rates = list_rates(&client).await.unwrap();
        assert_eq!(rates.len(), 1);
        assert_eq!(rates[0].rate, 43210.50);
        assert_eq!(rates[0].markup_percent, 2.5);
        assert!(client.transport().last_request().unwrap().query.is_empty());
    }

    #[tokio::test]
    async fn test_display_division_uses_remote_rate_unchanged() {
        let client = RemoteClient::with_transport(
            MockTransport::always(200, json!([fixtures::rate(1, "BTC", "USDT", 43210.50)])),
            test_endpoints(),
        );

        let rates = list_rates(&client).await.unwrap();
        let btc = shared::estimate_receive(1000.0, rates[0].rate).unwrap();
        assert_eq!(format!("{:.8}", btc), "0.02314252");
        assert!(format!("{}", btc).starts_with("0.02314"));

        // Preview arithmetic is local only.
        assert_eq!(client.transport().call_count(), 1);
        assert_eq!(rates[0].rate, 43210.50);
    }

    #[tokio::test]
    async fn test_list_all_rates_unwraps_envelope() {
        let client = RemoteClient::with_transport(
            MockTransport::always(
                200,
                json!({"rates": [fixtures::rate(1, "BTC", "USDT", 43210.5), fixtures::rate(2, "ETH", "USDT", 2300.0)]}),
            ),
            test_endpoints(),
        );

        assert_eq!(list_all_rates(&client).await.unwrap().len(), 2);
        assert_eq!(
            client.transport().last_request().unwrap().query_value("action"),
            Some("list")
        );
    }

    #[tokio::test]
    async fn test_update_rate_validation_and_body() {
        let client = RemoteClient::with_transport(
            MockTransport::always(200, fixtures::rate(1, "BTC", "USDT", 44000.0)),
            test_endpoints(),
        );

        assert!(matches!(
            update_rate(&client, "BTC", "USDT", 0.0, None).await,
            Err(ClientError::Validation(_))
        ));
        assert!(matches!(
            update_rate(&client, "BTC", "USDT", 44000.0, Some(f64::INFINITY)).await,
            Err(ClientError::Validation(_))
        ));
        assert_eq!(client.transport().call_count(), 0);

        let updated = update_rate(&client, "BTC", "USDT", 44000.0, None).await.unwrap();
        assert_eq!(updated.rate, 44000.0);
        assert_eq!(
            client.transport().last_request().unwrap().body,
            Some(json!({"from_currency": "BTC", "to_currency": "USDT", "rate": 44000.0}))
        );
    }
}
