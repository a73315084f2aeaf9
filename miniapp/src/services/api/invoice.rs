//! # Payment Provider Endpoints
//!
//! Deposits are funded through invoices issued by the crypto payment provider.
//! The payments function proxies the provider, so responses may arrive in the
//! provider's envelope (`{ok, result}`), with `getInvoices` nesting the invoice
//! in `result.items`, or as a bare object. Everything is normalized here so
//! callers always get a single [`CryptoInvoice`].

use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{
    CreateInvoiceRequest, CryptoInvoice, ProviderBalance, ProviderCurrency, ProviderExchangeRate,
};

use super::client::{decode, decode_list, RemoteClient};
use crate::config::Endpoint;
use crate::core::{ClientError, HttpMethod, Result, Transport};
use crate::utils::validation::{currency_code, positive_amount};

/// Strip the provider envelope, turning `ok: false` into [`ClientError::Provider`].
fn unwrap_provider(value: Value) -> Result<Value> {
    let Value::Object(mut map) = value else {
        return Ok(value);
    };

    if map.get("ok").and_then(Value::as_bool) == Some(false) {
        let message = match map.remove("error") {
            Some(Value::Object(error)) => error
                .get("name")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| Value::Object(error).to_string()),
            Some(Value::String(error)) => error,
            _ => "payment provider rejected the request".to_string(),
        };
        tracing::warn!(error = %message, "Payment provider returned an error");
        return Err(ClientError::Provider(message));
    }

    match map.remove("result") {
        Some(result) => Ok(result),
        None => Ok(Value::Object(map)),
    }
}

fn unwrap_invoice(value: Value) -> Result<CryptoInvoice> {
    let value = match unwrap_provider(value)? {
        Value::Object(mut map) if map.contains_key("items") => {
            match map.remove("items") {
                Some(Value::Array(items)) => items.into_iter().next().ok_or_else(|| {
                    ClientError::Decode("payments response contains no invoice".to_string())
                })?,
                other => other.unwrap_or(Value::Null),
            }
        }
        other => other,
    };
    decode(Endpoint::Payments, value)
}

async fn provider_list<T: Transport, R: DeserializeOwned>(
    client: &RemoteClient<T>,
    action: &str,
) -> Result<Vec<R>> {
    let value: Value = client
        .fetch(Endpoint::Payments, &[("action", action.to_string())])
        .await?;
    decode_list(Endpoint::Payments, unwrap_provider(value)?, "items")
}

/// Issue an invoice for `amount` of `asset`. `asset` is sent trimmed and
/// upper-cased, the form the provider lists its currencies in.
#[tracing::instrument(skip(client, description, payload))]
pub async fn create_invoice<T: Transport>(
    client: &RemoteClient<T>,
    asset: &str,
    amount: f64,
    description: Option<&str>,
    payload: Option<&str>,
) -> Result<CryptoInvoice> {
    let asset = currency_code(asset, "asset")?;
    let amount = positive_amount(amount, "amount")?;

    let request = CreateInvoiceRequest {
        asset,
        amount,
        description: description.map(str::to_string),
        payload: payload.map(str::to_string),
    };

    let value: Value = client
        .submit(HttpMethod::Post, Endpoint::Payments, &request)
        .await?;
    let invoice = unwrap_invoice(value)?;

    tracing::info!(
        invoice_id = invoice.invoice_id,
        asset = %invoice.asset,
        amount = invoice.amount,
        "Invoice created"
    );
    Ok(invoice)
}

#[tracing::instrument(skip(client))]
pub async fn get_invoice<T: Transport>(
    client: &RemoteClient<T>,
    invoice_id: i64,
) -> Result<CryptoInvoice> {
    let value: Value = client
        .fetch(
            Endpoint::Payments,
            &[
                ("action", "getInvoice".to_string()),
                ("invoice_id", invoice_id.to_string()),
            ],
        )
        .await?;
    unwrap_invoice(value)
}

pub async fn list_provider_currencies<T: Transport>(
    client: &RemoteClient<T>,
) -> Result<Vec<ProviderCurrency>> {
    provider_list(client, "getCurrencies").await
}

pub async fn provider_balance<T: Transport>(client: &RemoteClient<T>) -> Result<Vec<ProviderBalance>> {
    provider_list(client, "getBalance").await
}

pub async fn provider_exchange_rates<T: Transport>(
    client: &RemoteClient<T>,
) -> Result<Vec<ProviderExchangeRate>> {
    provider_list(client, "getExchangeRates").await
}
