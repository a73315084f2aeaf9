//! Scripted transport and JSON fixtures for tests.

use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};

use crate::core::{ApiRequest, ApiResponse, ClientError, Result, Transport};

/// Reply the mock hands back for one request.
pub(crate) struct Scripted {
    delay: Option<Duration>,
    result: Result<ApiResponse>,
}

impl Scripted {
    pub(crate) fn json(status: u16, body: Value) -> Self {
        Self::raw(status, &body.to_string())
    }

    pub(crate) fn raw(status: u16, body: &str) -> Self {
        Self {
            delay: None,
            result: Ok(ApiResponse {
                status,
                body: body.to_string(),
            }),
        }
    }

    pub(crate) fn network(message: &str) -> Self {
        Self {
            delay: None,
            result: Err(ClientError::Network(message.to_string())),
        }
    }

    pub(crate) fn after(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

type Handler = Box<dyn Fn(&ApiRequest) -> Scripted + Send + Sync>;

/// Transport that answers from a closure and records every request.
pub(crate) struct MockTransport {
    handler: Handler,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub(crate) fn new(handler: impl Fn(&ApiRequest) -> Scripted + Send + Sync + 'static) -> Self {
        Self {
            handler: Box::new(handler),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn always(status: u16, body: Value) -> Self {
        Self::new(move |_| Scripted::json(status, body.clone()))
    }

    pub(crate) fn call_count(&self) -> usize {
        self.requests.lock().len()
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().clone()
    }

    pub(crate) fn last_request(&self) -> Option<ApiRequest> {
        self.requests.lock().last().cloned()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let scripted = (self.handler)(&request);
        self.requests.lock().push(request);

        if let Some(delay) = scripted.delay {
            tokio::time::sleep(delay).await;
        }
        scripted.result
    }
}

/// Remote rows as the functions serialize them (decimals as strings).
pub(crate) mod fixtures {
    use super::*;

    pub(crate) fn user(telegram_id: i64) -> Value {
        json!({
            "id": 1,
            "telegram_id": telegram_id,
            "username": "alice",
            "first_name": "Alice",
            "referral_code": "REFALICE",
            "referred_by_id": null,
            "balance_rub": "0.00",
            "referral_earnings": "0.00",
            "is_admin": false,
            "is_blocked": false,
            "created_at": "2024-01-01 00:00:00",
            "updated_at": "2024-01-01 00:00:00"
        })
    }

    pub(crate) fn wallet(id: i64, currency: &str, balance: &str) -> Value {
        json!({
            "id": id,
            "user_id": 1,
            "currency": currency,
            "balance": balance,
            "address": null,
            "created_at": "2024-01-01 00:00:00",
            "updated_at": "2024-01-01 00:00:00"
        })
    }

    pub(crate) fn order(id: i64, status: &str) -> Value {
        json!({
            "id": id,
            "user_id": 1,
            "from_currency": "USDT",
            "to_currency": "BTC",
            "from_amount": "1000.00",
            "to_amount": "0.02291000",
            "exchange_rate": "0.00002314",
            "fee": "0.00023140",
            "status": status,
            "crypto_bot_invoice_id": null,
            "completed_at": null,
            "created_at": "2024-01-01 10:00:00"
        })
    }

    pub(crate) fn rate(id: i64, from: &str, to: &str, rate: f64) -> Value {
        json!({
            "id": id,
            "from_currency": from,
            "to_currency": to,
            "rate": rate,
            "markup_percent": "2.50",
            "is_active": true,
            "created_at": "2024-01-01 00:00:00",
            "updated_at": "2024-01-01 00:00:00"
        })
    }

    pub(crate) fn notification(id: i64, is_read: bool) -> Value {
        json!({
            "id": id,
            "user_id": 1,
            "type": "exchange",
            "title": "Order created",
            "message": "Your order is pending",
            "is_read": is_read,
            "related_order_id": 10,
            "created_at": "2024-01-01 10:00:00"
        })
    }

    pub(crate) fn invoice(invoice_id: i64) -> Value {
        json!({
            "invoice_id": invoice_id,
            "hash": "IVabc",
            "currency_type": "crypto",
            "asset": "USDT",
            "amount": "25.5",
            "pay_url": "https://t.me/CryptoBot?start=IVabc",
            "bot_invoice_url": "https://t.me/CryptoBot?start=IVabc",
            "description": "Deposit 25.5 USDT",
            "status": "active",
            "created_at": "2024-01-01T10:00:00.000Z"
        })
    }
}
