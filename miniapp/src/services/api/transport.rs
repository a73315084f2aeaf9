//! # HTTP Transport
//!
//! Production [`Transport`] backed by a pooled `reqwest` client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method};

use crate::core::{ApiRequest, ApiResponse, ClientError, HttpMethod, Result, Transport};

/// `reqwest`-backed transport.
///
/// No timeout is applied unless one is configured; a hung request only ties
/// up the task awaiting it.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| ClientError::Config(format!("cannot build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), &request.url);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        // A body that cannot be read to the end never fully arrived.
        let body = response.text().await?;

        Ok(ApiResponse { status, body })
    }
}
