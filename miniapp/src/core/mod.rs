//! # Core Abstractions
//!
//! Core traits and error types shared by the client, the session store and
//! their tests.
//!
//! - **[`error`]**: [`ClientError`] and the `Result<T>` alias
//! - **[`service`]**: [`Transport`] and [`ExchangeApi`] seams for dependency injection
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use miniapp::config::ClientConfig;
//! use miniapp::core::ExchangeApi;
//! use miniapp::services::api::RemoteClient;
//!
//! # fn example() -> miniapp::core::Result<()> {
//! let config = ClientConfig::from_env()?;
//! let api: Arc<dyn ExchangeApi> = Arc::new(RemoteClient::new(&config)?);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod service;

pub use error::{ClientError, Result};
pub use service::{ApiRequest, ApiResponse, ExchangeApi, HttpMethod, Transport};
