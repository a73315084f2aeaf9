//! # Exchange Mini-App - Client Core
//!
//! Client side of a crypto exchange mini-app running inside a messenger host.
//! This crate holds everything below the presentation layer: the typed remote
//! API, the per-user session cache and the bridge to the host.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              presentation (not in this crate)          │
//! └────────────────────────────────────────────────────────┘
//!          │ snapshot / reload          │ alerts, confirm, user
//!          ▼                            ▼
//! ┌──────────────────────┐   ┌─────────────────────────────┐
//! │  session::SessionStore│  │  host::HostBridge           │
//! └──────────────────────┘   └─────────────────────────────┘
//!          │ Arc<dyn ExchangeApi>       │ Option<Arc<dyn WebAppHost>>
//!          ▼                            ▼
//! ┌──────────────────────┐   ┌─────────────────────────────┐
//! │  services::api       │   │  messenger host / fallback  │
//! │  RemoteClient        │   └─────────────────────────────┘
//! └──────────────────────┘
//!          │ HTTP (reqwest)
//!          ▼
//! ┌──────────────────────────────────────────────┐
//! │  Remote functions: auth, wallets, exchange,  │
//! │  rates, notifications, payments              │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **config**: endpoint map and client configuration from the environment
//! - **core**: error type and the `Transport` / `ExchangeApi` seams
//! - **services**: `RemoteClient` and one module per remote function
//! - **session**: `SessionStore` with parallel loading and a sequence guard
//! - **host**: `HostBridge`, init-data parsing, fallback dialogs
//! - **debug**: logging setup
//! - **utils**: argument validation
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use miniapp::{ClientConfig, ExchangeApi, RemoteClient, SessionStore};
//!
//! # async fn run() -> miniapp::Result<()> {
//! let config = ClientConfig::from_env()?;
//! let api: Arc<dyn ExchangeApi> = Arc::new(RemoteClient::new(&config)?);
//! let store = SessionStore::new(api);
//!
//! store.load(config.default_telegram_id).await;
//! let state = store.snapshot();
//! println!("{} wallets, {} rates", state.wallets.len(), state.rates.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod debug;
pub mod host;
pub mod services;
pub mod session;
pub mod utils;

pub use config::{ClientConfig, Endpoint, EndpointMap};
pub use crate::core::{ClientError, ExchangeApi, Result, Transport};
pub use host::{ConsoleDialogs, FallbackDialogs, HostBridge, StaticHost, WebAppHost};
pub use services::api::{HttpTransport, RemoteClient};
pub use session::{LoadOutcome, SessionState, SessionStore};
