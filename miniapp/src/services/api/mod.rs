//! # Remote API
//!
//! Typed access to the remote exchange functions.
//!
//! ```text
//! api/
//! ├── client.rs         # RemoteClient: URL resolution, status mapping, decoding
//! ├── transport.rs      # reqwest-backed Transport
//! ├── auth.rs           # registration / sign-in
//! ├── wallet.rs         # wallet balances
//! ├── notifications.rs  # notification feed
//! ├── exchange.rs       # exchange orders
//! ├── rates.rs          # exchange rates
//! ├── invoice.rs        # payment provider invoices and reference data
//! └── admin.rs          # key-protected admin statistics and listings
//! ```

pub mod admin;
pub mod auth;
pub mod client;
pub mod exchange;
pub mod invoice;
pub mod notifications;
pub mod rates;
pub mod transport;
pub mod wallet;

#[cfg(test)]
pub(crate) mod mock;

pub use client::RemoteClient;
pub use transport::HttpTransport;
