//! # Data Transfer Objects (DTOs)
//!
//! Every record the remote functions return, plus the request bodies the
//! client sends them. The remote system owns and creates all of these; the
//! client only holds transient copies.
//!
//! ## Module Organization
//!
//! - [`admin`] - Admin statistics, user and transaction listings
//! - [`auth`] - Users, registration, remote error bodies
//! - [`wallet`] - Per-currency wallets
//! - [`exchange`] - Exchange orders and their lifecycle status
//! - [`rates`] - Directed exchange rates with markup
//! - [`notifications`] - User notifications
//! - [`invoice`] - Payment-provider invoices and reference data
//! - [`numeric`] - Lenient number decoding shared by the above
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Amounts**: Accept a JSON number or a numeric string, because the remote
//!   functions serialize database decimals with `default=str`
//! - **Timestamps**: Kept as the raw strings the remote sends
//!
//! ## Example JSON Communication
//!
//! ```text
//! GET /rates
//!
//! [
//!   {
//!     "id": 1,
//!     "from_currency": "BTC",
//!     "to_currency": "USDT",
//!     "rate": "43210.50",
//!     "markup_percent": "2.5",
//!     "is_active": true,
//!     "created_at": "2024-01-01 00:00:00",
//!     "updated_at": "2024-01-01 00:00:00"
//!   }
//! ]
//! ```

pub mod admin;
pub mod auth;
pub mod exchange;
pub mod invoice;
pub mod notifications;
pub mod numeric;
pub mod rates;
pub mod wallet;

pub use admin::*;
pub use auth::*;
pub use exchange::*;
pub use invoice::*;
pub use notifications::*;
pub use rates::*;
pub use wallet::*;
