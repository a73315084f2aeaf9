//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the mini-app client and the
//! remote functions it calls. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Users and registration
//!   - **[`dto::wallet`]**: Wallets
//!   - **[`dto::exchange`]**: Exchange orders
//!   - **[`dto::rates`]**: Exchange rates
//!   - **[`dto::notifications`]**: Notifications
//!   - **[`dto::invoice`]**: Payment-provider invoices
//! - **[`utils`]**: Display-only helpers
//!   - **[`utils::format_address`]**: Shorten deposit addresses for display
//!   - **[`utils::estimate_receive`]**: Local preview of a conversion
//!
//! ## Wire Format
//!
//! - Field names are **snake_case** in Rust and JSON
//! - Optional fields are omitted from JSON when `None`
//! - Numeric amounts decode from numbers or numeric strings
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::exchange::{ExchangeOrder, OrderStatus};
//!
//! let order: ExchangeOrder = serde_json::from_str(r#"{
//!     "id": 1, "user_id": 7, "from_currency": "USDT", "to_currency": "BTC",
//!     "from_amount": 1000, "to_amount": "0.0229", "exchange_rate": "0.0000229",
//!     "fee": "0.000229", "status": "pending", "created_at": "2024-01-01 00:00:00"
//! }"#).unwrap();
//!
//! assert_eq!(order.status, OrderStatus::Pending);
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: shared is a DTO library where all exports are public API
pub use dto::*;
pub use utils::*;
