//! # Logging
//!
//! Structured logging for the client core.
//!
//! - **File**: daily rotated `logs/miniapp.log.YYYY-MM-DD`, non-blocking writes
//! - **Stderr**: compact human-readable output
//! - **Panics**: logged with their location before the default hook runs
//!
//! ## Configuration
//!
//! - `RUST_LOG`: filter (e.g. `miniapp=debug,info`)
//! - `MINIAPP_LOG_DIR`: log directory (default `logs`)
//! - `MINIAPP_LOG_STDERR`: `0` disables stderr output
//!
//! ```rust,no_run
//! let _guard = miniapp::debug::init();
//! tracing::info!(endpoint = "rates", duration_ms = 42, "Request completed");
//! ```

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::{init, init_with};
