//! # Utilities Library
//!
//! Shared helpers for environment variables, remote timestamps and input validation.

pub mod envs;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use envs::{get_env, get_env_opt, get_env_parse};
pub use time::{format_time, now_utc, parse_remote_time};
pub use validation::{validate_code, validate_positive_amount};
