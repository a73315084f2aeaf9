//! # Shared Utility Functions
//!
//! Display-only helpers used by presentation code. Nothing computed here is
//! ever sent back to the remote system: rates, fees and received amounts are
//! authoritative only when they come from the exchange function.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{estimate_receive, format_address};
//!
//! let address = "UQBvW8Z5huBkMJYdnfAEM5JqTNkuWX3diqYENkWsIL0XggGG";
//! assert_eq!(format_address(address, 4, 4), "UQBv...ggGG");
//!
//! // 1000 USDT at 43210.50 USDT per BTC
//! assert_eq!(estimate_receive(1000.0, 43210.50), Some(0.02314252));
//! ```

/// Decimal places used for crypto amounts.
pub const CRYPTO_DECIMALS: u32 = 8;

/// Format an address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// Addresses too short to shorten meaningfully are returned as-is. Counting is
/// done in characters, so non-ASCII input never splits a code point.
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh";
/// assert_eq!(format_address(addr, 6, 6), "bc1qxy...hx0wlh");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let chars: Vec<char> = address.chars().collect();

    if chars.len() <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = chars[..prefix_len].iter().collect();
    let suffix: String = chars[chars.len() - suffix_len..].iter().collect();

    format!("{}...{}", prefix, suffix)
}

/// Format an address with the default 4-character prefix and suffix.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 4, 4)
}

/// Round `value` to `decimals` decimal places (half away from zero).
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Preview how much of the quote currency `amount` buys at `rate` quote units
/// per base unit, rounded to [`CRYPTO_DECIMALS`].
///
/// Returns `None` for a non-positive or non-finite rate.
pub fn estimate_receive(amount: f64, rate: f64) -> Option<f64> {
    if !rate.is_finite() || rate <= 0.0 || !amount.is_finite() {
        return None;
    }
    Some(round_to(amount / rate, CRYPTO_DECIMALS))
}

/// Format an amount with a fixed number of decimals, trimming trailing zeros.
///
/// ```rust
/// use shared::utils::format_amount;
///
/// assert_eq!(format_amount(0.02314252, 8), "0.02314252");
/// assert_eq!(format_amount(1500.0, 2), "1500");
/// assert_eq!(format_amount(0.5, 4), "0.5");
/// ```
pub fn format_amount(amount: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, amount);
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        fixed
    }
}
