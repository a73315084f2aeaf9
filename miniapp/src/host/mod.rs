//! # Host Bridge
//!
//! Access to the messenger host that embeds the mini-app: the signed-in user,
//! native dialogs, closing and theming.
//!
//! The host is optional. [`HostBridge::probe`] decides once whether it is
//! usable; afterwards every call either goes to the host or to the injected
//! [`FallbackDialogs`], and host errors are logged rather than returned.
//!
//! ```text
//! host/
//! ├── bridge.rs       # HostBridge: probe + operations
//! ├── init_data.rs    # init-data parsing, TelegramUser
//! ├── static_host.rs  # WebAppHost backed by a raw init-data string
//! └── dialogs.rs      # terminal fallback dialogs
//! ```

pub mod bridge;
pub mod dialogs;
pub mod init_data;
pub mod static_host;

use thiserror::Error;

pub use bridge::HostBridge;
pub use dialogs::ConsoleDialogs;
pub use init_data::{InitData, TelegramUser};
pub use static_host::StaticHost;

/// Errors raised by a host implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("host call failed: {0}")]
    Call(String),

    #[error("invalid init data: {0}")]
    InitData(String),
}

/// Callback receiving the answer of a confirmation dialog.
pub type ConfirmCallback = Box<dyn FnOnce(bool) + Send>;

/// Header colour keys understood by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderColor {
    BgColor,
    SecondaryBgColor,
}

impl HeaderColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeaderColor::BgColor => "bg_color",
            HeaderColor::SecondaryBgColor => "secondary_bg_color",
        }
    }
}

/// The host's web-app API.
pub trait WebAppHost: Send + Sync {
    /// Signal that the app has rendered.
    fn ready(&self) -> Result<(), HostError>;

    fn expand(&self) -> Result<(), HostError>;

    /// Raw signed init-data string, for server-side verification.
    fn init_data(&self) -> String;

    /// Parsed, unverified init data.
    fn init_data_unsafe(&self) -> Result<InitData, HostError>;

    fn show_alert(&self, message: &str) -> Result<(), HostError>;

    /// Show a confirmation dialog; the host calls `callback` with the answer.
    fn show_confirm(&self, message: &str, callback: ConfirmCallback) -> Result<(), HostError>;

    fn close(&self) -> Result<(), HostError>;

    fn set_header_color(&self, color: HeaderColor) -> Result<(), HostError>;

    fn set_background_color(&self, color: &str) -> Result<(), HostError>;
}

/// Dialogs used when the host is unavailable.
pub trait FallbackDialogs: Send + Sync {
    fn alert(&self, message: &str);

    fn confirm(&self, message: &str) -> bool;
}
