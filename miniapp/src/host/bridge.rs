//! # Host Bridge
//!
//! An explicitly constructed value wrapping an optional [`WebAppHost`].
//! Probing happens once in [`HostBridge::probe`]; the result is final.

use std::sync::Arc;

use parking_lot::Mutex;

use super::{ConfirmCallback, FallbackDialogs, HeaderColor, HostError, TelegramUser, WebAppHost};

enum Mode {
    Available {
        host: Arc<dyn WebAppHost>,
        user: TelegramUser,
    },
    Unavailable,
}

pub struct HostBridge {
    mode: Mode,
    fallback: Arc<dyn FallbackDialogs>,
}

impl HostBridge {
    /// Probe `host`: signal ready, expand, then read the user.
    ///
    /// Any failing step, or init data without a user, leaves the bridge
    /// unavailable. Failures are logged, never returned.
    pub fn probe(host: Option<Arc<dyn WebAppHost>>, fallback: Arc<dyn FallbackDialogs>) -> Self {
        let mode = match host {
            Some(host) => match Self::probe_host(host.as_ref()) {
                Ok(user) => {
                    tracing::info!(user_id = user.id, "Host bridge available");
                    Mode::Available { host, user }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Host probe failed, using fallback dialogs");
                    Mode::Unavailable
                }
            },
            None => {
                tracing::info!("No host present, using fallback dialogs");
                Mode::Unavailable
            }
        };

        Self { mode, fallback }
    }

    /// A bridge that never talks to a host.
    pub fn unavailable(fallback: Arc<dyn FallbackDialogs>) -> Self {
        Self::probe(None, fallback)
    }

    fn probe_host(host: &dyn WebAppHost) -> Result<TelegramUser, HostError> {
        host.ready()?;
        host.expand()?;
        host.init_data_unsafe()?
            .user
            .ok_or_else(|| HostError::InitData("init data carries no user".to_string()))
    }

    pub fn is_available(&self) -> bool {
        matches!(self.mode, Mode::Available { .. })
    }

    pub fn user(&self) -> Option<&TelegramUser> {
        match &self.mode {
            Mode::Available { user, .. } => Some(user),
            Mode::Unavailable => None,
        }
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user().map(|user| user.id)
    }

    /// Raw signed init data; empty when unavailable.
    pub fn init_data(&self) -> String {
        match &self.mode {
            Mode::Available { host, .. } => host.init_data(),
            Mode::Unavailable => String::new(),
        }
    }

    pub fn show_alert(&self, message: &str) {
        match &self.mode {
            Mode::Available { host, .. } => {
                if let Err(e) = host.show_alert(message) {
                    tracing::warn!(error = %e, "Host alert failed, using fallback");
                    self.fallback.alert(message);
                }
            }
            Mode::Unavailable => self.fallback.alert(message),
        }
    }

    /// Ask for confirmation. `callback` runs exactly once with the answer.
    pub fn show_confirm<F>(&self, message: &str, callback: F)
    where
        F: FnOnce(bool) + Send + 'static,
    {
        let host = match &self.mode {
            Mode::Available { host, .. } => host,
            Mode::Unavailable => {
                callback(self.fallback.confirm(message));
                return;
            }
        };

        // The host may drop the callback when it fails; keep a claim on it so
        // the fallback can still answer.
        let callback: ConfirmCallback = Box::new(callback);
        let slot = Arc::new(Mutex::new(Some(callback)));
        let host_slot = Arc::clone(&slot);
        let forward: ConfirmCallback = Box::new(move |answer| {
            let pending = host_slot.lock().take();
            if let Some(callback) = pending {
                callback(answer);
            }
        });

        if let Err(e) = host.show_confirm(message, forward) {
            tracing::warn!(error = %e, "Host confirm failed, using fallback");
            let pending = slot.lock().take();
            if let Some(callback) = pending {
                callback(self.fallback.confirm(message));
            }
        }
    }

    /// Close the app. No-op without a host.
    pub fn close(&self) {
        if let Mode::Available { host, .. } = &self.mode {
            if let Err(e) = host.close() {
                tracing::warn!(error = %e, "Host close failed");
            }
        }
    }

    pub fn set_header_color(&self, color: HeaderColor) {
        if let Mode::Available { host, .. } = &self.mode {
            if let Err(e) = host.set_header_color(color) {
                tracing::warn!(error = %e, color = color.as_str(), "Failed to set header color");
            }
        }
    }

    pub fn set_background_color(&self, color: &str) {
        if let Mode::Available { host, .. } = &self.mode {
            if let Err(e) = host.set_background_color(color) {
                tracing::warn!(error = %e, color, "Failed to set background color");
            }
        }
    }
}
