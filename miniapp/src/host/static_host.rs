//! Host backed by a fixed init-data string, for headless runs and tests.

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use super::{ConfirmCallback, HeaderColor, HostError, InitData, WebAppHost};

pub struct StaticHost {
    raw_init_data: String,
    confirm_answer: bool,
    alerts: Mutex<Vec<String>>,
    header_color: Mutex<Option<HeaderColor>>,
    background_color: Mutex<Option<String>>,
    closed: AtomicBool,
}

impl StaticHost {
    pub fn new(raw_init_data: impl Into<String>) -> Self {
        Self {
            raw_init_data: raw_init_data.into(),
            confirm_answer: true,
            alerts: Mutex::new(Vec::new()),
            header_color: Mutex::new(None),
            background_color: Mutex::new(None),
            closed: AtomicBool::new(false),
        }
    }

    /// Answer given to every confirmation dialog (default `true`).
    pub fn with_confirm_answer(mut self, answer: bool) -> Self {
        self.confirm_answer = answer;
        self
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().clone()
    }

    pub fn header_color(&self) -> Option<HeaderColor> {
        *self.header_color.lock()
    }

    pub fn background_color(&self) -> Option<String> {
        self.background_color.lock().clone()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

impl WebAppHost for StaticHost {
    fn ready(&self) -> Result<(), HostError> {
        Ok(())
    }

    fn expand(&self) -> Result<(), HostError> {
        Ok(())
    }

    fn init_data(&self) -> String {
        self.raw_init_data.clone()
    }

    fn init_data_unsafe(&self) -> Result<InitData, HostError> {
        InitData::parse(&self.raw_init_data)
    }

    fn show_alert(&self, message: &str) -> Result<(), HostError> {
        tracing::info!(alert = message, "Host alert");
        self.alerts.lock().push(message.to_string());
        Ok(())
    }

    fn show_confirm(&self, message: &str, callback: ConfirmCallback) -> Result<(), HostError> {
        tracing::info!(prompt = message, answer = self.confirm_answer, "Host confirm");
        callback(self.confirm_answer);
        Ok(())
    }

    fn close(&self) -> Result<(), HostError> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn set_header_color(&self, color: HeaderColor) -> Result<(), HostError> {
        *self.header_color.lock() = Some(color);
        Ok(())
    }

    fn set_background_color(&self, color: &str) -> Result<(), HostError> {
        *self.background_color.lock() = Some(color.to_string());
        Ok(())
    }
}
