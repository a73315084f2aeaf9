//! # Init Data
//!
//! The host hands the app a URL-encoded query string, e.g.
//! `query_id=AAH...&user=%7B%22id%22%3A123...%7D&auth_date=1700000000&hash=...`.
//! Parsing here is unverified: checking `hash` needs the bot token and happens
//! server-side.

use serde::{Deserialize, Serialize};

use super::HostError;

/// User as described by the host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TelegramUser {
    pub id: i64,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_premium: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitData {
    pub query_id: Option<String>,
    pub user: Option<TelegramUser>,
    pub auth_date: Option<i64>,
    pub hash: Option<String>,
    pub start_param: Option<String>,
}

impl InitData {
    /// Parse a raw init-data string. Unknown keys are ignored; an empty
    /// string yields empty init data.
    pub fn parse(raw: &str) -> Result<Self, HostError> {
        let mut data = InitData::default();

        for pair in raw.trim().split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_component(key)?;
            let value = decode_component(value)?;

            match key.as_str() {
                "query_id" => data.query_id = Some(value),
                "user" => {
                    let user = serde_json::from_str(&value)
                        .map_err(|e| HostError::InitData(format!("user is not valid JSON: {}", e)))?;
                    data.user = Some(user);
                }
                "auth_date" => {
                    let auth_date = value
                        .parse()
                        .map_err(|_| HostError::InitData(format!("auth_date is not a number: {}", value)))?;
                    data.auth_date = Some(auth_date);
                }
                "hash" => data.hash = Some(value),
                "start_param" => data.start_param = Some(value),
                _ => {}
            }
        }

        Ok(data)
    }
}

fn decode_component(component: &str) -> Result<String, HostError> {
    let component = component.replace('+', " ");
    urlencoding::decode(&component)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| HostError::InitData(format!("bad percent-encoding: {}", e)))
}
