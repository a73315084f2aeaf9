//! # Notification Endpoints

use shared::{CreateNotificationRequest, MarkNotificationReadRequest, Notification};

use super::client::RemoteClient;
use crate::config::Endpoint;
use crate::core::{HttpMethod, Result, Transport};
use crate::utils::validation::{not_blank, validate_telegram_id};

pub async fn list_notifications<T: Transport>(
    client: &RemoteClient<T>,
    telegram_id: i64,
) -> Result<Vec<Notification>> {
    validate_telegram_id(telegram_id)?;
    client
        .fetch(Endpoint::Notifications, &[("telegram_id", telegram_id.to_string())])
        .await
}

#[tracing::instrument(skip(client, message))]
pub async fn create_notification<T: Transport>(
    client: &RemoteClient<T>,
    telegram_id: i64,
    kind: &str,
    title: &str,
    message: &str,
) -> Result<Notification> {
    validate_telegram_id(telegram_id)?;
    let request = CreateNotificationRequest {
        telegram_id,
        kind: not_blank(kind, "type")?.to_string(),
        title: not_blank(title, "title")?.to_string(),
        message: message.to_string(),
    };

    client
        .submit(HttpMethod::Post, Endpoint::Notifications, &request)
        .await
}

pub async fn mark_notification_read<T: Transport>(
    client: &RemoteClient<T>,
    notification_id: i64,
) -> Result<Notification> {
    let request = MarkNotificationReadRequest { notification_id };
    client
        .submit(HttpMethod::Put, Endpoint::Notifications, &request)
        .await
}
