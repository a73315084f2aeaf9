//! # Authentication Endpoint
//!
//! Registration doubles as sign-in: the auth function returns the existing
//! user for a known `telegram_id`, otherwise creates the user, its default
//! wallets and a welcome notification.

use shared::{RegisterUserRequest, User};

use super::client::RemoteClient;
use crate::config::Endpoint;
use crate::core::{HttpMethod, Result, Transport};
use crate::utils::validation::validate_telegram_id;

/// Register (or fetch) the user identified by `telegram_id`.
#[tracing::instrument(skip(client, username, first_name))]
pub async fn register_user<T: Transport>(
    client: &RemoteClient<T>,
    telegram_id: i64,
    username: Option<&str>,
    first_name: Option<&str>,
    referral_code: Option<&str>,
) -> Result<User> {
    validate_telegram_id(telegram_id)?;

    let request = RegisterUserRequest {
        telegram_id,
        username: username.map(str::to_string),
        first_name: first_name.map(str::to_string),
        referral_code: referral_code
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(str::to_string),
    };

    let user: User = client.submit(HttpMethod::Post, Endpoint::Auth, &request).await?;
    tracing::info!(user_id = user.id, "User registered");
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_endpoints;
    use crate::core::ClientError;
    use crate::services::api::mock::{fixtures, MockTransport};
    use serde_json::json;

    #[tokio::test]
    async fn test_register_posts_identity() {
        let client = RemoteClient::with_transport(
            MockTransport::always(200, fixtures::user(123)),
            test_endpoints(),
        );

        let user = register_user(&client, 123, Some("alice"), None, Some(" FRIEND1 "))
            .await
            .unwrap();
        assert_eq!(user.telegram_id, 123);
        assert_eq!(user.referral_code, "REFALICE");

        let request = client.transport().last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "https://functions.test/auth");
        assert_eq!(
            request.body,
            Some(json!({"telegram_id": 123, "username": "alice", "referral_code": "FRIEND1"}))
        );
    }

    #[tokio::test]
    async fn test_register_rejects_invalid_id_without_request() {
        let client = RemoteClient::with_transport(
            MockTransport::always(200, fixtures::user(123)),
            test_endpoints(),
        );

        let err = register_user(&client, 0, None, None, None).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
        assert_eq!(client.transport().call_count(), 0);
    }
}
