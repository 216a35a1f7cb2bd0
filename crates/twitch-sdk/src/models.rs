//! Request and response records for the Twitch API.

use serde::{Deserialize, Serialize};

use crate::TwitchError;

/// Wrapper for Helix `{"data": [...]}` responses.
#[derive(Debug, Deserialize)]
pub struct HelixResponse<T> {
    pub data: Vec<T>,
}

/// Token endpoint response.
///
/// `token_type` is normalized to title case ("bearer" -> "Bearer")
/// by [`TwitchClient::get_access_token`](crate::TwitchClient::get_access_token).
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorizeResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default)]
    pub token_type: String,
    /// Token lifetime in seconds. The wire value may be a JSON number
    /// or a string of digits; both decode.
    #[serde(default, deserialize_with = "seconds_from_number_or_string")]
    pub expires_in: u64,
}

fn seconds_from_number_or_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Seconds {
        Number(u64),
        Text(String),
    }

    match Seconds::deserialize(deserializer)? {
        Seconds::Number(n) => Ok(n),
        Seconds::Text(s) if s.is_empty() => Ok(0),
        Seconds::Text(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

/// Identifies a user by login name or by user id, never both.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl UserQuery {
    pub fn by_login(login: impl Into<String>) -> Self {
        Self {
            login: Some(login.into()),
            id: None,
        }
    }

    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            login: None,
            id: Some(id.into()),
        }
    }

    /// Exactly one of `login` and `id` must be set.
    pub fn validate(&self) -> Result<(), TwitchError> {
        match (&self.login, &self.id) {
            (Some(_), Some(_)) => Err(TwitchError::InvalidUserQuery(
                "set either login or id, not both",
            )),
            (None, None) => Err(TwitchError::InvalidUserQuery(
                "one of login or id must be set",
            )),
            _ => Ok(()),
        }
    }
}

/// User record from GET /users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub broadcaster_type: String,
    #[serde(default)]
    pub description: String,
}

/// Request body for POST /eventsub/subscriptions.
#[derive(Debug, Clone, Serialize)]
pub struct CreateSubscriptionRequest {
    #[serde(rename = "type")]
    pub event_type: String,
    pub version: String,
    pub condition: SubscriptionCondition,
    pub transport: WebhookTransport,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionCondition {
    pub broadcaster_user_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WebhookTransport {
    pub method: String,
    pub callback: String,
    pub secret: String,
}

impl CreateSubscriptionRequest {
    /// Webhook subscription with the fixed version "1" Twitch expects
    /// for the event types this crate names.
    pub fn webhook(
        event_type: impl Into<String>,
        broadcaster_user_id: impl Into<String>,
        callback: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        Self {
            event_type: event_type.into(),
            version: "1".to_string(),
            condition: SubscriptionCondition {
                broadcaster_user_id: broadcaster_user_id.into(),
            },
            transport: WebhookTransport {
                method: "webhook".to_string(),
                callback: callback.into(),
                secret: secret.into(),
            },
        }
    }
}

/// A registered EventSub subscription.
///
/// The schema is owned by Twitch and has grown over time, so every
/// field except `id` tolerates absence.
#[derive(Debug, Clone, Deserialize)]
pub struct Subscription {
    pub id: String,
    #[serde(default)]
    pub status: String,
    #[serde(rename = "type", default)]
    pub event_type: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub condition: serde_json::Value,
    #[serde(default)]
    pub transport: Option<SubscriptionTransport>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub cost: Option<u64>,
}

/// Transport block as echoed back by the API (secret is never returned).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubscriptionTransport {
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub callback: String,
}

/// Response from GET/POST /eventsub/subscriptions.
#[derive(Debug, Clone, Deserialize)]
pub struct SubscriptionsResponse {
    #[serde(default)]
    pub data: Vec<Subscription>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub total_cost: Option<u64>,
    #[serde(default)]
    pub max_total_cost: Option<u64>,
}
