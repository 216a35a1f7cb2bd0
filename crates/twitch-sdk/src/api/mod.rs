//! Twitch API client.
//!
//! One client handle carries the application credentials and a
//! pooled HTTP connection; every endpoint method goes through the
//! shared request pipeline in `request.rs`.

mod auth;
mod request;
mod subscriptions;
mod users;

use crate::config::ClientConfig;
use crate::models::{
    AuthorizeResponse, CreateSubscriptionRequest, HelixResponse, SubscriptionsResponse, User,
    UserQuery,
};
use crate::TwitchError;

pub(crate) const ENDPOINT_USERS: &str = "/users";
pub(crate) const ENDPOINT_SUBSCRIPTIONS: &str = "/eventsub/subscriptions";

/// Twitch API client with automatic Client-Id header injection.
///
/// Holds no mutable per-call state, so a single handle (or clones of
/// it) may be shared freely across tasks.
#[derive(Debug, Clone)]
pub struct TwitchClient {
    pub(super) http: reqwest::Client,
    pub(super) client_id: String,
    pub(super) client_secret: String,
    pub(super) config: ClientConfig,
}

impl TwitchClient {
    /// Create a client with the default hosts and timeout.
    ///
    /// Fails with [`TwitchError::EmptyCredentials`] if either
    /// credential string is empty.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self, TwitchError> {
        Self::with_config(client_id, client_secret, ClientConfig::default())
    }

    /// Create a client with custom hosts or timeout.
    pub fn with_config(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self, TwitchError> {
        let client_id = client_id.into();
        let client_secret = client_secret.into();
        if client_id.is_empty() || client_secret.is_empty() {
            return Err(TwitchError::EmptyCredentials);
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            client_id,
            client_secret,
            config,
        })
    }

    /// The client id this handle was constructed with.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }
}
