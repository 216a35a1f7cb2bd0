//! Twitch web API client library.
//!
//! Provides OAuth authorization URL generation, authorization code
//! exchange, and typed access to the Helix users and EventSub
//! subscription endpoints.
//!
//! ```no_run
//! use twitch_sdk::{TwitchClient, UserQuery};
//!
//! # async fn run() -> Result<(), twitch_sdk::TwitchError> {
//! let client = TwitchClient::new("client-id", "client-secret")?;
//! let users = client
//!     .get_user(&UserQuery::by_login("twitchdev"), "access-token")
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod models;

pub use api::TwitchClient;
pub use config::ClientConfig;
pub use models::{
    AuthorizeResponse, CreateSubscriptionRequest, HelixResponse, Subscription,
    SubscriptionCondition, SubscriptionTransport, SubscriptionsResponse, User, UserQuery,
    WebhookTransport,
};

/// Unified error type for the twitch-sdk crate.
#[derive(Debug, thiserror::Error)]
pub enum TwitchError {
    #[error("client id and client secret must be non-empty")]
    EmptyCredentials,

    #[error("redirect URI must be non-empty")]
    EmptyRedirectUri,

    #[error("invalid user query: {0}")]
    InvalidUserQuery(&'static str),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Twitch API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("empty access token in API response")]
    EmptyAccessToken,

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

// EventSub event types. Twitch accepts many more; these are plain
// strings, so any documented type can be passed to
// `TwitchClient::subscribe`.

/// A broadcaster gains a follower.
pub const CHANNEL_FOLLOW: &str = "channel.follow";
/// A stream goes live.
pub const STREAM_ONLINE: &str = "stream.online";
/// A stream goes offline.
pub const STREAM_OFFLINE: &str = "stream.offline";
