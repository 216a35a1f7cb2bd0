//! Client configuration: API hosts and request timeout.

use std::time::Duration;

/// Production Helix API base URL.
pub const API_BASE: &str = "https://api.twitch.tv/helix";

/// Production identity server base URL (OAuth endpoints).
pub const ID_BASE: &str = "https://id.twitch.tv";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for a [`TwitchClient`](crate::TwitchClient).
///
/// The base URLs are overridable so tests can point the client at a
/// local mock server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for Helix resource endpoints, without trailing slash.
    pub api_base: String,
    /// Base URL for the OAuth authorize/token endpoints, without
    /// trailing slash.
    pub id_base: String,
    /// Upper bound on the duration of a single request, connect
    /// through body read.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: API_BASE.to_string(),
            id_base: ID_BASE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
