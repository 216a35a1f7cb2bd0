use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;

use super::*;

impl TwitchClient {
    /// Start a request against a Helix resource endpoint.
    ///
    /// Sets the `Authorization`, `Client-Id`, and `Content-Type`
    /// headers; the caller attaches query parameters or a JSON body
    /// before handing the builder to [`execute`](Self::execute).
    pub(super) fn api_request(
        &self,
        method: Method,
        endpoint: &str,
        access_token: &str,
    ) -> reqwest::RequestBuilder {
        tracing::debug!(%method, endpoint, "dispatching Twitch API request");
        self.http
            .request(method, format!("{}{}", self.config.api_base, endpoint))
            .header(AUTHORIZATION, access_token)
            .header("Client-Id", &self.client_id)
            .header(CONTENT_TYPE, "application/json")
    }

    /// Send a prepared request and classify the response.
    ///
    /// 200, 202, and 204 are success; the full body is read and
    /// returned as text. Any other status yields
    /// [`TwitchError::Api`] carrying the status code and the response
    /// body. Transport failures (connect, DNS, timeout) surface as
    /// [`TwitchError::Http`], as do query/body encoding errors
    /// recorded in the builder.
    pub(super) async fn execute(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<String, TwitchError> {
        let resp = request.send().await?;

        let status = resp.status().as_u16();
        match status {
            200 | 202 | 204 => Ok(resp.text().await?),
            _ => {
                let message = resp.text().await?;
                tracing::warn!(status, "Twitch API returned non-success status");
                Err(TwitchError::Api { status, message })
            }
        }
    }
}
