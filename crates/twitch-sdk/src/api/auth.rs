//! OAuth authorization URL generation and code exchange.

use serde::Serialize;
use url::Url;

use super::*;

/// Token endpoint request, form-encoded.
#[derive(Debug, Serialize)]
struct AuthorizeRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    grant_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    redirect_uri: Option<&'a str>,
}

impl TwitchClient {
    /// Build the URL the end user is sent to for authorization.
    ///
    /// Pure URL construction; no network call is made. Fails with
    /// [`TwitchError::EmptyRedirectUri`] when `redirect_uri` is empty.
    pub fn authorize_url(
        &self,
        redirect_uri: &str,
        state: &str,
        scope: &str,
        response_type: &str,
    ) -> Result<String, TwitchError> {
        if redirect_uri.is_empty() {
            return Err(TwitchError::EmptyRedirectUri);
        }

        let mut url = Url::parse(&format!("{}/oauth2/authorize", self.config.id_base))?;
        url.query_pairs_mut()
            .append_pair("response_type", response_type)
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", redirect_uri)
            .append_pair("scope", scope)
            .append_pair("state", state);
        Ok(url.into())
    }

    /// Exchange an authorization code for an access token.
    ///
    /// `token_type` in the result is normalized to title case
    /// ("bearer" -> "Bearer"). A success status with an empty
    /// `access_token` is an API-level failure and yields
    /// [`TwitchError::EmptyAccessToken`].
    pub async fn get_access_token(
        &self,
        code: &str,
        grant_type: &str,
        redirect_uri: &str,
    ) -> Result<AuthorizeResponse, TwitchError> {
        let form = AuthorizeRequest {
            client_id: &self.client_id,
            client_secret: &self.client_secret,
            grant_type,
            code: (!code.is_empty()).then_some(code),
            redirect_uri: (!redirect_uri.is_empty()).then_some(redirect_uri),
        };

        let url = format!("{}/oauth2/token", self.config.id_base);
        let body = self.execute(self.http.post(url).form(&form)).await?;

        let mut resp: AuthorizeResponse = serde_json::from_str(&body)?;
        resp.token_type = title_case(&resp.token_type);

        if resp.access_token.is_empty() {
            return Err(TwitchError::EmptyAccessToken);
        }

        Ok(resp)
    }
}

/// Uppercase the first letter of each space-separated word.
fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TwitchClient {
        TwitchClient::new("test_client_id", "test_secret").unwrap()
    }

    #[test]
    fn authorize_url_rejects_empty_redirect_uri() {
        assert!(matches!(
            client().authorize_url("", "st", "user:read:email", "code"),
            Err(TwitchError::EmptyRedirectUri)
        ));
    }

    #[test]
    fn authorize_url_contains_all_parameters() {
        let url = client()
            .authorize_url(
                "http://localhost:8080/callback",
                "opaque-state",
                "user:read:email",
                "code",
            )
            .unwrap();

        assert!(url.starts_with("https://id.twitch.tv/oauth2/authorize?response_type=code"));
        assert!(url.contains("client_id=test_client_id"));
        assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A8080%2Fcallback"));
        assert!(url.contains("scope=user%3Aread%3Aemail"));
        assert!(url.contains("state=opaque-state"));
    }

    #[test]
    fn title_case_normalizes_token_type() {
        assert_eq!(title_case("bearer"), "Bearer");
        assert_eq!(title_case("Bearer"), "Bearer");
        assert_eq!(title_case(""), "");
    }
}
