use reqwest::Method;

use super::*;

impl TwitchClient {
    /// Look up users by login name or user id.
    ///
    /// The query must identify users by exactly one of the two
    /// fields; anything else fails validation before any request is
    /// sent.
    pub async fn get_user(
        &self,
        query: &UserQuery,
        access_token: &str,
    ) -> Result<Vec<User>, TwitchError> {
        query.validate()?;

        let body = self
            .execute(
                self.api_request(Method::GET, ENDPOINT_USERS, access_token)
                    .query(query),
            )
            .await?;

        let resp: HelixResponse<User> = serde_json::from_str(&body)?;
        Ok(resp.data)
    }
}
