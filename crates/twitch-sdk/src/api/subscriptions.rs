use reqwest::Method;

use super::*;

impl TwitchClient {
    /// Register a webhook EventSub subscription.
    ///
    /// Uses subscription version "1" and transport method "webhook";
    /// `event_type` is one of the `channel.*`/`stream.*` type strings
    /// (see the constants at the crate root).
    pub async fn subscribe(
        &self,
        event_type: &str,
        broadcaster_user_id: &str,
        callback: &str,
        secret: &str,
        access_token: &str,
    ) -> Result<SubscriptionsResponse, TwitchError> {
        let req =
            CreateSubscriptionRequest::webhook(event_type, broadcaster_user_id, callback, secret);

        let body = self
            .execute(
                self.api_request(Method::POST, ENDPOINT_SUBSCRIPTIONS, access_token)
                    .json(&req),
            )
            .await?;

        Ok(serde_json::from_str(&body)?)
    }

    /// List the subscriptions registered for this client id.
    pub async fn get_subscriptions(
        &self,
        access_token: &str,
    ) -> Result<SubscriptionsResponse, TwitchError> {
        let body = self
            .execute(self.api_request(Method::GET, ENDPOINT_SUBSCRIPTIONS, access_token))
            .await?;

        Ok(serde_json::from_str(&body)?)
    }

    /// Delete a subscription. Success carries no body.
    pub async fn delete_subscription(
        &self,
        query: &UserQuery,
        access_token: &str,
    ) -> Result<(), TwitchError> {
        query.validate()?;

        self.execute(
            self.api_request(Method::DELETE, ENDPOINT_SUBSCRIPTIONS, access_token)
                .query(query),
        )
        .await?;

        Ok(())
    }
}
