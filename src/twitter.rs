//! X (Twitter) v2 posting client.

use tracing::{error, info};

use crate::config::SocialConfig;
use crate::error::BotError;
use crate::http::Transport;
use crate::model::tweet::TweetResponse;
use crate::oauth::OAuth1;

/// Posts one status per run via the v2 tweets endpoint.
#[derive(Debug, Clone)]
pub struct XClient {
    credentials: SocialConfig,
}

impl XClient {
    pub fn new(credentials: &SocialConfig) -> Self {
        Self { credentials: credentials.clone() }
    }

    /// Publish `text` and return the created tweet's id.
    ///
    /// Any response status >= 400 is a `Publish` error carrying the status
    /// code and body verbatim.
    pub fn post(&self, http: &dyn Transport, text: &str) -> Result<String, BotError> {
        let authorization =
            OAuth1::new(&self.credentials).authorization_header("POST", &self.credentials.post_url, &[]);
        let payload = serde_json::json!({ "text": text });

        let response = http.post_json(
            &self.credentials.post_url,
            &[("Authorization", authorization.as_str())],
            &payload,
        )?;
        if response.status >= 400 {
            error!(status = response.status, body = %response.body, "Tweet post rejected");
            return Err(BotError::Publish {
                status: response.status,
                body: response.body,
            });
        }

        let parsed: TweetResponse = serde_json::from_str(&response.body)?;
        info!(tweet_id = %parsed.data.id, "Posted tweet");
        Ok(parsed.data.id)
    }
}
