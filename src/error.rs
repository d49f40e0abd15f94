//! Error types for the Bulls bot

use thiserror::Error;

/// Every failure the bot can hit. All of these are fatal for the run:
/// `main` prints the message and exits non-zero, there is no retry.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("configuration error: {message}")]
    Configuration { message: String },

    #[error("network error: {message}")]
    Network { message: String },

    #[error("failed to parse upstream response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("tweet post failed [{status}]: {body}")]
    Publish { status: u16, body: String },
}

impl BotError {
    /// Shorthand for a configuration failure.
    pub fn config(message: impl Into<String>) -> Self {
        BotError::Configuration { message: message.into() }
    }

    /// Shorthand for a transport or HTTP-level failure.
    pub fn network(message: impl Into<String>) -> Self {
        BotError::Network { message: message.into() }
    }
}
