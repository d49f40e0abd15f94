//! Process configuration, read once at startup from the environment.
//!
//! The config is an explicit struct passed by reference into the scores
//! client and the publisher, so tests can inject fake endpoints and
//! credentials without touching the process environment.

use std::env;

use crate::error::BotError;

/// Chicago Bulls team id in the BallDontLie API.
pub const BULLS_TEAM_ID: i64 = 6;

const BALLDONTLIE_URL: &str = "https://api.balldontlie.io/v1/games";
const X_POST_URL: &str = "https://api.twitter.com/2/tweets";

/// Scores API configuration.
#[derive(Debug, Clone)]
pub struct ScoresConfig {
    pub base_url: String,
    pub team_id: i64,
    pub per_page: u32,
    /// Optional bearer token; the free BallDontLie tier works without one.
    pub api_key: Option<String>,
}

/// OAuth1 credentials for the X (Twitter) posting API.
#[derive(Debug, Clone)]
pub struct SocialConfig {
    pub post_url: String,
    pub api_key: String,
    pub api_secret: String,
    pub access_token: String,
    pub access_secret: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub scores: ScoresConfig,
    pub social: SocialConfig,
}

impl Config {
    /// Create config from environment variables.
    pub fn from_env() -> Result<Self, BotError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Create config from an arbitrary variable lookup. Tests use this with
    /// a map instead of mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BotError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name).ok_or_else(|| {
                BotError::config(format!("{} must be set in the environment", name))
            })
        };

        Ok(Config {
            scores: ScoresConfig {
                base_url: BALLDONTLIE_URL.to_string(),
                team_id: BULLS_TEAM_ID,
                per_page: 100,
                api_key: lookup("BDL_API_KEY"),
            },
            social: SocialConfig {
                post_url: X_POST_URL.to_string(),
                api_key: required("TWITTER_API_KEY")?,
                api_secret: required("TWITTER_API_SECRET")?,
                access_token: required("TWITTER_ACCESS_TOKEN")?,
                access_secret: required("TWITTER_ACCESS_SECRET")?,
            },
        })
    }
}
