//! One full bot run: resolve yesterday, fetch the game, compose, post.

use chrono::{DateTime, Utc};
use tracing::{info, instrument};

use crate::balldontlie::BallDontLie;
use crate::config::Config;
use crate::dates;
use crate::error::BotError;
use crate::http::Transport;
use crate::tweet;
use crate::twitter::XClient;

/// How a successful run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// A tweet went out; carries the created tweet id.
    Posted(String),
    /// Off day or offseason; nothing was published.
    NoGame,
}

/// Execute one run against an explicit clock, so tests can pin "now".
#[instrument(level = "info", skip(config, http))]
pub fn run_at(
    config: &Config,
    http: &dyn Transport,
    now_utc: DateTime<Utc>,
) -> Result<RunOutcome, BotError> {
    let yesterday = dates::chicago_yesterday_at(now_utc);
    let scores = BallDontLie::new(&config.scores);
    let game = scores.fetch_game_for(http, yesterday)?;

    match tweet::compose(game.as_ref(), yesterday, config.scores.team_id) {
        Some(text) => {
            info!(text = %text, "Prepared tweet");
            let client = XClient::new(&config.social);
            let id = client.post(http, &text)?;
            Ok(RunOutcome::Posted(id))
        }
        None => Ok(RunOutcome::NoGame),
    }
}

/// Execute one run against the wall clock.
pub fn run(config: &Config, http: &dyn Transport) -> Result<RunOutcome, BotError> {
    run_at(config, http, Utc::now())
}
