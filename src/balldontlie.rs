//! BallDontLie scores client: one GET per run, plus the selection logic
//! that picks the game worth reporting for a date.

use chrono::NaiveDate;
use tracing::{debug, info, instrument};

use crate::config::ScoresConfig;
use crate::error::BotError;
use crate::http::Transport;
use crate::model::game::{Game, GamesResponse};

/// Status strings the upstream uses for a concluded game.
const COMPLETED_MARKERS: [&str; 3] = ["final", "final/ot", "finished"];

/// Client for the BallDontLie games endpoint, scoped to one team.
#[derive(Debug)]
pub struct BallDontLie {
    base_url: String,
    team_id: i64,
    per_page: u32,
    api_key: Option<String>,
}

impl BallDontLie {
    pub fn new(config: &ScoresConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            team_id: config.team_id,
            per_page: config.per_page,
            api_key: config.api_key.clone(),
        }
    }

    /// Fetch the team's game for `date`, or None on an off day.
    ///
    /// Any non-2xx response is a `Network` error carrying the upstream
    /// status and body; a body that is not the expected document is `Parse`.
    #[instrument(level = "info", skip(self, http))]
    pub fn fetch_game_for(
        &self,
        http: &dyn Transport,
        date: NaiveDate,
    ) -> Result<Option<Game>, BotError> {
        let date_param = date.format("%Y-%m-%d").to_string();
        let team_param = self.team_id.to_string();
        let per_page_param = self.per_page.to_string();
        let query = [
            ("dates[]", date_param.as_str()),
            ("team_ids[]", team_param.as_str()),
            ("per_page", per_page_param.as_str()),
        ];

        let bearer = self.api_key.as_ref().map(|key| format!("Bearer {}", key));
        let mut headers: Vec<(&str, &str)> = Vec::new();
        if let Some(value) = bearer.as_deref() {
            headers.push(("Authorization", value));
        }

        debug!(url = %self.base_url, date = %date_param, team_id = self.team_id, "Requesting scores");
        let response = http.get(&self.base_url, &query, &headers)?;
        if !response.is_success() {
            return Err(BotError::network(format!(
                "scores request failed [{}]: {}",
                response.status, response.body
            )));
        }

        let document: GamesResponse = serde_json::from_str(&response.body)?;
        info!(games = document.data.len(), date = %date_param, "Fetched games for date");
        Ok(Self::select_game(document.data))
    }

    /// Pick the record worth reporting from the API's list for one date.
    ///
    /// Scans in API order for the first game that is final or has points on
    /// the board. When nothing matches, the first record is returned as-is,
    /// even if it is an unstarted 0-0 placeholder.
    pub fn select_game(games: Vec<Game>) -> Option<Game> {
        if games.is_empty() {
            return None;
        }
        if let Some(found) = games.iter().find(|g| Self::looks_completed(g)) {
            return Some(found.clone());
        }
        games.into_iter().next()
    }

    fn looks_completed(game: &Game) -> bool {
        COMPLETED_MARKERS
            .iter()
            .any(|marker| game.status.eq_ignore_ascii_case(marker))
            || game.home_team_score + game.visitor_team_score > 0
    }
}
