//! Serde models for the BallDontLie games endpoint.

use serde::{Deserialize, Serialize};

/// Top-level response document: a `data` array of game records.
#[derive(Debug, Serialize, Deserialize)]
pub struct GamesResponse {
    #[serde(default)]
    pub data: Vec<Game>,
}

/// One contest as reported upstream. Scores default to zero and the status
/// to an empty string when absent, matching how the API omits fields for
/// games that have not started.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub home_team: Team,
    pub visitor_team: Team,
    #[serde(default)]
    pub home_team_score: u32,
    #[serde(default)]
    pub visitor_team_score: u32,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    /// Short name, e.g. "Bulls".
    pub name: String,
    /// Full name, e.g. "Chicago Bulls".
    pub full_name: String,
}
