//! Serde models for the X v2 tweet-creation response.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct TweetResponse {
    pub data: TweetData,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TweetData {
    pub id: String,
}
