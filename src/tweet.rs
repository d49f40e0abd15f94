//! Tweet composition: turn a game record into the four-line status text.

use chrono::NaiveDate;

use crate::model::game::Game;

/// Hard cap on the posted text.
pub const MAX_TWEET_CHARS: usize = 280;

/// Build the tweet for a game, or None when there was no game that day.
///
/// Lines: win verdict, date, venue + opponent, score. The venue marker is
/// "vs" at home and "@" on the road; the score line uses an en dash.
pub fn compose(game: Option<&Game>, date: NaiveDate, team_id: i64) -> Option<String> {
    let game = game?;

    let we_are_home = game.home_team.id == team_id;
    let (us, opponent) = if we_are_home {
        (&game.home_team, &game.visitor_team)
    } else {
        (&game.visitor_team, &game.home_team)
    };
    let (our_score, opponent_score) = if we_are_home {
        (game.home_team_score, game.visitor_team_score)
    } else {
        (game.visitor_team_score, game.home_team_score)
    };

    let verdict = if our_score > opponent_score { "Yes" } else { "No" };
    let date_line = date.format("%b %-d, %Y").to_string();
    let venue = if we_are_home { "vs" } else { "@" };
    let opponent_line = format!("{} {}", venue, opponent.full_name);
    let score_line = format!("{} {} – {} {}", us.name, our_score, opponent_score, opponent.name);

    let tweet = format!("{}\n{}\n{}\n{}", verdict, date_line, opponent_line, score_line);
    Some(truncate_chars(tweet, MAX_TWEET_CHARS))
}

/// Cap at `max` characters (not bytes); may cut mid-word.
fn truncate_chars(text: String, max: usize) -> String {
    if text.chars().count() <= max {
        text
    } else {
        text.chars().take(max).collect()
    }
}
