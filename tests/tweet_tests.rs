use chrono::NaiveDate;

use bulls_bot::config::BULLS_TEAM_ID;
use bulls_bot::model::game::{Game, Team};
use bulls_bot::tweet::{compose, MAX_TWEET_CHARS};

fn bulls() -> Team {
    Team { id: BULLS_TEAM_ID, name: "Bulls".to_string(), full_name: "Chicago Bulls".to_string() }
}

fn opponent(name: &str, full_name: &str) -> Team {
    Team { id: 2, name: name.to_string(), full_name: full_name.to_string() }
}

#[test]
fn home_win_reads_yes_with_vs_line() {
    let game = Game {
        home_team: bulls(),
        visitor_team: opponent("Celtics", "Boston Celtics"),
        home_team_score: 101,
        visitor_team_score: 98,
        status: "Final".to_string(),
    };
    let date = NaiveDate::from_ymd_opt(2026, 3, 4).unwrap();

    let text = compose(Some(&game), date, BULLS_TEAM_ID).expect("expected a tweet");
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Yes");
    assert_eq!(lines[1], "Mar 4, 2026");
    assert_eq!(lines[2], "vs Boston Celtics");
    assert_eq!(lines[3], "Bulls 101 – 98 Celtics");
}

#[test]
fn road_loss_reads_no_with_at_line() {
    let game = Game {
        home_team: opponent("Bucks", "Milwaukee Bucks"),
        visitor_team: bulls(),
        home_team_score: 102,
        visitor_team_score: 90,
        status: "Final".to_string(),
    };
    let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();

    let text = compose(Some(&game), date, BULLS_TEAM_ID).expect("expected a tweet");
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "No");
    assert_eq!(lines[1], "Dec 31, 2025");
    assert_eq!(lines[2], "@ Milwaukee Bucks");
    assert_eq!(lines[3], "Bulls 90 – 102 Bucks");
}

#[test]
fn no_game_composes_nothing() {
    let date = NaiveDate::from_ymd_opt(2026, 7, 15).unwrap();
    assert!(compose(None, date, BULLS_TEAM_ID).is_none());
}

#[test]
fn oversized_message_is_cut_to_exactly_280_chars() {
    let game = Game {
        home_team: bulls(),
        visitor_team: opponent("Wolves", &"Wolverhampton Wanderers ".repeat(20)),
        home_team_score: 120,
        visitor_team_score: 119,
        status: "Final".to_string(),
    };
    let date = NaiveDate::from_ymd_opt(2026, 3, 4).unwrap();

    let text = compose(Some(&game), date, BULLS_TEAM_ID).expect("expected a tweet");
    assert_eq!(text.chars().count(), MAX_TWEET_CHARS);

    // The cap keeps a strict prefix of the untruncated message.
    let full = format!(
        "Yes\nMar 4, 2026\nvs {}\nBulls 120 – 119 Wolves",
        "Wolverhampton Wanderers ".repeat(20)
    );
    let prefix: String = full.chars().take(MAX_TWEET_CHARS).collect();
    assert_eq!(text, prefix);
}

#[test]
fn tie_score_is_not_a_win() {
    // The fallback path can surface an unstarted 0-0 record; it reads "No".
    let game = Game {
        home_team: bulls(),
        visitor_team: opponent("Heat", "Miami Heat"),
        home_team_score: 0,
        visitor_team_score: 0,
        status: "7:00 PM ET".to_string(),
    };
    let date = NaiveDate::from_ymd_opt(2026, 3, 4).unwrap();

    let text = compose(Some(&game), date, BULLS_TEAM_ID).expect("expected a tweet");
    assert!(text.starts_with("No\n"), "text was: {}", text);
}
