//! Pins the remote leaderboard contract: validation, upsert-keeps-max,
//! ranking order and the row cap.

use clickstorm_game::leaderboard::{
    LeaderboardError, LeaderboardTable, MAX_ROWS, ScoreSubmission, cmp_scores,
};
use std::cmp::Ordering;

fn submission(username: &str, score: f64) -> ScoreSubmission {
    ScoreSubmission {
        username: username.to_string(),
        score,
    }
}

#[test]
fn submit_validates_username_and_score() {
    let mut table = LeaderboardTable::new();
    assert_eq!(
        table.submit(&submission("  ", 10.0), "t0"),
        Err(LeaderboardError::InvalidRequest("username is empty"))
    );
    assert_eq!(
        table.submit(&submission("benny", -1.0), "t0"),
        Err(LeaderboardError::InvalidScore(-1.0))
    );
}

#[test]
fn upsert_keeps_the_maximum_score() {
    let mut table = LeaderboardTable::new();
    table.submit(&submission("benny", 500.0), "t0").unwrap();
    let rows = table.submit(&submission("benny", 100.0), "t1").unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].score, "500");
    // The timestamp still advances on a lower submission.
    assert_eq!(rows[0].last_updated, "t1");

    let rows = table.submit(&submission("benny", 900.0), "t2").unwrap();
    assert_eq!(rows[0].score, "900");
}

#[test]
fn ranking_is_descending_and_numeric() {
    let mut table = LeaderboardTable::new();
    table.submit(&submission("small", 9.0), "t0").unwrap();
    table.submit(&submission("large", 10.0), "t0").unwrap();
    table.submit(&submission("huge", 1e21), "t0").unwrap();

    let rows = table.ranked();
    let names: Vec<&str> = rows.iter().map(|row| row.username.as_str()).collect();
    assert_eq!(names, ["huge", "large", "small"]);
}

#[test]
fn ordering_survives_beyond_f64_precision() {
    // Two scores that collapse to the same f64 stay distinct as strings.
    let a = "10000000000000000001";
    let b = "10000000000000000000";
    assert_eq!(cmp_scores(a, b), Ordering::Greater);
    assert_eq!(cmp_scores(b, a), Ordering::Less);
}

#[test]
fn ranked_output_is_capped() {
    let mut table = LeaderboardTable::new();
    for index in 0..(MAX_ROWS + 20) {
        table
            .submit(&submission(&format!("player{index:03}"), index as f64), "t0")
            .unwrap();
    }
    let rows = table.ranked();
    assert_eq!(rows.len(), MAX_ROWS);
    // The lowest scores fall off the end.
    assert!(rows.iter().all(|row| {
        cmp_scores(&row.score, "19") == Ordering::Greater
    }));
}

#[test]
fn submission_body_matches_the_wire_shape() {
    let body = serde_json::to_string(&submission("benny", 1234.0)).unwrap();
    assert_eq!(body, r#"{"username":"benny","score":1234.0}"#);
}
