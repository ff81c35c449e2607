//! Ranked score table.

use clickstorm_game::{LeaderboardEntry, format_compact};
use yew::prelude::*;

use crate::components::modal::Modal;

#[derive(Properties, PartialEq)]
pub struct LeaderboardModalProps {
    pub open: bool,
    pub rows: Vec<LeaderboardEntry>,
    /// Highlight this player's own row.
    #[prop_or_default]
    pub own_name: Option<String>,
    pub on_close: Callback<()>,
}

/// Scores arrive as decimal digit strings so values past 2^53 survive the
/// wire; parse just for display and fall back to the raw digits.
fn display_score(score: &str) -> String {
    score
        .parse::<f64>()
        .map_or_else(|_| score.to_string(), format_compact)
}

#[function_component(LeaderboardModal)]
pub fn leaderboard_modal(props: &LeaderboardModalProps) -> Html {
    let body = if props.rows.is_empty() {
        html! { <p class="leaderboard-empty">{ "No scores yet. Keep clicking!" }</p> }
    } else {
        let rows = props.rows.iter().enumerate().map(|(index, entry)| {
            let own = props.own_name.as_deref() == Some(entry.username.as_str());
            let class = classes!("leaderboard-row", own.then_some("own"));
            html! {
                <tr key={entry.username.clone()} class={class}>
                    <td class="rank">{ index + 1 }</td>
                    <td class="name">{ &entry.username }</td>
                    <td class="score">{ display_score(&entry.score) }</td>
                </tr>
            }
        });
        html! {
            <table class="leaderboard">
                <thead>
                    <tr><th>{ "#" }</th><th>{ "Player" }</th><th>{ "Clicks" }</th></tr>
                </thead>
                <tbody>{ for rows }</tbody>
            </table>
        }
    };

    html! {
        <Modal open={props.open} title="Leaderboard" on_close={props.on_close.clone()}>
            { body }
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn entry(username: &str, score: &str) -> LeaderboardEntry {
        LeaderboardEntry {
            username: username.to_string(),
            score: score.to_string(),
            last_updated: "2026-08-23 12:00:00".to_string(),
        }
    }

    fn render(rows: Vec<LeaderboardEntry>, own_name: Option<&str>) -> String {
        let props = LeaderboardModalProps {
            open: true,
            rows,
            own_name: own_name.map(str::to_string),
            on_close: Callback::from(|()| ()),
        };
        block_on(LocalServerRenderer::<LeaderboardModal>::with_props(props).render())
    }

    #[test]
    fn empty_board_shows_a_placeholder() {
        let html = render(Vec::new(), None);
        assert!(html.contains("No scores yet"));
    }

    #[test]
    fn rows_are_numbered_and_scores_compacted() {
        let html = render(
            vec![entry("benny", "2500000"), entry("aren", "999")],
            Some("aren"),
        );
        assert!(html.contains("2.5 M"));
        assert!(html.contains("999"));
        assert!(html.contains("benny"));
        // Own row gets the highlight class.
        assert!(html.contains("leaderboard-row own"));
    }
}
