use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;

use crate::domain::{MatchStatus, MatchSummary, PlayerRef, PlayerSide, SetScore, Tour};

/// Case-insensitive substring classification of the upstream event type
pub fn map_tour(raw: &str) -> Tour {
    let lowered = raw.to_lowercase();
    if lowered.contains("wta") {
        return Tour::Wta;
    }
    if lowered.contains("atp") {
        return Tour::Atp;
    }
    Tour::Other
}

/// "Finished" wins over everything; then the live flag; then the raw
/// status verbatim, or NotStarted when the feed sends nothing.
pub fn derive_status(raw_status: &str, live_flag: &str) -> MatchStatus {
    if raw_status == "Finished" {
        return MatchStatus::Completed;
    }
    if live_flag == "1" {
        return MatchStatus::InProgress;
    }
    if raw_status.is_empty() {
        return MatchStatus::NotStarted;
    }
    MatchStatus::Other(raw_status.to_string())
}

/// Map raw set score pairs to numeric scores, preserving play order.
/// Non-numeric values default to 0.
pub fn parse_sets(scores: Option<&Value>) -> Vec<SetScore> {
    scores
        .and_then(Value::as_array)
        .map(|rows| {
            rows.iter()
                .map(|row| SetScore {
                    p1: numeric_field(row, "score_first"),
                    p2: numeric_field(row, "score_second"),
                })
                .collect()
        })
        .unwrap_or_default()
}

pub fn parse_server(raw: &str) -> Option<PlayerSide> {
    match raw {
        "First Player" => Some(PlayerSide::First),
        "Second Player" => Some(PlayerSide::Second),
        _ => None,
    }
}

/// Combine the upstream date and time fields into an instant, only when
/// both are present. The feed sends naive local wall-clock values.
pub fn parse_start_time(date: &str, time: &str) -> Option<DateTime<Utc>> {
    if date.is_empty() || time.is_empty() {
        return None;
    }

    let combined = format!("{date}T{time}:00");
    NaiveDateTime::parse_from_str(&combined, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Build a `MatchSummary` from one raw livescore or fixture row.
/// Total over any input shape; missing fields get defaults.
pub fn parse_match_row(row: &Value) -> MatchSummary {
    let round = str_field(row, "tournament_round");

    MatchSummary {
        id: key_field(row, "event_key"),
        tour: map_tour(&str_field(row, "event_type_type")),
        tournament: str_field(row, "tournament_name"),
        round: (!round.is_empty()).then_some(round),
        start_time: parse_start_time(&str_field(row, "event_date"), &str_field(row, "event_time")),
        status: derive_status(&str_field(row, "event_status"), &str_field(row, "event_live")),
        player1: PlayerRef {
            key: key_field(row, "first_player_key"),
            name: str_field(row, "event_first_player"),
        },
        player2: PlayerRef {
            key: key_field(row, "second_player_key"),
            name: str_field(row, "event_second_player"),
        },
        sets: parse_sets(row.get("scores")),
        current_game: opt_str_field(row, "event_game_result"),
        server: parse_server(&str_field(row, "event_serve")),
    }
}

// --- Field Helpers ---

pub(crate) fn str_field(row: &Value, name: &str) -> String {
    row.get(name)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

pub(crate) fn opt_str_field(row: &Value, name: &str) -> Option<String> {
    let value = str_field(row, name);
    (!value.is_empty()).then_some(value)
}

/// Identifier fields arrive as either JSON strings or numbers
pub(crate) fn key_field(row: &Value, name: &str) -> String {
    match row.get(name) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn numeric_field(row: &Value, name: &str) -> u32 {
    match row.get(name) {
        Some(Value::Number(n)) => n.as_u64().unwrap_or(0) as u32,
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_map_tour() {
        assert_eq!(map_tour("Wta Singles"), Tour::Wta);
        assert_eq!(map_tour("WTA Doubles"), Tour::Wta);
        assert_eq!(map_tour("Atp Singles"), Tour::Atp);
        assert_eq!(map_tour("challenger ATP"), Tour::Atp);
        assert_eq!(map_tour("Itf Men"), Tour::Other);
        assert_eq!(map_tour(""), Tour::Other);
    }

    #[test]
    fn test_derive_status() {
        assert_eq!(derive_status("Finished", "1"), MatchStatus::Completed);
        assert_eq!(derive_status("Finished", ""), MatchStatus::Completed);
        assert_eq!(derive_status("Pending", "1"), MatchStatus::InProgress);
        assert_eq!(derive_status("", "0"), MatchStatus::NotStarted);
        assert_eq!(
            derive_status("Postponed", "0"),
            MatchStatus::Other("Postponed".to_string())
        );
    }

    #[test]
    fn test_parse_sets_preserves_order() {
        let scores = json!([
            {"score_first": "6", "score_second": "4"},
            {"score_first": "3", "score_second": "6"},
        ]);

        let sets = parse_sets(Some(&scores));

        assert_eq!(sets, vec![SetScore { p1: 6, p2: 4 }, SetScore { p1: 3, p2: 6 }]);
    }

    #[test]
    fn test_parse_sets_defaults_non_numeric_to_zero() {
        let scores = json!([{"score_first": "", "score_second": "abc"}]);

        assert_eq!(parse_sets(Some(&scores)), vec![SetScore { p1: 0, p2: 0 }]);
        assert!(parse_sets(None).is_empty());
    }

    #[test]
    fn test_parse_server() {
        assert_eq!(parse_server("First Player"), Some(PlayerSide::First));
        assert_eq!(parse_server("Second Player"), Some(PlayerSide::Second));
        assert_eq!(parse_server(""), None);
        assert_eq!(parse_server("Third Player"), None);
    }

    #[test]
    fn test_parse_start_time_requires_both_fields() {
        let parsed = parse_start_time("2025-06-01", "14:30").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2025-06-01T14:30:00+00:00");

        assert!(parse_start_time("2025-06-01", "").is_none());
        assert!(parse_start_time("", "14:30").is_none());
    }

    #[test]
    fn test_parse_match_row() {
        let row = json!({
            "event_key": 177939,
            "event_date": "2025-06-01",
            "event_time": "11:00",
            "event_first_player": "A. Zverev",
            "first_player_key": 985,
            "event_second_player": "C. Alcaraz",
            "second_player_key": 1098,
            "event_status": "Set 2",
            "event_live": "1",
            "event_type_type": "Atp Singles",
            "tournament_name": "Roland Garros",
            "tournament_round": "Final",
            "event_serve": "Second Player",
            "event_game_result": "30 - 15",
            "scores": [{"score_first": "4", "score_second": "6"}],
        });

        let summary = parse_match_row(&row);

        assert_eq!(summary.id, "177939");
        assert_eq!(summary.tour, Tour::Atp);
        assert_eq!(summary.tournament, "Roland Garros");
        assert_eq!(summary.round.as_deref(), Some("Final"));
        assert_eq!(summary.status, MatchStatus::InProgress);
        assert_eq!(summary.player1.key, "985");
        assert_eq!(summary.player2.name, "C. Alcaraz");
        assert_eq!(summary.sets, vec![SetScore { p1: 4, p2: 6 }]);
        assert_eq!(summary.current_game.as_deref(), Some("30 - 15"));
        assert_eq!(summary.server, Some(PlayerSide::Second));
        assert!(summary.start_time.is_some());
    }

    #[test]
    fn test_parse_match_row_empty_input() {
        let summary = parse_match_row(&json!({}));

        assert_eq!(summary.id, "");
        assert_eq!(summary.tour, Tour::Other);
        assert_eq!(summary.status, MatchStatus::NotStarted);
        assert!(summary.round.is_none());
        assert!(summary.start_time.is_none());
        assert!(summary.sets.is_empty());
        assert!(summary.server.is_none());
    }
}
