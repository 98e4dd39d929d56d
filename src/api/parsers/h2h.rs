use serde_json::Value;

use crate::api::parsers::match_row::{key_field, str_field};
use crate::domain::{H2HItem, PlayerSide};

/// Map the `get_H2H` result into historical match summaries.
/// The upstream sometimes wraps the payload in an array whose first
/// element holds the `H2H` list; both shapes are accepted.
pub fn parse_h2h(result: &Value) -> Vec<H2HItem> {
    let wrapper = result
        .as_array()
        .and_then(|rows| rows.first())
        .unwrap_or(result);

    let Some(list) = wrapper.get("H2H").and_then(Value::as_array) else {
        return Vec::new();
    };

    list.iter().map(parse_h2h_row).collect()
}

fn parse_h2h_row(row: &Value) -> H2HItem {
    let time = opt_time(row);

    H2HItem {
        match_key: key_field(row, "event_key"),
        date: format!("{}T{}:00", str_field(row, "event_date"), time),
        tournament: str_field(row, "tournament_name"),
        round: str_field(row, "tournament_round"),
        winner: parse_winner(&str_field(row, "event_winner")),
        score: str_field(row, "event_final_result"),
    }
}

fn opt_time(row: &Value) -> String {
    let time = str_field(row, "event_time");
    if time.is_empty() {
        "00:00".to_string()
    } else {
        time
    }
}

fn parse_winner(raw: &str) -> PlayerSide {
    if raw == "First Player" {
        PlayerSide::First
    } else {
        PlayerSide::Second
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_h2h() -> Value {
        json!([{
            "H2H": [
                {
                    "event_key": "11223",
                    "event_date": "2024-01-18",
                    "event_time": "09:30",
                    "tournament_name": "Australian Open",
                    "tournament_round": "Semi-final",
                    "event_winner": "First Player",
                    "event_final_result": "3 - 1",
                },
                {
                    "event_key": "11224",
                    "event_date": "2023-06-08",
                    "tournament_name": "Roland Garros",
                    "tournament_round": "",
                    "event_winner": "Second Player",
                    "event_final_result": "0 - 3",
                },
            ]
        }])
    }

    #[test]
    fn test_parse_h2h_unwraps_nested_result() {
        let items = parse_h2h(&sample_h2h());

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].match_key, "11223");
        assert_eq!(items[0].date, "2024-01-18T09:30:00");
        assert_eq!(items[0].winner, PlayerSide::First);
        assert_eq!(items[0].score, "3 - 1");
    }

    #[test]
    fn test_parse_h2h_defaults_missing_time_and_winner() {
        let items = parse_h2h(&sample_h2h());

        // Missing event_time falls back to midnight
        assert_eq!(items[1].date, "2023-06-08T00:00:00");
        // Anything but "First Player" counts as a second-player win
        assert_eq!(items[1].winner, PlayerSide::Second);
    }

    #[test]
    fn test_parse_h2h_empty_result() {
        assert!(parse_h2h(&json!([])).is_empty());
        assert!(parse_h2h(&json!({})).is_empty());
        assert!(parse_h2h(&json!(null)).is_empty());
    }
}
