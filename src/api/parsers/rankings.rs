use serde_json::Value;

use crate::domain::RankingItem;

// The standings endpoint is not consistent about field names across
// tours and vendor versions. Every fallback chain lives here and
// nowhere else.
const RANK_FIELDS: &[&str] = &["place", "rank", "standing_place"];
const KEY_FIELDS: &[&str] = &["player_key", "player_id"];
const NAME_FIELDS: &[&str] = &["player", "name", "player_fullname"];
const COUNTRY_FIELDS: &[&str] = &["country", "nationality"];
const POINTS_FIELDS: &[&str] = &["points", "player_points", "total_points"];
const PHOTO_FIELDS: &[&str] = &["player_logo", "photo", "image"];

/// Normalize raw standings rows into `RankingItem`s, sorted ascending
/// by rank. Total: every field has a default, so any row shape maps.
pub fn parse_ranking_rows(rows: &[Value]) -> Vec<RankingItem> {
    let mut items: Vec<RankingItem> = rows.iter().map(parse_ranking_row).collect();
    items.sort_by_key(|item| item.rank);
    items
}

fn parse_ranking_row(row: &Value) -> RankingItem {
    RankingItem {
        rank: first_numeric(row, RANK_FIELDS).unwrap_or(0) as u32,
        player_key: first_string(row, KEY_FIELDS).unwrap_or_default(),
        name: first_string(row, NAME_FIELDS).unwrap_or_default(),
        country: first_string(row, COUNTRY_FIELDS),
        points: first_numeric(row, POINTS_FIELDS),
        photo: first_string(row, PHOTO_FIELDS),
    }
}

/// First non-empty string value among the candidate field names.
/// Numbers are accepted and rendered as their decimal form.
fn first_string(row: &Value, names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| match row.get(*name) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// First parseable numeric value among the candidate field names;
/// accepts JSON numbers and numeric strings
fn first_numeric(row: &Value, names: &[&str]) -> Option<u64> {
    names.iter().find_map(|name| match row.get(*name) {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_rows() -> Vec<Value> {
        vec![
            json!({
                "standing_place": "3",
                "player_id": 742,
                "player_fullname": "C. Alcaraz",
                "nationality": "Spain",
                "total_points": "8805",
            }),
            json!({
                "place": 1,
                "player_key": "985",
                "player": "J. Sinner",
                "country": "Italy",
                "points": 11830,
                "player_logo": "https://example.com/sinner.png",
            }),
            json!({
                "name": "Unknown Entrant",
            }),
        ]
    }

    #[test]
    fn test_rankings_sorted_ascending_by_rank() {
        let items = parse_ranking_rows(&sample_rows());

        let ranks: Vec<u32> = items.iter().map(|i| i.rank).collect();
        assert_eq!(ranks, vec![0, 1, 3]);
    }

    #[test]
    fn test_rankings_field_fallbacks() {
        let items = parse_ranking_rows(&sample_rows());

        let sinner = &items[1];
        assert_eq!(sinner.player_key, "985");
        assert_eq!(sinner.name, "J. Sinner");
        assert_eq!(sinner.country.as_deref(), Some("Italy"));
        assert_eq!(sinner.points, Some(11830));
        assert_eq!(sinner.photo.as_deref(), Some("https://example.com/sinner.png"));

        let alcaraz = &items[2];
        assert_eq!(alcaraz.rank, 3);
        assert_eq!(alcaraz.player_key, "742");
        assert_eq!(alcaraz.name, "C. Alcaraz");
        assert_eq!(alcaraz.points, Some(8805));
    }

    #[test]
    fn test_rankings_defaults() {
        let items = parse_ranking_rows(&sample_rows());

        let unknown = &items[0];
        assert_eq!(unknown.rank, 0);
        assert_eq!(unknown.player_key, "");
        assert_eq!(unknown.name, "Unknown Entrant");
        assert!(unknown.country.is_none());
        assert!(unknown.points.is_none());
        assert!(unknown.photo.is_none());
    }

    #[test]
    fn test_rankings_idempotent_regardless_of_input_order() {
        let mut reversed = sample_rows();
        reversed.reverse();

        let once = parse_ranking_rows(&sample_rows());
        let twice = parse_ranking_rows(&sample_rows());
        let from_reversed = parse_ranking_rows(&reversed);

        assert_eq!(once, twice);
        assert_eq!(once, from_reversed);
    }
}
