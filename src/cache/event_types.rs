use std::collections::HashMap;

use serde_json::Value;
use tokio::sync::Mutex;

use crate::api::parsers::match_row::key_field;

/// Memoized mapping from event type label (e.g. "Atp Singles") to its
/// upstream numeric key. Populated lazily on first use, never expires;
/// `replace` supports an explicit force-refresh.
#[derive(Default)]
pub struct EventTypeCache {
    entries: Mutex<Option<HashMap<String, i64>>>,
}

impl EventTypeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lookup(&self, label: &str) -> Option<i64> {
        let guard = self.entries.lock().await;
        guard.as_ref().and_then(|map| map.get(label).copied())
    }

    pub async fn is_populated(&self) -> bool {
        self.entries.lock().await.is_some()
    }

    /// First population wins; a later `store` against a populated cache
    /// is a no-op (a lost race means only a duplicate fetch happened)
    pub async fn store(&self, map: HashMap<String, i64>) {
        let mut guard = self.entries.lock().await;
        if guard.is_none() {
            *guard = Some(map);
        }
    }

    /// Overwrite unconditionally; used by force-refresh
    pub async fn replace(&self, map: HashMap<String, i64>) {
        *self.entries.lock().await = Some(map);
    }
}

/// Build the label -> key map from raw `get_events` rows
pub fn event_type_map(rows: &[Value]) -> HashMap<String, i64> {
    rows.iter()
        .filter_map(|row| {
            let label = row
                .get("event_type_type")
                .and_then(Value::as_str)?
                .to_string();
            let key = key_field(row, "event_type_key").parse().ok()?;
            Some((label, key))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_first_population_wins() {
        let cache = EventTypeCache::new();
        assert!(!cache.is_populated().await);
        assert_eq!(cache.lookup("Atp Singles").await, None);

        cache.store(HashMap::from([("Atp Singles".to_string(), 265)])).await;
        cache.store(HashMap::from([("Atp Singles".to_string(), 999)])).await;

        assert_eq!(cache.lookup("Atp Singles").await, Some(265));
    }

    #[tokio::test]
    async fn test_replace_overwrites() {
        let cache = EventTypeCache::new();
        cache.store(HashMap::from([("Atp Singles".to_string(), 265)])).await;

        cache.replace(HashMap::from([("Atp Singles".to_string(), 999)])).await;

        assert_eq!(cache.lookup("Atp Singles").await, Some(999));
    }

    #[test]
    fn test_event_type_map_from_rows() {
        let rows = vec![
            json!({"event_type_key": 265, "event_type_type": "Atp Singles"}),
            json!({"event_type_key": "266", "event_type_type": "Wta Singles"}),
            json!({"event_type_key": "not-a-number", "event_type_type": "Broken"}),
            json!({"event_type_key": 267}),
        ];

        let map = event_type_map(&rows);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("Atp Singles"), Some(&265));
        assert_eq!(map.get("Wta Singles"), Some(&266));
    }
}
