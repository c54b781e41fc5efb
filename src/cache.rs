use crate::analysis::keys::MatchupKey;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

/// Raw result of one successful matchup page fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupRecord {
    pub summary: String,
    pub games: Option<u64>,
}

/// Session-long, append-only map from matchup key to fetched record.
///
/// A key is either absent or bound to a complete record; existing bindings are
/// never replaced and nothing is evicted.
#[derive(Debug, Default)]
pub struct MatchupCache {
    records: RwLock<HashMap<MatchupKey, MatchupRecord>>,
}

impl MatchupCache {
    pub fn new() -> Self {
        MatchupCache::default()
    }

    /// Binds `record` to `key` unless the key is already present.
    /// Returns whether the record was stored.
    pub fn insert_once(&self, key: MatchupKey, record: MatchupRecord) -> bool {
        let mut records = self.records.write().unwrap_or_else(|e| e.into_inner());
        if records.contains_key(&key) {
            return false;
        }
        records.insert(key, record);
        true
    }

    pub fn get(&self, key: &MatchupKey) -> Option<MatchupRecord> {
        self.records
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    pub fn contains(&self, key: &MatchupKey) -> bool {
        self.records
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .contains_key(key)
    }

    /// How many of `keys` already have a record.
    pub fn count_present(&self, keys: &[MatchupKey]) -> usize {
        let records = self.records.read().unwrap_or_else(|e| e.into_inner());
        keys.iter().filter(|k| records.contains_key(*k)).count()
    }

    /// Absent keys of `keys`, each once, in first-seen order.
    pub fn missing(&self, keys: &[MatchupKey]) -> Vec<MatchupKey> {
        let records = self.records.read().unwrap_or_else(|e| e.into_inner());
        let mut seen = HashSet::new();
        keys.iter()
            .filter(|k| !records.contains_key(*k))
            .filter(|k| seen.insert(*k))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{Lane, Tier};

    fn key(own: &str) -> MatchupKey {
        MatchupKey::new(own, "Darius", Lane::Top, Tier::DiamondPlus)
    }

    fn record(summary: &str) -> MatchupRecord {
        MatchupRecord {
            summary: summary.to_string(),
            games: Some(10),
        }
    }

    #[test]
    fn first_write_wins() {
        let cache = MatchupCache::new();
        assert!(cache.insert_once(key("Garen"), record("first")));
        assert!(!cache.insert_once(key("garen"), record("second")));
        assert_eq!(cache.get(&key("Garen")).unwrap().summary, "first");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn reports_missing_keys_in_order() {
        let cache = MatchupCache::new();
        cache.insert_once(key("Aatrox"), record("a"));
        let keys = vec![key("Garen"), key("Aatrox"), key("Sett")];

        assert_eq!(cache.count_present(&keys), 1);
        assert_eq!(cache.missing(&keys), vec![key("Garen"), key("Sett")]);
        assert!(cache.contains(&key("Aatrox")));
        assert!(!cache.is_empty());
    }

    #[test]
    fn missing_lists_repeated_keys_once() {
        let cache = MatchupCache::new();
        let keys = vec![key("MonkeyKing"), key("Garen"), key("Wukong")];
        assert_eq!(cache.missing(&keys), vec![key("Wukong"), key("Garen")]);
    }
}
