use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::{Article, Category};

/// Key identifying one cached query: a category browse or a free-text search.
/// A non-empty query always wins over the category; the two never combine.
pub fn cache_key(category: Category, query: &str) -> String {
    if query.is_empty() {
        format!("category-{}", category)
    } else {
        format!("search-{}", query)
    }
}

/// Result of the last successful fetch for one cache key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub headline: Option<Article>,
    pub articles: Vec<Article>,
    pub timestamp_ms: i64,
}

impl CacheEntry {
    pub fn age_ms(&self, now_ms: i64) -> i64 {
        now_ms - self.timestamp_ms
    }

    pub fn is_fresh(&self, now_ms: i64, window: Duration) -> bool {
        self.age_ms(now_ms) < window.as_millis() as i64
    }
}

/// The full query cache, serialized as a plain key/entry map so the snapshot
/// on disk reads as `{"category-general": {...}, "search-rust": {...}}`.
///
/// Entries are only ever overwritten by a refetch of the same key; there is
/// no eviction, so the map grows with the number of distinct search terms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewsCache {
    entries: HashMap<String, CacheEntry>,
}

impl NewsCache {
    pub fn get(&self, key: &str) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: String, entry: CacheEntry) {
        self.entries.insert(key, entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &CacheEntry)> {
        self.entries.iter()
    }
}
