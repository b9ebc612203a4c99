use super::types::SearchLogEntry;

use chrono::Utc;
use dashmap::DashMap;

/// Concurrent keyword-frequency tracker backing the popular-searches
/// endpoint. Keywords are normalized (trimmed, lowercased) before
/// counting, so "Java" and "java " aggregate into one entry.
pub struct SearchLogService {
    entries: DashMap<String, SearchLogEntry>,
}

impl Default for SearchLogService {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchLogService {
    pub fn new() -> Self {
        SearchLogService {
            entries: DashMap::new(),
        }
    }

    /// Records one search for `keyword`. Blank keywords are ignored.
    pub fn record(&self, keyword: &str) {
        let normalized = keyword.trim().to_lowercase();
        if normalized.is_empty() {
            return;
        }

        let now = Utc::now();
        self.entries
            .entry(normalized.clone())
            .and_modify(|entry| {
                entry.search_count += 1;
                entry.last_searched_at = now;
            })
            .or_insert(SearchLogEntry {
                keyword: normalized,
                search_count: 1,
                last_searched_at: now,
            });
    }

    /// The most-searched keywords, count descending, most recent first on
    /// ties.
    pub fn top_keywords(&self, limit: usize) -> Vec<SearchLogEntry> {
        self.ranked(limit, 1)
    }

    /// Like [`top_keywords`](Self::top_keywords) but only keywords searched
    /// at least `min_count` times.
    pub fn popular_keywords(&self, min_count: u64, limit: usize) -> Vec<SearchLogEntry> {
        self.ranked(limit, min_count)
    }

    fn ranked(&self, limit: usize, min_count: u64) -> Vec<SearchLogEntry> {
        let mut entries: Vec<SearchLogEntry> = self
            .entries
            .iter()
            .filter(|entry| entry.search_count >= min_count)
            .map(|entry| entry.clone())
            .collect();

        entries.sort_by(|a, b| {
            b.search_count
                .cmp(&a.search_count)
                .then(b.last_searched_at.cmp(&a.last_searched_at))
                .then(a.keyword.cmp(&b.keyword))
        });
        entries.truncate(limit);
        entries
    }
}
