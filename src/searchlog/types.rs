use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregated search history for one normalized keyword.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchLogEntry {
    pub keyword: String,
    pub search_count: u64,
    pub last_searched_at: DateTime<Utc>,
}
