use crate::catalog::types::{Book, Page};
use crate::searchlog::types::SearchLogEntry;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Observability data attached to a detailed search response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchMetadata {
    /// The raw query as the client sent it (absent when none was given).
    pub query: Option<String>,
    /// Which retrieval plan ran: EMPTY_SEARCH, SINGLE_TERM_SEARCH,
    /// OR_SEARCH, NOT_SEARCH or COMPLEX_SEARCH.
    pub strategy: String,
    pub execution_time_ms: u64,
    pub total_results: usize,
    pub searched_at: DateTime<Utc>,
}

/// A result page bundled with its search metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultWithMetadata {
    pub books: Page<Book>,
    pub metadata: SearchMetadata,
}

/// Popular-keyword entry as exposed over the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopularKeyword {
    pub keyword: String,
    pub search_count: u64,
    pub last_searched_at: DateTime<Utc>,
}

impl From<SearchLogEntry> for PopularKeyword {
    fn from(entry: SearchLogEntry) -> Self {
        PopularKeyword {
            keyword: entry.keyword,
            search_count: entry.search_count,
            last_searched_at: entry.last_searched_at,
        }
    }
}
