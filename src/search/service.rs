use super::types::{SearchMetadata, SearchResultWithMetadata};
use crate::catalog::store::BookStore;
use crate::catalog::types::{Book, Page, PageRequest};
use crate::query::parser;
use crate::query::plan;
use crate::query::types::QueryError;
use crate::searchlog::service::SearchLogService;

use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;

/// Ties the query core to its collaborators: parses the raw query,
/// resolves it to a plan, runs it against the store, and records the
/// keyword for popularity tracking.
pub struct SearchService {
    store: Arc<BookStore>,
    search_log: Arc<SearchLogService>,
}

impl SearchService {
    pub fn new(store: Arc<BookStore>, search_log: Arc<SearchLogService>) -> Self {
        SearchService { store, search_log }
    }

    /// Parses and resolves `raw`, returning the result page and the name
    /// of the plan that produced it. A missing query behaves like an
    /// empty one.
    ///
    /// The parsed include terms are what lands in the search log, so
    /// operator syntax (`|`, `-term`) never leaks into the popularity
    /// ranking.
    pub fn search(
        &self,
        raw: Option<&str>,
        page: &PageRequest,
    ) -> Result<(Page<Book>, &'static str), QueryError> {
        let parsed = parser::parse(raw.unwrap_or_default())?;
        let (results, strategy) = plan::resolve(&parsed, &self.store, page);

        for term in parsed.include_terms() {
            self.search_log.record(term);
        }

        tracing::debug!(
            strategy,
            total = results.total_elements,
            "Resolved search query"
        );
        Ok((results, strategy))
    }

    /// Like [`search`](Self::search), additionally reporting timing and
    /// result counts for the detailed endpoint.
    pub fn search_with_metadata(
        &self,
        raw: Option<&str>,
        page: &PageRequest,
    ) -> Result<SearchResultWithMetadata, QueryError> {
        let started = Instant::now();
        let (books, strategy) = self.search(raw, page)?;

        let metadata = SearchMetadata {
            query: raw.map(str::to_string),
            strategy: strategy.to_string(),
            execution_time_ms: started.elapsed().as_millis() as u64,
            total_results: books.total_elements,
            searched_at: Utc::now(),
        };

        Ok(SearchResultWithMetadata { books, metadata })
    }
}
