use super::service::SearchService;
use super::types::PopularKeyword;
use crate::api::types::{ApiResponse, ErrorResponse, PageParams};
use crate::query::types::QueryError;
use crate::searchlog::service::SearchLogService;

use axum::extract::{Extension, Query};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    /// Free-text query, e.g. `java|spring` or `programming -beginner`.
    pub q: Option<String>,
    pub page: Option<usize>,
    pub size: Option<usize>,
    pub sort: Option<String>,
}

impl SearchParams {
    fn page_params(&self) -> PageParams {
        PageParams {
            page: self.page,
            size: self.size,
            sort: self.sort.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PopularParams {
    pub limit: Option<usize>,
    pub min_count: Option<u64>,
}

/// `GET /api/search/books` — paginated keyword search.
pub async fn handle_search_books(
    Query(params): Query<SearchParams>,
    Extension(service): Extension<Arc<SearchService>>,
) -> Response {
    let page = match params.page_params().to_page_request() {
        Ok(page) => page,
        Err(e) => return e.into_response(),
    };

    match service.search(params.q.as_deref(), &page) {
        Ok((results, _strategy)) => Json(ApiResponse::success(results)).into_response(),
        Err(e) => query_error_response(&params.q, e),
    }
}

/// `GET /api/search/books/detailed` — search plus timing, result count and
/// the strategy that ran.
pub async fn handle_search_books_detailed(
    Query(params): Query<SearchParams>,
    Extension(service): Extension<Arc<SearchService>>,
) -> Response {
    let page = match params.page_params().to_page_request() {
        Ok(page) => page,
        Err(e) => return e.into_response(),
    };

    match service.search_with_metadata(params.q.as_deref(), &page) {
        Ok(result) => Json(ApiResponse::success(result)).into_response(),
        Err(e) => query_error_response(&params.q, e),
    }
}

/// `GET /api/search/popular` — most-searched keywords.
pub async fn handle_popular_keywords(
    Query(params): Query<PopularParams>,
    Extension(search_log): Extension<Arc<SearchLogService>>,
) -> Response {
    let limit = params.limit.unwrap_or(10);
    if limit == 0 {
        return ErrorResponse::bad_request("limit must be at least 1").into_response();
    }

    let keywords: Vec<PopularKeyword> = match params.min_count {
        Some(min_count) => search_log.popular_keywords(min_count, limit),
        None => search_log.top_keywords(limit),
    }
    .into_iter()
    .map(PopularKeyword::from)
    .collect();

    Json(ApiResponse::success(keywords)).into_response()
}

fn query_error_response(query: &Option<String>, error: QueryError) -> Response {
    tracing::debug!(query = query.as_deref(), "Rejected search query: {}", error);
    match error {
        QueryError::TooManyKeywords(_) => {
            ErrorResponse::bad_request(error.to_string()).into_response()
        }
    }
}
