use crate::catalog::types::{PageRequest, Sort, DEFAULT_PAGE_SIZE};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standard envelope for successful API responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub success: bool,
    pub message: String,
    pub data: T,
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        ApiResponse {
            status: StatusCode::OK.as_u16(),
            success: true,
            message: "Request processed successfully".to_string(),
            data,
            timestamp: Utc::now(),
        }
    }

    pub fn created(data: T) -> Self {
        ApiResponse {
            status: StatusCode::CREATED.as_u16(),
            success: true,
            message: "Resource created".to_string(),
            data,
            timestamp: Utc::now(),
        }
    }
}

/// Standard envelope for failures.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub error: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        ErrorResponse {
            status: status.as_u16(),
            error: status
                .canonical_reason()
                .unwrap_or("Unknown")
                .to_string(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ErrorResponse::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ErrorResponse::new(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ErrorResponse::new(StatusCode::CONFLICT, message)
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Pagination as it arrives on the query string: zero-based `page`,
/// `size`, and `sort` as `field` or `field,desc`.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<usize>,
    pub size: Option<usize>,
    pub sort: Option<String>,
}

impl PageParams {
    pub fn to_page_request(&self) -> Result<PageRequest, ErrorResponse> {
        let sort = match &self.sort {
            Some(raw) => Sort::parse(raw).map_err(ErrorResponse::bad_request)?,
            None => Sort::default(),
        };

        Ok(PageRequest::new(
            self.page.unwrap_or(0),
            self.size.unwrap_or(DEFAULT_PAGE_SIZE),
            sort,
        ))
    }
}
