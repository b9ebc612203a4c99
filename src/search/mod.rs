//! Search Service Module
//!
//! The service layer over the query core: wires the parser and plan
//! resolution to the catalog store, measures execution, records keywords
//! for popularity tracking, and exposes the search endpoints.
//!
//! ## Submodules
//! - **`service`**: Parse-then-resolve orchestration with metadata.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Response DTOs (metadata, popular keywords).

pub mod handlers;
pub mod service;
pub mod types;
