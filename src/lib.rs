//! Book Search Service Library
//!
//! This library crate defines the modules that make up the catalog-search
//! REST service. It serves as the foundation for the binary executable
//! (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of four subsystems plus shared API types:
//!
//! - **`query`**: The decision core. Parses raw query strings into a
//!   structured intent (include terms, exclude terms) and resolves each
//!   intent to exactly one retrieval plan via exhaustive classification.
//! - **`catalog`**: The book store the plans execute against. Owns matching
//!   semantics, sorting and pagination; exposes a fixed set of
//!   parameterized retrieval operations.
//! - **`search`**: The service layer tying parser, plans and store
//!   together, with execution metadata for observability.
//! - **`searchlog`**: Keyword-frequency tracking behind the
//!   popular-searches endpoint.
//! - **`api`**: Response envelopes and pagination parsing shared by the
//!   HTTP handlers.

pub mod api;
pub mod catalog;
pub mod query;
pub mod search;
pub mod searchlog;
