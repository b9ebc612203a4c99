//! Catalog Module
//!
//! The book store the search core runs against. It owns matching semantics
//! (case-preserving substring containment over title and author),
//! deduplication across OR branches, sorting and pagination bookkeeping.
//!
//! ## Submodules
//! - **`store`**: Concurrent in-memory store with the fixed set of
//!   parameterized retrieval operations.
//! - **`types`**: The `Book` record, pagination and sorting types.
//! - **`handlers`**: HTTP request handlers for catalog CRUD.
//! - **`seed`**: Sample-data loader run at startup.

pub mod handlers;
pub mod seed;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;
