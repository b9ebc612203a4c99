//! API Envelope Module
//!
//! Shared wire types for the HTTP surface: the success/error response
//! envelopes and query-string pagination parsing. Endpoint-specific DTOs
//! live next to their handlers.

pub mod types;
