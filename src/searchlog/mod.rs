//! Search Log Module
//!
//! Tracks how often each keyword is searched so the API can report popular
//! search terms. Purely in-memory and concurrent; counts reset on restart.

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;
