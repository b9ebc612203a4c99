//! Query Interpretation Module
//!
//! The decision core of the service: turns a raw query string into a
//! structured intent and picks which retrieval operation satisfies it.
//!
//! ## Query language
//! - `term` — results must contain the term in title or author.
//! - `a|b` (or `a b`) — results must contain either term; at most two
//!   include terms are accepted.
//! - `-term` — results containing the term are disqualified.
//!
//! ## Submodules
//! - **`parser`**: Raw string → [`types::ParsedQuery`].
//! - **`plan`**: The five retrieval behaviors and their resolution.
//! - **`types`**: The parsed-query value and parse errors.
//!
//! Everything here is stateless and side-effect free; the only external
//! call is the single store invocation made by a resolved plan.

pub mod parser;
pub mod plan;
pub mod types;
