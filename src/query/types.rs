use thiserror::Error;

/// Structured intent extracted from a raw query string.
///
/// Immutable once built: the parser constructs one per incoming query and
/// the planner consumes it. Equality is structural only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    include_terms: Vec<String>,
    exclude_terms: Vec<String>,
}

impl ParsedQuery {
    /// Invariant upheld by the parser: at most two include terms. Exclude
    /// terms are unbounded and kept in order of appearance.
    pub(super) fn new(include_terms: Vec<String>, exclude_terms: Vec<String>) -> Self {
        ParsedQuery {
            include_terms,
            exclude_terms,
        }
    }

    pub fn empty() -> Self {
        ParsedQuery::new(Vec::new(), Vec::new())
    }

    pub fn include_terms(&self) -> &[String] {
        &self.include_terms
    }

    pub fn exclude_terms(&self) -> &[String] {
        &self.exclude_terms
    }

    pub fn is_empty(&self) -> bool {
        self.include_terms.is_empty() && self.exclude_terms.is_empty()
    }

    pub fn has_include_terms(&self) -> bool {
        !self.include_terms.is_empty()
    }

    pub fn has_exclude_terms(&self) -> bool {
        !self.exclude_terms.is_empty()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// The query language supports at most two include terms; a third is a
    /// client error, recoverable by reformulating the query.
    #[error("search supports at most 2 keywords, got {0}")]
    TooManyKeywords(usize),
}
