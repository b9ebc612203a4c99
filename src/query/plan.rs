use super::types::ParsedQuery;
use crate::catalog::store::BookStore;
use crate::catalog::types::{Book, Page, PageRequest};

/// The five retrieval behaviors, one per parsed-query shape.
///
/// The original design iterated a list of strategy objects and picked the
/// highest-priority one whose predicate matched, failing at runtime when
/// none did. Here classification is a single exhaustive `match`, so every
/// query shape the parser can produce maps to exactly one plan and the
/// "no strategy matched" failure mode cannot exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPlan {
    /// No terms at all: the whole catalog, paginated.
    Empty,
    /// One include term, nothing excluded.
    SingleTerm { term: String },
    /// Two include terms, nothing excluded; results match either.
    Or { first: String, second: String },
    /// Only exclusions: rows free of every excluded term.
    Not { excluded: Vec<String> },
    /// Inclusions and exclusions combined.
    Complex {
        first: String,
        second: Option<String>,
        excluded: Vec<String>,
    },
}

impl SearchPlan {
    /// Classifies a parsed query. Total over everything the parser can
    /// produce; the shapes are pairwise exclusive by construction.
    pub fn for_query(query: &ParsedQuery) -> SearchPlan {
        match (query.include_terms(), query.exclude_terms()) {
            ([], []) => SearchPlan::Empty,
            ([term], []) => SearchPlan::SingleTerm { term: term.clone() },
            // The parser caps include terms at two.
            ([first, second, ..], []) => SearchPlan::Or {
                first: first.clone(),
                second: second.clone(),
            },
            ([], excluded) => SearchPlan::Not {
                excluded: excluded.to_vec(),
            },
            ([first, rest @ ..], excluded) => SearchPlan::Complex {
                first: first.clone(),
                second: rest.first().cloned(),
                excluded: excluded.to_vec(),
            },
        }
    }

    /// Runs the plan against the store with the caller's pagination. The
    /// store owns all matching semantics; nothing is filtered here.
    pub fn execute(&self, store: &BookStore, page: &PageRequest) -> Page<Book> {
        match self {
            SearchPlan::Empty => store.find_all(page),
            SearchPlan::SingleTerm { term } => store.find_by_term(term, page),
            SearchPlan::Or { first, second } => store.find_by_terms_or(first, second, page),
            SearchPlan::Not { excluded } => store.find_excluding(excluded, page),
            SearchPlan::Complex {
                first,
                second: Some(second),
                excluded,
            } => store.find_by_terms_or_excluding(first, second, excluded, page),
            SearchPlan::Complex {
                first,
                second: None,
                excluded,
            } => store.find_by_term_excluding(first, excluded, page),
        }
    }

    /// Stable label surfaced in response metadata.
    pub fn name(&self) -> &'static str {
        match self {
            SearchPlan::Empty => "EMPTY_SEARCH",
            SearchPlan::SingleTerm { .. } => "SINGLE_TERM_SEARCH",
            SearchPlan::Or { .. } => "OR_SEARCH",
            SearchPlan::Not { .. } => "NOT_SEARCH",
            SearchPlan::Complex { .. } => "COMPLEX_SEARCH",
        }
    }

    /// Kept from the original dispatch design as a regression guard:
    /// priorities must stay pairwise distinct if plans are ever added.
    pub fn priority(&self) -> u8 {
        match self {
            SearchPlan::Empty => 0,
            SearchPlan::SingleTerm { .. } => 1,
            SearchPlan::Or { .. } => 2,
            SearchPlan::Not { .. } => 3,
            SearchPlan::Complex { .. } => 4,
        }
    }
}

/// Classifies `query`, executes the selected plan, and returns the page
/// together with the plan's name for observability.
pub fn resolve(
    query: &ParsedQuery,
    store: &BookStore,
    page: &PageRequest,
) -> (Page<Book>, &'static str) {
    let plan = SearchPlan::for_query(query);
    let results = plan.execute(store, page);
    (results, plan.name())
}
