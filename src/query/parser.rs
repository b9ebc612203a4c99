use super::types::{ParsedQuery, QueryError};

use once_cell::sync::Lazy;
use regex::Regex;

/// A `-` immediately followed by a run of non-whitespace, non-`-`
/// characters marks an exclusion, e.g. `-beginner`.
static EXCLUDE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"-([^\s-]+)").unwrap());

const OR_SEPARATOR: char = '|';

/// Turns a raw query string into a [`ParsedQuery`].
///
/// The grammar, applied left to right over the trimmed input:
/// 1. Blank input, or input that is exactly `-` or `|`, parses to the
///    empty query.
/// 2. Every `-token` occurrence becomes one exclude term, in order of
///    appearance, and is stripped from the string.
/// 3. The remainder splits on `|` into include terms (blanks dropped).
/// 4. If that yields a single term containing whitespace, the term is
///    re-split on whitespace instead, so `"java spring"` means the same
///    as `"java|spring"`. An explicit `|` wins: `"a|b c"` stays
///    `["a", "b c"]` while `"a b|c"` stays `["a b", "c"]`.
/// 5. More than two include terms is [`QueryError::TooManyKeywords`].
///
/// No case normalization happens here; matching downstream is
/// case-preserving.
pub fn parse(raw: &str) -> Result<ParsedQuery, QueryError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "-" || trimmed == "|" {
        return Ok(ParsedQuery::empty());
    }

    let exclude_terms = extract_exclude_terms(trimmed);
    let include_query = EXCLUDE_PATTERN.replace_all(trimmed, "").trim().to_string();
    let include_terms = extract_include_terms(&include_query);

    if include_terms.len() > 2 {
        return Err(QueryError::TooManyKeywords(include_terms.len()));
    }

    Ok(ParsedQuery::new(include_terms, exclude_terms))
}

fn extract_exclude_terms(query: &str) -> Vec<String> {
    EXCLUDE_PATTERN
        .captures_iter(query)
        .filter_map(|captures| {
            let term = captures[1].trim();
            (!term.is_empty()).then(|| term.to_string())
        })
        .collect()
}

fn extract_include_terms(include_query: &str) -> Vec<String> {
    if include_query.trim().is_empty() {
        return Vec::new();
    }

    let mut terms: Vec<String> = include_query
        .split(OR_SEPARATOR)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect();

    // A lone piece with internal whitespace is treated as an implicit OR.
    if terms.len() == 1 && terms[0].split_whitespace().count() > 1 {
        terms = terms[0].split_whitespace().map(str::to_string).collect();
    }

    terms
}
