// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared utilities for search modules.
//!
//! Query parsing lives here because both the keyword matcher and the
//! coordination layer need to agree on what an "empty" query is.

use crate::utils::normalize;

/// Split a normalized query into keyword terms.
///
/// Separators are slashes, whitespace and commas, so a chip selection like
/// `"sad / lonely"` becomes two terms. Terms shorter than `min_len`
/// characters are dropped; if none survive, the whole query is the only term.
///
/// # Example
///
/// ```ignore
/// let terms = parse_terms("patience, gratitude / mercy", 3);
/// assert_eq!(terms, vec!["patience", "gratitude", "mercy"]);
/// ```
pub fn parse_terms(normalized: &str, min_len: usize) -> Vec<String> {
    let terms: Vec<String> = normalized
        .split(|c: char| c == '/' || c == ',' || c.is_whitespace())
        .filter(|t| t.chars().count() >= min_len)
        .map(str::to_string)
        .collect();

    if terms.is_empty() && !normalized.is_empty() {
        vec![normalized.to_string()]
    } else {
        terms
    }
}

/// The Surah number a query names, if it is nothing but a number.
pub fn parse_surah_number(normalized: &str) -> Option<u16> {
    normalized.parse().ok()
}

/// True if the query has no searchable content.
pub fn is_blank(query: &str) -> bool {
    normalize(query).is_empty()
}
