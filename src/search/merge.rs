// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ordered, deduplicated merging of semantic and keyword results.
//!
//! A Surah should appear at most once in the result list, and when both
//! sources found it, the semantic service's explanation is the one users see.
//!
//! `ResultMerger` makes that priority structural: it can only be constructed
//! from the semantic list, and keyword matches can only be appended after.
//! There is no way to put a keyword result ahead of a semantic one.
//!
//! **Invariants**:
//! - Each `surah_id` appears at most once; first occurrence wins.
//! - Semantic results keep their original relative order and come first.
//! - Keyword results follow in their own rank order.
//! - Output depends only on input order, never on hash iteration order.

use crate::config::DEFAULT_REASON_VERSE_LIMIT;
use crate::types::{KeywordMatch, SearchResult, SemanticHit, SurahId};
use std::collections::HashSet;

/// Reason prefix for keyword results that matched verse text.
pub const VERSE_REASON_PREFIX: &str = "Contains matching verses: ";

/// Reason for keyword results that only matched Surah metadata.
pub const NAME_MATCH_REASON: &str = "Surah name or meaning matches";

/// Marker appended when more verses matched than the reason lists.
pub const MORE_VERSES_MARKER: &str = "...";

/// Build the human-readable reason for a keyword match.
///
/// Lists at most `limit` verse numbers, then `...` if more matched:
/// `"Contains matching verses: 12, 45, 67..."`.
pub fn keyword_reason(matched: &KeywordMatch, limit: usize) -> String {
    if matched.verse_numbers.is_empty() {
        return NAME_MATCH_REASON.to_string();
    }

    let listed = matched
        .verse_numbers
        .iter()
        .take(limit)
        .map(u16::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    let mut reason = format!("{}{}", VERSE_REASON_PREFIX, listed);
    if matched.verse_numbers.len() > limit {
        reason.push_str(MORE_VERSES_MARKER);
    }
    reason
}

/// Order-preserving merger keyed on `surah_id` only.
///
/// # Example
///
/// ```ignore
/// let mut merger = ResultMerger::from_semantic(semantic_hits);
/// merger.append_keyword(keyword_matches);
/// let results = merger.into_results();
/// ```
#[derive(Debug, Clone)]
pub struct ResultMerger {
    /// Membership only. Never iterated, so hash order cannot leak into output.
    seen: HashSet<SurahId>,
    results: Vec<SearchResult>,
    verse_limit: usize,
}

impl ResultMerger {
    /// Start a merge from the semantic results.
    pub fn from_semantic(hits: impl IntoIterator<Item = SemanticHit>) -> Self {
        Self::from_semantic_with_limit(hits, DEFAULT_REASON_VERSE_LIMIT)
    }

    /// Start a merge, listing at most `verse_limit` verse numbers in
    /// synthesized keyword reasons.
    pub fn from_semantic_with_limit(
        hits: impl IntoIterator<Item = SemanticHit>,
        verse_limit: usize,
    ) -> Self {
        let mut merger = Self {
            seen: HashSet::new(),
            results: Vec::new(),
            verse_limit,
        };
        for hit in hits {
            if merger.seen.insert(hit.surah_id) {
                merger.results.push(SearchResult::Semantic {
                    surah_id: hit.surah_id,
                    reason: hit.reason,
                    verse_ref: hit.verse_ref,
                });
            }
        }
        merger
    }

    /// Append keyword matches not already present, in the given order.
    pub fn append_keyword(&mut self, matches: impl IntoIterator<Item = KeywordMatch>) {
        for matched in matches {
            if self.seen.contains(&matched.surah_id) {
                continue;
            }
            self.seen.insert(matched.surah_id);
            let reason = keyword_reason(&matched, self.verse_limit);
            self.results.push(SearchResult::Keyword {
                surah_id: matched.surah_id,
                verse_numbers: matched.verse_numbers,
                reason,
            });
        }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn contains(&self, surah_id: SurahId) -> bool {
        self.seen.contains(&surah_id)
    }

    pub fn into_results(self) -> Vec<SearchResult> {
        self.results
    }
}

/// Merge both sources in one call.
pub fn merge_results(semantic: Vec<SemanticHit>, keyword: Vec<KeywordMatch>) -> Vec<SearchResult> {
    let mut merger = ResultMerger::from_semantic(semantic);
    merger.append_keyword(keyword);
    merger.into_results()
}
