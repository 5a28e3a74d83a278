// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Local keyword matching over verses and Surah metadata.
//!
//! Two entry points:
//!
//! - `match_keywords`: smart-mode keyword source. Scans every verse's
//!   normalized text for the query terms, plus Surah metadata. Ranked by how
//!   many verses matched.
//! - `filter_surahs`: literal mode. Metadata only, Surah order, no ranking.
//!
//! Both are pure functions over an already-loaded `Corpus`. An empty query
//! matches nothing; callers never get "everything" back by accident.

use crate::config::DEFAULT_MIN_TERM_LEN;
use crate::corpus::Corpus;
use crate::search::utils::{parse_surah_number, parse_terms};
use crate::types::{KeywordMatch, Surah};
use crate::utils::normalize;
use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Where smart mode gets its keyword matches from.
///
/// Any `Fn(&Corpus, &str, usize) -> Vec<KeywordMatch>` is a source, so
/// `match_keywords_with` plugs in as-is. Sources run on the blocking pool; a
/// panicking source counts as zero matches.
pub trait KeywordSource: Send + Sync {
    fn find(&self, corpus: &Corpus, query: &str, min_term_len: usize) -> Vec<KeywordMatch>;
}

impl<F> KeywordSource for F
where
    F: Fn(&Corpus, &str, usize) -> Vec<KeywordMatch> + Send + Sync,
{
    fn find(&self, corpus: &Corpus, query: &str, min_term_len: usize) -> Vec<KeywordMatch> {
        self(corpus, query, min_term_len)
    }
}

/// Keyword search with the default minimum term length.
pub fn match_keywords(corpus: &Corpus, query: &str) -> Vec<KeywordMatch> {
    match_keywords_with(corpus, query, DEFAULT_MIN_TERM_LEN)
}

/// Keyword search over verse text and Surah metadata.
///
/// A verse matches if any parsed term, or the full normalized query, is a
/// substring of its normalized text. A Surah matches if at least one verse
/// matched or its metadata matched.
///
/// Output is ordered by descending verse-match count, then ascending Surah id.
pub fn match_keywords_with(corpus: &Corpus, query: &str, min_term_len: usize) -> Vec<KeywordMatch> {
    let normalized = normalize(query);
    if normalized.is_empty() {
        return Vec::new();
    }

    let terms = parse_terms(&normalized, min_term_len);
    let number = parse_surah_number(&normalized);

    let scan = |surah: &Surah| -> Option<KeywordMatch> {
        let verse_numbers: Vec<u16> = corpus
            .searchable_verses(surah.id)
            .filter(|(_, text)| verse_matches(text, &terms, &normalized))
            .map(|(verse, _)| verse.verse_number)
            .collect();
        let name_matched = metadata_matches(surah, &normalized, number);

        if verse_numbers.is_empty() && !name_matched {
            None
        } else {
            Some(KeywordMatch {
                surah_id: surah.id,
                verse_numbers,
                name_matched,
            })
        }
    };

    #[cfg(feature = "parallel")]
    let mut matches: Vec<KeywordMatch> = corpus.surahs().par_iter().filter_map(scan).collect();

    #[cfg(not(feature = "parallel"))]
    let mut matches: Vec<KeywordMatch> = corpus.surahs().iter().filter_map(scan).collect();

    matches.sort_by(compare_matches);
    matches
}

/// Literal-mode filter: Surahs whose name, meaning, Arabic name or number
/// matches the query, in Surah order.
pub fn filter_surahs(corpus: &Corpus, query: &str) -> Vec<KeywordMatch> {
    let normalized = normalize(query);
    if normalized.is_empty() {
        return Vec::new();
    }
    let number = parse_surah_number(&normalized);

    corpus
        .surahs()
        .iter()
        .filter(|surah| metadata_matches(surah, &normalized, number))
        .map(|surah| KeywordMatch {
            surah_id: surah.id,
            verse_numbers: Vec::new(),
            name_matched: true,
        })
        .collect()
}

/// Ranking: more matching verses first, then lower Surah id.
pub fn compare_matches(a: &KeywordMatch, b: &KeywordMatch) -> Ordering {
    b.verse_numbers
        .len()
        .cmp(&a.verse_numbers.len())
        .then_with(|| a.surah_id.cmp(&b.surah_id))
}

fn verse_matches(text: &str, terms: &[String], normalized_query: &str) -> bool {
    terms.iter().any(|term| text.contains(term.as_str())) || text.contains(normalized_query)
}

fn metadata_matches(surah: &Surah, normalized_query: &str, number: Option<u16>) -> bool {
    number == Some(surah.id.get())
        || normalize(&surah.name).contains(normalized_query)
        || normalize(&surah.english_meaning).contains(normalized_query)
        || normalize(&surah.arabic_name).contains(normalized_query)
}
