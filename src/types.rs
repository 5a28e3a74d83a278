// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a Surah search.
//!
//! Reference data (`Surah`, `Verse`) is loaded once and never mutated. Search
//! output is rebuilt for every query: the keyword matcher produces
//! `KeywordMatch`es, the remote service produces `SemanticHit`s, and the
//! merger turns both into `SearchResult`s.
//!
//! # Invariants
//!
//! - **SurahId**: `1 ≤ id ≤ 114`. Enforced at construction and on
//!   deserialization, so nothing downstream re-checks it.
//!
//! - **Merged results**: every `surah_id` appears at most once, and a Surah
//!   found by both sources carries the semantic reason.

use crate::error::InvalidSurahId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// NEWTYPES
// =============================================================================

/// Type-safe Surah identifier, always within `1..=114`.
///
/// Use `SurahId::new()` for runtime-validated construction. Deserialization
/// goes through the same check, so a corpus file or a remote response can
/// never smuggle in chapter 0 or 115.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct SurahId(u16);

impl SurahId {
    /// First Surah (Al-Fatihah).
    pub const FIRST: SurahId = SurahId(1);
    /// Last Surah (An-Nas).
    pub const LAST: SurahId = SurahId(114);

    /// Create a new SurahId, validating it's a real chapter number.
    #[inline]
    pub fn new(id: u16) -> Option<Self> {
        if (Self::FIRST.0..=Self::LAST.0).contains(&id) {
            Some(SurahId(id))
        } else {
            None
        }
    }

    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for SurahId {
    type Error = InvalidSurahId;

    fn try_from(id: u16) -> Result<Self, Self::Error> {
        SurahId::new(id).ok_or(InvalidSurahId(i64::from(id)))
    }
}

impl TryFrom<i64> for SurahId {
    type Error = InvalidSurahId;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        u16::try_from(id)
            .ok()
            .and_then(SurahId::new)
            .ok_or(InvalidSurahId(id))
    }
}

impl From<SurahId> for u16 {
    fn from(id: SurahId) -> Self {
        id.0
    }
}

impl fmt::Display for SurahId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// REFERENCE DATA
// =============================================================================

/// Where a Surah was revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevelationType {
    Makkah,
    Madinah,
}

impl fmt::Display for RevelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevelationType::Makkah => f.write_str("Makkah"),
            RevelationType::Madinah => f.write_str("Madinah"),
        }
    }
}

/// One of the 114 chapters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Surah {
    pub id: SurahId,
    pub name: String,
    pub arabic_name: String,
    pub english_meaning: String,
    pub total_verses: u16,
    pub revelation_type: RevelationType,
}

/// A verse translation in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub language: String,
    pub text: String,
    #[serde(default)]
    pub source: String,
}

/// A numbered verse (ayah) within a Surah.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verse {
    pub id: u32,
    pub surah_id: SurahId,
    pub verse_number: u16,
    pub arabic: String,
    #[serde(default)]
    pub translations: Vec<Translation>,
    /// Short glossary words attached to the verse meaning.
    #[serde(default)]
    pub easy_words: Vec<String>,
}

impl Verse {
    /// Raw (un-normalized) text the keyword matcher looks at.
    pub fn searchable_text(&self) -> String {
        let mut parts: Vec<&str> =
            Vec::with_capacity(1 + self.translations.len() + self.easy_words.len());
        parts.push(&self.arabic);
        parts.extend(self.translations.iter().map(|t| t.text.as_str()));
        parts.extend(self.easy_words.iter().map(String::as_str));
        parts.retain(|p| !p.is_empty());
        parts.join(" ")
    }
}

// =============================================================================
// SEARCH OUTPUT
// =============================================================================

/// A ranked guess from the remote semantic search service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticHit {
    pub surah_id: SurahId,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verse_ref: Option<String>,
}

impl SemanticHit {
    pub fn new(surah_id: SurahId, reason: impl Into<String>) -> Self {
        Self {
            surah_id,
            reason: reason.into(),
            verse_ref: None,
        }
    }

    pub fn with_verse_ref(mut self, verse_ref: impl Into<String>) -> Self {
        self.verse_ref = Some(verse_ref.into());
        self
    }
}

/// A Surah found by the local keyword matcher.
///
/// `verse_numbers` is in ascending verse order. `name_matched` is set when the
/// Surah's own metadata (name, meaning, Arabic name or number) matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordMatch {
    pub surah_id: SurahId,
    pub verse_numbers: Vec<u16>,
    #[serde(default)]
    pub name_matched: bool,
}

/// One card in the merged result list.
///
/// The variant records which source produced the entry, so the merge priority
/// (semantic before keyword) is visible in the data rather than inferred from
/// which optional fields happen to be set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum SearchResult {
    #[serde(rename_all = "camelCase")]
    Semantic {
        surah_id: SurahId,
        reason: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        verse_ref: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Keyword {
        surah_id: SurahId,
        verse_numbers: Vec<u16>,
        reason: String,
    },
}

impl SearchResult {
    pub fn surah_id(&self) -> SurahId {
        match self {
            SearchResult::Semantic { surah_id, .. } | SearchResult::Keyword { surah_id, .. } => {
                *surah_id
            }
        }
    }

    pub fn reason(&self) -> &str {
        match self {
            SearchResult::Semantic { reason, .. } | SearchResult::Keyword { reason, .. } => reason,
        }
    }

    /// Verse reference for display: the service's own reference for semantic
    /// hits, the comma-joined matching verse numbers for keyword hits.
    pub fn verse_ref(&self) -> Option<String> {
        match self {
            SearchResult::Semantic { verse_ref, .. } => verse_ref.clone(),
            SearchResult::Keyword { verse_numbers, .. } if verse_numbers.is_empty() => None,
            SearchResult::Keyword { verse_numbers, .. } => Some(
                verse_numbers
                    .iter()
                    .map(u16::to_string)
                    .collect::<Vec<_>>()
                    .join(","),
            ),
        }
    }

    pub fn is_semantic(&self) -> bool {
        matches!(self, SearchResult::Semantic { .. })
    }
}

// =============================================================================
// QUERY STATE
// =============================================================================

/// Which revelation period to keep in the final list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevelationFilter {
    #[default]
    All,
    Makkah,
    Madinah,
}

impl RevelationFilter {
    pub fn matches(self, revelation: RevelationType) -> bool {
        match self {
            RevelationFilter::All => true,
            RevelationFilter::Makkah => revelation == RevelationType::Makkah,
            RevelationFilter::Madinah => revelation == RevelationType::Madinah,
        }
    }
}

impl FromStr for RevelationFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(RevelationFilter::All),
            "makkah" | "meccan" => Ok(RevelationFilter::Makkah),
            "madinah" | "medinan" => Ok(RevelationFilter::Madinah),
            other => Err(format!(
                "unknown revelation filter '{}', expected all, makkah or madinah",
                other
            )),
        }
    }
}

/// Everything the presentation layer knows about the current search.
///
/// `topics` holds selected chip ids in selection order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchRequest {
    pub query: String,
    pub topics: Vec<String>,
    pub smart_mode: bool,
    pub revelation: RevelationFilter,
}

impl SearchRequest {
    /// A smart-mode request for free text, with no chips and no filter.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            topics: Vec::new(),
            smart_mode: true,
            revelation: RevelationFilter::All,
        }
    }

    pub fn with_topics<I, S>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.topics = topics.into_iter().map(Into::into).collect();
        self
    }

    pub fn smart(mut self, smart_mode: bool) -> Self {
        self.smart_mode = smart_mode;
        self
    }

    pub fn revelation(mut self, revelation: RevelationFilter) -> Self {
        self.revelation = revelation;
        self
    }
}
