// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loaded reference data: every Surah and every verse, validated once.
//!
//! The corpus is built at startup and shared behind an `Arc` for the rest of
//! the process. Construction sorts verses by `(surah, verse)` and precomputes
//! their normalized search text, so the keyword matcher never normalizes the
//! same verse twice.
//!
//! **Invariants** (checked in `Corpus::new`):
//! - Surah ids are unique.
//! - Every verse references a Surah in the corpus.
//! - `(surah, verse_number)` pairs are unique.

use crate::error::CorpusError;
use crate::types::{RevelationType, Surah, SurahId, Verse};
use crate::utils::normalize;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::ops::Range;
use std::path::Path;
use tracing::debug;

/// On-disk layout: `{ "surahs": [...], "verses": [...] }`.
#[derive(Deserialize)]
struct CorpusFile {
    surahs: Vec<Surah>,
    #[serde(default)]
    verses: Vec<Verse>,
}

/// Immutable Surah and verse collections.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    surahs: Vec<Surah>,
    verses: Vec<Verse>,
    /// Normalized `Verse::searchable_text`, parallel to `verses`.
    verse_texts: Vec<String>,
    /// Slice of `verses` belonging to each Surah.
    ranges: BTreeMap<SurahId, Range<usize>>,
}

impl Corpus {
    /// Validate and index reference data.
    pub fn new(mut surahs: Vec<Surah>, mut verses: Vec<Verse>) -> Result<Self, CorpusError> {
        surahs.sort_by_key(|s| s.id);
        if let Some(pair) = surahs.windows(2).find(|w| w[0].id == w[1].id) {
            return Err(CorpusError::DuplicateSurah(pair[0].id));
        }

        verses.sort_by_key(|v| (v.surah_id, v.verse_number));
        if let Some(pair) = verses
            .windows(2)
            .find(|w| (w[0].surah_id, w[0].verse_number) == (w[1].surah_id, w[1].verse_number))
        {
            return Err(CorpusError::DuplicateVerse {
                surah: pair[0].surah_id,
                verse: pair[0].verse_number,
            });
        }

        let mut ranges: BTreeMap<SurahId, Range<usize>> = BTreeMap::new();
        for (idx, verse) in verses.iter().enumerate() {
            if !surahs.iter().any(|s| s.id == verse.surah_id) {
                return Err(CorpusError::UnknownSurah {
                    surah: verse.surah_id,
                    verse: verse.verse_number,
                });
            }
            ranges
                .entry(verse.surah_id)
                .and_modify(|r| r.end = idx + 1)
                .or_insert(idx..idx + 1);
        }

        let verse_texts = verses
            .iter()
            .map(|v| normalize(&v.searchable_text()))
            .collect();

        debug!(
            surahs = surahs.len(),
            verses = verses.len(),
            "corpus loaded"
        );

        Ok(Self {
            surahs,
            verses,
            verse_texts,
            ranges,
        })
    }

    /// Parse a corpus document.
    pub fn from_json_str(raw: &str) -> Result<Self, CorpusError> {
        let file: CorpusFile = serde_json::from_str(raw)?;
        Self::new(file.surahs, file.verses)
    }

    /// Read and parse a corpus file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// All Surahs in ascending id order.
    pub fn surahs(&self) -> &[Surah] {
        &self.surahs
    }

    /// All verses in `(surah, verse)` order.
    pub fn verses(&self) -> &[Verse] {
        &self.verses
    }

    pub fn surah(&self, id: SurahId) -> Option<&Surah> {
        self.surahs
            .binary_search_by_key(&id, |s| s.id)
            .ok()
            .map(|idx| &self.surahs[idx])
    }

    /// Verses of one Surah, in verse order. Empty if none were loaded.
    pub fn verses_of(&self, id: SurahId) -> &[Verse] {
        match self.ranges.get(&id) {
            Some(range) => &self.verses[range.clone()],
            None => &[],
        }
    }

    /// Verses of one Surah paired with their normalized search text.
    pub(crate) fn searchable_verses(&self, id: SurahId) -> impl Iterator<Item = (&Verse, &str)> {
        let range = self.ranges.get(&id).cloned().unwrap_or(0..0);
        self.verses[range.clone()]
            .iter()
            .zip(self.verse_texts[range].iter().map(String::as_str))
    }

    /// Number of Surahs revealed in the given period.
    pub fn count_revealed_in(&self, revelation: RevelationType) -> usize {
        self.surahs
            .iter()
            .filter(|s| s.revelation_type == revelation)
            .count()
    }

    pub fn len(&self) -> usize {
        self.surahs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surahs.is_empty()
    }
}
