// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Only corpus loading can fail loudly. Semantic search errors exist so the
//! resolver can log them before falling back to keyword results; they never
//! reach the presentation layer.

use crate::types::SurahId;
use std::path::PathBuf;
use thiserror::Error;

/// A Surah number outside `1..=114`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("surah id {0} is outside 1..=114")]
pub struct InvalidSurahId(pub i64);

/// Errors raised while loading or validating reference data.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read corpus {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid corpus JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("surah {0} is defined more than once")]
    DuplicateSurah(SurahId),

    #[error("verse {surah}:{verse} is defined more than once")]
    DuplicateVerse { surah: SurahId, verse: u16 },

    #[error("verse {surah}:{verse} references a surah missing from the corpus")]
    UnknownSurah { surah: SurahId, verse: u16 },
}

/// Errors from the remote semantic search collaborator.
#[derive(Debug, Error)]
pub enum SemanticError {
    #[error("semantic search request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("semantic search returned HTTP {0}")]
    Status(u16),

    #[error("malformed semantic search response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("semantic search unavailable: {0}")]
    Unavailable(String),
}
