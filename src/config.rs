// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search tuning knobs.
//!
//! Defaults reproduce the behavior users already know from the Surah list:
//! an 800ms quiet period before a smart search fires, three verse numbers in
//! a keyword reason, and keyword terms of at least three characters.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Quiet period between the last query change and a smart search.
pub const DEFAULT_DEBOUNCE_MS: u64 = 800;

/// Verse numbers listed in a synthesized keyword reason before `...`.
pub const DEFAULT_REASON_VERSE_LIMIT: usize = 3;

/// Shorter terms are dropped when splitting a multi-word query.
pub const DEFAULT_MIN_TERM_LEN: usize = 3;

/// Request timeout for the HTTP semantic client.
pub const DEFAULT_SEMANTIC_TIMEOUT_SECS: u64 = 10;

/// Top-level search configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub debounce_ms: u64,
    pub reason_verse_limit: usize,
    pub min_term_len: usize,
    pub semantic: SemanticConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            reason_verse_limit: DEFAULT_REASON_VERSE_LIMIT,
            min_term_len: DEFAULT_MIN_TERM_LEN,
            semantic: SemanticConfig::default(),
        }
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce_ms = debounce.as_millis() as u64;
        self
    }

    pub fn with_reason_verse_limit(mut self, limit: usize) -> Self {
        self.reason_verse_limit = limit;
        self
    }

    pub fn with_semantic(mut self, semantic: SemanticConfig) -> Self {
        self.semantic = semantic;
        self
    }
}

/// Where the remote semantic search service lives.
///
/// No endpoint means smart mode runs keyword-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SemanticConfig {
    pub endpoint: Option<String>,
    pub token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for SemanticConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            token: None,
            timeout_secs: DEFAULT_SEMANTIC_TIMEOUT_SECS,
        }
    }
}

impl SemanticConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
