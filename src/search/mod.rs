// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where the two sources meet.
//!
//! Smart mode asks the remote semantic service and the local keyword matcher
//! the same question at the same time, then merges the answers with the
//! semantic ones first. Literal mode only filters Surah metadata.
//!
//! ```text
//!   SearchSession ──debounce──► SearchResolver ─┬─► SemanticSearch (remote)
//!                                               └─► keyword (local, blocking pool)
//!                                                        │
//!                                 ResultMerger ◄─────────┘
//! ```

pub mod debounce;
pub mod keyword;
pub mod merge;
pub mod resolver;
pub mod semantic;
pub mod session;
pub mod utils;

pub use debounce::DebouncedTask;
pub use keyword::{filter_surahs, match_keywords, match_keywords_with, KeywordSource};
pub use merge::{keyword_reason, merge_results, ResultMerger};
pub use resolver::SearchResolver;
pub use semantic::{
    parse_semantic_response, DisabledSemanticSearch, HttpSemanticClient, SemanticSearch,
};
pub use session::{SearchPhase, SearchSession, SearchSnapshot};
