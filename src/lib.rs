//! Hybrid Surah search: semantic hits and keyword matches, merged.
//!
//! A reader types how they feel ("anxious about tomorrow") or picks a few
//! emotion chips, and gets back a list of Surahs with a one-line reason for
//! each. Two sources answer in parallel: a remote semantic service that
//! understands intent, and a local keyword matcher over verse translations
//! that always works offline. The merge keeps one entry per Surah and lets
//! the semantic explanation win.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────────┐
//! │  corpus.rs  │────▶│  keyword.rs  │────▶│                 │
//! │ (Surah,     │     │ (verse scan, │     │    merge.rs     │
//! │  Verse)     │     │  ranking)    │     │ (ResultMerger)  │
//! └─────────────┘     └──────────────┘     │                 │
//!                     ┌──────────────┐     │                 │
//!                     │ semantic.rs  │────▶│                 │
//!                     │ (remote)     │     └────────┬────────┘
//!                     └──────────────┘              │
//!                                                   ▼
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────────┐
//! │  topics.rs  │────▶│ resolver.rs  │◀────│   session.rs    │
//! │  (chips)    │     │ (one search) │     │ (debounce, LWW) │
//! └─────────────┘     └──────────────┘     └─────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use nur_search::{Corpus, DisabledSemanticSearch, SearchRequest, SearchResolver};
//! use std::sync::Arc;
//!
//! let corpus = Arc::new(Corpus::load("quran.json")?);
//! let resolver = SearchResolver::new(corpus, Arc::new(DisabledSemanticSearch));
//! let results = resolver.resolve(&SearchRequest::new("mercy")).await;
//! ```

pub mod config;
pub mod corpus;
pub mod error;
pub mod search;
pub mod testing;
pub mod topics;
pub mod types;
mod utils;

pub use config::{SearchConfig, SemanticConfig};
pub use corpus::Corpus;
pub use error::{CorpusError, InvalidSurahId, SemanticError};
pub use search::{
    filter_surahs, keyword_reason, match_keywords, merge_results, DebouncedTask,
    DisabledSemanticSearch, HttpSemanticClient, KeywordSource, ResultMerger, SearchPhase,
    SearchResolver, SearchSession, SearchSnapshot, SemanticSearch,
};
pub use topics::{TopicCatalog, TopicChip};
pub use types::{
    KeywordMatch, RevelationFilter, RevelationType, SearchRequest, SearchResult, SemanticHit,
    Surah, SurahId, Translation, Verse,
};
pub use utils::normalize;
