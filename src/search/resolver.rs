// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One-shot search resolution: query state in, merged result list out.
//!
//! Smart mode issues the keyword scan and the semantic request together and
//! awaits both, so latency is the slower of the two rather than their sum.
//! Either side failing degrades to "no results from that side":
//!
//! | Failure                         | Effect                          |
//! |---------------------------------|---------------------------------|
//! | semantic error / timeout        | keyword results only            |
//! | keyword source panics           | semantic results only           |
//! | both                            | empty list                      |
//!
//! Literal mode never touches the network.

use crate::config::SearchConfig;
use crate::corpus::Corpus;
use crate::error::SemanticError;
use crate::search::keyword::{filter_surahs, match_keywords_with, KeywordSource};
use crate::search::merge::ResultMerger;
use crate::search::semantic::{DisabledSemanticSearch, HttpSemanticClient, SemanticSearch};
use crate::search::utils::is_blank;
use crate::topics::TopicCatalog;
use crate::types::{RevelationFilter, SearchRequest, SearchResult};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Resolves search requests against a corpus and a semantic service.
pub struct SearchResolver {
    corpus: Arc<Corpus>,
    semantic: Arc<dyn SemanticSearch>,
    keyword: Arc<dyn KeywordSource>,
    topics: TopicCatalog,
    config: SearchConfig,
}

impl SearchResolver {
    pub fn new(corpus: Arc<Corpus>, semantic: Arc<dyn SemanticSearch>) -> Self {
        Self {
            corpus,
            semantic,
            keyword: Arc::new(match_keywords_with),
            topics: TopicCatalog::default(),
            config: SearchConfig::default(),
        }
    }

    /// Resolver whose semantic side comes from `config.semantic`: the HTTP
    /// client when an endpoint is set, keyword-only otherwise.
    pub fn from_config(corpus: Arc<Corpus>, config: SearchConfig) -> Result<Self, SemanticError> {
        let client = HttpSemanticClient::from_config(&config.semantic)?;
        let semantic: Arc<dyn SemanticSearch> = match client {
            Some(client) => {
                info!(endpoint = client.endpoint(), "semantic search enabled");
                Arc::new(client)
            }
            None => Arc::new(DisabledSemanticSearch),
        };
        Ok(Self::new(corpus, semantic).with_config(config))
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the smart-mode keyword matcher. Literal mode is unaffected.
    pub fn with_keyword_source(mut self, source: impl KeywordSource + 'static) -> Self {
        self.keyword = Arc::new(source);
        self
    }

    pub fn with_topics(mut self, topics: TopicCatalog) -> Self {
        self.topics = topics;
        self
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn topics(&self) -> &TopicCatalog {
        &self.topics
    }

    /// The query that actually gets searched: trimmed free text if there is
    /// any, otherwise the selected chip labels joined with `" / "`.
    pub fn combined_query<S: AsRef<str>>(&self, query: &str, topics: &[S]) -> String {
        let query = query.trim();
        if query.is_empty() {
            self.topics.combined_query(topics)
        } else {
            query.to_string()
        }
    }

    /// Resolve free text and chips with no revelation filter.
    pub async fn resolve_search<S: AsRef<str>>(
        &self,
        query: &str,
        topics: &[S],
        smart_mode: bool,
    ) -> Vec<SearchResult> {
        let request = SearchRequest::new(query)
            .with_topics(topics.iter().map(|t| t.as_ref().to_string()))
            .smart(smart_mode);
        self.resolve(&request).await
    }

    /// Resolve a full request.
    pub async fn resolve(&self, request: &SearchRequest) -> Vec<SearchResult> {
        let combined = self.combined_query(&request.query, request.topics.as_slice());
        if is_blank(&combined) {
            return Vec::new();
        }

        let results = if request.smart_mode {
            self.smart_search(&combined).await
        } else {
            self.literal_search(&combined)
        };
        self.apply_revelation(results, request.revelation)
    }

    /// Resolve a request without smart mode, synchronously.
    pub fn resolve_literal(&self, request: &SearchRequest) -> Vec<SearchResult> {
        let combined = self.combined_query(&request.query, request.topics.as_slice());
        if is_blank(&combined) {
            return Vec::new();
        }
        let results = self.literal_search(&combined);
        self.apply_revelation(results, request.revelation)
    }

    fn literal_search(&self, query: &str) -> Vec<SearchResult> {
        let mut merger =
            ResultMerger::from_semantic_with_limit(Vec::new(), self.config.reason_verse_limit);
        merger.append_keyword(filter_surahs(&self.corpus, query));
        merger.into_results()
    }

    async fn smart_search(&self, query: &str) -> Vec<SearchResult> {
        let corpus = Arc::clone(&self.corpus);
        let source = Arc::clone(&self.keyword);
        let owned = query.to_string();
        let min_term_len = self.config.min_term_len;
        let keyword_scan =
            tokio::task::spawn_blocking(move || source.find(&corpus, &owned, min_term_len));

        let (semantic, keyword) = tokio::join!(self.semantic.search(query), keyword_scan);

        let semantic = semantic.unwrap_or_else(|err| {
            warn!(%err, query, "semantic search failed, falling back to keyword results");
            Vec::new()
        });
        let keyword = keyword.unwrap_or_else(|err| {
            warn!(%err, query, "keyword search failed, treating as no matches");
            Vec::new()
        });
        debug!(
            query,
            semantic = semantic.len(),
            keyword = keyword.len(),
            "merging search results"
        );

        let mut merger =
            ResultMerger::from_semantic_with_limit(semantic, self.config.reason_verse_limit);
        merger.append_keyword(keyword);
        merger.into_results()
    }

    fn apply_revelation(
        &self,
        mut results: Vec<SearchResult>,
        filter: RevelationFilter,
    ) -> Vec<SearchResult> {
        if filter != RevelationFilter::All {
            results.retain(|r| {
                self.corpus
                    .surah(r.surah_id())
                    .is_some_and(|s| filter.matches(s.revelation_type))
            });
        }
        results
    }
}
