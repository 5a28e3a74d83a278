// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Interactive search state: debounced, last-writer-wins.
//!
//! A `SearchSession` sits between a text box and a result list. Every
//! keystroke or chip toggle goes through `update`; observers watch the
//! published `SearchSnapshot`.
//!
//! ```text
//!   update ──► Debouncing ──(quiet period)──► Searching ──► Idle
//!      │                                                      ▲
//!      └── empty query / literal mode ────────────────────────┘
//! ```
//!
//! Each `update` bumps a generation counter. A search that finishes after a
//! newer `update` finds the generation moved on and its results are dropped,
//! so a slow answer for an old query can never overwrite a newer one.
//! In-flight searches are not aborted; they just lose the race.

use crate::search::debounce::DebouncedTask;
use crate::search::resolver::SearchResolver;
use crate::search::utils::is_blank;
use crate::types::{SearchRequest, SearchResult};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

/// Where the session is in its update cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    /// Waiting out the quiet period after the last update.
    Debouncing,
    /// A search for the current generation is running.
    Searching,
}

/// What observers see.
///
/// While a new query is debouncing or searching, `results` still holds the
/// previous generation's list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchSnapshot {
    pub generation: u64,
    /// The combined query of the latest update.
    pub query: String,
    pub phase: SearchPhase,
    pub results: Vec<SearchResult>,
}

struct PendingSearch {
    generation: u64,
    request: SearchRequest,
}

type SharedState = Arc<watch::Sender<SearchSnapshot>>;

/// Debounced search driver. Must be used from within a tokio runtime.
pub struct SearchSession {
    resolver: Arc<SearchResolver>,
    state: SharedState,
    debounce: DebouncedTask<PendingSearch>,
}

impl SearchSession {
    pub fn new(resolver: Arc<SearchResolver>) -> Self {
        let (tx, _) = watch::channel(SearchSnapshot::default());
        let state: SharedState = Arc::new(tx);

        let delay = resolver.config().debounce();
        let fire_resolver = Arc::clone(&resolver);
        let fire_state = Arc::clone(&state);
        let debounce = DebouncedTask::new(delay, move |pending: PendingSearch| {
            fire(&fire_resolver, &fire_state, pending);
        });

        Self {
            resolver,
            state,
            debounce,
        }
    }

    pub fn resolver(&self) -> &SearchResolver {
        &self.resolver
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchSnapshot> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> SearchSnapshot {
        self.state.borrow().clone()
    }

    pub fn phase(&self) -> SearchPhase {
        self.state.borrow().phase
    }

    pub fn results(&self) -> Vec<SearchResult> {
        self.state.borrow().results.clone()
    }

    /// Record new query state and return its generation.
    ///
    /// An empty combined query clears the results immediately. Literal mode
    /// resolves synchronously. Smart mode (re)starts the quiet period; the
    /// search runs once it elapses.
    pub fn update(&mut self, request: SearchRequest) -> u64 {
        let combined = self
            .resolver
            .combined_query(&request.query, request.topics.as_slice());

        if is_blank(&combined) {
            self.debounce.cancel();
            return self.advance(combined, SearchPhase::Idle, Some(Vec::new()));
        }

        if !request.smart_mode {
            self.debounce.cancel();
            let results = self.resolver.resolve_literal(&request);
            return self.advance(combined, SearchPhase::Idle, Some(results));
        }

        let generation = self.advance(combined, SearchPhase::Debouncing, None);
        self.debounce.schedule(PendingSearch {
            generation,
            request,
        });
        generation
    }

    /// Drop any pending search and empty the result list.
    pub fn clear(&mut self) -> u64 {
        self.update(SearchRequest::default())
    }

    /// Wait until the session is idle and return that snapshot.
    pub async fn settled(&self) -> SearchSnapshot {
        let mut rx = self.state.subscribe();
        let settled = rx
            .wait_for(|snap| snap.phase == SearchPhase::Idle)
            .await
            .map(|snap| snap.clone());
        match settled {
            Ok(snap) => snap,
            Err(_) => self.snapshot(),
        }
    }

    fn advance(
        &self,
        query: String,
        phase: SearchPhase,
        results: Option<Vec<SearchResult>>,
    ) -> u64 {
        let mut generation = 0;
        self.state.send_modify(|snap| {
            snap.generation += 1;
            generation = snap.generation;
            snap.query = query;
            snap.phase = phase;
            if let Some(results) = results {
                snap.results = results;
            }
        });
        generation
    }
}

/// Quiet period elapsed: start the search if nothing newer arrived meanwhile.
fn fire(resolver: &Arc<SearchResolver>, state: &SharedState, pending: PendingSearch) {
    let generation = pending.generation;
    let current = state.send_if_modified(|snap| {
        if snap.generation != generation {
            return false;
        }
        snap.phase = SearchPhase::Searching;
        true
    });
    if !current {
        debug!(generation, "debounced search superseded before it started");
        return;
    }

    let resolver = Arc::clone(resolver);
    let state = Arc::clone(state);
    tokio::spawn(async move {
        let results = resolver.resolve(&pending.request).await;
        let count = results.len();
        let published = state.send_if_modified(|snap| {
            if snap.generation != generation {
                return false;
            }
            snap.phase = SearchPhase::Idle;
            snap.results = results;
            true
        });
        if published {
            debug!(generation, results = count, "search results published");
        } else {
            debug!(
                generation,
                results = count,
                "discarding stale search results"
            );
        }
    });
}
