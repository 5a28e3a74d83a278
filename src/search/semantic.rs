// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The remote semantic search collaborator.
//!
//! The service maps a natural-language query ("feeling anxious about
//! tomorrow") to a ranked list of Surahs with a short reason each. Its wire
//! protocol belongs to the service; this module only needs the trait. The
//! bundled `HttpSemanticClient` speaks the simplest protocol that works with
//! an LLM behind a thin proxy: POST `{"query": ...}`, receive a JSON array.
//!
//! LLM-backed services like to wrap JSON in markdown code fences and
//! occasionally hallucinate chapter 0 or 200. `parse_semantic_response`
//! strips the fences and drops individual hits that are malformed or name an
//! invalid Surah, keeping the rest.

use crate::config::SemanticConfig;
use crate::error::SemanticError;
use crate::types::{SemanticHit, SurahId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Query-to-Surah resolution by an external service.
///
/// Results must come back in the service's relevance order; the merger
/// preserves it. Errors are never fatal: callers treat them as zero hits.
#[async_trait]
pub trait SemanticSearch: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<SemanticHit>, SemanticError>;
}

/// Stand-in used when no service is configured. Always returns no hits.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledSemanticSearch;

#[async_trait]
impl SemanticSearch for DisabledSemanticSearch {
    async fn search(&self, _query: &str) -> Result<Vec<SemanticHit>, SemanticError> {
        Ok(Vec::new())
    }
}

#[derive(Serialize)]
struct SearchBody<'a> {
    query: &'a str,
}

/// Hit as the service sends it, before validation.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawHit {
    surah_id: i64,
    #[serde(default)]
    reason: String,
    #[serde(default)]
    verse_ref: Option<Value>,
}

impl RawHit {
    fn parse(entry: Value) -> Option<SemanticHit> {
        match serde_json::from_value::<RawHit>(entry) {
            Ok(raw) => raw.validate(),
            Err(err) => {
                debug!(%err, "dropping malformed semantic hit");
                None
            }
        }
    }

    fn validate(self) -> Option<SemanticHit> {
        let surah_id = match SurahId::try_from(self.surah_id) {
            Ok(id) => id,
            Err(err) => {
                debug!(%err, "dropping semantic hit");
                return None;
            }
        };
        let verse_ref = match self.verse_ref {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };
        Some(SemanticHit {
            surah_id,
            reason: self.reason.trim().to_string(),
            verse_ref,
        })
    }
}

/// Remove markdown code fences around a JSON payload.
pub fn strip_code_fence(body: &str) -> String {
    body.replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Parse a service response body into validated hits, preserving order.
///
/// The body must be a JSON array. Elements are checked one by one, so a
/// single bad entry costs only itself.
pub fn parse_semantic_response(body: &str) -> Result<Vec<SemanticHit>, SemanticError> {
    let cleaned = strip_code_fence(body);
    let entries: Vec<Value> = serde_json::from_str(&cleaned)?;
    Ok(entries.into_iter().filter_map(RawHit::parse).collect())
}

/// JSON-over-HTTP semantic search client.
#[derive(Debug, Clone)]
pub struct HttpSemanticClient {
    client: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

impl HttpSemanticClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, SemanticError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            token: None,
        })
    }

    /// Client for the configured endpoint, or `None` if there isn't one.
    pub fn from_config(config: &SemanticConfig) -> Result<Option<Self>, SemanticError> {
        let Some(endpoint) = config.endpoint.as_deref().filter(|e| !e.trim().is_empty()) else {
            return Ok(None);
        };
        let mut client = Self::new(endpoint, config.timeout())?;
        client.token = config.token.clone();
        Ok(Some(client))
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SemanticSearch for HttpSemanticClient {
    async fn search(&self, query: &str) -> Result<Vec<SemanticHit>, SemanticError> {
        let mut request = self.client.post(&self.endpoint).json(&SearchBody { query });
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SemanticError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let hits = parse_semantic_response(&body)?;
        debug!(query, hits = hits.len(), "semantic search returned");
        Ok(hits)
    }
}
