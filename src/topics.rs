// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Topic and emotion chips.
//!
//! Selecting chips is the other way to build a query: the labels of the
//! selected chips are joined with `" / "`, which the keyword matcher splits
//! back into separate terms.

use serde::{Deserialize, Serialize};

/// Separator placed between chip labels in a combined query.
pub const TOPIC_SEPARATOR: &str = " / ";

/// A selectable chip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicChip {
    pub id: String,
    pub label: String,
}

impl TopicChip {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// The chips offered to the user, looked up by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicCatalog {
    chips: Vec<TopicChip>,
}

impl Default for TopicCatalog {
    /// The emotion chips from the Quran page.
    fn default() -> Self {
        Self::new(vec![
            TopicChip::new("anxious", "Anxious"),
            TopicChip::new("sad", "Sad"),
            TopicChip::new("lonely", "Lonely"),
            TopicChip::new("grateful", "Grateful"),
            TopicChip::new("lost", "Lost"),
            TopicChip::new("angry", "Angry"),
        ])
    }
}

impl TopicCatalog {
    pub fn new(chips: Vec<TopicChip>) -> Self {
        Self { chips }
    }

    pub fn empty() -> Self {
        Self { chips: Vec::new() }
    }

    pub fn chips(&self) -> &[TopicChip] {
        &self.chips
    }

    pub fn get(&self, id: &str) -> Option<&TopicChip> {
        self.chips.iter().find(|c| c.id == id)
    }

    /// Labels for the selected chip ids, in selection order.
    ///
    /// Unknown ids pass through as their own label. Blank ids and repeated
    /// labels are dropped.
    pub fn labels<S: AsRef<str>>(&self, ids: &[S]) -> Vec<String> {
        let mut labels: Vec<String> = Vec::with_capacity(ids.len());
        for id in ids {
            let id = id.as_ref().trim();
            if id.is_empty() {
                continue;
            }
            let label = self.get(id).map_or(id, |c| c.label.as_str());
            if !labels.iter().any(|l| l == label) {
                labels.push(label.to_string());
            }
        }
        labels
    }

    /// Combined query for a chip selection, or empty if nothing usable was selected.
    pub fn combined_query<S: AsRef<str>>(&self, ids: &[S]) -> String {
        self.labels(ids).join(TOPIC_SEPARATOR)
    }
}
