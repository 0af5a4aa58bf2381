//! Per-attempt scoring state.
//!
//! Content scores live in a side table keyed by `NodeId` rather than on the
//! nodes themselves, so the tree representation stays untouched and the whole
//! record can be dropped when an attempt ends.

use std::collections::HashMap;

use crate::dom::NodeId;

/// Mutable scoring state for a single extraction attempt.
#[derive(Debug, Default)]
pub struct ScoreState {
    scores: HashMap<NodeId, f64>,
    /// Every element initialized as an ancestor, in first-touch order.
    candidates: Vec<NodeId>,
}

impl ScoreState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True once a node has been initialized as a scoring candidate.
    #[must_use]
    pub fn is_initialized(&self, id: NodeId) -> bool {
        self.scores.contains_key(&id)
    }

    /// Register a node with its base score. First registration wins; a node
    /// appears in the candidate list at most once.
    pub fn initialize(&mut self, id: NodeId, base_score: f64) {
        if let std::collections::hash_map::Entry::Vacant(entry) = self.scores.entry(id) {
            entry.insert(base_score);
            self.candidates.push(id);
        }
    }

    /// Accumulate score onto an already initialized node. Additions are
    /// non-negative, so a node's score never regresses during propagation.
    pub fn add(&mut self, id: NodeId, delta: f64) {
        if let Some(score) = self.scores.get_mut(&id) {
            *score += delta;
        }
    }

    /// Overwrite a node's score. Used for the one-time link-density discount
    /// at selection time.
    pub fn set(&mut self, id: NodeId, score: f64) {
        self.scores.insert(id, score);
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<f64> {
        self.scores.get(&id).copied()
    }

    #[must_use]
    pub fn candidates(&self) -> &[NodeId] {
        &self.candidates
    }
}
