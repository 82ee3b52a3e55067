//! Traversal state for one diagnostic session.
//!
//! Navigation is a visit stack, not parent pointers: the same node can be
//! reached from several questions, so going back replays the caller's own
//! path. Every operation returns a new state and leaves the input untouched.

use super::graph::{TriageGraph, ROOT_ID};
use super::node::DecisionNode;
use crate::error::FenrirError;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// How `advance` checks the requested id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationMode {
    /// Any id present in the graph is accepted
    #[default]
    Lenient,
    /// Only ids offered by the current node's options are accepted
    Strict,
}

impl NavigationMode {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            NavigationMode::Strict
        } else {
            NavigationMode::Lenient
        }
    }
}

/// Caller-owned `{current, history}` pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalState {
    pub current: String,
    pub history: Vec<String>,
}

impl Default for TraversalState {
    fn default() -> Self {
        Self {
            current: ROOT_ID.to_string(),
            history: Vec::new(),
        }
    }
}

impl TraversalState {
    /// Fresh session at ROOT
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_at_root(&self) -> bool {
        self.history.is_empty() && self.current == ROOT_ID
    }

    /// Number of forward steps taken
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn current_node<'g>(&self, graph: &'g TriageGraph) -> Result<&'g DecisionNode, FenrirError> {
        graph.get_node(&self.current)
    }

    /// Push the current id and move to `next_id`
    pub fn advance(&self, graph: &TriageGraph, next_id: &str) -> Result<Self, FenrirError> {
        graph.get_node(next_id)?;

        let mut history = self.history.clone();
        history.push(self.current.clone());
        trace!("advance {} -> {}", self.current, next_id);

        Ok(Self {
            current: next_id.to_string(),
            history,
        })
    }

    /// Like `advance`, but `next_id` must be one of the current node's options
    pub fn advance_strict(&self, graph: &TriageGraph, next_id: &str) -> Result<Self, FenrirError> {
        let node = self.current_node(graph)?;
        if !node.offers(next_id) {
            return Err(FenrirError::InvalidChoice {
                node: self.current.clone(),
                choice: next_id.to_string(),
            });
        }
        self.advance(graph, next_id)
    }

    pub fn advance_with(
        &self,
        graph: &TriageGraph,
        next_id: &str,
        mode: NavigationMode,
    ) -> Result<Self, FenrirError> {
        match mode {
            NavigationMode::Lenient => self.advance(graph, next_id),
            NavigationMode::Strict => self.advance_strict(graph, next_id),
        }
    }

    /// Follow the option at a 1-based menu position
    pub fn choose(&self, graph: &TriageGraph, position: usize) -> Result<Self, FenrirError> {
        let node = self.current_node(graph)?;
        let option = position
            .checked_sub(1)
            .and_then(|i| node.options().get(i))
            .ok_or_else(|| FenrirError::InvalidChoice {
                node: self.current.clone(),
                choice: position.to_string(),
            })?;
        self.advance(graph, &option.next_id)
    }

    /// Pop one step. No-op with an empty history.
    pub fn go_back(&self) -> Self {
        let mut history = self.history.clone();
        match history.pop() {
            Some(previous) => {
                trace!("back {} -> {}", self.current, previous);
                Self {
                    current: previous,
                    history,
                }
            }
            None => self.clone(),
        }
    }

    /// Back to `{ROOT, []}`
    pub fn reset(&self) -> Self {
        Self::default()
    }
}
