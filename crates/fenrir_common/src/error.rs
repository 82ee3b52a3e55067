//! Error types for Fenrir.

use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FenrirError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Invalid choice '{choice}' at node {node}")]
    InvalidChoice { node: String, choice: String },

    #[error("Invalid triage graph: {}", format_violations(.0))]
    InvalidGraph(Vec<GraphViolation>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FenrirError {
    pub fn code(&self) -> i32 {
        match self {
            FenrirError::NodeNotFound(_) => -32100,
            FenrirError::InvalidChoice { .. } => -32101,
            FenrirError::InvalidGraph(_) => -32102,
            FenrirError::Json(_) => -32700,
        }
    }
}

/// A structural problem found while validating a triage graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphViolation {
    /// No node with id ROOT
    MissingRoot,
    /// An option points at an id that is not in the graph
    DanglingOption { node: String, next_id: String },
    /// Node cannot be reached from ROOT
    Unreachable(String),
    /// Decision node with no options
    EmptyBranch(String),
    /// Record carries both options and a result, or neither
    AmbiguousNode(String),
    /// Two nodes share an id
    DuplicateId(String),
}

impl fmt::Display for GraphViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphViolation::MissingRoot => write!(f, "missing ROOT node"),
            GraphViolation::DanglingOption { node, next_id } => {
                write!(f, "{} has an option leading to unknown node {}", node, next_id)
            }
            GraphViolation::Unreachable(id) => write!(f, "{} is unreachable from ROOT", id),
            GraphViolation::EmptyBranch(id) => write!(f, "{} is a decision node without options", id),
            GraphViolation::AmbiguousNode(id) => {
                write!(f, "{} must have either options or a result, not both or neither", id)
            }
            GraphViolation::DuplicateId(id) => write!(f, "duplicate node id {}", id),
        }
    }
}

fn format_violations(violations: &[GraphViolation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
