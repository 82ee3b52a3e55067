//! Offline medical decision support.
//!
//! A deterministic first-aid triage tree with stack-based navigation. Works
//! with zero connectivity: all content is compiled in.

pub mod data;
pub mod graph;
pub mod node;
pub mod session;

pub use graph::{medical_tree, TriageGraph, ROOT_ID};
pub use node::{DecisionNode, NodeRecord, OptionStyle, Severity, TriageOption, TriageResult};
pub use session::{NavigationMode, TraversalState};
