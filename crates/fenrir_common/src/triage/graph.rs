//! Triage graph storage and the validation pass.
//!
//! The graph is a node-id -> node map with ROOT as the start node. Every
//! graph handed out by this module has passed `violations()` with no
//! findings: ROOT exists, every option resolves, every node is reachable,
//! no decision node is empty and ids are unique.

use super::data;
use super::node::{DecisionNode, NodeRecord};
use crate::error::{FenrirError, GraphViolation};
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::LazyLock;
use tracing::{debug, info};

/// Id of the start node
pub const ROOT_ID: &str = "ROOT";

static MEDICAL_TREE: LazyLock<TriageGraph> = LazyLock::new(|| {
    match TriageGraph::from_nodes(data::medical_nodes()) {
        Ok(graph) => {
            info!("Medical triage graph loaded: {} nodes, {} results", graph.len(), graph.leaves().count());
            graph
        }
        Err(e) => panic!("built-in medical triage graph is malformed: {}", e),
    }
});

/// The built-in medical decision tree, validated on first access
pub fn medical_tree() -> &'static TriageGraph {
    &MEDICAL_TREE
}

#[derive(Debug, Clone)]
pub struct TriageGraph {
    nodes: Vec<DecisionNode>,
    index: HashMap<String, usize>,
}

impl TriageGraph {
    /// Build a graph and run the validation pass over it
    pub fn from_nodes(nodes: Vec<DecisionNode>) -> Result<Self, FenrirError> {
        let mut violations = Vec::new();
        let mut index = HashMap::with_capacity(nodes.len());
        let mut kept = Vec::with_capacity(nodes.len());

        for node in nodes {
            if index.contains_key(node.id()) {
                violations.push(GraphViolation::DuplicateId(node.id().to_string()));
                continue;
            }
            index.insert(node.id().to_string(), kept.len());
            kept.push(node);
        }

        let graph = Self { nodes: kept, index };
        violations.extend(graph.violations());

        if !violations.is_empty() {
            return Err(FenrirError::InvalidGraph(violations));
        }

        debug!("Triage graph validated ({} nodes)", graph.len());
        Ok(graph)
    }

    /// Build a graph from the exported JSON shape (array of node records)
    pub fn from_json(json: &str) -> Result<Self, FenrirError> {
        let records: Vec<NodeRecord> = serde_json::from_str(json)?;

        let mut nodes = Vec::with_capacity(records.len());
        let mut ambiguous = Vec::new();
        for record in records {
            match DecisionNode::try_from(record) {
                Ok(node) => nodes.push(node),
                Err(v) => ambiguous.push(v),
            }
        }

        if !ambiguous.is_empty() {
            return Err(FenrirError::InvalidGraph(ambiguous));
        }

        Self::from_nodes(nodes)
    }

    pub fn to_json_pretty(&self) -> Result<String, FenrirError> {
        Ok(serde_json::to_string_pretty(&self.nodes)?)
    }

    /// Structural problems of this graph. Empty means valid.
    pub fn violations(&self) -> Vec<GraphViolation> {
        let mut found = Vec::new();

        if !self.contains(ROOT_ID) {
            found.push(GraphViolation::MissingRoot);
        }

        for node in &self.nodes {
            if let DecisionNode::Branch { id, options, .. } = node {
                if options.is_empty() {
                    found.push(GraphViolation::EmptyBranch(id.clone()));
                }
                for option in options {
                    if !self.contains(&option.next_id) {
                        found.push(GraphViolation::DanglingOption {
                            node: id.clone(),
                            next_id: option.next_id.clone(),
                        });
                    }
                }
            }
        }

        // Orphans only make sense relative to an existing ROOT
        if self.contains(ROOT_ID) {
            let reachable = self.reachable_from(ROOT_ID);
            for node in &self.nodes {
                if !reachable.contains(node.id()) {
                    found.push(GraphViolation::Unreachable(node.id().to_string()));
                }
            }
        }

        found
    }

    /// Re-run the validation pass
    pub fn validate(&self) -> Result<(), FenrirError> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(FenrirError::InvalidGraph(violations))
        }
    }

    /// Pure lookup by id
    pub fn get_node(&self, id: &str) -> Result<&DecisionNode, FenrirError> {
        self.index
            .get(id)
            .map(|&i| &self.nodes[i])
            .ok_or_else(|| FenrirError::NodeNotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Nodes in definition order
    pub fn nodes(&self) -> impl Iterator<Item = &DecisionNode> {
        self.nodes.iter()
    }

    pub fn leaves(&self) -> impl Iterator<Item = &DecisionNode> {
        self.nodes.iter().filter(|n| n.is_leaf())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Ids reachable from `start` by following options (cycle-safe)
    pub fn reachable_from(&self, start: &str) -> HashSet<&str> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::new();

        if let Ok(node) = self.get_node(start) {
            seen.insert(node.id());
            queue.push_back(node.id());
        }

        while let Some(id) = queue.pop_front() {
            let Ok(node) = self.get_node(id) else { continue };
            for option in node.options() {
                if let Ok(next) = self.get_node(&option.next_id) {
                    if seen.insert(next.id()) {
                        queue.push_back(next.id());
                    }
                }
            }
        }

        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage::node::{OptionStyle, Severity, TriageOption};

    fn leaf(id: &str) -> DecisionNode {
        DecisionNode::leaf(id, "q", "T", Severity::Info, "c", "GO")
    }

    fn branch(id: &str, targets: &[&str]) -> DecisionNode {
        DecisionNode::branch(
            id,
            "q",
            targets
                .iter()
                .map(|t| TriageOption::new(*t, *t, OptionStyle::Neutral))
                .collect(),
        )
    }

    fn violations_of(nodes: Vec<DecisionNode>) -> Vec<GraphViolation> {
        match TriageGraph::from_nodes(nodes) {
            Err(FenrirError::InvalidGraph(v)) => v,
            other => panic!("expected invalid graph, got {:?}", other),
        }
    }

    #[test]
    fn test_minimal_graph_is_valid() {
        let graph = TriageGraph::from_nodes(vec![branch("ROOT", &["A"]), leaf("A")]).unwrap();
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.leaves().count(), 1);
        assert!(graph.validate().is_ok());
    }

    #[test]
    fn test_missing_root() {
        let v = violations_of(vec![leaf("A")]);
        assert_eq!(v, vec![GraphViolation::MissingRoot]);
    }

    #[test]
    fn test_dangling_option() {
        let v = violations_of(vec![branch("ROOT", &["A", "GHOST"]), leaf("A")]);
        assert_eq!(
            v,
            vec![GraphViolation::DanglingOption {
                node: "ROOT".into(),
                next_id: "GHOST".into()
            }]
        );
    }

    #[test]
    fn test_unreachable_node() {
        let v = violations_of(vec![branch("ROOT", &["A"]), leaf("A"), leaf("ORPHAN")]);
        assert_eq!(v, vec![GraphViolation::Unreachable("ORPHAN".into())]);
    }

    #[test]
    fn test_empty_branch() {
        let v = violations_of(vec![branch("ROOT", &["A"]), branch("A", &[])]);
        assert_eq!(v, vec![GraphViolation::EmptyBranch("A".into())]);
    }

    #[test]
    fn test_duplicate_id() {
        let v = violations_of(vec![branch("ROOT", &["A"]), leaf("A"), leaf("A")]);
        assert_eq!(v, vec![GraphViolation::DuplicateId("A".into())]);
    }

    #[test]
    fn test_cycles_are_tolerated() {
        let graph = TriageGraph::from_nodes(vec![
            branch("ROOT", &["A"]),
            branch("A", &["ROOT", "B"]),
            leaf("B"),
        ])
        .unwrap();
        assert_eq!(graph.reachable_from(ROOT_ID).len(), 3);
    }

    #[test]
    fn test_get_node_unknown_id() {
        let graph = TriageGraph::from_nodes(vec![branch("ROOT", &["A"]), leaf("A")]).unwrap();
        let err = graph.get_node("NOPE").unwrap_err();
        assert!(matches!(err, FenrirError::NodeNotFound(id) if id == "NOPE"));
    }

    #[test]
    fn test_from_json_rejects_ambiguous_record() {
        let json = r#"[
            {"id":"ROOT","question":"q","options":[]}
        ]"#;
        match TriageGraph::from_json(json) {
            Err(FenrirError::InvalidGraph(v)) => {
                assert_eq!(v, vec![GraphViolation::AmbiguousNode("ROOT".into())])
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_medical_tree_export_reloads() {
        let json = medical_tree().to_json_pretty().unwrap();
        let reloaded = TriageGraph::from_json(&json).unwrap();
        assert_eq!(reloaded.len(), medical_tree().len());
    }
}
