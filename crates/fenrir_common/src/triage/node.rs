//! Triage node types.
//!
//! A node is either a decision (`Branch`) with labelled options leading to
//! other nodes, or a terminal result (`Leaf`). On the wire both share the
//! flat record shape `{id, question, options, result?}`.

use crate::error::GraphViolation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Terminal urgency classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation hint for an option button. Never affects navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionStyle {
    Danger,
    Safe,
    #[default]
    Neutral,
}

/// One selectable answer of a decision node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageOption {
    pub label: String,
    #[serde(rename = "nextId")]
    pub next_id: String,
    #[serde(default)]
    pub style: OptionStyle,
}

impl TriageOption {
    pub fn new(label: impl Into<String>, next_id: impl Into<String>, style: OptionStyle) -> Self {
        Self {
            label: label.into(),
            next_id: next_id.into(),
            style,
        }
    }
}

/// Terminal payload shown when a path ends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageResult {
    pub title: String,
    pub severity: Severity,
    pub content: String,
    #[serde(rename = "actionItem")]
    pub action_item: String,
}

/// A node of the triage graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "NodeRecord", try_from = "NodeRecord")]
pub enum DecisionNode {
    Branch {
        id: String,
        question: String,
        options: Vec<TriageOption>,
    },
    Leaf {
        id: String,
        question: String,
        result: TriageResult,
    },
}

impl DecisionNode {
    pub fn branch(
        id: impl Into<String>,
        question: impl Into<String>,
        options: Vec<TriageOption>,
    ) -> Self {
        DecisionNode::Branch {
            id: id.into(),
            question: question.into(),
            options,
        }
    }

    pub fn leaf(
        id: impl Into<String>,
        question: impl Into<String>,
        title: impl Into<String>,
        severity: Severity,
        content: impl Into<String>,
        action_item: impl Into<String>,
    ) -> Self {
        DecisionNode::Leaf {
            id: id.into(),
            question: question.into(),
            result: TriageResult {
                title: title.into(),
                severity,
                content: content.into(),
                action_item: action_item.into(),
            },
        }
    }

    pub fn id(&self) -> &str {
        match self {
            DecisionNode::Branch { id, .. } | DecisionNode::Leaf { id, .. } => id,
        }
    }

    pub fn question(&self) -> &str {
        match self {
            DecisionNode::Branch { question, .. } | DecisionNode::Leaf { question, .. } => question,
        }
    }

    /// Options in menu order; empty for leaves
    pub fn options(&self) -> &[TriageOption] {
        match self {
            DecisionNode::Branch { options, .. } => options,
            DecisionNode::Leaf { .. } => &[],
        }
    }

    pub fn result(&self) -> Option<&TriageResult> {
        match self {
            DecisionNode::Branch { .. } => None,
            DecisionNode::Leaf { result, .. } => Some(result),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, DecisionNode::Leaf { .. })
    }

    /// True if one of this node's options leads to `next_id`
    pub fn offers(&self, next_id: &str) -> bool {
        self.options().iter().any(|o| o.next_id == next_id)
    }
}

/// Flat record shape shared with the exported JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: String,
    pub question: String,
    #[serde(default)]
    pub options: Vec<TriageOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<TriageResult>,
}

impl From<DecisionNode> for NodeRecord {
    fn from(node: DecisionNode) -> Self {
        match node {
            DecisionNode::Branch { id, question, options } => NodeRecord {
                id,
                question,
                options,
                result: None,
            },
            DecisionNode::Leaf { id, question, result } => NodeRecord {
                id,
                question,
                options: Vec::new(),
                result: Some(result),
            },
        }
    }
}

impl TryFrom<NodeRecord> for DecisionNode {
    type Error = GraphViolation;

    fn try_from(record: NodeRecord) -> Result<Self, Self::Error> {
        match (record.options.is_empty(), record.result) {
            (false, None) => Ok(DecisionNode::Branch {
                id: record.id,
                question: record.question,
                options: record.options,
            }),
            (true, Some(result)) => Ok(DecisionNode::Leaf {
                id: record.id,
                question: record.question,
                result,
            }),
            _ => Err(GraphViolation::AmbiguousNode(record.id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Severity::Critical).unwrap(), "\"CRITICAL\"");
        assert_eq!(Severity::Warning.to_string(), "WARNING");
    }

    #[test]
    fn test_leaf_exports_empty_options() {
        let node = DecisionNode::leaf("L", "q", "T", Severity::Info, "c", "GO");
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["options"], serde_json::json!([]));
        assert_eq!(json["result"]["actionItem"], "GO");
    }

    #[test]
    fn test_branch_record_without_result() {
        let json = r#"{"id":"B","question":"q","options":[{"label":"x","nextId":"L","style":"danger"}]}"#;
        let node: DecisionNode = serde_json::from_str(json).unwrap();
        assert!(!node.is_leaf());
        assert_eq!(node.options()[0].style, OptionStyle::Danger);
        assert!(node.offers("L"));
    }

    #[test]
    fn test_missing_style_defaults_to_neutral() {
        let json = r#"{"id":"B","question":"q","options":[{"label":"x","nextId":"L"}]}"#;
        let node: DecisionNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.options()[0].style, OptionStyle::Neutral);
    }

    #[test]
    fn test_record_with_both_options_and_result_is_rejected() {
        let json = r#"{
            "id":"MIXED","question":"q",
            "options":[{"label":"x","nextId":"L"}],
            "result":{"title":"t","severity":"INFO","content":"c","actionItem":"a"}
        }"#;
        let err = serde_json::from_str::<DecisionNode>(json).unwrap_err();
        assert!(err.to_string().contains("MIXED"));
    }

    #[test]
    fn test_record_with_neither_is_rejected() {
        let record = NodeRecord {
            id: "EMPTY".into(),
            question: "q".into(),
            options: vec![],
            result: None,
        };
        assert_eq!(
            DecisionNode::try_from(record),
            Err(GraphViolation::AmbiguousNode("EMPTY".into()))
        );
    }
}
