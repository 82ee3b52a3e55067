//! Plain-text rendering of triage screens.
//!
//! ASCII markers only; colors are applied by the terminal front end.

use crate::triage::{DecisionNode, OptionStyle, Severity, TraversalState, TriageResult};

/// Footer shown under every triage screen
pub const DISCLAIMER: &str =
    "PROTOCOLO: TCCC / ESTÁNDAR CRUZ ROJA. NO SUSTITUYE ATENCIÓN PROFESIONAL.";

pub const SEPARATOR: &str = "----------------------------------------";

pub fn style_marker(style: OptionStyle) -> &'static str {
    match style {
        OptionStyle::Danger => "[!]",
        OptionStyle::Safe => "[+]",
        OptionStyle::Neutral => "[ ]",
    }
}

/// Path taken so far, e.g. "ROOT > BLEEDING_CHECK > TOURNIQUET_APPLY"
pub fn breadcrumb(state: &TraversalState) -> String {
    state
        .history
        .iter()
        .chain(std::iter::once(&state.current))
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" > ")
}

/// Per-line decoration applied while rendering a node
pub trait NodeStyle {
    fn option_line(&self, _style: OptionStyle, line: String) -> String {
        line
    }

    fn result_block(&self, _severity: Severity, block: String) -> String {
        block
    }
}

/// No decoration
pub struct PlainStyle;

impl NodeStyle for PlainStyle {}

/// Question plus numbered options, or the result block for leaves
pub fn render_node(node: &DecisionNode) -> String {
    render_node_with(node, &PlainStyle)
}

pub fn render_node_with<S: NodeStyle + ?Sized>(node: &DecisionNode, style: &S) -> String {
    let mut lines = vec![node.question().to_string(), String::new()];

    match node {
        DecisionNode::Branch { options, .. } => {
            for (i, option) in options.iter().enumerate() {
                let line = format!("  {} {}. {}", style_marker(option.style), i + 1, option.label);
                lines.push(style.option_line(option.style, line));
            }
        }
        DecisionNode::Leaf { result, .. } => {
            lines.push(style.result_block(result.severity, render_result(result)));
        }
    }

    lines.join("\n")
}

pub fn render_result(result: &TriageResult) -> String {
    format!(
        "[{}] {}\n{}\n{}\n>> {} <<",
        result.severity, result.title, SEPARATOR, result.content, result.action_item
    )
}
