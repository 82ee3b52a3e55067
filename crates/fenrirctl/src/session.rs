//! Interactive triage session over any line-based input.
//!
//! Input per line:
//!   1..n        pick an option
//!   b           back one step
//!   r           restart at ROOT
//!   q           quit
//!   NODE_ID     jump to a node (must be offered by the question in strict mode)

use crate::output::{format_node, Palette};
use anyhow::Result;
use fenrir_common::render::{breadcrumb, DISCLAIMER, SEPARATOR};
use fenrir_common::triage::{NavigationMode, TraversalState, TriageGraph};
use std::io::{BufRead, Write};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Choose(usize),
    Back,
    Reset,
    Quit,
    Jump(String),
    Empty,
}

impl SessionCommand {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return SessionCommand::Empty;
        }
        if let Ok(n) = trimmed.parse::<usize>() {
            return SessionCommand::Choose(n);
        }
        match trimmed.to_lowercase().as_str() {
            "b" | "back" | "atras" | "atrás" => SessionCommand::Back,
            "r" | "reset" | "reinicio" => SessionCommand::Reset,
            "q" | "quit" | "exit" | "salir" => SessionCommand::Quit,
            _ => SessionCommand::Jump(trimmed.to_uppercase()),
        }
    }
}

pub struct TriageSession<'g> {
    graph: &'g TriageGraph,
    mode: NavigationMode,
    state: TraversalState,
}

impl<'g> TriageSession<'g> {
    pub fn new(graph: &'g TriageGraph, mode: NavigationMode) -> Self {
        Self {
            graph,
            mode,
            state: TraversalState::new(),
        }
    }

    pub fn state(&self) -> &TraversalState {
        &self.state
    }

    /// Apply one command. Returns false when the session should end.
    /// Rejected input leaves the state unchanged and is reported as Err.
    pub fn apply(&mut self, command: &SessionCommand) -> Result<bool> {
        let next = match command {
            SessionCommand::Quit => return Ok(false),
            SessionCommand::Empty => return Ok(true),
            SessionCommand::Choose(position) => self.state.choose(self.graph, *position)?,
            SessionCommand::Jump(id) => self.state.advance_with(self.graph, id, self.mode)?,
            SessionCommand::Back => self.state.go_back(),
            SessionCommand::Reset => self.state.reset(),
        };
        debug!("Triage: {:?} -> {}", command, next.current);
        self.state = next;
        Ok(true)
    }

    /// Full screen for the current node
    pub fn screen(&self, palette: Palette) -> Result<String> {
        let node = self.state.current_node(self.graph)?;

        let mut hints = Vec::new();
        if !node.options().is_empty() {
            hints.push(format!("[1-{}] elegir", node.options().len()));
        }
        if self.state.can_go_back() {
            hints.push("[b] atrás".to_string());
            hints.push("[r] reinicio".to_string());
        }
        hints.push("[q] salir".to_string());

        Ok(format!(
            "{}\n{}\n\n{}\n\n{}\n{}\n{}",
            palette.dim(&breadcrumb(&self.state)),
            SEPARATOR,
            format_node(node, palette),
            SEPARATOR,
            hints.join("  "),
            palette.dim(DISCLAIMER),
        ))
    }
}

/// Drive a session until quit or end of input; returns the final state
pub fn run<R: BufRead, W: Write>(
    graph: &TriageGraph,
    mode: NavigationMode,
    palette: Palette,
    input: R,
    mut out: W,
) -> Result<TraversalState> {
    let mut session = TriageSession::new(graph, mode);
    writeln!(out, "{}", session.screen(palette)?)?;
    write!(out, "> ")?;
    out.flush()?;

    for line in input.lines() {
        let command = SessionCommand::parse(&line?);
        match session.apply(&command) {
            Ok(false) => break,
            Ok(true) => {}
            Err(e) => writeln!(out, "[ERROR] {}", palette.error(&e.to_string()))?,
        }
        writeln!(out)?;
        writeln!(out, "{}", session.screen(palette)?)?;
        write!(out, "> ")?;
        out.flush()?;
    }

    writeln!(out)?;
    Ok(session.state().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fenrir_common::medical_tree;

    #[test]
    fn test_parse_commands() {
        assert_eq!(SessionCommand::parse(" 3 \n"), SessionCommand::Choose(3));
        assert_eq!(SessionCommand::parse("B"), SessionCommand::Back);
        assert_eq!(SessionCommand::parse("atrás"), SessionCommand::Back);
        assert_eq!(SessionCommand::parse("r"), SessionCommand::Reset);
        assert_eq!(SessionCommand::parse("salir"), SessionCommand::Quit);
        assert_eq!(SessionCommand::parse(""), SessionCommand::Empty);
        assert_eq!(
            SessionCommand::parse("burn_check"),
            SessionCommand::Jump("BURN_CHECK".to_string())
        );
    }

    #[test]
    fn test_invalid_choice_keeps_state() {
        let mut session = TriageSession::new(medical_tree(), NavigationMode::Lenient);
        assert!(session.apply(&SessionCommand::Choose(42)).is_err());
        assert!(session.state().is_at_root());
    }

    #[test]
    fn test_strict_jump_rejected() {
        let mut session = TriageSession::new(medical_tree(), NavigationMode::Strict);
        assert!(session.apply(&SessionCommand::Jump("START_CPR".into())).is_err());
        assert!(session.apply(&SessionCommand::Jump("AIRWAY_CHECK".into())).unwrap());
        assert_eq!(session.state().current, "AIRWAY_CHECK");
    }

    #[test]
    fn test_root_screen_has_no_back_hint() {
        let session = TriageSession::new(medical_tree(), NavigationMode::Lenient);
        let screen = session.screen(Palette::plain()).unwrap();
        assert!(screen.starts_with("ROOT\n"));
        assert!(screen.contains("[1-8] elegir"));
        assert!(!screen.contains("[b]"));
        assert!(screen.ends_with(DISCLAIMER));
    }
}
