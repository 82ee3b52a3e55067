//! Output formatting - ASCII text with optional ANSI colors

use fenrir_common::render::{render_node_with, NodeStyle};
use fenrir_common::triage::{DecisionNode, OptionStyle, Severity};
use fenrir_common::ColorMode;
use owo_colors::OwoColorize;
use std::io::IsTerminal;

/// Whether to emit ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub color: bool,
}

impl Palette {
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Auto honors NO_COLOR and only colors a terminal
    pub fn from_mode(mode: ColorMode) -> Self {
        let color = match mode {
            ColorMode::None => false,
            ColorMode::Basic => true,
            ColorMode::Auto => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
            }
        };
        Self { color }
    }

    pub fn severity(&self, severity: Severity, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        match severity {
            Severity::Critical => text.bright_red().bold().to_string(),
            Severity::Warning => text.yellow().to_string(),
            Severity::Info => text.cyan().to_string(),
        }
    }

    pub fn option(&self, style: OptionStyle, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        match style {
            OptionStyle::Danger => text.red().to_string(),
            OptionStyle::Safe => text.green().to_string(),
            OptionStyle::Neutral => text.to_string(),
        }
    }

    pub fn dim(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn error(&self, text: &str) -> String {
        if self.color {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }
}

impl NodeStyle for Palette {
    fn option_line(&self, style: OptionStyle, line: String) -> String {
        self.option(style, &line)
    }

    fn result_block(&self, severity: Severity, block: String) -> String {
        self.severity(severity, &block)
    }
}

/// Node body: question and numbered options, or the colored result block
pub fn format_node(node: &DecisionNode, palette: Palette) -> String {
    render_node_with(node, &palette)
}

/// Display an error on stderr
pub fn display_error(message: &str, palette: Palette) {
    eprintln!("[ERROR] {}", palette.error(message));
}

#[cfg(test)]
mod tests {
    use super::*;
    use fenrir_common::medical_tree;
    use fenrir_common::render::render_node;

    #[test]
    fn test_plain_output_matches_library_render() {
        for node in medical_tree().nodes() {
            assert_eq!(format_node(node, Palette::plain()), render_node(node));
        }
    }

    #[test]
    fn test_colored_options_keep_layout() {
        let node = medical_tree().get_node("BLEEDING_CHECK").unwrap();
        let text = format_node(node, Palette { color: true });
        assert!(text.contains('\u{1b}'));
        assert!(text.contains("[!] 2. "));
        assert_eq!(text.lines().count(), render_node(node).lines().count());
    }

    #[test]
    fn test_none_mode_disables_color() {
        assert!(!Palette::from_mode(ColorMode::None).color);
        assert!(Palette::from_mode(ColorMode::Basic).color);
    }

    #[test]
    fn test_colored_critical_contains_ansi() {
        let text = Palette { color: true }.severity(Severity::Critical, "X");
        assert!(text.contains('\u{1b}'));
        assert!(text.contains('X'));
    }
}
