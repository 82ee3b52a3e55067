//! Fenrir configuration.
//!
//! Config file: ~/.config/fenrir/config.toml or /etc/fenrir/config.toml

use crate::triage::NavigationMode;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Color display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Auto-detect based on terminal capabilities
    #[default]
    Auto,
    /// Force basic ANSI colors
    Basic,
    /// Plain text
    None,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// Triage navigation settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriageConfig {
    /// Reject ids that the current node does not offer.
    /// Can also be enabled via FENRIR_STRICT=1
    #[serde(default)]
    pub strict_navigation: bool,
}

impl TriageConfig {
    pub fn navigation_mode(&self) -> NavigationMode {
        let env_strict = std::env::var("FENRIR_STRICT").map(|v| v == "1").unwrap_or(false);
        NavigationMode::from_strict(self.strict_navigation || env_strict)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FenrirConfig {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub triage: TriageConfig,
}

impl FenrirConfig {
    /// ~/.config/fenrir/config.toml, honoring XDG_CONFIG_HOME
    pub fn user_config_path() -> Result<PathBuf> {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            if !xdg.is_empty() {
                return Ok(Path::new(&xdg).join("fenrir").join("config.toml"));
            }
        }

        let home = std::env::var("HOME").context("Cannot determine home directory")?;
        Ok(Path::new(&home)
            .join(".config")
            .join("fenrir")
            .join("config.toml"))
    }

    pub fn system_config_path() -> PathBuf {
        PathBuf::from("/etc/fenrir/config.toml")
    }

    /// Load configuration
    ///
    /// Priority:
    /// 1. User config
    /// 2. System config
    /// 3. Defaults
    pub fn load() -> Result<Self> {
        if let Ok(user_path) = Self::user_config_path() {
            if user_path.exists() {
                return Self::load_from(&user_path);
            }
        }

        let system_path = Self::system_config_path();
        if system_path.exists() {
            return Self::load_from(&system_path);
        }

        Ok(Self::default())
    }

    /// Load from an explicit file; a missing file is an error here
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: FenrirConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let toml_string =
            toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        fs::write(path, toml_string).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    pub fn set_color_mode(&mut self, mode: &str) -> Result<()> {
        self.output.color = match mode.to_lowercase().as_str() {
            "auto" => ColorMode::Auto,
            "basic" => ColorMode::Basic,
            "none" | "off" | "disabled" => ColorMode::None,
            _ => anyhow::bail!("Invalid color mode: '{}'. Valid values: auto, basic, none", mode),
        };
        Ok(())
    }

    pub fn set_strict_navigation(&mut self, value: &str) -> Result<()> {
        self.triage.strict_navigation = match value.to_lowercase().as_str() {
            "true" | "on" | "yes" | "1" => true,
            "false" | "off" | "no" | "0" => false,
            _ => anyhow::bail!("Invalid boolean: '{}'. Valid values: true, false", value),
        };
        Ok(())
    }

    /// Update one setting by its dotted key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key.to_lowercase().as_str() {
            "output.color" | "color" => self.set_color_mode(value),
            "triage.strict_navigation" | "strict_navigation" | "strict" => {
                self.set_strict_navigation(value)
            }
            _ => anyhow::bail!(
                "Unknown configuration key: '{}'\n\nValid keys:\n  output.color\n  triage.strict_navigation",
                key
            ),
        }
    }
}

impl ColorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Auto => "auto",
            ColorMode::Basic => "basic",
            ColorMode::None => "none",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FenrirConfig::default();
        assert_eq!(config.output.color, ColorMode::Auto);
        assert!(!config.triage.strict_navigation);
    }

    #[test]
    fn test_color_mode_parsing() {
        let mut config = FenrirConfig::default();

        config.set_color_mode("basic").unwrap();
        assert_eq!(config.output.color, ColorMode::Basic);

        config.set_color_mode("OFF").unwrap();
        assert_eq!(config.output.color, ColorMode::None);

        assert!(config.set_color_mode("rainbow").is_err());
    }

    #[test]
    fn test_set_by_key() {
        let mut config = FenrirConfig::default();

        config.set("triage.strict_navigation", "on").unwrap();
        assert!(config.triage.strict_navigation);
        assert_eq!(config.triage.navigation_mode(), NavigationMode::Strict);

        config.set("color", "none").unwrap();
        assert_eq!(config.output.color, ColorMode::None);

        assert!(config.set("strict", "maybe").is_err());
        assert!(config.set("output.emojis", "on").is_err());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: FenrirConfig = toml::from_str("[triage]\nstrict_navigation = true\n").unwrap();
        assert!(config.triage.strict_navigation);
        assert_eq!(config.output.color, ColorMode::Auto);
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = FenrirConfig::default();
        config.set_color_mode("none").unwrap();
        config.triage.strict_navigation = true;
        config.save_to(&path).unwrap();

        let loaded = FenrirConfig::load_from(&path).unwrap();
        assert_eq!(loaded.output.color, ColorMode::None);
        assert!(loaded.triage.strict_navigation);
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FenrirConfig::load_from(&dir.path().join("absent.toml")).is_err());
    }

    #[test]
    fn test_invalid_toml_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[output]\ncolor = \"plaid\"\n").unwrap();
        let err = FenrirConfig::load_from(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("config.toml"));
    }
}
