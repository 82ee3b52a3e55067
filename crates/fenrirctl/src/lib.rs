//! Fenrir Control - terminal front end for the offline survival core.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod output;
pub mod session;

use anyhow::Result;
use cli::{Cli, Commands, ConfigAction};
use fenrir_common::FenrirConfig;
use output::Palette;

/// Load config: explicit path, then the default search chain
pub fn load_config(cli: &Cli) -> Result<FenrirConfig> {
    match &cli.config {
        Some(path) => FenrirConfig::load_from(path),
        None => FenrirConfig::load(),
    }
}

pub fn dispatch(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let palette = Palette::from_mode(config.output.color);

    match cli.command {
        Commands::Triage { strict } => commands::triage(&config, palette, strict),
        Commands::Show { id, json } => commands::show(&id, json, palette),
        Commands::Ask { online, text } => commands::ask(&text, online),
        Commands::Tip { temp, condition, seed } => commands::tip(&temp, &condition, seed),
        Commands::Validate => commands::validate(),
        Commands::Export => commands::export(),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config_show(&config, cli.config.as_deref()),
            ConfigAction::Set { key, value } => {
                commands::config_set(&config, cli.config.as_deref(), &key, &value)
            }
        },
    }
}
