//! Command handlers

use crate::output::{format_node, Palette};
use crate::session;
use anyhow::{bail, Result};
use fenrir_common::chat::{route_message, ChatRoute};
use fenrir_common::render::DISCLAIMER;
use fenrir_common::triage::NavigationMode;
use fenrir_common::weather::weather_tip;
use fenrir_common::{medical_tree, FenrirConfig, NetworkQuality};
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;

/// Interactive triage on stdin/stdout
pub fn triage(config: &FenrirConfig, palette: Palette, strict: bool) -> Result<()> {
    let mode = if strict {
        NavigationMode::Strict
    } else {
        config.triage.navigation_mode()
    };
    info!("Starting triage session ({:?})", mode);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let state = session::run(medical_tree(), mode, palette, stdin.lock(), stdout.lock())?;
    info!("Triage session ended at {} after {} steps", state.current, state.depth());
    Ok(())
}

pub fn show(id: &str, json: bool, palette: Palette) -> Result<()> {
    let node = medical_tree().get_node(&id.to_uppercase())?;

    if json {
        println!("{}", serde_json::to_string_pretty(node)?);
    } else {
        println!("[{}]", node.id());
        println!("{}", format_node(node, palette));
        println!();
        println!("{}", palette.dim(DISCLAIMER));
    }
    Ok(())
}

pub fn ask(text: &[String], online: bool) -> Result<()> {
    let message = text.join(" ");
    let quality = NetworkQuality::from_downlink(None, online);

    let route = route_message(quality, &message);
    if route == ChatRoute::Ignored {
        bail!("Empty message");
    }

    match route.reply() {
        Some(reply) => println!("{}", reply),
        None => println!("[ONLINE] Signal {}: message goes to the remote assistant.", quality),
    }
    Ok(())
}

pub fn tip(temp: &str, condition: &str, seed: Option<u64>) -> Result<()> {
    let seed = seed.unwrap_or_else(clock_seed);
    let (category, tip) = weather_tip(temp, condition, seed);
    info!("Weather category {:?} (seed {})", category, seed);
    println!("{}", tip);
    Ok(())
}

pub fn validate() -> Result<()> {
    let graph = medical_tree();
    graph.validate()?;

    println!(
        "[OK] triage graph valid: {} nodes, {} results, all reachable from ROOT",
        graph.len(),
        graph.leaves().count()
    );
    Ok(())
}

pub fn export() -> Result<()> {
    println!("{}", medical_tree().to_json_pretty()?);
    Ok(())
}

/// `fenrirctl config show`
pub fn config_show(config: &FenrirConfig, path: Option<&Path>) -> Result<()> {
    println!("[output]");
    println!("  color = {:?}", config.output.color.as_str());
    println!("[triage]");
    println!("  strict_navigation = {}", config.triage.strict_navigation);
    println!();

    let path = config_target(path)?;
    if path.exists() {
        println!("Config file: {}", path.display());
    } else {
        println!("Config file: {} (using defaults, file not created yet)", path.display());
    }
    Ok(())
}

/// `fenrirctl config set KEY VALUE`, written back to the file it came from
pub fn config_set(config: &FenrirConfig, path: Option<&Path>, key: &str, value: &str) -> Result<()> {
    let mut config = config.clone();
    config.set(key, value)?;

    let path = config_target(path)?;
    config.save_to(&path)?;
    info!("Set {} = {} in {}", key, value, path.display());
    println!("[OK] {} = {} ({})", key, value, path.display());
    Ok(())
}

fn config_target(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path.to_path_buf()),
        None => FenrirConfig::user_config_path(),
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
