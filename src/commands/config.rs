use std::path::{Path, PathBuf};

use anyhow::Result;
use calevent_http::ClientConfig;
use owo_colors::OwoColorize;

use super::load_config;

fn resolve(config_path: Option<&Path>) -> Result<PathBuf> {
    match config_path {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(ClientConfig::config_path()?),
    }
}

pub fn init(config_path: Option<&Path>) -> Result<()> {
    let path = resolve(config_path)?;

    if path.exists() {
        println!("Config already exists at {}", path.display());
        return Ok(());
    }

    ClientConfig::create_default_config(&path)?;
    println!("{} Created {}", "✓".green(), path.display());
    Ok(())
}

pub fn show(config_path: Option<&Path>) -> Result<()> {
    let path = resolve(config_path)?;
    let config = load_config(Some(&path))?;

    println!("{}", path.display().dimmed());
    println!("api_server   = {}", config.api_server);
    println!(
        "access_token = {}",
        if config.access_token.is_empty() {
            "(not set)".red().to_string()
        } else {
            "(set)".green().to_string()
        }
    );
    println!("timeout_secs = {}", config.timeout_secs);
    Ok(())
}
