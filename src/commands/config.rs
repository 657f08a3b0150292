//! `docsmith config` — show and validate configuration files

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{DocsmithError, Result};

pub fn show(file: Option<PathBuf>) -> Result<()> {
    let config_path = config_path(file);
    let config = load(&config_path)?;

    println!("Configuration from {}:\n", config_path.display());
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

pub fn validate(file: Option<PathBuf>) -> Result<()> {
    let config_path = config_path(file);
    let mut config = load(&config_path)?;

    if let Err(e) = config.validate() {
        println!("❌ Configuration validation failed: {}", e);
        return Err(e);
    }

    println!("✓ Configuration file {} is valid", config_path.display());
    Ok(())
}

fn config_path(file: Option<PathBuf>) -> PathBuf {
    file.unwrap_or_else(|| PathBuf::from("./docsmith.json"))
}

fn load(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Err(DocsmithError::Config {
            message: format!("configuration file not found: {}", path.display()),
        });
    }

    let mut config = Config {
        config_file: Some(path.to_path_buf()),
        ..Default::default()
    };
    config.load_from_file()?;
    Ok(config)
}
