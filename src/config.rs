//! Application configuration
//!
//! CLI flags seed the configuration; an optional JSON file
//! (`docsmith.json`) fills in whatever the flags left blank.

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{DocsmithError, Result};

/// Output documentation style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocStyle {
    /// GitHub-flavored Markdown
    #[default]
    Markdown,
    /// Standalone HTML page
    Html,
    /// godoc-style plain text
    Godoc,
}

impl DocStyle {
    /// File extension for generated output
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Html => "html",
            Self::Godoc => "txt",
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub project_dir: PathBuf,
    pub output_dir: PathBuf,
    #[serde(skip)]
    pub config_file: Option<PathBuf>,
    pub package_name: String,
    pub watch: bool,
    pub style: DocStyle,
    pub examples: bool,
    pub private: bool,
    pub verbose: bool,

    pub project_name: String,
    pub project_description: String,
    pub exclude_dirs: Vec<String>,
    pub watch_interval_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            project_dir: PathBuf::from("."),
            output_dir: PathBuf::from("./docs"),
            config_file: None,
            package_name: String::new(),
            watch: false,
            style: DocStyle::Markdown,
            examples: true,
            private: false,
            verbose: false,
            project_name: String::new(),
            project_description: String::new(),
            exclude_dirs: default_exclude_dirs(),
            watch_interval_seconds: 5,
        }
    }
}

fn default_exclude_dirs() -> Vec<String> {
    ["vendor", ".git", "testdata", "node_modules"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Config {
    /// Merge values from the configured JSON file, keeping CLI-provided
    /// values; a missing `config_file` is a no-op
    pub fn load_from_file(&mut self) -> Result<()> {
        let Some(path) = self.config_file.clone() else {
            return Ok(());
        };

        let data = fs::read_to_string(&path).map_err(|e| DocsmithError::Config {
            message: format!("read config file {:?}: {}", path, e),
        })?;
        let file_config: Config =
            serde_json::from_str(&data).map_err(|e| DocsmithError::Config {
                message: format!("parse config file {:?}: {}", path, e),
            })?;

        self.merge_from(file_config);
        Ok(())
    }

    /// Validate the configuration and fill remaining defaults
    pub fn validate(&mut self) -> Result<()> {
        if !self.project_dir.exists() {
            return Err(DocsmithError::Config {
                message: format!("project directory {:?} does not exist", self.project_dir),
            });
        }

        self.project_dir = absolutize(&self.project_dir)?;
        self.output_dir = absolutize(&self.output_dir)?;

        if self.watch_interval_seconds == 0 {
            self.watch_interval_seconds = 5;
        }
        if self.exclude_dirs.is_empty() {
            self.exclude_dirs = default_exclude_dirs();
        }

        Ok(())
    }

    /// File-config values fill blanks left by the CLI; the exclusion list
    /// and watch interval come from the file when it sets them
    fn merge_from(&mut self, other: Config) {
        if self.project_name.is_empty() && !other.project_name.is_empty() {
            self.project_name = other.project_name;
        }
        if self.project_description.is_empty() && !other.project_description.is_empty() {
            self.project_description = other.project_description;
        }
        if !other.exclude_dirs.is_empty() {
            self.exclude_dirs = other.exclude_dirs;
        }
        if other.watch_interval_seconds > 0 {
            self.watch_interval_seconds = other.watch_interval_seconds;
        }
    }
}

fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    Ok(std::env::current_dir()?.join(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.style, DocStyle::Markdown);
        assert!(config.examples);
        assert!(!config.private);
        assert_eq!(config.watch_interval_seconds, 5);
        assert!(config.exclude_dirs.contains(&"vendor".to_string()));
    }

    #[test]
    fn test_validate_rejects_missing_project_dir() {
        let mut config = Config {
            project_dir: PathBuf::from("/definitely/not/here"),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(DocsmithError::Config { .. })
        ));
    }

    #[test]
    fn test_validate_restores_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let mut config = Config {
            project_dir: temp.path().to_path_buf(),
            watch_interval_seconds: 0,
            exclude_dirs: Vec::new(),
            ..Default::default()
        };
        config.validate().unwrap();
        assert_eq!(config.watch_interval_seconds, 5);
        assert!(!config.exclude_dirs.is_empty());
        assert!(config.output_dir.is_absolute());
    }

    #[test]
    fn test_file_merge_keeps_cli_values() {
        let temp = tempfile::tempdir().unwrap();
        let config_path = temp.path().join("docsmith.json");
        let mut file = std::fs::File::create(&config_path).unwrap();
        file.write_all(
            br#"{"project_name": "from-file", "watch_interval_seconds": 9, "exclude_dirs": ["gen"]}"#,
        )
        .unwrap();

        let mut config = Config {
            project_name: "from-cli".to_string(),
            config_file: Some(config_path),
            ..Default::default()
        };
        config.load_from_file().unwrap();

        assert_eq!(config.project_name, "from-cli");
        assert_eq!(config.watch_interval_seconds, 9);
        assert_eq!(config.exclude_dirs, vec!["gen".to_string()]);
    }

    #[test]
    fn test_file_merge_fills_blanks() {
        let temp = tempfile::tempdir().unwrap();
        let config_path = temp.path().join("docsmith.json");
        std::fs::write(
            &config_path,
            r#"{"project_name": "widget", "project_description": "makes widgets"}"#,
        )
        .unwrap();

        let mut config = Config {
            config_file: Some(config_path),
            ..Default::default()
        };
        config.load_from_file().unwrap();

        assert_eq!(config.project_name, "widget");
        assert_eq!(config.project_description, "makes widgets");
    }

    #[test]
    fn test_style_serde_roundtrip() {
        let json = serde_json::to_string(&DocStyle::Godoc).unwrap();
        assert_eq!(json, "\"godoc\"");
        let style: DocStyle = serde_json::from_str("\"html\"").unwrap();
        assert_eq!(style, DocStyle::Html);
    }
}
