//! `docsmith init` — write a default configuration file

use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::{DocsmithError, Result};

pub fn run(directory: Option<PathBuf>, force: bool, name: Option<String>) -> Result<()> {
    let target = directory.unwrap_or_else(|| PathBuf::from("."));
    let target = if target.is_absolute() {
        target
    } else {
        std::env::current_dir()?.join(&target)
    };
    fs::create_dir_all(&target)?;

    let config_path = target.join("docsmith.json");
    if config_path.exists() && !force {
        return Err(DocsmithError::Config {
            message: format!(
                "configuration file already exists at {} (use --force to overwrite)",
                config_path.display()
            ),
        });
    }

    let mut config = Config {
        project_dir: target.clone(),
        ..Default::default()
    };
    config.project_name = name.unwrap_or_else(|| {
        target
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "project".to_string())
    });
    config.project_description = format!("Documentation for {}", config.project_name);

    let data = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, data)?;

    println!("✓ Created configuration file: {}", config_path.display());
    println!("✓ Project name: {}", config.project_name);
    println!("✓ Output directory: {}", config.output_dir.display());
    println!("\nYou can now run 'docsmith generate' to create documentation.");
    println!("Edit docsmith.json to customize your documentation settings.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_config() {
        let temp = tempfile::tempdir().unwrap();
        run(
            Some(temp.path().to_path_buf()),
            false,
            Some("widget".to_string()),
        )
        .unwrap();

        let data = fs::read_to_string(temp.path().join("docsmith.json")).unwrap();
        let config: Config = serde_json::from_str(&data).unwrap();
        assert_eq!(config.project_name, "widget");
        assert_eq!(config.project_description, "Documentation for widget");
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("docsmith.json"), "{}").unwrap();

        let err = run(Some(temp.path().to_path_buf()), false, None).unwrap_err();
        assert!(matches!(err, DocsmithError::Config { .. }));

        // --force replaces it
        run(Some(temp.path().to_path_buf()), true, None).unwrap();
    }
}
