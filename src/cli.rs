//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DocStyle;

/// AI-enhanced documentation generator for Go packages
#[derive(Parser, Debug)]
#[command(name = "docsmith")]
#[command(about = "Analyzes Go source code and generates enhanced documentation")]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to configuration file (JSON)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate documentation for Go packages
    #[command(visible_aliases = ["gen", "g"])]
    Generate {
        /// Project directory to analyze
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Output directory for documentation
        #[arg(short, long, default_value = "./docs")]
        output: PathBuf,

        /// Specific package to document (relative to project dir)
        #[arg(short, long)]
        package: Option<String>,

        /// Watch for file changes and regenerate documentation
        #[arg(short, long)]
        watch: bool,

        /// Documentation style
        #[arg(short, long, default_value = "markdown", value_enum)]
        style: DocStyle,

        /// Generate AI-enhanced examples
        #[arg(long, default_value_t = true, action = ArgAction::Set)]
        examples: bool,

        /// Include private (unexported) symbols
        #[arg(long)]
        private: bool,
    },

    /// Initialize a new docsmith configuration file
    Init {
        /// Target directory (defaults to the current directory)
        directory: Option<PathBuf>,

        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,

        /// Project name for the configuration
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Config file to show (defaults to ./docsmith.json)
        file: Option<PathBuf>,
    },
    /// Validate a configuration file
    Validate {
        /// Config file to validate (defaults to ./docsmith.json)
        file: Option<PathBuf>,
    },
}
