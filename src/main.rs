//! docsmith CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use docsmith::cli::{Cli, Command, ConfigCommand};
use docsmith::commands;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "docsmith=debug"
    } else {
        "docsmith=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> docsmith::Result<()> {
    match cli.command {
        Command::Generate {
            dir,
            output,
            package,
            watch,
            style,
            examples,
            private,
        } => commands::generate::run(
            dir,
            output,
            package,
            watch,
            style,
            examples,
            private,
            cli.verbose,
            cli.config,
        ),
        Command::Init {
            directory,
            force,
            name,
        } => commands::init::run(directory, force, name),
        Command::Config { command } => match command {
            ConfigCommand::Show { file } => commands::config::show(file),
            ConfigCommand::Validate { file } => commands::config::validate(file),
        },
    }
}
