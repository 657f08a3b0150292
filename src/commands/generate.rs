//! `docsmith generate` — analyze packages and write documentation

use std::path::PathBuf;

use crate::app::App;
use crate::config::{Config, DocStyle};
use crate::error::Result;

#[allow(clippy::too_many_arguments)]
pub fn run(
    dir: PathBuf,
    output: PathBuf,
    package: Option<String>,
    watch: bool,
    style: DocStyle,
    examples: bool,
    private: bool,
    verbose: bool,
    config_file: Option<PathBuf>,
) -> Result<()> {
    let config = Config {
        project_dir: dir,
        output_dir: output,
        config_file,
        package_name: package.unwrap_or_default(),
        watch,
        style,
        examples,
        private,
        verbose,
        ..Default::default()
    };

    App::new(config)?.run()
}
