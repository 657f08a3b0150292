//! Application orchestration
//!
//! Wires configuration, discovery, extraction, generation, and watching
//! together. Per-package failures do not halt a batch run; they are
//! counted and reported at the end.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::discover;
use crate::docgen::{GenOptions, Generator};
use crate::enhance::Enhancer;
use crate::error::{DocsmithError, Result};
use crate::extract;
use crate::render;
use crate::watch::DocWatcher;

/// The docsmith application
pub struct App {
    config: Config,
    generator: Generator,
}

impl App {
    /// Build the application: merge file configuration, validate, and set
    /// up the (optional) enhancer
    pub fn new(mut config: Config) -> Result<App> {
        config.load_from_file()?;
        config.validate()?;

        let enhancer = Enhancer::from_env()?;
        if enhancer.is_none() {
            info!("GROQ_API_KEY not set; generating without AI enhancement");
        }

        Ok(App {
            config,
            generator: Generator::new(enhancer),
        })
    }

    pub fn run(&self) -> Result<()> {
        debug!(
            "starting documentation generation for {}",
            self.config.project_dir.display()
        );

        if self.config.watch {
            return self.run_watcher();
        }
        self.generate_once()
    }

    fn generate_once(&self) -> Result<()> {
        if !self.config.package_name.is_empty() {
            let package_path = self.config.project_dir.join(&self.config.package_name);
            return self.generate_package_docs(&package_path);
        }
        self.generate_all_packages()
    }

    fn generate_all_packages(&self) -> Result<()> {
        let packages =
            discover::find_go_packages(&self.config.project_dir, &self.config.exclude_dirs);

        if packages.is_empty() {
            info!("no Go packages found in project directory");
            return Ok(());
        }
        debug!("found {} packages to document", packages.len());

        let mut failed = 0;
        for package_path in &packages {
            if let Err(e) = self.generate_package_docs(package_path) {
                warn!("documenting package {}: {}", package_path.display(), e);
                failed += 1;
            }
        }

        if failed > 0 {
            return Err(DocsmithError::GenerationFailed { failed });
        }
        Ok(())
    }

    fn generate_package_docs(&self, package_path: &Path) -> Result<()> {
        debug!("analyzing package: {}", package_path.display());

        let pkg = extract::analyze_package(package_path)?;
        let doc = self.generator.generate(&pkg, &self.gen_options());

        let output_path = self.output_path(&pkg.name);
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output_path, doc)?;

        info!("generated documentation: {}", output_path.display());
        Ok(())
    }

    fn run_watcher(&self) -> Result<()> {
        // Initial generation; watch mode keeps going even when it fails
        if let Err(e) = self.generate_once() {
            warn!("initial generation failed: {}", e);
        }

        let packages =
            discover::find_go_packages(&self.config.project_dir, &self.config.exclude_dirs);
        let watcher = DocWatcher::new(packages, self.config.watch_interval_seconds);
        watcher.watch(|| self.generate_all_packages())
    }

    fn gen_options(&self) -> GenOptions {
        GenOptions {
            style: self.config.style,
            include_private: self.config.private,
            generate_examples: self.config.examples,
        }
    }

    fn output_path(&self, package_name: &str) -> PathBuf {
        let extension = render::renderer_for(self.config.style).file_extension();
        self.config
            .output_dir
            .join(format!("{}.{}", package_name, extension))
    }
}
