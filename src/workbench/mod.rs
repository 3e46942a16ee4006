// src/workbench/mod.rs

//! Workbench: lifecycle orchestration for a recipe
//!
//! The workbench drives the three lifecycle phases against a project
//! directory:
//! - generate: resolve options once, emit pkg-config and native files
//! - build: meson setup + compile against the generated native file
//! - package: meson install staged into a destination directory
//!
//! State transfer between phases is the working directory and the
//! generated files, nothing else: build and package take no option or
//! profile parameters. Execution is one synchronous sequence of
//! delegated calls per invocation.

mod config;

pub use config::{CookReport, PhaseReport, WorkbenchConfig};

use crate::error::{Error, Result};
use crate::generators::{write_native_file, write_pkg_config_files};
use crate::meson::Meson;
use crate::options::{OptionSet, OptionValue};
use crate::profile::Profile;
use crate::recipe::format::Recipe;
use crate::store::Store;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Drives the generate/build/package lifecycle
pub struct Workbench {
    config: WorkbenchConfig,
    store: Store,
}

impl Workbench {
    /// Create a workbench over a store with the given configuration
    pub fn new(config: WorkbenchConfig, store: Store) -> Self {
        Self { config, store }
    }

    /// The active configuration
    pub fn config(&self) -> &WorkbenchConfig {
        &self.config
    }

    /// Phase 1: emit dependency and toolchain files
    ///
    /// Options are resolved here, once; later phases consume what this
    /// writes to disk. Returns the list of written files.
    pub fn generate(
        &self,
        recipe: &Recipe,
        profile: &Profile,
        overrides: &[(String, OptionValue)],
    ) -> Result<Vec<PathBuf>> {
        info!(
            "Generating for {} version {} (os={}, arch={}, compiler={}, build_type={})",
            recipe.package.name,
            recipe.package.version,
            profile.os,
            profile.arch,
            profile.compiler,
            profile.build_type
        );

        let options = OptionSet::resolve(recipe, overrides)?;
        let generators_dir = self.config.generators_dir();

        let mut written = write_pkg_config_files(recipe, &self.store, &generators_dir)?;
        written.push(write_native_file(profile, &options, &generators_dir)?);

        Ok(written)
    }

    /// Phase 2: meson setup + compile
    ///
    /// Requires that generation has run: the native file must exist.
    pub fn build(&self, recipe: &Recipe) -> Result<PhaseReport> {
        let native_file = self.config.native_file();
        if !native_file.exists() {
            return Err(Error::NotFound(format!(
                "Native file {} (run generate first)",
                native_file.display()
            )));
        }

        info!("Building {}", recipe.package.name);

        let meson = self.meson()?;
        let build_dir = self.config.build_dir();
        fs::create_dir_all(&build_dir)?;

        let mut log = meson.setup(
            &build_dir,
            &self.config.source_dir,
            &native_file,
            self.config.install_prefix.as_deref(),
        )?;
        log.push_str(&meson.compile(&build_dir, self.config.jobs)?);

        Ok(PhaseReport {
            phase: "build".to_string(),
            log,
        })
    }

    /// Phase 3: meson install staged into destdir
    pub fn package(&self, recipe: &Recipe, destdir: &Path) -> Result<PhaseReport> {
        let build_dir = self.config.build_dir();
        if !build_dir.join("meson-private").exists() {
            return Err(Error::NotFound(format!(
                "Configured build directory {} (run build first)",
                build_dir.display()
            )));
        }

        info!(
            "Packaging {} into {}",
            recipe.package.name,
            destdir.display()
        );

        let meson = self.meson()?;
        fs::create_dir_all(destdir)?;
        let log = meson.install(&build_dir, Some(destdir))?;

        Ok(PhaseReport {
            phase: "package".to_string(),
            log,
        })
    }

    /// The full lifecycle: generate, build, package, in order
    pub fn cook(
        &self,
        recipe: &Recipe,
        profile: &Profile,
        overrides: &[(String, OptionValue)],
        destdir: Option<&Path>,
    ) -> Result<CookReport> {
        let written = self.generate(recipe, profile, overrides)?;
        let generate_report = PhaseReport {
            phase: "generate".to_string(),
            log: written
                .iter()
                .map(|p| format!("{}\n", p.display()))
                .collect(),
        };

        let build_report = self.build(recipe)?;

        let destdir = destdir
            .map(|d| d.to_path_buf())
            .unwrap_or_else(|| self.config.default_destdir());
        let package_report = self.package(recipe, &destdir)?;

        info!(
            "Cooked {} version {}",
            recipe.package.name, recipe.package.version
        );

        Ok(CookReport {
            phases: vec![generate_report, build_report, package_report],
            destdir,
        })
    }

    fn meson(&self) -> Result<Meson> {
        Meson::discover(self.config.meson_program.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::parser::parse_recipe;

    const RECIPE: &str = r#"
[package]
name = "test"
version = "1.0"

[build]

[options.shared]
values = [true, false]
default = false
"#;

    fn test_workbench(dir: &Path) -> Workbench {
        let store = Store::open(&dir.join("store")).unwrap();
        Workbench::new(WorkbenchConfig::for_source(dir), store)
    }

    #[test]
    fn test_generate_writes_native_file() {
        let dir = tempfile::tempdir().unwrap();
        let workbench = test_workbench(dir.path());
        let recipe = parse_recipe(RECIPE).unwrap();
        let profile = Profile::detect();

        let written = workbench.generate(&recipe, &profile, &[]).unwrap();

        // No pins, so the native file is the single written file
        assert_eq!(written.len(), 1);
        assert!(workbench.config().native_file().exists());
    }

    #[test]
    fn test_build_requires_generation_first() {
        let dir = tempfile::tempdir().unwrap();
        let workbench = test_workbench(dir.path());
        let recipe = parse_recipe(RECIPE).unwrap();

        assert!(matches!(
            workbench.build(&recipe),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_package_requires_configured_build_dir() {
        let dir = tempfile::tempdir().unwrap();
        let workbench = test_workbench(dir.path());
        let recipe = parse_recipe(RECIPE).unwrap();

        assert!(matches!(
            workbench.package(&recipe, &dir.path().join("dest")),
            Err(Error::NotFound(_))
        ));
    }
}
