// src/commands/build.rs

//! Build command - meson setup + compile

use anyhow::{Context, Result};
use galley::store::Store;
use galley::workbench::Workbench;
use std::path::PathBuf;
use tracing::info;

/// Configure and compile a recipe's project
///
/// Consumes what generate wrote to disk; takes no option or profile
/// parameters of its own.
pub fn cmd_build(
    recipe: Option<PathBuf>,
    source: Option<PathBuf>,
    out: Option<PathBuf>,
    jobs: Option<u32>,
    meson: Option<PathBuf>,
) -> Result<()> {
    let recipe_path = super::recipe_path(recipe);
    let recipe = super::load_recipe(&recipe_path)?;
    println!(
        "Building {} version {}",
        recipe.package.name, recipe.package.version
    );

    let source_dir = super::source_dir(&recipe_path, source);
    let config = super::workbench_config(source_dir, out, jobs, meson);
    // The build phase never reads the store
    let store = Store::open(&Store::default_root())?;
    let workbench = Workbench::new(config, store);

    let report = workbench
        .build(&recipe)
        .with_context(|| format!("Failed to build {}", recipe.package.name))?;

    println!("\n[COMPLETE] Built in {}", workbench.config().build_dir().display());

    info!("Build phase finished ({} bytes of tool output)", report.log.len());
    Ok(())
}
