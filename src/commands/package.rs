// src/commands/package.rs

//! Package command - meson install into a staging directory

use anyhow::{Context, Result};
use galley::store::Store;
use galley::workbench::Workbench;
use std::path::PathBuf;
use tracing::info;

/// Install the configured build into a destination directory
pub fn cmd_package(
    recipe: Option<PathBuf>,
    source: Option<PathBuf>,
    out: Option<PathBuf>,
    destdir: Option<PathBuf>,
    meson: Option<PathBuf>,
) -> Result<()> {
    let recipe_path = super::recipe_path(recipe);
    let recipe = super::load_recipe(&recipe_path)?;

    let source_dir = super::source_dir(&recipe_path, source);
    let config = super::workbench_config(source_dir, out, None, meson);
    let destdir = destdir.unwrap_or_else(|| config.default_destdir());

    println!(
        "Packaging {} version {} into {}",
        recipe.package.name,
        recipe.package.version,
        destdir.display()
    );

    // The package phase never reads the store
    let store = Store::open(&Store::default_root())?;
    let workbench = Workbench::new(config, store);

    workbench
        .package(&recipe, &destdir)
        .with_context(|| format!("Failed to package {}", recipe.package.name))?;

    println!("\n[COMPLETE] Installed into {}", destdir.display());

    info!("Packaged {} into {}", recipe.package.name, destdir.display());
    Ok(())
}
