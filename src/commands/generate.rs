// src/commands/generate.rs

//! Generate command - emit dependency and toolchain files

use anyhow::{Context, Result};
use galley::workbench::Workbench;
use std::path::PathBuf;
use tracing::info;

/// Emit pkg-config and native files for a recipe
pub fn cmd_generate(
    recipe: Option<PathBuf>,
    source: Option<PathBuf>,
    out: Option<PathBuf>,
    store: Option<PathBuf>,
    profile: Option<PathBuf>,
    settings: &[String],
    options: &[String],
) -> Result<()> {
    let recipe_path = super::recipe_path(recipe);
    println!("Reading recipe: {}", recipe_path.display());

    let recipe = super::load_recipe(&recipe_path)?;
    println!(
        "Recipe: {} version {}",
        recipe.package.name, recipe.package.version
    );

    let profile = super::load_profile(profile, settings)?;
    let overrides = super::option_overrides(options)?;
    let store = super::open_store(store)?;

    let source_dir = super::source_dir(&recipe_path, source);
    let config = super::workbench_config(source_dir, out, None, None);
    let workbench = Workbench::new(config, store);

    let written = workbench
        .generate(&recipe, &profile, &overrides)
        .with_context(|| format!("Failed to generate for {}", recipe.package.name))?;

    println!("\n[COMPLETE] Wrote {} file(s):", written.len());
    for path in &written {
        println!("  - {}", path.display());
    }

    info!("Generated {} file(s) for {}", written.len(), recipe.package.name);
    Ok(())
}
