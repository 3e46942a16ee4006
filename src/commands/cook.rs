// src/commands/cook.rs

//! Cook command - the full lifecycle in order

use anyhow::{Context, Result};
use galley::workbench::Workbench;
use std::path::PathBuf;
use tracing::info;

/// Run generate, build, and package for a recipe
#[allow(clippy::too_many_arguments)]
pub fn cmd_cook(
    recipe: Option<PathBuf>,
    source: Option<PathBuf>,
    out: Option<PathBuf>,
    store: Option<PathBuf>,
    profile: Option<PathBuf>,
    settings: &[String],
    options: &[String],
    destdir: Option<PathBuf>,
    jobs: Option<u32>,
    meson: Option<PathBuf>,
) -> Result<()> {
    let recipe_path = super::recipe_path(recipe);
    println!("Reading recipe: {}", recipe_path.display());

    let recipe = super::load_recipe(&recipe_path)?;
    println!(
        "Cooking {} version {}",
        recipe.package.name, recipe.package.version
    );

    let profile = super::load_profile(profile, settings)?;
    let overrides = super::option_overrides(options)?;
    let store = super::open_store(store)?;

    let source_dir = super::source_dir(&recipe_path, source);
    let config = super::workbench_config(source_dir, out, jobs, meson);
    let workbench = Workbench::new(config, store);

    let report = workbench
        .cook(&recipe, &profile, &overrides, destdir.as_deref())
        .with_context(|| format!("Failed to cook {}", recipe.package.name))?;

    println!("\n[COMPLETE] Phases run:");
    for phase in &report.phases {
        println!("  - {}", phase.phase);
    }
    println!("Installed into {}", report.destdir.display());

    info!(
        "Cooked {} through {} phase(s)",
        recipe.package.name,
        report.phases.len()
    );
    Ok(())
}
