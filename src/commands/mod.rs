// src/commands/mod.rs

//! Command implementations for the galley CLI
//!
//! Each `cmd_*` function loads what it needs, delegates to the library,
//! and prints user-facing output. Shared recipe/profile/store loading
//! helpers live here.

mod build;
mod check;
mod completions;
mod cook;
mod generate;
mod inspect;
mod package;
mod store;

pub use build::cmd_build;
pub use check::cmd_check;
pub use completions::cmd_completions;
pub use cook::cmd_cook;
pub use generate::cmd_generate;
pub use inspect::cmd_inspect;
pub use package::cmd_package;
pub use store::{cmd_store_add, cmd_store_list, cmd_store_path, cmd_store_remove};

use anyhow::{Context, Result};
use galley::options::{self, OptionValue};
use galley::profile::Profile;
use galley::recipe::{parse_recipe_file, validate_recipe, Recipe};
use galley::store::Store;
use galley::workbench::WorkbenchConfig;
use std::path::{Path, PathBuf};

/// Resolve the recipe path, defaulting to galley.toml
fn recipe_path(recipe: Option<PathBuf>) -> PathBuf {
    recipe.unwrap_or_else(|| PathBuf::from("galley.toml"))
}

/// Load and validate a recipe, printing any warnings
fn load_recipe(path: &Path) -> Result<Recipe> {
    let recipe = parse_recipe_file(path)
        .with_context(|| format!("Failed to parse recipe: {}", path.display()))?;

    let warnings = validate_recipe(&recipe).with_context(|| "Recipe validation failed")?;
    for warning in &warnings {
        println!("Warning: {}", warning);
    }

    Ok(recipe)
}

/// The project source directory: explicit flag, else the recipe's parent
fn source_dir(recipe_path: &Path, source: Option<PathBuf>) -> PathBuf {
    source.unwrap_or_else(|| {
        let parent = recipe_path.parent().unwrap_or(Path::new("."));
        if parent.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            parent.to_path_buf()
        }
    })
}

/// Load a profile from file or host detection, then apply -s overrides
fn load_profile(profile: Option<PathBuf>, settings: &[String]) -> Result<Profile> {
    let mut profile = match profile {
        Some(path) => Profile::from_file(&path)
            .with_context(|| format!("Failed to load profile: {}", path.display()))?,
        None => Profile::detect(),
    };

    for setting in settings {
        profile
            .apply_override(setting)
            .with_context(|| format!("Invalid settings override '{}'", setting))?;
    }

    Ok(profile)
}

/// Parse -o name=value overrides
fn option_overrides(overrides: &[String]) -> Result<Vec<(String, OptionValue)>> {
    overrides
        .iter()
        .map(|s| {
            options::parse_override(s).with_context(|| format!("Invalid option override '{}'", s))
        })
        .collect()
}

/// Open the store at the given root, or the platform default
fn open_store(root: Option<PathBuf>) -> Result<Store> {
    let root = root.unwrap_or_else(Store::default_root);
    Store::open(&root).with_context(|| format!("Failed to open store at {}", root.display()))
}

/// Assemble a workbench config from the shared CLI flags
fn workbench_config(
    source_dir: PathBuf,
    out: Option<PathBuf>,
    jobs: Option<u32>,
    meson: Option<PathBuf>,
) -> WorkbenchConfig {
    let mut config = WorkbenchConfig::for_source(&source_dir);
    if let Some(out) = out {
        config.out_dir = out;
    }
    config.jobs = jobs;
    config.meson_program = meson;
    config
}
