// src/commands/check.rs

//! Check command - parse and validate a recipe

use anyhow::{Context, Result};
use galley::recipe::{parse_recipe_file, validate_recipe};
use std::path::Path;

/// Validate a recipe and report warnings
pub fn cmd_check(recipe_path: &Path) -> Result<()> {
    println!("Reading recipe: {}", recipe_path.display());

    let recipe = parse_recipe_file(recipe_path)
        .with_context(|| format!("Failed to parse recipe: {}", recipe_path.display()))?;

    let warnings = validate_recipe(&recipe).with_context(|| "Recipe validation failed")?;

    println!(
        "Recipe: {} version {}",
        recipe.package.name, recipe.package.version
    );

    if warnings.is_empty() {
        println!("[OK] No issues found");
    } else {
        for warning in &warnings {
            println!("Warning: {}", warning);
        }
        println!("[OK] {} warning(s)", warnings.len());
    }

    Ok(())
}
