// src/commands/inspect.rs

//! Inspect command - show a recipe's metadata, pins, and options

use anyhow::{Context, Result};
use galley::recipe::parse_recipe_file;
use std::path::Path;

/// Print a recipe's contents in text or JSON form
pub fn cmd_inspect(recipe_path: &Path, json: bool) -> Result<()> {
    let recipe = parse_recipe_file(recipe_path)
        .with_context(|| format!("Failed to parse recipe: {}", recipe_path.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&recipe)?);
        return Ok(());
    }

    println!("Package: {}", recipe.package.name);
    println!("Version: {}", recipe.package.version);
    if let Some(description) = &recipe.package.description {
        println!("Description: {}", description);
    }
    if let Some(author) = &recipe.package.author {
        println!("Author: {}", author);
    }
    if let Some(license) = &recipe.package.license {
        println!("License: {}", license);
    }
    if let Some(homepage) = &recipe.package.homepage {
        println!("Homepage: {}", homepage);
    }

    if !recipe.build.settings.is_empty() {
        println!("Settings: {}", recipe.build.settings.join(", "));
    }

    let pins = recipe.requires()?;
    if pins.is_empty() {
        println!("Requires: (none)");
    } else {
        println!("Requires:");
        for pin in &pins {
            println!("  - {}", pin);
        }
    }

    if !recipe.options.is_empty() {
        println!("Options:");
        for (name, decl) in &recipe.options {
            let values: Vec<String> = decl.values.iter().map(|v| v.to_string()).collect();
            println!(
                "  - {} = {} (candidates: {})",
                name,
                decl.default,
                values.join(", ")
            );
        }
    }

    Ok(())
}
