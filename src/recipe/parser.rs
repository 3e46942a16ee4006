// src/recipe/parser.rs

//! Recipe file parsing and validation

use crate::error::{Error, Result};
use crate::profile::KNOWN_SETTINGS;
use crate::recipe::format::Recipe;
use std::collections::HashSet;
use std::path::Path;

/// Parse a recipe from a TOML string
pub fn parse_recipe(content: &str) -> Result<Recipe> {
    toml::from_str(content).map_err(|e| Error::ParseError(format!("Invalid recipe: {}", e)))
}

/// Parse a recipe from a file
pub fn parse_recipe_file(path: &Path) -> Result<Recipe> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::IoError(format!("Failed to read recipe file: {}", e)))?;

    parse_recipe(&content)
}

/// Validate a recipe for completeness and correctness
///
/// Hard errors: empty name/version, malformed pins, duplicate dependency
/// names, unknown settings axes, and option defaults outside the declared
/// candidates. Returns a list of warnings for the rest.
pub fn validate_recipe(recipe: &Recipe) -> Result<Vec<String>> {
    let mut warnings = Vec::new();

    // Check for empty name/version
    if recipe.package.name.is_empty() {
        return Err(Error::ParseError(
            "Recipe package name cannot be empty".to_string(),
        ));
    }
    if recipe.package.version.is_empty() {
        return Err(Error::ParseError(
            "Recipe package version cannot be empty".to_string(),
        ));
    }

    // Every pin must parse; the list is an ordered set, so duplicate
    // names are an error rather than a conflict to resolve
    let pins = recipe.requires()?;
    let mut seen = HashSet::new();
    for pin in &pins {
        if !seen.insert(pin.name.as_str()) {
            return Err(Error::ParseError(format!(
                "Duplicate dependency '{}' in requires",
                pin.name
            )));
        }
    }

    // Settings axes must be ones the profile can supply
    for axis in &recipe.build.settings {
        if !KNOWN_SETTINGS.contains(&axis.as_str()) {
            return Err(Error::ParseError(format!(
                "Unknown settings axis '{}' (expected one of: {})",
                axis,
                KNOWN_SETTINGS.join(", ")
            )));
        }
    }

    // Option defaults must be among their declared candidates
    for (name, decl) in &recipe.options {
        if decl.values.is_empty() {
            return Err(Error::ParseError(format!(
                "Option '{}' declares no candidate values",
                name
            )));
        }
        if !decl.values.contains(&decl.default) {
            return Err(Error::ParseError(format!(
                "Default for option '{}' is not among its declared values",
                name
            )));
        }
    }

    // Warn about missing fields
    if recipe.package.description.is_none() {
        warnings.push("Missing package description".to_string());
    }
    if recipe.package.license.is_none() {
        warnings.push("Missing package license".to_string());
    }
    if recipe.build.requires.is_empty() {
        warnings.push("Recipe declares no dependencies".to_string());
    }

    Ok(warnings)
}
