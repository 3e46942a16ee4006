// src/recipe/format.rs

//! Recipe file format definitions
//!
//! Recipes are TOML files that describe a Meson project: package
//! metadata, the platform axes it varies on, an ordered set of exactly
//! pinned dependencies, and its declared options. Conventionally the
//! file is `galley.toml` next to the project's `meson.build`.

use crate::depend::PinnedDep;
use crate::error::Result;
use crate::options::OptionDecl;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A complete recipe for driving a Meson project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Package metadata
    pub package: PackageSection,

    /// Settings axes and pinned dependencies
    pub build: BuildSection,

    /// Declared options, keyed by option name
    #[serde(default)]
    pub options: BTreeMap<String, OptionDecl>,
}

impl Recipe {
    /// Parse all dependency pins, preserving `requires` order
    pub fn requires(&self) -> Result<Vec<PinnedDep>> {
        self.build
            .requires
            .iter()
            .map(|s| PinnedDep::parse(s))
            .collect()
    }

    /// Look up a declared option
    pub fn option(&self, name: &str) -> Option<&OptionDecl> {
        self.options.get(name)
    }
}

/// Package metadata section
///
/// Static strings, never mutated after parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageSection {
    /// Package name
    pub name: String,

    /// Package version
    pub version: String,

    /// Short description
    #[serde(default)]
    pub description: Option<String>,

    /// Author (name and optionally email)
    #[serde(default)]
    pub author: Option<String>,

    /// License identifier (SPDX)
    #[serde(default)]
    pub license: Option<String>,

    /// Homepage URL
    #[serde(default)]
    pub homepage: Option<String>,
}

/// Settings axes and pinned dependencies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildSection {
    /// Platform axes the package varies on
    ///
    /// Subset of `os`, `arch`, `compiler`, `build_type`.
    #[serde(default)]
    pub settings: Vec<String>,

    /// Pinned dependencies, in order
    ///
    /// Format: `["sdl/2.26.5", "spdlog/1.13.0"]`. An ordered set:
    /// duplicate names are a validation error, and there is no
    /// constraint or conflict-resolution syntax.
    #[serde(default)]
    pub requires: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RECIPE: &str = r#"
[package]
name = "pong-sdl2-c"
version = "0.1"
description = "Pong. Implementation in C using SDL2."
author = "Nicholas H.R. Sims (nickhrsims@gmail.com)"

[build]
settings = ["os", "arch", "compiler", "build_type"]
requires = [
    "sdl/2.26.5",
    "sdl_ttf/2.20.2",
    "spdlog/1.13.0",
    "clove-unit/2.4.1",
]

[options.shared]
values = [true, false]
default = false
"#;

    #[test]
    fn test_parse_recipe() {
        let recipe: Recipe = toml::from_str(SAMPLE_RECIPE).unwrap();

        assert_eq!(recipe.package.name, "pong-sdl2-c");
        assert_eq!(recipe.package.version, "0.1");
        assert!(recipe.package.description.is_some());
        assert!(recipe.package.license.is_none());

        assert_eq!(recipe.build.settings.len(), 4);
        assert_eq!(recipe.build.requires.len(), 4);

        assert!(recipe.option("shared").is_some());
        assert!(recipe.option("static").is_none());
    }

    #[test]
    fn test_requires_preserves_order() {
        let recipe: Recipe = toml::from_str(SAMPLE_RECIPE).unwrap();
        let pins = recipe.requires().unwrap();

        let names: Vec<&str> = pins.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["sdl", "sdl_ttf", "spdlog", "clove-unit"]);
        assert_eq!(pins[0].version.to_string(), "2.26.5");
    }

    #[test]
    fn test_requires_surfaces_bad_pins() {
        let broken = r#"
[package]
name = "test"
version = "1.0"

[build]
requires = ["not-a-pin"]
"#;
        let recipe: Recipe = toml::from_str(broken).unwrap();
        assert!(recipe.requires().is_err());
    }

    #[test]
    fn test_minimal_recipe() {
        let minimal = r#"
[package]
name = "hello"
version = "1.0"

[build]
"#;
        let recipe: Recipe = toml::from_str(minimal).unwrap();
        assert_eq!(recipe.package.name, "hello");
        assert!(recipe.build.settings.is_empty());
        assert!(recipe.build.requires.is_empty());
        assert!(recipe.options.is_empty());
    }
}
