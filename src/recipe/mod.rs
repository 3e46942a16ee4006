// src/recipe/mod.rs

//! Recipe loading: format definitions, parsing, and validation

pub mod format;
pub mod parser;

pub use format::{BuildSection, PackageSection, Recipe};
pub use parser::{parse_recipe, parse_recipe_file, validate_recipe};
