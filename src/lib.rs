// src/lib.rs

//! galley: recipe-driven build orchestration for Meson projects
//!
//! A recipe is a TOML file declaring package metadata, the platform
//! axes the package varies on, an ordered set of exactly pinned
//! dependencies, and its options. galley drives the project through
//! three lifecycle phases:
//!
//! - generate: emit pkg-config files (one per pin, resolved against a
//!   local store of installed prefixes) and a Meson native file
//! - build: meson setup + compile against the generated native file
//! - package: meson install staged into a destination directory
//!
//! All build mechanics are delegated to the external `meson` binary;
//! state moves between phases only through the generated files on disk.

pub mod depend;
mod error;
pub mod generators;
pub mod meson;
pub mod options;
pub mod profile;
pub mod recipe;
pub mod store;
pub mod workbench;

pub use depend::PinnedDep;
pub use error::{Error, Result};
pub use meson::Meson;
pub use options::{OptionDecl, OptionSet, OptionValue};
pub use profile::{BuildType, Compiler, Profile};
pub use recipe::{parse_recipe, parse_recipe_file, validate_recipe, Recipe};
pub use store::{Store, StoreEntry};
pub use workbench::{CookReport, PhaseReport, Workbench, WorkbenchConfig};
