// src/cli/mod.rs

//! CLI definitions for galley
//!
//! This module contains all command-line interface definitions using
//! clap. The actual command implementations are in the `commands`
//! module.
//!
//! Lifecycle commands:
//! - `generate` - Emit dependency and toolchain files for Meson
//! - `build` - Configure and compile via meson
//! - `package` - Install the build into a destination directory
//! - `cook` - Run all three phases in order
//!
//! Recipe tooling:
//! - `check` - Parse and validate a recipe
//! - `inspect` - Show a recipe's metadata, pins, and options
//!
//! Store management:
//! - `store add/list/path/remove` - Manage installed dependency prefixes

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "galley")]
#[command(author = "Galley Contributors")]
#[command(version)]
#[command(about = "Recipe-driven build orchestration for Meson projects", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Emit dependency and toolchain files for Meson
    Generate {
        /// Path to the recipe file (default: galley.toml)
        recipe: Option<PathBuf>,

        /// Project source directory (default: the recipe's parent)
        #[arg(long)]
        source: Option<PathBuf>,

        /// Output directory (default: galley under the source directory)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Dependency store root (default: the platform data directory)
        #[arg(long)]
        store: Option<PathBuf>,

        /// Profile file supplying the settings axes (default: host detection)
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Settings override, e.g. -s build_type=debug (repeatable)
        #[arg(short = 's', long = "setting", value_name = "KEY=VALUE")]
        settings: Vec<String>,

        /// Option override, e.g. -o shared=true (repeatable)
        #[arg(short = 'o', long = "option", value_name = "NAME=VALUE")]
        options: Vec<String>,
    },

    /// Configure and compile via meson
    Build {
        /// Path to the recipe file (default: galley.toml)
        recipe: Option<PathBuf>,

        /// Project source directory (default: the recipe's parent)
        #[arg(long)]
        source: Option<PathBuf>,

        /// Output directory (default: galley under the source directory)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Parallel compile jobs (default: meson's default)
        #[arg(short, long)]
        jobs: Option<u32>,

        /// Explicit meson binary (default: PATH lookup)
        #[arg(long)]
        meson: Option<PathBuf>,
    },

    /// Install the build into a destination directory
    Package {
        /// Path to the recipe file (default: galley.toml)
        recipe: Option<PathBuf>,

        /// Project source directory (default: the recipe's parent)
        #[arg(long)]
        source: Option<PathBuf>,

        /// Output directory (default: galley under the source directory)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Staging destination (default: package under the output directory)
        #[arg(long)]
        destdir: Option<PathBuf>,

        /// Explicit meson binary (default: PATH lookup)
        #[arg(long)]
        meson: Option<PathBuf>,
    },

    /// Run the full lifecycle: generate, build, package
    Cook {
        /// Path to the recipe file (default: galley.toml)
        recipe: Option<PathBuf>,

        /// Project source directory (default: the recipe's parent)
        #[arg(long)]
        source: Option<PathBuf>,

        /// Output directory (default: galley under the source directory)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Dependency store root (default: the platform data directory)
        #[arg(long)]
        store: Option<PathBuf>,

        /// Profile file supplying the settings axes (default: host detection)
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Settings override, e.g. -s build_type=debug (repeatable)
        #[arg(short = 's', long = "setting", value_name = "KEY=VALUE")]
        settings: Vec<String>,

        /// Option override, e.g. -o shared=true (repeatable)
        #[arg(short = 'o', long = "option", value_name = "NAME=VALUE")]
        options: Vec<String>,

        /// Staging destination (default: package under the output directory)
        #[arg(long)]
        destdir: Option<PathBuf>,

        /// Parallel compile jobs (default: meson's default)
        #[arg(short, long)]
        jobs: Option<u32>,

        /// Explicit meson binary (default: PATH lookup)
        #[arg(long)]
        meson: Option<PathBuf>,
    },

    /// Parse and validate a recipe
    Check {
        /// Path to the recipe file
        recipe: PathBuf,
    },

    /// Show a recipe's metadata, settings, pins, and options
    Inspect {
        /// Path to the recipe file
        recipe: PathBuf,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Manage the local dependency store
    #[command(subcommand)]
    Store(StoreCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum StoreCommands {
    /// Register an installed prefix under a pin
    Add {
        /// Pin in name/version form, e.g. sdl/2.26.5
        pin: String,

        /// Directory holding the installed tree (include/, lib/, ...)
        #[arg(long)]
        prefix: PathBuf,

        /// Description carried into generated pkg-config files
        #[arg(long)]
        description: Option<String>,

        /// Explicit -l flag stem, overriding the libdir scan (repeatable)
        #[arg(long = "lib", value_name = "STEM")]
        libs: Vec<String>,

        /// Replace an existing entry
        #[arg(long)]
        force: bool,

        /// Dependency store root (default: the platform data directory)
        #[arg(long)]
        store: Option<PathBuf>,
    },

    /// List store entries
    List {
        /// Dependency store root (default: the platform data directory)
        #[arg(long)]
        store: Option<PathBuf>,
    },

    /// Print the installed prefix path for a pin
    Path {
        /// Pin in name/version form
        pin: String,

        /// Dependency store root (default: the platform data directory)
        #[arg(long)]
        store: Option<PathBuf>,
    },

    /// Remove a store entry
    Remove {
        /// Pin in name/version form
        pin: String,

        /// Dependency store root (default: the platform data directory)
        #[arg(long)]
        store: Option<PathBuf>,
    },
}
