// src/commands/store.rs

//! Store management commands

use anyhow::{Context, Result};
use galley::depend::PinnedDep;
use galley::store::StoreEntry;
use std::path::{Path, PathBuf};
use tracing::info;

/// Register an installed prefix under a pin
pub fn cmd_store_add(
    pin: &str,
    prefix: &Path,
    description: Option<String>,
    libs: Vec<String>,
    force: bool,
    store: Option<PathBuf>,
) -> Result<()> {
    let pin = PinnedDep::parse(pin).with_context(|| format!("Invalid pin '{}'", pin))?;
    let store = super::open_store(store)?;

    let entry = StoreEntry {
        name: pin.name.clone(),
        version: pin.version.to_string(),
        description,
        libs: if libs.is_empty() { None } else { Some(libs) },
    };

    info!("Adding store entry {} from {}", pin, prefix.display());
    let entry_dir = store
        .add(&pin, prefix, &entry, force)
        .with_context(|| format!("Failed to add '{}' to the store", pin))?;

    println!("Added store entry: {}", pin);
    println!("  Location: {}", entry_dir.display());
    Ok(())
}

/// List store entries
pub fn cmd_store_list(store: Option<PathBuf>) -> Result<()> {
    let store = super::open_store(store)?;
    let pins = store.list()?;

    if pins.is_empty() {
        println!("Store at {} is empty", store.root().display());
    } else {
        println!("Store entries at {}:", store.root().display());
        for pin in pins {
            println!("  {}", pin);
        }
    }
    Ok(())
}

/// Print the installed prefix path for a pin
pub fn cmd_store_path(pin: &str, store: Option<PathBuf>) -> Result<()> {
    let pin = PinnedDep::parse(pin).with_context(|| format!("Invalid pin '{}'", pin))?;
    let store = super::open_store(store)?;

    if !store.contains(&pin) {
        anyhow::bail!("Store entry '{}' not found at {}", pin, store.root().display());
    }

    println!("{}", store.prefix_dir(&pin).display());
    Ok(())
}

/// Remove a store entry
pub fn cmd_store_remove(pin: &str, store: Option<PathBuf>) -> Result<()> {
    let pin = PinnedDep::parse(pin).with_context(|| format!("Invalid pin '{}'", pin))?;
    let store = super::open_store(store)?;

    store
        .remove(&pin)
        .with_context(|| format!("Failed to remove '{}' from the store", pin))?;

    println!("Removed store entry: {}", pin);
    Ok(())
}
