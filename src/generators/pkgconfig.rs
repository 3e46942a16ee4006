// src/generators/pkgconfig.rs

//! pkg-config file emission
//!
//! One `<name>.pc` per pinned dependency, in `requires` order, pointing
//! at the dependency's store prefix. The `-l` flags come from the store
//! entry's `libs` override or, by default, from scanning the prefix's
//! lib directory; header-only entries get no Libs line. The `requires`
//! list is flat, so no `Requires:` lines are ever written.

use crate::error::{Error, Result};
use crate::recipe::format::Recipe;
use crate::store::Store;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Emit pkg-config files for every pin in the recipe
///
/// All pins are checked against the store before anything is written:
/// a missing dependency fails the whole run with nothing emitted.
pub fn write_pkg_config_files(
    recipe: &Recipe,
    store: &Store,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let pins = recipe.requires()?;

    for pin in &pins {
        if !store.contains(pin) {
            return Err(Error::DependencyMissing {
                pin: pin.to_string(),
                root: store.root().display().to_string(),
            });
        }
    }

    fs::create_dir_all(out_dir)?;

    let mut written = Vec::with_capacity(pins.len());
    for pin in &pins {
        let entry = store.entry(pin)?;
        let prefix = store.prefix_dir(pin);

        let libs = match entry.libs {
            Some(libs) => libs,
            None => scan_lib_stems(&prefix.join("lib"))?,
        };

        let description = entry
            .description
            .unwrap_or_else(|| format!("{} (galley store entry)", pin.name));

        let mut pc = String::new();
        pc.push_str(&format!("prefix={}\n", prefix.display()));
        pc.push_str("libdir=${prefix}/lib\n");
        pc.push_str("includedir=${prefix}/include\n");
        pc.push('\n');
        pc.push_str(&format!("Name: {}\n", pin.name));
        pc.push_str(&format!("Description: {}\n", description));
        pc.push_str(&format!("Version: {}\n", pin.version));
        pc.push_str("Cflags: -I${includedir}\n");
        if !libs.is_empty() {
            let flags: Vec<String> = libs.iter().map(|stem| format!("-l{}", stem)).collect();
            pc.push_str(&format!("Libs: -L${{libdir}} {}\n", flags.join(" ")));
        }

        let path = out_dir.join(format!("{}.pc", pin.name));
        fs::write(&path, pc)?;
        debug!("Wrote {}", path.display());
        written.push(path);
    }

    info!(
        "Emitted {} pkg-config file(s) into {}",
        written.len(),
        out_dir.display()
    );
    Ok(written)
}

/// Scan a lib directory for `lib<stem>.{a,so,dylib}` link targets
///
/// Returns sorted, deduplicated stems. An absent lib directory means a
/// header-only entry.
fn scan_lib_stems(lib_dir: &Path) -> Result<Vec<String>> {
    if !lib_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut stems = Vec::new();
    for entry in WalkDir::new(lib_dir).max_depth(1) {
        let entry =
            entry.map_err(|e| Error::IoError(format!("Failed to scan lib directory: {}", e)))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if let Some(stem) = lib_stem(&file_name) {
            stems.push(stem.to_string());
        }
    }

    stems.sort();
    stems.dedup();
    Ok(stems)
}

fn lib_stem(file_name: &str) -> Option<&str> {
    let rest = file_name.strip_prefix("lib")?;
    let stem = rest
        .strip_suffix(".a")
        .or_else(|| rest.strip_suffix(".so"))
        .or_else(|| rest.strip_suffix(".dylib"))?;

    if stem.is_empty() { None } else { Some(stem) }
}
