// src/store/mod.rs

//! Local dependency store
//!
//! Pinned dependencies resolve against a store of installed prefixes on
//! disk, laid out as `<root>/<name>/<version>/` with an `entry.toml`
//! describing the entry and a `prefix/` tree holding the installed
//! files (`include/`, `lib/`, ...). New entries are staged into a
//! temporary directory inside the root and renamed into place.

use crate::depend::PinnedDep;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

const ENTRY_FILE: &str = "entry.toml";
const PREFIX_DIR: &str = "prefix";

/// Metadata stored alongside an installed prefix
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreEntry {
    pub name: String,
    pub version: String,

    /// Description carried into generated pkg-config files
    #[serde(default)]
    pub description: Option<String>,

    /// Explicit `-l` flag stems, overriding the libdir scan
    #[serde(default)]
    pub libs: Option<Vec<String>>,
}

/// The store of installed dependency prefixes
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Open a store at the given root, creating it if needed
    pub fn open(root: &Path) -> Result<Self> {
        fs::create_dir_all(root)
            .map_err(|e| Error::IoError(format!("Failed to create store root: {}", e)))?;

        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// The default store root: the platform data directory under galley/store
    pub fn default_root() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("galley")
            .join("store")
    }

    /// The store root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding a pin's entry.toml and prefix
    pub fn entry_dir(&self, pin: &PinnedDep) -> PathBuf {
        self.root.join(&pin.name).join(pin.version.to_string())
    }

    /// A pin's installed prefix tree
    pub fn prefix_dir(&self, pin: &PinnedDep) -> PathBuf {
        self.entry_dir(pin).join(PREFIX_DIR)
    }

    /// Whether a pin has an entry in the store
    pub fn contains(&self, pin: &PinnedDep) -> bool {
        self.entry_dir(pin).join(ENTRY_FILE).exists()
    }

    /// Read a pin's entry metadata
    pub fn entry(&self, pin: &PinnedDep) -> Result<StoreEntry> {
        let path = self.entry_dir(pin).join(ENTRY_FILE);
        let content = fs::read_to_string(&path).map_err(|_| {
            Error::NotFound(format!("No store entry for '{}' at {}", pin, path.display()))
        })?;

        toml::from_str(&content)
            .map_err(|e| Error::ParseError(format!("Invalid store entry for '{}': {}", pin, e)))
    }

    /// Register a prefix directory under a pin
    ///
    /// The prefix tree is copied into a staging directory inside the
    /// store root and renamed into place, so a partially copied entry
    /// never becomes visible. Refuses to overwrite unless `force`.
    pub fn add(&self, pin: &PinnedDep, prefix: &Path, entry: &StoreEntry, force: bool) -> Result<PathBuf> {
        if !prefix.is_dir() {
            return Err(Error::NotFound(format!(
                "Prefix directory does not exist: {}",
                prefix.display()
            )));
        }

        let entry_dir = self.entry_dir(pin);
        if entry_dir.exists() {
            if !force {
                return Err(Error::AlreadyExists(format!(
                    "Store entry '{}' (use --force to replace)",
                    pin
                )));
            }
            fs::remove_dir_all(&entry_dir)?;
        }

        let staging = tempfile::Builder::new()
            .prefix(".staging-")
            .tempdir_in(&self.root)
            .map_err(|e| Error::IoError(format!("Failed to create staging directory: {}", e)))?;

        copy_tree(prefix, &staging.path().join(PREFIX_DIR))?;

        let entry_toml = toml::to_string_pretty(entry)
            .map_err(|e| Error::IoError(format!("Failed to serialize store entry: {}", e)))?;
        fs::write(staging.path().join(ENTRY_FILE), entry_toml)?;

        if let Some(parent) = entry_dir.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::rename(staging.keep(), &entry_dir)
            .map_err(|e| Error::IoError(format!("Failed to land store entry: {}", e)))?;

        info!("Added store entry {} at {}", pin, entry_dir.display());
        Ok(entry_dir)
    }

    /// List all pins present in the store, sorted
    pub fn list(&self) -> Result<Vec<PinnedDep>> {
        let mut pins = Vec::new();

        for name_entry in fs::read_dir(&self.root)? {
            let name_entry = name_entry?;
            if !name_entry.file_type()?.is_dir() {
                continue;
            }
            let name = name_entry.file_name().to_string_lossy().to_string();
            if name.starts_with('.') {
                continue;
            }

            for version_entry in fs::read_dir(name_entry.path())? {
                let version_entry = version_entry?;
                if !version_entry.path().join(ENTRY_FILE).exists() {
                    continue;
                }
                let version = version_entry.file_name().to_string_lossy().to_string();
                if let Ok(pin) = PinnedDep::parse(&format!("{}/{}", name, version)) {
                    pins.push(pin);
                }
            }
        }

        pins.sort();
        Ok(pins)
    }

    /// Remove a pin's entry from the store
    pub fn remove(&self, pin: &PinnedDep) -> Result<()> {
        let entry_dir = self.entry_dir(pin);
        if !entry_dir.exists() {
            return Err(Error::NotFound(format!("Store entry '{}'", pin)));
        }

        fs::remove_dir_all(&entry_dir)?;

        // Drop the name directory too once its last version is gone
        if let Some(parent) = entry_dir.parent() {
            if fs::read_dir(parent).map(|mut d| d.next().is_none()).unwrap_or(false) {
                let _ = fs::remove_dir(parent);
            }
        }

        info!("Removed store entry {}", pin);
        Ok(())
    }
}

/// Copy a directory tree, preserving layout
fn copy_tree(src: &Path, dst: &Path) -> Result<()> {
    for entry in WalkDir::new(src) {
        let entry =
            entry.map_err(|e| Error::IoError(format!("Failed to walk prefix tree: {}", e)))?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| Error::IoError(format!("Path outside prefix tree: {}", e)))?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
        }
    }

    debug!("Copied prefix tree {} -> {}", src.display(), dst.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        (dir, store)
    }

    fn sample_prefix(dir: &Path) -> PathBuf {
        let prefix = dir.join("sample-prefix");
        fs::create_dir_all(prefix.join("include")).unwrap();
        fs::create_dir_all(prefix.join("lib")).unwrap();
        fs::write(prefix.join("include/sdl.h"), "// header").unwrap();
        fs::write(prefix.join("lib/libSDL2.a"), "archive").unwrap();
        prefix
    }

    fn entry_for(pin: &PinnedDep) -> StoreEntry {
        StoreEntry {
            name: pin.name.clone(),
            version: pin.version.to_string(),
            description: None,
            libs: None,
        }
    }

    #[test]
    fn test_add_and_contains() {
        let (dir, store) = test_store();
        let prefix = sample_prefix(dir.path());
        let pin = PinnedDep::parse("sdl/2.26.5").unwrap();

        assert!(!store.contains(&pin));
        store.add(&pin, &prefix, &entry_for(&pin), false).unwrap();
        assert!(store.contains(&pin));

        // The prefix tree landed intact
        assert!(store.prefix_dir(&pin).join("include/sdl.h").exists());
        assert!(store.prefix_dir(&pin).join("lib/libSDL2.a").exists());
    }

    #[test]
    fn test_add_refuses_overwrite_without_force() {
        let (dir, store) = test_store();
        let prefix = sample_prefix(dir.path());
        let pin = PinnedDep::parse("sdl/2.26.5").unwrap();

        store.add(&pin, &prefix, &entry_for(&pin), false).unwrap();
        let err = store.add(&pin, &prefix, &entry_for(&pin), false);
        assert!(matches!(err, Err(Error::AlreadyExists(_))));

        // Force replaces
        store.add(&pin, &prefix, &entry_for(&pin), true).unwrap();
    }

    #[test]
    fn test_add_missing_prefix() {
        let (dir, store) = test_store();
        let pin = PinnedDep::parse("sdl/2.26.5").unwrap();
        let missing = dir.path().join("no-such-dir");

        assert!(store.add(&pin, &missing, &entry_for(&pin), false).is_err());
    }

    #[test]
    fn test_entry_round_trips() {
        let (dir, store) = test_store();
        let prefix = sample_prefix(dir.path());
        let pin = PinnedDep::parse("spdlog/1.13.0").unwrap();

        let entry = StoreEntry {
            name: "spdlog".to_string(),
            version: "1.13.0".to_string(),
            description: Some("Fast C++ logging library".to_string()),
            libs: Some(vec!["spdlog".to_string()]),
        };
        store.add(&pin, &prefix, &entry, false).unwrap();

        let read = store.entry(&pin).unwrap();
        assert_eq!(read.name, "spdlog");
        assert_eq!(read.description.as_deref(), Some("Fast C++ logging library"));
        assert_eq!(read.libs, Some(vec!["spdlog".to_string()]));
    }

    #[test]
    fn test_list_sorted() {
        let (dir, store) = test_store();
        let prefix = sample_prefix(dir.path());

        for pin_str in ["spdlog/1.13.0", "sdl/2.26.5", "sdl/2.28.0"] {
            let pin = PinnedDep::parse(pin_str).unwrap();
            store.add(&pin, &prefix, &entry_for(&pin), false).unwrap();
        }

        let pins: Vec<String> = store.list().unwrap().iter().map(|p| p.to_string()).collect();
        assert_eq!(pins, vec!["sdl/2.26.5", "sdl/2.28.0", "spdlog/1.13.0"]);
    }

    #[test]
    fn test_remove() {
        let (dir, store) = test_store();
        let prefix = sample_prefix(dir.path());
        let pin = PinnedDep::parse("sdl/2.26.5").unwrap();

        store.add(&pin, &prefix, &entry_for(&pin), false).unwrap();
        store.remove(&pin).unwrap();
        assert!(!store.contains(&pin));

        assert!(matches!(store.remove(&pin), Err(Error::NotFound(_))));
    }
}
