// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

use galley::depend::PinnedDep;
use galley::store::{Store, StoreEntry};
use std::fs;
use std::path::{Path, PathBuf};

/// The four pins both shipped recipes declare, with a library file to
/// plant in each fake prefix (None = header-only).
pub const SHIPPED_PINS: &[(&str, Option<&str>)] = &[
    ("sdl/2.26.5", Some("libSDL2.a")),
    ("sdl_ttf/2.20.2", Some("libSDL2_ttf.a")),
    ("spdlog/1.13.0", Some("libspdlog.a")),
    ("clove-unit/2.4.1", None),
];

/// Path to a shipped recipe under recipes/
pub fn shipped_recipe(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("recipes")
        .join(name)
}

/// Create a store under `root` populated with the shipped pins.
///
/// Each entry gets a fake prefix with include/ and lib/ trees.
pub fn populated_store(root: &Path) -> Store {
    let store = Store::open(&root.join("store")).unwrap();

    for (pin_str, lib_file) in SHIPPED_PINS {
        let pin = PinnedDep::parse(pin_str).unwrap();
        let prefix = root.join(format!("prefix-{}", pin.name));
        fs::create_dir_all(prefix.join("include")).unwrap();
        fs::write(
            prefix.join("include").join(format!("{}.h", pin.name)),
            "// header\n",
        )
        .unwrap();
        if let Some(lib_file) = lib_file {
            fs::create_dir_all(prefix.join("lib")).unwrap();
            fs::write(prefix.join("lib").join(lib_file), "archive\n").unwrap();
        }

        let entry = StoreEntry {
            name: pin.name.clone(),
            version: pin.version.to_string(),
            description: None,
            libs: None,
        };
        store.add(&pin, &prefix, &entry, false).unwrap();
    }

    store
}

/// Write a stub `meson` executable that appends its argv to `argv.log`
/// in the stub's directory, one line per invocation. Like the real
/// tool, `setup` leaves a meson-private directory behind.
#[cfg(unix)]
pub fn stub_meson(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let program = dir.join("meson");
    let log = dir.join("argv.log");
    let script = format!(
        "#!/bin/sh\n\
         echo \"$@\" >> '{}'\n\
         if [ \"$1\" = setup ]; then mkdir -p \"$2/meson-private\"; fi\n",
        log.display()
    );
    fs::write(&program, script).unwrap();
    fs::set_permissions(&program, fs::Permissions::from_mode(0o755)).unwrap();
    program
}

/// Read the argv lines recorded by a stub meson
#[cfg(unix)]
pub fn stub_argv(dir: &Path) -> Vec<String> {
    fs::read_to_string(dir.join("argv.log"))
        .unwrap_or_default()
        .lines()
        .map(|l| l.to_string())
        .collect()
}
