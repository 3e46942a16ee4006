// src/generators/toolchain.rs

//! Meson native file emission
//!
//! The native file carries the profile's compiler binaries and the
//! built-in options Meson consumes at setup: buildtype, default_library
//! from the `shared` option, and the pkg_config_path pointing back at
//! the generators directory. Native builds do not write os/arch: those
//! axes are carried and reported, not interpreted.

use crate::error::Result;
use crate::options::OptionSet;
use crate::profile::Profile;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name of the emitted native file
pub const NATIVE_FILE: &str = "galley_meson_native.ini";

/// Emit the native file into the generators directory
pub fn write_native_file(
    profile: &Profile,
    options: &OptionSet,
    generators_dir: &Path,
) -> Result<PathBuf> {
    fs::create_dir_all(generators_dir)?;

    let default_library = if options.shared() { "shared" } else { "static" };

    let mut ini = String::new();
    ini.push_str("[binaries]\n");
    ini.push_str(&format!("c = '{}'\n", profile.cc_binary()));
    ini.push_str(&format!("cpp = '{}'\n", profile.cxx_binary()));
    match which::which("pkg-config") {
        Ok(path) => ini.push_str(&format!("pkg-config = '{}'\n", path.display())),
        Err(_) => debug!("pkg-config not found on PATH, leaving binary unset"),
    }
    ini.push('\n');
    ini.push_str("[built-in options]\n");
    ini.push_str(&format!(
        "buildtype = '{}'\n",
        profile.build_type.meson_buildtype()
    ));
    ini.push_str(&format!("default_library = '{}'\n", default_library));
    ini.push_str(&format!(
        "pkg_config_path = '{}'\n",
        generators_dir.display()
    ));

    let path = generators_dir.join(NATIVE_FILE);
    fs::write(&path, ini)?;

    info!("Emitted native file {}", path.display());
    Ok(path)
}
