// src/profile/mod.rs

//! Build profiles: the settings axes a recipe varies on
//!
//! Recipes declare which axes they vary on (`os`, `arch`, `compiler`,
//! `build_type`); the profile supplies the values. A profile comes from
//! host detection, a TOML profile file, or `-s key=value` overrides on
//! top of either. `os` and `arch` are carried and reported but never
//! interpreted beyond that; `compiler` and `build_type` map into the
//! Meson native file.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use strum_macros::{Display, EnumString};

/// The settings axes recipes may declare
pub const KNOWN_SETTINGS: &[&str] = &["os", "arch", "compiler", "build_type"];

/// Compiler identity, mapping to the C/C++ binaries in the native file
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Compiler {
    Gcc,
    Clang,
    AppleClang,
    Msvc,
}

impl Compiler {
    /// Default C compiler binary
    pub fn cc(&self) -> &'static str {
        match self {
            Compiler::Gcc => "gcc",
            Compiler::Clang | Compiler::AppleClang => "clang",
            Compiler::Msvc => "cl",
        }
    }

    /// Default C++ compiler binary
    pub fn cxx(&self) -> &'static str {
        match self {
            Compiler::Gcc => "g++",
            Compiler::Clang | Compiler::AppleClang => "clang++",
            Compiler::Msvc => "cl",
        }
    }
}

/// Build type axis, mapping to Meson's buildtype values
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BuildType {
    Debug,
    #[default]
    Release,
    RelWithDebInfo,
    MinSizeRel,
}

impl BuildType {
    /// The Meson `buildtype` value for this build type
    pub fn meson_buildtype(&self) -> &'static str {
        match self {
            BuildType::Debug => "debug",
            BuildType::Release => "release",
            BuildType::RelWithDebInfo => "debugoptimized",
            BuildType::MinSizeRel => "minsize",
        }
    }
}

/// A complete set of settings-axis values plus compiler binary overrides
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub os: String,
    pub arch: String,
    pub compiler: Compiler,
    pub build_type: BuildType,

    /// Explicit C compiler binary (overrides the compiler's default)
    #[serde(default)]
    pub cc: Option<String>,

    /// Explicit C++ compiler binary (overrides the compiler's default)
    #[serde(default)]
    pub cxx: Option<String>,
}

impl Profile {
    /// Detect a profile from the host
    ///
    /// os/arch come from the running binary, the compiler is guessed
    /// from `$CC` then falls back to the platform default, and the
    /// build type defaults to release.
    pub fn detect() -> Self {
        let os = std::env::consts::OS.to_string();
        let arch = std::env::consts::ARCH.to_string();

        let compiler = std::env::var("CC")
            .ok()
            .and_then(|cc| guess_compiler(&cc, &os))
            .unwrap_or_else(|| default_compiler(&os));

        Self {
            os,
            arch,
            compiler,
            build_type: BuildType::Release,
            cc: None,
            cxx: None,
        }
    }

    /// Load a profile from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::IoError(format!("Failed to read profile file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| Error::ParseError(format!("Invalid profile: {}", e)))
    }

    /// Apply a `key=value` settings override from the CLI
    pub fn apply_override(&mut self, s: &str) -> Result<()> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| Error::InvalidSetting(format!("'{}': expected key=value", s)))?;

        match key {
            "os" => self.os = value.to_string(),
            "arch" => self.arch = value.to_string(),
            "compiler" => {
                self.compiler = Compiler::from_str(value).map_err(|_| {
                    Error::InvalidSetting(format!("Unknown compiler '{}'", value))
                })?;
            }
            "build_type" => {
                self.build_type = BuildType::from_str(value).map_err(|_| {
                    Error::InvalidSetting(format!("Unknown build_type '{}'", value))
                })?;
            }
            "cc" => self.cc = Some(value.to_string()),
            "cxx" => self.cxx = Some(value.to_string()),
            other => {
                return Err(Error::InvalidSetting(format!(
                    "Unknown settings axis '{}'",
                    other
                )));
            }
        }

        Ok(())
    }

    /// The C compiler binary to write into the native file
    pub fn cc_binary(&self) -> &str {
        self.cc.as_deref().unwrap_or_else(|| self.compiler.cc())
    }

    /// The C++ compiler binary to write into the native file
    pub fn cxx_binary(&self) -> &str {
        self.cxx.as_deref().unwrap_or_else(|| self.compiler.cxx())
    }
}

fn guess_compiler(cc: &str, os: &str) -> Option<Compiler> {
    let binary = Path::new(cc)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())?;

    if binary.contains("clang") {
        if os == "macos" {
            Some(Compiler::AppleClang)
        } else {
            Some(Compiler::Clang)
        }
    } else if binary.contains("gcc") || binary.contains("g++") {
        Some(Compiler::Gcc)
    } else if binary.contains("cl") {
        Some(Compiler::Msvc)
    } else {
        None
    }
}

fn default_compiler(os: &str) -> Compiler {
    match os {
        "macos" => Compiler::AppleClang,
        "windows" => Compiler::Msvc,
        _ => Compiler::Gcc,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_fills_all_axes() {
        let profile = Profile::detect();
        assert!(!profile.os.is_empty());
        assert!(!profile.arch.is_empty());
        assert_eq!(profile.build_type, BuildType::Release);
    }

    #[test]
    fn test_compiler_binaries() {
        assert_eq!(Compiler::Gcc.cc(), "gcc");
        assert_eq!(Compiler::Gcc.cxx(), "g++");
        assert_eq!(Compiler::Clang.cc(), "clang");
        assert_eq!(Compiler::AppleClang.cxx(), "clang++");
        assert_eq!(Compiler::Msvc.cc(), "cl");
    }

    #[test]
    fn test_build_type_meson_mapping() {
        assert_eq!(BuildType::Debug.meson_buildtype(), "debug");
        assert_eq!(BuildType::Release.meson_buildtype(), "release");
        assert_eq!(BuildType::RelWithDebInfo.meson_buildtype(), "debugoptimized");
        assert_eq!(BuildType::MinSizeRel.meson_buildtype(), "minsize");
    }

    #[test]
    fn test_apply_override_each_axis() {
        let mut profile = Profile::detect();

        profile.apply_override("os=linux").unwrap();
        profile.apply_override("arch=aarch64").unwrap();
        profile.apply_override("compiler=clang").unwrap();
        profile.apply_override("build_type=debug").unwrap();

        assert_eq!(profile.os, "linux");
        assert_eq!(profile.arch, "aarch64");
        assert_eq!(profile.compiler, Compiler::Clang);
        assert_eq!(profile.build_type, BuildType::Debug);
    }

    #[test]
    fn test_apply_override_binary_overrides() {
        let mut profile = Profile::detect();

        profile.apply_override("cc=gcc-13").unwrap();
        profile.apply_override("cxx=g++-13").unwrap();

        assert_eq!(profile.cc_binary(), "gcc-13");
        assert_eq!(profile.cxx_binary(), "g++-13");
    }

    #[test]
    fn test_apply_override_rejects_unknown_axis() {
        let mut profile = Profile::detect();
        assert!(profile.apply_override("libc=musl").is_err());
        assert!(profile.apply_override("no-equals").is_err());
    }

    #[test]
    fn test_apply_override_rejects_unknown_values() {
        let mut profile = Profile::detect();
        assert!(profile.apply_override("compiler=tcc").is_err());
        assert!(profile.apply_override("build_type=fastest").is_err());
    }

    #[test]
    fn test_profile_from_toml() {
        let toml_str = r#"
os = "linux"
arch = "x86_64"
compiler = "gcc"
build_type = "relwithdebinfo"
cc = "gcc-13"
"#;
        let profile: Profile = toml::from_str(toml_str).unwrap();
        assert_eq!(profile.compiler, Compiler::Gcc);
        assert_eq!(profile.build_type, BuildType::RelWithDebInfo);
        assert_eq!(profile.cc_binary(), "gcc-13");
        assert_eq!(profile.cxx_binary(), "g++");
    }

    #[test]
    fn test_guess_compiler_from_cc() {
        assert_eq!(guess_compiler("clang", "linux"), Some(Compiler::Clang));
        assert_eq!(guess_compiler("clang", "macos"), Some(Compiler::AppleClang));
        assert_eq!(guess_compiler("/usr/bin/gcc-13", "linux"), Some(Compiler::Gcc));
        assert_eq!(guess_compiler("mystery-cc", "linux"), None);
    }
}
