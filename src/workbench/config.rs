// src/workbench/config.rs

//! Configuration types for the workbench

use std::path::{Path, PathBuf};

/// Configuration for the workbench
#[derive(Debug, Clone)]
pub struct WorkbenchConfig {
    /// Directory holding the project's meson.build
    pub source_dir: PathBuf,
    /// Output directory, relative to source_dir unless absolute
    pub out_dir: PathBuf,
    /// Build directory name under the output directory
    pub build_subdir: String,
    /// Generators directory name under the output directory
    pub generators_subdir: String,
    /// Parallel compile jobs (None = meson's default)
    pub jobs: Option<u32>,
    /// Explicit meson binary, bypassing PATH discovery
    pub meson_program: Option<PathBuf>,
    /// Install prefix passed to meson setup (None = meson's default)
    pub install_prefix: Option<PathBuf>,
}

impl Default for WorkbenchConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("."),
            out_dir: PathBuf::from("galley"),
            build_subdir: "build".to_string(),
            generators_subdir: "generators".to_string(),
            jobs: None,
            meson_program: None,
            install_prefix: None,
        }
    }
}

impl WorkbenchConfig {
    /// The resolved output directory
    pub fn out_path(&self) -> PathBuf {
        if self.out_dir.is_absolute() {
            self.out_dir.clone()
        } else {
            self.source_dir.join(&self.out_dir)
        }
    }

    /// The meson build directory
    pub fn build_dir(&self) -> PathBuf {
        self.out_path().join(&self.build_subdir)
    }

    /// The generators directory for emitted dependency/toolchain files
    pub fn generators_dir(&self) -> PathBuf {
        self.out_path().join(&self.generators_subdir)
    }

    /// Default destination for staged installs
    pub fn default_destdir(&self) -> PathBuf {
        self.out_path().join("package")
    }

    /// Path of the emitted native file
    pub fn native_file(&self) -> PathBuf {
        self.generators_dir().join(crate::generators::NATIVE_FILE)
    }

    /// A config rooted at the given source directory
    pub fn for_source(source_dir: &Path) -> Self {
        Self {
            source_dir: source_dir.to_path_buf(),
            ..Self::default()
        }
    }
}

/// Output of one lifecycle phase
#[derive(Debug)]
pub struct PhaseReport {
    /// Phase name (generate, build, package)
    pub phase: String,
    /// Accumulated tool output
    pub log: String,
}

/// Output of a full cook: the three phases in order
#[derive(Debug)]
pub struct CookReport {
    pub phases: Vec<PhaseReport>,
    /// Where the install was staged
    pub destdir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = WorkbenchConfig::for_source(Path::new("/work/pong"));

        assert_eq!(config.out_path(), PathBuf::from("/work/pong/galley"));
        assert_eq!(config.build_dir(), PathBuf::from("/work/pong/galley/build"));
        assert_eq!(
            config.generators_dir(),
            PathBuf::from("/work/pong/galley/generators")
        );
        assert_eq!(
            config.default_destdir(),
            PathBuf::from("/work/pong/galley/package")
        );
    }

    #[test]
    fn test_absolute_out_dir_wins() {
        let config = WorkbenchConfig {
            source_dir: PathBuf::from("/work/pong"),
            out_dir: PathBuf::from("/tmp/out"),
            ..Default::default()
        };

        assert_eq!(config.out_path(), PathBuf::from("/tmp/out"));
        assert_eq!(config.build_dir(), PathBuf::from("/tmp/out/build"));
    }

    #[test]
    fn test_native_file_under_generators() {
        let config = WorkbenchConfig::for_source(Path::new("/work/pong"));
        assert_eq!(
            config.native_file(),
            PathBuf::from("/work/pong/galley/generators/galley_meson_native.ini")
        );
    }
}
