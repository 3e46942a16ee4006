// src/meson.rs

//! Thin wrapper over the external `meson` executable
//!
//! Each call builds the documented argument list, runs the tool, and
//! captures its output. A non-zero exit propagates as a command failure
//! carrying the phase name, exit code, and stderr; there is no local
//! recovery, retry, or translation.

use crate::error::{Error, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

/// Handle to a discovered `meson` binary
#[derive(Debug, Clone)]
pub struct Meson {
    program: PathBuf,
}

impl Meson {
    /// Locate meson, preferring an explicit program path over PATH lookup
    pub fn discover(program: Option<&Path>) -> Result<Self> {
        let program = match program {
            Some(p) => p.to_path_buf(),
            None => which::which("meson")
                .map_err(|_| Error::ToolNotFound("meson".to_string()))?,
        };

        debug!("Using meson at {}", program.display());
        Ok(Self { program })
    }

    /// The resolved meson binary
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// `meson setup <build_dir> <source_dir> --native-file <ini>`
    ///
    /// Appends `--reconfigure` when the build directory is already
    /// configured, and `--prefix` only when one is explicitly set.
    pub fn setup(
        &self,
        build_dir: &Path,
        source_dir: &Path,
        native_file: &Path,
        prefix: Option<&Path>,
    ) -> Result<String> {
        let mut args: Vec<OsString> = vec![
            "setup".into(),
            build_dir.into(),
            source_dir.into(),
            "--native-file".into(),
            native_file.into(),
        ];
        if let Some(prefix) = prefix {
            args.push("--prefix".into());
            args.push(prefix.into());
        }
        if build_dir.join("meson-private").exists() {
            args.push("--reconfigure".into());
        }

        self.run("setup", &args)
    }

    /// `meson compile -C <build_dir>`, `-j N` only when jobs are set
    pub fn compile(&self, build_dir: &Path, jobs: Option<u32>) -> Result<String> {
        let mut args: Vec<OsString> = vec!["compile".into(), "-C".into(), build_dir.into()];
        if let Some(jobs) = jobs {
            args.push("-j".into());
            args.push(jobs.to_string().into());
        }

        self.run("compile", &args)
    }

    /// `meson install -C <build_dir>`, `--destdir` when staging
    pub fn install(&self, build_dir: &Path, destdir: Option<&Path>) -> Result<String> {
        let mut args: Vec<OsString> = vec!["install".into(), "-C".into(), build_dir.into()];
        if let Some(destdir) = destdir {
            args.push("--destdir".into());
            args.push(destdir.into());
        }

        self.run("install", &args)
    }

    /// Run one meson invocation, returning combined output
    fn run(&self, phase: &str, args: &[OsString]) -> Result<String> {
        info!("Running meson {} phase", phase);
        debug!("Command: {} {:?}", self.program.display(), args);

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|e| Error::IoError(format!("Failed to run meson {}: {}", phase, e)))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            return Err(Error::CommandFailed {
                phase: format!("meson {}", phase),
                code: output.status.code(),
                stderr: stderr.to_string(),
            });
        }

        let mut log = stdout.to_string();
        if !stderr.is_empty() {
            log.push_str(&stderr);
        }
        Ok(log)
    }
}
