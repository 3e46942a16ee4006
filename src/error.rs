// src/error.rs

//! Error types for the galley library

use thiserror::Error;

/// Errors that can occur while loading recipes or driving a build
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to parse a recipe, profile, pin, or store entry
    #[error("Parse error: {0}")]
    ParseError(String),

    /// I/O failure with context
    #[error("I/O error: {0}")]
    IoError(String),

    /// A file or store entry was not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// An option override names an unknown option or an undeclared value
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// A settings override names an unknown axis or an unusable value
    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    /// A pinned dependency has no entry in the store
    #[error("Dependency '{pin}' is not present in the store at {root}")]
    DependencyMissing { pin: String, root: String },

    /// A required external tool is not on PATH
    #[error("Required tool '{0}' was not found on PATH")]
    ToolNotFound(String),

    /// An external tool exited with a failure status
    #[error("{phase} failed with exit code {code:?}\n{stderr}")]
    CommandFailed {
        phase: String,
        code: Option<i32>,
        stderr: String,
    },

    /// Refusing to overwrite an existing store entry
    #[error("Already exists: {0}")]
    AlreadyExists(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::IoError(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
