// src/depend/mod.rs

//! Pinned dependency references
//!
//! A recipe's `requires` list is made of pins in `name/version` form,
//! each fixed to one exact version. Versions are parsed with semver but
//! the arity is lenient: "zlib/1.3" pads to 1.3.0.

use crate::error::{Error, Result};
use semver::Version;
use std::cmp::Ordering;
use std::fmt;

/// A dependency fixed to one exact version
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PinnedDep {
    pub name: String,
    pub version: Version,
}

impl PinnedDep {
    /// Parse a pin string
    ///
    /// Format: name/version
    /// Examples:
    /// - "sdl/2.26.5" → name="sdl", version=2.26.5
    /// - "zlib/1.3" → name="zlib", version=1.3.0
    pub fn parse(s: &str) -> Result<Self> {
        let (name, version_str) = s.split_once('/').ok_or_else(|| {
            Error::ParseError(format!("Invalid pin '{}': expected name/version", s))
        })?;

        if name.is_empty() {
            return Err(Error::ParseError(format!(
                "Invalid pin '{}': empty name",
                s
            )));
        }
        if name.contains(char::is_whitespace) {
            return Err(Error::ParseError(format!(
                "Invalid pin '{}': name must not contain whitespace",
                s
            )));
        }

        let version = parse_version(version_str)
            .map_err(|e| Error::ParseError(format!("Invalid pin '{}': {}", s, e)))?;

        Ok(Self {
            name: name.to_string(),
            version,
        })
    }
}

/// Parse a version string, padding missing components
///
/// Pins are not required to spell all three semver components:
/// "2.20" parses as 2.20.0 and "3" as 3.0.0. Anything semver accepts
/// directly is taken as-is (including pre-release/build metadata).
fn parse_version(s: &str) -> std::result::Result<Version, String> {
    if s.is_empty() {
        return Err("empty version".to_string());
    }

    if let Ok(v) = Version::parse(s) {
        return Ok(v);
    }

    let parts: Vec<&str> = s.split('.').collect();
    if parts.len() > 3 {
        return Err(format!("too many version components in '{}'", s));
    }

    let mut nums = [0u64; 3];
    for (i, part) in parts.iter().enumerate() {
        nums[i] = part
            .parse::<u64>()
            .map_err(|_| format!("non-numeric version component '{}'", part))?;
    }

    Ok(Version::new(nums[0], nums[1], nums[2]))
}

impl fmt::Display for PinnedDep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.version)
    }
}

impl Ord for PinnedDep {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.version.cmp(&other.version))
    }
}

impl PartialOrd for PinnedDep {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
