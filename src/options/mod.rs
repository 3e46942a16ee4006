// src/options/mod.rs

//! Option declarations and resolution
//!
//! A recipe declares its options as candidate lists with a default, e.g.
//! `[options.shared] values = [true, false], default = false`. Resolution
//! starts from the defaults and applies `name=value` overrides, rejecting
//! unknown names and undeclared values. The resolved set is read once at
//! generation time and never mutated afterward.

use crate::error::{Error, Result};
use crate::recipe::format::Recipe;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single option value: boolean or free string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Str(String),
}

impl OptionValue {
    /// Parse a value from CLI override syntax
    ///
    /// `true`/`false` become booleans, anything else is a string.
    pub fn parse(s: &str) -> Self {
        match s {
            "true" => OptionValue::Bool(true),
            "false" => OptionValue::Bool(false),
            other => OptionValue::Str(other.to_string()),
        }
    }

    /// The boolean payload, if this is a boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            OptionValue::Str(_) => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(b) => write!(f, "{}", b),
            OptionValue::Str(s) => write!(f, "{}", s),
        }
    }
}

/// An option as declared in a recipe: candidate values plus a default
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionDecl {
    /// Declared candidate values
    pub values: Vec<OptionValue>,

    /// Default, applied when no override names this option
    pub default: OptionValue,
}

/// The resolved option values for one generation run
#[derive(Debug, Clone, Default)]
pub struct OptionSet {
    values: BTreeMap<String, OptionValue>,
}

impl OptionSet {
    /// Resolve a recipe's options against a set of overrides
    ///
    /// Starts from each declared default, then applies the overrides in
    /// order. Overrides naming an undeclared option or a value outside
    /// the declared candidates are errors.
    pub fn resolve(recipe: &Recipe, overrides: &[(String, OptionValue)]) -> Result<Self> {
        let mut values: BTreeMap<String, OptionValue> = recipe
            .options
            .iter()
            .map(|(name, decl)| (name.clone(), decl.default.clone()))
            .collect();

        for (name, value) in overrides {
            let decl = recipe.options.get(name).ok_or_else(|| {
                Error::InvalidOption(format!(
                    "'{}' is not declared by recipe '{}'",
                    name, recipe.package.name
                ))
            })?;

            if !decl.values.contains(value) {
                return Err(Error::InvalidOption(format!(
                    "'{}={}' is not among the declared values for '{}'",
                    name, value, name
                )));
            }

            values.insert(name.clone(), value.clone());
        }

        Ok(Self { values })
    }

    /// Look up a resolved value
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.values.get(name)
    }

    /// Whether the distinguished `shared` option resolved to true
    ///
    /// Recipes without a `shared` option build static.
    pub fn shared(&self) -> bool {
        self.get("shared").and_then(|v| v.as_bool()).unwrap_or(false)
    }

    /// Iterate over resolved (name, value) pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &OptionValue)> {
        self.values.iter()
    }
}

/// Parse a `name=value` override from the CLI
pub fn parse_override(s: &str) -> Result<(String, OptionValue)> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| Error::InvalidOption(format!("'{}': expected name=value", s)))?;

    if name.is_empty() {
        return Err(Error::InvalidOption(format!("'{}': empty option name", s)));
    }

    Ok((name.to_string(), OptionValue::parse(value)))
}
