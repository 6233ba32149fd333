//! Environment variable sources.
//!
//! Resolution never reads `std::env` directly. It asks an [`EnvSource`],
//! so callers can hand in the process environment, a fixed map, or the
//! contents of a dotenv file.

use std::collections::HashMap;

/// Lookup of environment variables by name.
pub trait EnvSource: Send + Sync {
    /// Get a variable's value, or `None` if it is not set.
    fn var(&self, key: &str) -> Option<String>;
}

/// The process environment.
///
/// Values that are not valid UTF-8 are treated as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl SystemEnv {
    /// Create a handle to the process environment.
    pub fn new() -> Self {
        Self
    }
}

impl EnvSource for SystemEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// An in-memory set of variables.
///
/// # Example
///
/// ```
/// use envprofile::environment::{EnvSource, MapEnv};
///
/// let env = MapEnv::from_pairs(&[("NODE_ENV", "production")]);
/// assert_eq!(env.var("NODE_ENV").as_deref(), Some("production"));
/// assert_eq!(env.var("HOME"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source from key/value pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// Set a variable, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Number of variables held.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Check if no variables are held.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl From<HashMap<String, String>> for MapEnv {
    fn from(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }
}

impl FromIterator<(String, String)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().collect(),
        }
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
