//! Mode resolution.
//!
//! Resolves the active mode using the priority chain:
//! 1. Explicit `--mode` flag
//! 2. `NODE_ENV` in the environment
//! 3. `NODE_ENV` in a dotenv file
//! 4. Fallback to development
//!
//! Whichever signal wins is mapped by [`Mode::from_signal`], so every step
//! of the chain ends in one of the two modes.

use std::path::PathBuf;

use super::env_file::EnvFile;
use super::mode::{Mode, MODE_VAR, PRODUCTION_SIGNAL};
use super::source::EnvSource;

/// How the mode signal was determined.
#[derive(Debug, Clone, PartialEq)]
pub enum ModeSource {
    /// Explicitly set via `--mode` flag.
    Flag,
    /// Read from an environment variable.
    EnvVar(String),
    /// Read from a dotenv file.
    EnvFile(PathBuf),
    /// No signal anywhere.
    Fallback,
}

impl std::fmt::Display for ModeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag => write!(f, "--mode flag"),
            Self::EnvVar(var) => write!(f, "{} environment variable", var),
            Self::EnvFile(path) => write!(f, "env file {}", path.display()),
            Self::Fallback => write!(f, "default"),
        }
    }
}

/// A resolved mode with the raw signal and where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMode {
    /// The selected mode.
    pub mode: Mode,
    /// How the signal was determined.
    pub source: ModeSource,
    /// The raw signal value, if any.
    pub signal: Option<String>,
}

impl ResolvedMode {
    /// Resolve the mode from `NODE_ENV` using the priority chain.
    ///
    /// # Arguments
    ///
    /// * `flag` - Explicit `--mode` flag value
    /// * `env` - Environment to read `NODE_ENV` from
    /// * `env_file` - Optional dotenv file consulted after `env`
    ///
    /// # Example
    ///
    /// ```
    /// use envprofile::environment::{MapEnv, Mode, ModeSource, ResolvedMode};
    ///
    /// let env = MapEnv::from_pairs(&[("NODE_ENV", "production")]);
    /// let resolved = ResolvedMode::resolve(None, &env, None);
    /// assert_eq!(resolved.mode, Mode::Production);
    /// assert_eq!(resolved.source, ModeSource::EnvVar("NODE_ENV".to_string()));
    /// ```
    pub fn resolve(flag: Option<&str>, env: &dyn EnvSource, env_file: Option<&EnvFile>) -> Self {
        Self::resolve_var(MODE_VAR, flag, env, env_file)
    }

    /// Resolve the mode reading the signal from `var` instead of `NODE_ENV`.
    pub fn resolve_var(
        var: &str,
        flag: Option<&str>,
        env: &dyn EnvSource,
        env_file: Option<&EnvFile>,
    ) -> Self {
        let resolved = Self::pick(var, flag, env, env_file);
        tracing::debug!(
            mode = %resolved.mode,
            source = %resolved.source,
            "Resolved runtime mode"
        );
        resolved
    }

    fn pick(
        var: &str,
        flag: Option<&str>,
        env: &dyn EnvSource,
        env_file: Option<&EnvFile>,
    ) -> Self {
        // 1. Explicit --mode flag
        if let Some(value) = flag {
            return Self::from_signal(value.to_string(), ModeSource::Flag);
        }

        // 2. Environment
        if let Some(value) = env.var(var) {
            return Self::from_signal(value, ModeSource::EnvVar(var.to_string()));
        }

        // 3. Dotenv file
        if let Some(file) = env_file {
            if let Some(value) = file.var(var) {
                return Self::from_signal(value, ModeSource::EnvFile(file.path.clone()));
            }
        }

        // 4. Fallback
        Self {
            mode: Mode::Development,
            source: ModeSource::Fallback,
            signal: None,
        }
    }

    fn from_signal(value: String, source: ModeSource) -> Self {
        Self {
            mode: Mode::from_signal(Some(&value)),
            source,
            signal: Some(value),
        }
    }

    /// Check if the raw signal is one of the two mode names.
    ///
    /// An absent signal counts as recognised. Anything else (`"staging"`,
    /// `"PRODUCTION"`, `""`) silently selects development, which callers
    /// may want to point out.
    pub fn is_recognised(&self) -> bool {
        match self.signal.as_deref() {
            None => true,
            Some(value) => value == PRODUCTION_SIGNAL || value == Mode::Development.as_str(),
        }
    }
}
