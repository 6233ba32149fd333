//! Profile resolution.
//!
//! Maps the runtime mode to a [`ConfigurationProfile`]. Resolution is
//! total: a missing, empty, or unknown signal selects the development
//! profile, and the result is always one of the table's two profiles.

use crate::environment::{EnvFile, EnvSource, Mode, ResolvedMode, SystemEnv, MODE_VAR};

use super::record::ConfigurationProfile;
use super::table::ProfileTable;

/// Selects a profile from a table based on the runtime mode.
///
/// # Example
///
/// ```
/// use envprofile::environment::MapEnv;
/// use envprofile::profile::EnvironmentResolver;
///
/// let resolver = EnvironmentResolver::builtin();
/// let env = MapEnv::from_pairs(&[("NODE_ENV", "production")]);
/// assert_eq!(
///     resolver.resolve(&env).api_url(),
///     "https://your-production-server.com"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct EnvironmentResolver<'t> {
    table: &'t ProfileTable,
    mode_var: String,
}

impl EnvironmentResolver<'static> {
    /// A resolver over the built-in table reading `NODE_ENV`.
    pub fn builtin() -> Self {
        Self::new(ProfileTable::builtin())
    }
}

impl<'t> EnvironmentResolver<'t> {
    /// A resolver over `table` reading `NODE_ENV`.
    pub fn new(table: &'t ProfileTable) -> Self {
        Self {
            table,
            mode_var: MODE_VAR.to_string(),
        }
    }

    /// Read the mode signal from a different variable.
    pub fn with_mode_var(mut self, var: impl Into<String>) -> Self {
        self.mode_var = var.into();
        self
    }

    /// The variable the mode signal is read from.
    pub fn mode_var(&self) -> &str {
        &self.mode_var
    }

    /// The table profiles are selected from.
    pub fn table(&self) -> &'t ProfileTable {
        self.table
    }

    /// Get the profile for an already-known mode.
    pub fn profile_for(&self, mode: Mode) -> &'t ConfigurationProfile {
        self.table.get(mode)
    }

    /// Resolve the profile from the mode signal in `env`.
    pub fn resolve(&self, env: &dyn EnvSource) -> &'t ConfigurationProfile {
        let signal = env.var(&self.mode_var);
        let mode = Mode::from_signal(signal.as_deref());
        let profile = self.profile_for(mode);
        tracing::debug!(
            mode = %mode,
            api_url = %profile.api_url(),
            "Resolved configuration profile"
        );
        profile
    }

    /// Resolve the mode through the full priority chain.
    pub fn resolve_mode(
        &self,
        flag: Option<&str>,
        env: &dyn EnvSource,
        env_file: Option<&EnvFile>,
    ) -> ResolvedMode {
        ResolvedMode::resolve_var(&self.mode_var, flag, env, env_file)
    }
}

/// Resolve the built-in profile for the current process.
///
/// Reads `NODE_ENV`: the exact value `"production"` selects the production
/// profile, anything else (including unset) selects development.
///
/// # Example
///
/// ```
/// let profile = envprofile::resolve_configuration();
/// assert!(!profile.api_url().is_empty());
/// ```
pub fn resolve_configuration() -> &'static ConfigurationProfile {
    resolve_configuration_with(&SystemEnv)
}

/// Resolve the built-in profile against an injected environment.
pub fn resolve_configuration_with(env: &dyn EnvSource) -> &'static ConfigurationProfile {
    EnvironmentResolver::builtin().resolve(env)
}
