//! Resolution inputs shared by all commands.

use crate::cli::args::Cli;
use crate::environment::{load_env_file, EnvFile, EnvSource, ResolvedMode, SystemEnv};
use crate::error::Result;
use crate::profile::{ConfigurationProfile, EnvironmentResolver, ProfileTable};

/// Everything a command needs to resolve the active profile.
pub struct ResolutionContext {
    flag: Option<String>,
    env: Box<dyn EnvSource>,
    env_file: Option<EnvFile>,
    table: ProfileTable,
}

impl ResolutionContext {
    /// Create a context over `env` with the built-in table and no overrides.
    pub fn new(env: impl EnvSource + 'static) -> Self {
        Self {
            flag: None,
            env: Box::new(env),
            env_file: None,
            table: ProfileTable::default(),
        }
    }

    /// Build the context from global CLI flags, reading the process environment.
    ///
    /// # Errors
    ///
    /// Fails if `--env-file` or `--profiles` point at a missing or invalid file.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut context = Self::new(SystemEnv::new()).with_flag(cli.mode.clone());

        if let Some(path) = &cli.env_file {
            context = context.with_env_file(load_env_file(path)?);
        }

        if let Some(path) = &cli.profiles {
            context = context.with_table(ProfileTable::load(path)?);
        }

        Ok(context)
    }

    /// Set the explicit mode flag.
    pub fn with_flag(mut self, flag: Option<String>) -> Self {
        self.flag = flag;
        self
    }

    /// Add a dotenv file consulted after the environment.
    pub fn with_env_file(mut self, env_file: EnvFile) -> Self {
        self.env_file = Some(env_file);
        self
    }

    /// Replace the built-in table.
    pub fn with_table(mut self, table: ProfileTable) -> Self {
        self.table = table;
        self
    }

    /// The profile table in use.
    pub fn table(&self) -> &ProfileTable {
        &self.table
    }

    /// A resolver over this context's table.
    pub fn resolver(&self) -> EnvironmentResolver<'_> {
        EnvironmentResolver::new(&self.table)
    }

    /// Resolve the mode through the priority chain.
    pub fn resolve_mode(&self) -> ResolvedMode {
        self.resolver().resolve_mode(
            self.flag.as_deref(),
            self.env.as_ref(),
            self.env_file.as_ref(),
        )
    }

    /// Resolve the mode and its profile.
    pub fn resolve(&self) -> (ResolvedMode, &ConfigurationProfile) {
        let resolved = self.resolve_mode();
        let profile = self.table.get(resolved.mode);
        (resolved, profile)
    }
}
