//! envprofile - Select environment-specific configuration profiles.
//!
//! A process runs in one of two modes, development or production, decided
//! by the `NODE_ENV` environment variable. Each mode has a fixed
//! [`ConfigurationProfile`] holding the API base URL to talk to.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`environment`] - Mode detection, environment sources, dotenv files
//! - [`error`] - Error types and result aliases
//! - [`profile`] - Profile records, tables, and resolution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use envprofile::environment::MapEnv;
//! use envprofile::resolve_configuration_with;
//!
//! let env = MapEnv::from_pairs(&[("NODE_ENV", "production")]);
//! let profile = resolve_configuration_with(&env);
//! assert_eq!(profile.api_url(), "https://your-production-server.com");
//!
//! // Anything other than the exact string "production" is development.
//! let env = MapEnv::from_pairs(&[("NODE_ENV", "PRODUCTION")]);
//! assert_eq!(resolve_configuration_with(&env).api_url(), "http://localhost:3000");
//! ```

pub mod cli;
pub mod environment;
pub mod error;
pub mod profile;
pub mod ui;

pub use environment::Mode;
pub use error::{EnvProfileError, Result};
pub use profile::{
    resolve_configuration, resolve_configuration_with, ConfigurationProfile, EnvironmentResolver,
    ProfileTable,
};
