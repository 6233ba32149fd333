//! Configuration profiles and their resolution.
//!
//! - Profile records and the built-in profiles in [`record`]
//! - The mode-to-profile table in [`table`]
//! - Resolution against an environment in [`resolver`]

pub mod record;
pub mod resolver;
pub mod table;

pub use record::{ConfigurationProfile, DEVELOPMENT, PRODUCTION};
pub use resolver::{resolve_configuration, resolve_configuration_with, EnvironmentResolver};
pub use table::ProfileTable;
