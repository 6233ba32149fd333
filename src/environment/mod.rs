//! Mode detection and resolution.
//!
//! Determines whether the process runs in development or production. The
//! priority chain is:
//!
//! 1. Explicit `--mode` flag
//! 2. `NODE_ENV` in the environment
//! 3. `NODE_ENV` in a dotenv file
//! 4. Fallback to development

pub mod env_file;
pub mod mode;
pub mod resolver;
pub mod source;

pub use env_file::{load_env_file, parse_dotenv, EnvFile};
pub use mode::{Mode, MODE_VAR, PRODUCTION_SIGNAL};
pub use resolver::{ModeSource, ResolvedMode};
pub use source::{EnvSource, MapEnv, SystemEnv};
