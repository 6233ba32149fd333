//! Runtime mode.

use serde::Serialize;

/// Name of the environment variable carrying the mode signal.
pub const MODE_VAR: &str = "NODE_ENV";

/// The only signal value that selects [`Mode::Production`].
pub const PRODUCTION_SIGNAL: &str = "production";

/// The runtime context that decides which profile applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Local development. Also the answer for any unrecognised signal.
    #[default]
    Development,
    /// Deployed production.
    Production,
}

impl Mode {
    /// Map a raw signal value to a mode.
    ///
    /// Only the exact string `"production"` selects production. The
    /// comparison is case-sensitive and does not trim whitespace; anything
    /// else, including a missing or empty signal, is development.
    ///
    /// # Example
    ///
    /// ```
    /// use envprofile::environment::Mode;
    ///
    /// assert_eq!(Mode::from_signal(Some("production")), Mode::Production);
    /// assert_eq!(Mode::from_signal(Some("PRODUCTION")), Mode::Development);
    /// assert_eq!(Mode::from_signal(None), Mode::Development);
    /// ```
    pub fn from_signal(signal: Option<&str>) -> Self {
        match signal {
            Some(PRODUCTION_SIGNAL) => Self::Production,
            _ => Self::Development,
        }
    }

    /// The lowercase name of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    /// Check if this is the production mode.
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
