//! Profile tables.
//!
//! A table holds exactly one profile per [`Mode`]. The built-in table is a
//! process-wide constant; integrators can load their own from YAML:
//!
//! ```yaml
//! development:
//!   api_url: http://localhost:3000
//! production:
//!   api_url: https://api.example.com
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::environment::Mode;
use crate::error::{EnvProfileError, Result};

use super::record::{ConfigurationProfile, DEVELOPMENT, PRODUCTION};

static BUILTIN: ProfileTable = ProfileTable {
    development: DEVELOPMENT,
    production: PRODUCTION,
};

/// One profile per mode.
///
/// Every table reachable outside this module has a non-empty URL in both
/// profiles: construction and deserialization both validate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TableFile")]
pub struct ProfileTable {
    development: ConfigurationProfile,
    production: ConfigurationProfile,
}

/// On-disk shape of a table, before validation.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TableFile {
    development: ConfigurationProfile,
    production: ConfigurationProfile,
}

impl TryFrom<TableFile> for ProfileTable {
    type Error = EnvProfileError;

    fn try_from(file: TableFile) -> Result<Self> {
        Self::new(file.development, file.production)
    }
}

impl ProfileTable {
    /// Create a table from its two profiles.
    ///
    /// # Errors
    ///
    /// Returns `ProfileValidation` if either profile has an empty URL.
    pub fn new(
        development: ConfigurationProfile,
        production: ConfigurationProfile,
    ) -> Result<Self> {
        let table = Self {
            development,
            production,
        };
        table.validate()?;
        Ok(table)
    }

    /// The built-in table, shared for the lifetime of the process.
    pub fn builtin() -> &'static ProfileTable {
        &BUILTIN
    }

    /// Profile used in development mode.
    pub fn development(&self) -> &ConfigurationProfile {
        &self.development
    }

    /// Profile used in production mode.
    pub fn production(&self) -> &ConfigurationProfile {
        &self.production
    }

    /// Get the profile for a mode.
    pub fn get(&self, mode: Mode) -> &ConfigurationProfile {
        match mode {
            Mode::Development => &self.development,
            Mode::Production => &self.production,
        }
    }

    /// Load and validate a table from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `ProfileNotFound` if the file doesn't exist,
    /// `ProfileParse` if it isn't a valid table, and
    /// `ProfileValidation` if a profile has an empty URL.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                EnvProfileError::ProfileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                EnvProfileError::Io(e)
            }
        })?;

        let table = Self::parse(&content, path)?;
        tracing::debug!(path = %path.display(), "Loaded profile table");
        Ok(table)
    }

    /// Parse and validate a table from YAML content.
    pub fn parse(content: &str, source_path: &Path) -> Result<Self> {
        let file: TableFile =
            serde_yaml::from_str(content).map_err(|e| EnvProfileError::ProfileParse {
                path: source_path.to_path_buf(),
                message: e.to_string(),
            })?;
        Self::try_from(file)
    }

    fn validate(&self) -> Result<()> {
        for mode in [Mode::Development, Mode::Production] {
            if self.get(mode).api_url().trim().is_empty() {
                return Err(EnvProfileError::ProfileValidation {
                    message: format!("{} api_url is empty", mode),
                });
            }
        }
        Ok(())
    }
}

impl Default for ProfileTable {
    fn default() -> Self {
        BUILTIN.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const TABLE_YAML: &str = r#"
development:
  api_url: http://127.0.0.1:8080
production:
  api_url: https://api.example.com
"#;

    #[test]
    fn builtin_maps_modes() {
        let table = ProfileTable::builtin();
        assert_eq!(table.get(Mode::Development).api_url(), "http://localhost:3000");
        assert_eq!(
            table.get(Mode::Production).api_url(),
            "https://your-production-server.com"
        );
    }

    #[test]
    fn builtin_is_shared() {
        assert!(std::ptr::eq(ProfileTable::builtin(), ProfileTable::builtin()));
    }

    #[test]
    fn builtin_is_valid() {
        ProfileTable::builtin().validate().unwrap();
    }

    #[test]
    fn new_accepts_populated_profiles() {
        let table = ProfileTable::new(DEVELOPMENT, ConfigurationProfile::new("https://a")).unwrap();
        assert_eq!(table.production().api_url(), "https://a");
        assert_eq!(table.development(), &DEVELOPMENT);
    }

    #[test]
    fn default_equals_builtin() {
        assert_eq!(&ProfileTable::default(), ProfileTable::builtin());
    }

    #[test]
    fn parse_valid_table() {
        let table = ProfileTable::parse(TABLE_YAML, Path::new("profiles.yml")).unwrap();
        assert_eq!(table.development().api_url(), "http://127.0.0.1:8080");
        assert_eq!(table.production().api_url(), "https://api.example.com");
    }

    #[test]
    fn parse_requires_both_modes() {
        let result = ProfileTable::parse(
            "development:\n  api_url: http://localhost\n",
            Path::new("profiles.yml"),
        );
        match result {
            Err(EnvProfileError::ProfileParse { message, .. }) => {
                assert!(message.contains("production"));
            }
            other => panic!("expected ProfileParse, got {:?}", other),
        }
    }

    #[test]
    fn parse_rejects_unknown_mode() {
        let yaml = format!("{}staging:\n  api_url: https://staging\n", TABLE_YAML);
        let result = ProfileTable::parse(&yaml, Path::new("profiles.yml"));
        assert!(matches!(result, Err(EnvProfileError::ProfileParse { .. })));
    }

    #[test]
    fn parse_rejects_empty_url() {
        let yaml = "development:\n  api_url: \"\"\nproduction:\n  api_url: https://a\n";
        let result = ProfileTable::parse(yaml, Path::new("profiles.yml"));
        match result {
            Err(EnvProfileError::ProfileValidation { message }) => {
                assert!(message.contains("development"));
            }
            other => panic!("expected ProfileValidation, got {:?}", other),
        }
    }

    #[test]
    fn new_rejects_empty_development_url() {
        let result = ProfileTable::new(ConfigurationProfile::new(""), PRODUCTION);
        match result {
            Err(EnvProfileError::ProfileValidation { message }) => {
                assert!(message.contains("development"));
            }
            other => panic!("expected ProfileValidation, got {:?}", other),
        }
    }

    #[test]
    fn new_rejects_blank_production_url() {
        let result = ProfileTable::new(DEVELOPMENT, ConfigurationProfile::new("   "));
        assert!(matches!(
            result,
            Err(EnvProfileError::ProfileValidation { .. })
        ));
    }

    #[test]
    fn direct_deserialization_validates() {
        let yaml = "development:\n  api_url: \"\"\nproduction:\n  api_url: https://a\n";
        let result: std::result::Result<ProfileTable, _> = serde_yaml::from_str(yaml);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("development api_url is empty"));
    }

    #[test]
    fn direct_deserialization_rejects_unknown_mode() {
        let yaml = format!("{}staging:\n  api_url: https://staging\n", TABLE_YAML);
        let result: std::result::Result<ProfileTable, _> = serde_yaml::from_str(&yaml);
        assert!(result.is_err());
    }

    #[test]
    fn load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("profiles.yml");
        fs::write(&path, TABLE_YAML).unwrap();

        let table = ProfileTable::load(&path).unwrap();
        assert_eq!(table.get(Mode::Production).api_url(), "https://api.example.com");
    }

    #[test]
    fn load_missing_file() {
        let result = ProfileTable::load(Path::new("/nonexistent/profiles.yml"));
        assert!(matches!(
            result,
            Err(EnvProfileError::ProfileNotFound { .. })
        ));
    }
}
