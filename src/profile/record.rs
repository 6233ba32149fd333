//! Configuration profile records.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Environment-specific configuration values.
///
/// Serializes as `{ "apiUrl": ... }`; profile files may spell the key
/// either `apiUrl` or `api_url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigurationProfile {
    /// Base URL of the backend API.
    #[serde(rename = "apiUrl", alias = "api_url")]
    api_url: Cow<'static, str>,
}

impl ConfigurationProfile {
    /// A profile backed by a string literal.
    pub const fn from_static(api_url: &'static str) -> Self {
        Self {
            api_url: Cow::Borrowed(api_url),
        }
    }

    /// A profile owning its values.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: Cow::Owned(api_url.into()),
        }
    }

    /// The API base URL.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

/// Built-in development profile.
pub const DEVELOPMENT: ConfigurationProfile =
    ConfigurationProfile::from_static("http://localhost:3000");

/// Built-in production profile.
///
/// The URL is a placeholder; deployments supply their own table.
pub const PRODUCTION: ConfigurationProfile =
    ConfigurationProfile::from_static("https://your-production-server.com");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_urls() {
        assert_eq!(DEVELOPMENT.api_url(), "http://localhost:3000");
        assert_eq!(PRODUCTION.api_url(), "https://your-production-server.com");
    }

    #[test]
    fn owned_and_borrowed_compare_equal() {
        assert_eq!(ConfigurationProfile::new("http://localhost:3000"), DEVELOPMENT);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(&DEVELOPMENT).unwrap();
        assert_eq!(json, serde_json::json!({ "apiUrl": "http://localhost:3000" }));
    }

    #[test]
    fn deserializes_either_spelling() {
        let a: ConfigurationProfile = serde_yaml::from_str("apiUrl: http://a").unwrap();
        let b: ConfigurationProfile = serde_yaml::from_str("api_url: http://a").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.api_url(), "http://a");
    }

    #[test]
    fn rejects_unknown_fields() {
        let result: Result<ConfigurationProfile, _> =
            serde_yaml::from_str("api_url: http://a\ntimeout: 5");
        assert!(result.is_err());
    }
}
