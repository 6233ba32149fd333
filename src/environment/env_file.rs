//! Dotenv file loading.
//!
//! A dotenv file is the lowest-priority place a mode signal can come from.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EnvProfileError, Result};

use super::source::{EnvSource, MapEnv};

/// Variables read from a dotenv file, tagged with the file they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvFile {
    /// Where the variables were read from.
    pub path: PathBuf,
    /// The parsed variables.
    pub vars: MapEnv,
}

impl EnvSource for EnvFile {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.var(key)
    }
}

/// Load variables from a dotenv-style file.
///
/// # Format
///
/// ```text
/// # Comment
/// NODE_ENV=production
/// export API_HOST="value with spaces"
/// SINGLE='also works'
/// ```
///
/// # Errors
///
/// Returns `EnvFileNotFound` if the file doesn't exist.
/// Returns `EnvFileParse` for a line without `=` or with an empty key.
pub fn load_env_file(path: &Path) -> Result<EnvFile> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            EnvProfileError::EnvFileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            EnvProfileError::Io(e)
        }
    })?;

    let vars = parse_dotenv(&content, path)?;
    tracing::debug!(path = %path.display(), count = vars.len(), "Loaded env file");

    Ok(EnvFile {
        path: path.to_path_buf(),
        vars,
    })
}

/// Parse dotenv-style content.
pub fn parse_dotenv(content: &str, source_path: &Path) -> Result<MapEnv> {
    let mut env = MapEnv::new();

    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line = line.strip_prefix("export ").unwrap_or(line);

        let Some((key, value)) = line.split_once('=') else {
            return Err(EnvProfileError::EnvFileParse {
                path: source_path.to_path_buf(),
                line: line_num + 1,
                message: format!("expected KEY=value, got '{}'", line),
            });
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(EnvProfileError::EnvFileParse {
                path: source_path.to_path_buf(),
                line: line_num + 1,
                message: "empty variable name".to_string(),
            });
        }

        env.set(key, unquote(value.trim()));
    }

    Ok(env)
}

/// Remove one pair of matching surrounding quotes.
fn unquote(value: &str) -> &str {
    if value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')))
    {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
