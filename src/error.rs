//! Error types for envprofile operations.
//!
//! This module defines [`EnvProfileError`], the error type for the fallible
//! edges of the crate (reading dotenv files, loading profile tables), and a
//! [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Profile resolution itself is total and never returns an error
//! - Use `EnvProfileError` for file and validation failures
//! - Use `anyhow::Error` (via `EnvProfileError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for envprofile operations.
#[derive(Debug, Error)]
pub enum EnvProfileError {
    /// Dotenv file not found at the given location.
    #[error("Env file not found: {path}")]
    EnvFileNotFound { path: PathBuf },

    /// A dotenv line could not be parsed.
    #[error("Invalid line {line} in {path}: {message}")]
    EnvFileParse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// Profile table file not found at the given location.
    #[error("Profile file not found: {path}")]
    ProfileNotFound { path: PathBuf },

    /// Failed to parse a profile table file.
    #[error("Failed to parse profiles at {path}: {message}")]
    ProfileParse { path: PathBuf, message: String },

    /// A profile table is structurally valid but unusable.
    #[error("Invalid profile: {message}")]
    ProfileValidation { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for envprofile operations.
pub type Result<T> = std::result::Result<T, EnvProfileError>;
