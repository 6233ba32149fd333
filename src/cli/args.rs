//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// envprofile - Select environment-specific configuration profiles.
#[derive(Debug, Parser)]
#[command(name = "envprofile")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Mode signal to use instead of NODE_ENV ("production" selects production)
    #[arg(short, long, global = true, env = "ENVPROFILE_MODE")]
    pub mode: Option<String>,

    /// Dotenv file consulted when NODE_ENV is not set
    #[arg(short, long, global = true)]
    pub env_file: Option<PathBuf>,

    /// YAML file with the development and production profiles
    #[arg(short, long, global = true, env = "ENVPROFILE_PROFILES")]
    pub profiles: Option<PathBuf>,

    /// Only print command output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the resolved profile (default if no command specified)
    Show(ShowArgs),

    /// Print only the API URL of the resolved profile
    Url(UrlArgs),

    /// Show the resolved mode and where it came from
    Mode(ModeArgs),
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ShowArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `url` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct UrlArgs {}

/// Arguments for the `mode` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ModeArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
