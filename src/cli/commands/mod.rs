//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which builds a
//! [`ResolutionContext`] from the global flags and routes CLI subcommands
//! to their implementations. Every command resolves against the same
//! context, so `show`, `url`, and `mode` always agree.

pub mod context;
pub mod dispatcher;
pub mod display;
pub mod mode;
pub mod show;
pub mod url;

pub use context::ResolutionContext;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
