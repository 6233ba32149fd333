//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands, ShowArgs};
use crate::error::Result;
use crate::ui::UserInterface;

use super::context::ResolutionContext;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] carrying the exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
///
/// Commands that cannot complete return `Err` instead; the binary maps
/// those to exit code 1.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Exit code to use.
    pub exit_code: u8,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }
}

/// Dispatches CLI commands to their implementations.
#[derive(Debug, Default)]
pub struct CommandDispatcher;

impl CommandDispatcher {
    /// Create a new dispatcher.
    pub fn new() -> Self {
        Self
    }

    /// Build the resolution context from global flags, then dispatch.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let context = ResolutionContext::from_cli(cli)?;
        self.dispatch_with(cli, &context, ui)
    }

    /// Dispatch and execute a command against a prepared context.
    pub fn dispatch_with(
        &self,
        cli: &Cli,
        context: &ResolutionContext,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Show(args)) => {
                super::show::ShowCommand::new(context, args.clone()).execute(ui)
            }
            Some(Commands::Url(_)) => super::url::UrlCommand::new(context).execute(ui),
            Some(Commands::Mode(args)) => {
                super::mode::ModeCommand::new(context, args.clone()).execute(ui)
            }
            None => {
                // Default to show with default args
                super::show::ShowCommand::new(context, ShowArgs::default()).execute(ui)
            }
        }
    }
}
