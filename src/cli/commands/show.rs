//! Show command implementation.
//!
//! The `envprofile show` command prints the resolved profile.

use crate::cli::args::ShowArgs;
use crate::error::{EnvProfileError, Result};
use crate::ui::UserInterface;

use super::context::ResolutionContext;
use super::dispatcher::{Command, CommandResult};
use super::display::{mode_note, warn_if_unrecognised};

/// The show command implementation.
pub struct ShowCommand<'a> {
    context: &'a ResolutionContext,
    args: ShowArgs,
}

impl<'a> ShowCommand<'a> {
    /// Create a new show command.
    pub fn new(context: &'a ResolutionContext, args: ShowArgs) -> Self {
        Self { context, args }
    }
}

impl Command for ShowCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let (resolved, profile) = self.context.resolve();
        warn_if_unrecognised(ui, &resolved);

        if self.args.json {
            let json = serde_json::to_string_pretty(profile)
                .map_err(|e| EnvProfileError::Other(e.into()))?;
            ui.message(&json);
        } else {
            ui.note(&mode_note(&resolved));
            let yaml =
                serde_yaml::to_string(profile).map_err(|e| EnvProfileError::Other(e.into()))?;
            ui.message(yaml.trim_end());
        }

        Ok(CommandResult::success())
    }
}
