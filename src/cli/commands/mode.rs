//! Mode command implementation.
//!
//! The `envprofile mode` command shows the resolved mode and its source.

use crate::cli::args::ModeArgs;
use crate::error::{EnvProfileError, Result};
use crate::ui::UserInterface;

use super::context::ResolutionContext;
use super::dispatcher::{Command, CommandResult};
use super::display::warn_if_unrecognised;

/// The mode command implementation.
pub struct ModeCommand<'a> {
    context: &'a ResolutionContext,
    args: ModeArgs,
}

impl<'a> ModeCommand<'a> {
    /// Create a new mode command.
    pub fn new(context: &'a ResolutionContext, args: ModeArgs) -> Self {
        Self { context, args }
    }
}

impl Command for ModeCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let resolved = self.context.resolve_mode();
        warn_if_unrecognised(ui, &resolved);

        if self.args.json {
            let value = serde_json::json!({
                "mode": resolved.mode,
                "source": resolved.source.to_string(),
                "signal": resolved.signal,
            });
            let json = serde_json::to_string_pretty(&value)
                .map_err(|e| EnvProfileError::Other(e.into()))?;
            ui.message(&json);
        } else {
            ui.message(resolved.mode.as_str());
            ui.note(&format!("# from {}", resolved.source));
        }

        Ok(CommandResult::success())
    }
}
