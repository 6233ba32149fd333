//! Url command implementation.
//!
//! The `envprofile url` command prints only the API URL, for use in scripts.

use crate::error::Result;
use crate::ui::UserInterface;

use super::context::ResolutionContext;
use super::dispatcher::{Command, CommandResult};
use super::display::warn_if_unrecognised;

/// The url command implementation.
pub struct UrlCommand<'a> {
    context: &'a ResolutionContext,
}

impl<'a> UrlCommand<'a> {
    /// Create a new url command.
    pub fn new(context: &'a ResolutionContext) -> Self {
        Self { context }
    }
}

impl Command for UrlCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let (resolved, profile) = self.context.resolve();
        warn_if_unrecognised(ui, &resolved);
        ui.message(profile.api_url());
        Ok(CommandResult::success())
    }
}
