//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show command output plus notes and warnings.
    #[default]
    Normal,
    /// Show command output and errors only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows notes and warnings.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}
