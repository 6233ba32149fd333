//! Visual theme and styling.

use console::Style;

/// Output styles.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for notes and header lines (dim).
    pub dim: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme that applies no styling.
    pub fn plain() -> Self {
        Self {
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
        }
    }

    /// Format a warning message.
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{} {}", self.warning.apply_to("⚠"), self.warning.apply_to(msg))
    }

    /// Format an error message.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{} {}", self.error.apply_to("✗"), self.error.apply_to(msg))
    }

    /// Format a note.
    pub fn format_note(&self, msg: &str) -> String {
        self.dim.apply_to(msg).to_string()
    }
}

/// Check if colors should be used.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::colors_enabled() && console::Term::stdout().is_term()
}
