//! Shared output helpers for commands.

use crate::environment::ResolvedMode;
use crate::ui::UserInterface;

/// Header line naming the mode and where it came from.
pub fn mode_note(resolved: &ResolvedMode) -> String {
    format!("# mode: {} ({})", resolved.mode, resolved.source)
}

/// Warn when the signal silently fell back to development.
pub fn warn_if_unrecognised(ui: &mut dyn UserInterface, resolved: &ResolvedMode) {
    if resolved.is_recognised() {
        return;
    }
    if let Some(signal) = &resolved.signal {
        ui.warning(&format!(
            "Mode {:?} from {} is not \"production\" or \"development\"; using the {} profile",
            signal, resolved.source, resolved.mode
        ));
    }
}
