//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Modifier for the alternate submit shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms (Cmd+Enter/Ctrl+Enter also work as fallback)
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Status bar hint for submitting
#[cfg(target_os = "macos")]
pub const SUBMIT_HINT: &str = "^S/Cmd+Enter:submit";

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_HINT: &str = "^S:submit";
