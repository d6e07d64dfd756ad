// Keyboard input helpers and type aliases.
pub use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Only presses count; release/repeat reports (Windows) are ignored.
pub fn is_press(ev: &KeyEvent) -> bool {
    ev.kind == KeyEventKind::Press
}
