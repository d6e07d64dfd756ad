// Centralised keybind predicates for the browser.
//
// Handlers refer to actions (`is_quit`, `is_down`, ...) rather than raw
// `KeyEvent` patterns.

use crate::app::types::Move;
use crate::input::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the browser to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Navigate(Move),
    Quit,
}

pub fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

pub fn is_down(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Down | KeyCode::Char('j'))
}

pub fn is_up(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Up | KeyCode::Char('k'))
}

pub fn is_home(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Home | KeyCode::Char('g'))
}

pub fn is_end(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::End | KeyCode::Char('G'))
}

/// Map a key press to a command, if it is bound.
pub fn command_for(key: &KeyEvent) -> Option<Command> {
    if is_quit(key) {
        Some(Command::Quit)
    } else if is_down(key) {
        Some(Command::Navigate(Move::Next))
    } else if is_up(key) {
        Some(Command::Navigate(Move::Previous))
    } else if is_home(key) {
        Some(Command::Navigate(Move::First))
    } else if is_end(key) {
        Some(Command::Navigate(Move::Last))
    } else {
        None
    }
}
