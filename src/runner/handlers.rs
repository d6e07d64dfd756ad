//! Key dispatch: one key press yields at most one cursor transition.

use crate::app::settings::keybinds::{self, Command};
use crate::app::Session;
use crate::input::KeyEvent;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Quit,
    /// The cursor moved; render again.
    Redraw,
    /// Unbound key or saturated bound; nothing changes on screen.
    Idle,
}

/// Top-level key handler.
pub fn handle_key(session: &mut Session, key: &KeyEvent) -> Outcome {
    match keybinds::command_for(key) {
        Some(Command::Quit) => Outcome::Quit,
        Some(Command::Navigate(mv)) => {
            if session.navigate(mv).changed() {
                Outcome::Redraw
            } else {
                Outcome::Idle
            }
        }
        None => Outcome::Idle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::types::{sample_record, Collection, Move};
    use crate::input::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn down_at_last_record_is_idle() {
        let collection = Collection::new(vec![sample_record(1), sample_record(2)]).unwrap();
        let mut session = Session::new(collection).unwrap();
        session.navigate(Move::First);
        assert_eq!(handle_key(&mut session, &key(KeyCode::Down)), Outcome::Redraw);
        assert_eq!(handle_key(&mut session, &key(KeyCode::Down)), Outcome::Idle);
        assert_eq!(handle_key(&mut session, &key(KeyCode::Char('z'))), Outcome::Idle);
        assert_eq!(handle_key(&mut session, &key(KeyCode::Char('q'))), Outcome::Quit);
        assert_eq!(session.cursor().index(), Some(1));
    }
}
