pub mod keyboard;

pub use keyboard::{is_press, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crossterm::event::{self, Event};
use std::io;

/// Terminal events the browser reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Other,
}

impl From<Event> for InputEvent {
    fn from(ev: Event) -> Self {
        match ev {
            Event::Key(key) if is_press(&key) => InputEvent::Key(key),
            Event::Resize(w, h) => InputEvent::Resize(w, h),
            _ => InputEvent::Other,
        }
    }
}

/// Block until the next terminal event.
pub fn read_event() -> io::Result<InputEvent> {
    Ok(event::read()?.into())
}
