//! Keyboard bindings for the page strip.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::protocol::Command;
use super::window::SkipDirection;

/// Command bound to `key`, if any
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('h') => Some(Command::Previous),
        KeyCode::Right | KeyCode::Char('l') => Some(Command::Next),
        KeyCode::Home | KeyCode::Char('g') => Some(Command::First),
        KeyCode::End | KeyCode::Char('G') => Some(Command::Last),
        KeyCode::PageUp => Some(Command::Skip(SkipDirection::Backward)),
        KeyCode::PageDown => Some(Command::Skip(SkipDirection::Forward)),
        _ => None,
    }
}
