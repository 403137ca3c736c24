//! Input module - turns terminal key events into normalized control input

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub mod handler;

pub use handler::InputHandler;

/// Check if key should end the session
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
