//! Held-key input handler for terminal environments.
//!
//! Stands in for the original's touch joysticks: held keys deflect the two
//! control axes to full scale, and releasing re-centers them. Most terminals
//! never emit key release events, so a short timeout auto-releases held keys
//! the same way a lifted finger re-centers a joystick knob.

use std::time::Instant;

use crossterm::event::KeyCode;

use crate::types::InputState;

// Without release events, a single tap would otherwise read as held forever.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Tracks which control keys are currently held and produces one
/// normalized [`InputState`] snapshot per frame.
///
/// The event loop is the only writer; the frame driver reads snapshots.
#[derive(Debug, Clone)]
pub struct InputHandler {
    forward_held: bool,
    backward_held: bool,
    turn_left_held: bool,
    turn_right_held: bool,
    last_key_time: Instant,
    key_release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            forward_held: false,
            backward_held: false,
            turn_left_held: false,
            turn_right_held: false,
            last_key_time: Instant::now(),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn handle_key_press(&mut self, code: KeyCode) {
        let held = match code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => &mut self.forward_held,
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => &mut self.backward_held,
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => &mut self.turn_left_held,
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => &mut self.turn_right_held,
            _ => return,
        };
        *held = true;
        self.last_key_time = Instant::now();
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => self.forward_held = false,
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => self.backward_held = false,
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => self.turn_left_held = false,
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                self.turn_right_held = false
            }
            _ => {}
        }
    }

    /// Latest normalized input, auto-releasing stale held keys first.
    pub fn snapshot(&mut self) -> InputState {
        let stale = self.last_key_time.elapsed().as_millis() as u32 > self.key_release_timeout_ms;
        if stale {
            self.forward_held = false;
            self.backward_held = false;
            self.turn_left_held = false;
            self.turn_right_held = false;
        }

        let mut forward = 0.0;
        if self.forward_held {
            forward += 1.0;
        }
        if self.backward_held {
            forward -= 1.0;
        }

        let mut rotate = 0.0;
        if self.turn_right_held {
            rotate += 1.0;
        }
        if self.turn_left_held {
            rotate -= 1.0;
        }

        InputState::new(forward, rotate)
    }

    pub fn reset(&mut self) {
        self.forward_held = false;
        self.backward_held = false;
        self.turn_left_held = false;
        self.turn_right_held = false;
        self.last_key_time = Instant::now();
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
