//! Input collaborator: held-key snapshot plus drained edge events
//!
//! The loop queries the continuous snapshot once per tick and drains the
//! discrete event queue once at tick start; one-shot events are consumed by
//! the tick they arm.

use macroquad::input::{
    KeyCode, MouseButton, is_key_down, is_key_pressed, is_mouse_button_down, is_quit_requested,
};

/// Continuous state of the held keys/buttons, queried once per tick
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

/// Discrete edge events, drained once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Jump,
    Quit,
}

/// Input collaborator seam
pub trait InputSource {
    fn snapshot(&self) -> InputSnapshot;
    fn drain_events(&mut self) -> Vec<InputEvent>;
}

/// Macroquad-backed input for the demo window: A/D to move, Space to jump,
/// left mouse to fire, Escape or window close to quit
pub struct MacroquadInput;

impl InputSource for MacroquadInput {
    fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            left: is_key_down(KeyCode::A),
            right: is_key_down(KeyCode::D),
            fire: is_mouse_button_down(MouseButton::Left),
        }
    }

    fn drain_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        if is_key_pressed(KeyCode::Space) {
            events.push(InputEvent::Jump);
        }
        if is_key_pressed(KeyCode::Escape) || is_quit_requested() {
            events.push(InputEvent::Quit);
        }
        events
    }
}
