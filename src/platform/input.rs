//! Keyboard input: held levels and just-pressed edges
//!
//! Hosts feed raw key events into a [`KeyState`] as they arrive and call
//! [`KeyState::end_frame`] after each tick. A press is latched until the
//! next tick reads it, so it registers exactly once even when the key goes
//! down and up between two ticks, and key auto-repeat never re-fires it.

use std::collections::HashSet;

use glam::Vec2;

use crate::sim::TickInput;

/// Game actions a key can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Left,
    Right,
    Up,
    Down,
    Boost,
    Fire,
    Pause,
    Restart,
    Quit,
    Autopilot,
}

impl Action {
    /// Map a DOM-style key name (`KeyboardEvent.key`) to an action
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "a" | "A" => Some(Action::Left),
            "ArrowRight" | "d" | "D" => Some(Action::Right),
            "ArrowUp" | "w" | "W" => Some(Action::Up),
            "ArrowDown" | "s" | "S" => Some(Action::Down),
            " " | "Space" | "Shift" => Some(Action::Boost),
            "Enter" => Some(Action::Fire),
            "p" | "P" | "Escape" => Some(Action::Pause),
            "r" | "R" => Some(Action::Restart),
            "q" | "Q" => Some(Action::Quit),
            "i" | "I" => Some(Action::Autopilot),
            _ => None,
        }
    }
}

/// Read-only view of the input device for one tick
pub trait InputSource {
    /// Is the key currently held down
    fn is_held(&self, action: Action) -> bool;
    /// Did the key go down since the previous tick
    fn just_pressed(&self, action: Action) -> bool;
}

/// Key state built from press/release events
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashSet<Action>,
    pressed: HashSet<Action>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, action: Action) {
        // Repeats of an already-held key are not new presses
        if self.held.insert(action) {
            self.pressed.insert(action);
        }
    }

    pub fn key_up(&mut self, action: Action) {
        self.held.remove(&action);
    }

    /// Convenience for hosts that deliver key names
    pub fn key_event(&mut self, key: &str, down: bool) {
        if let Some(action) = Action::from_key(key) {
            if down {
                self.key_down(action);
            } else {
                self.key_up(action);
            }
        }
    }

    /// Forget this tick's edges
    pub fn end_frame(&mut self) {
        self.pressed.clear();
    }

    /// Drop everything (focus lost)
    pub fn release_all(&mut self) {
        self.held.clear();
        self.pressed.clear();
    }
}

impl InputSource for KeyState {
    fn is_held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    fn just_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }
}

/// Build this tick's simulation input.
///
/// Opposing directions held together cancel out on that axis.
pub fn poll(source: &impl InputSource) -> TickInput {
    let axis = |neg: Action, pos: Action| -> f32 {
        match (source.is_held(neg), source.is_held(pos)) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    };

    TickInput {
        steer: Vec2::new(
            axis(Action::Left, Action::Right),
            axis(Action::Down, Action::Up),
        ),
        boost: source.is_held(Action::Boost),
        fire: source.just_pressed(Action::Fire),
        pause: source.just_pressed(Action::Pause),
        restart: source.just_pressed(Action::Restart),
        quit: source.just_pressed(Action::Quit),
        autopilot: false,
    }
}
