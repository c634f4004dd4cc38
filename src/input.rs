//! Held-key input tracking
//!
//! The host forwards raw press/release events; this module keeps the held
//! set and latches one-shot actions until the next frame samples them.
//! Routing pause through the frame sample keeps key handling free of
//! state-machine side effects.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::sim::TickInput;

/// Keys the game cares about; the host filters everything else
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Pause,
    Start,
}

/// Currently-held keys plus latched one-shots
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Key>,
    pause_latch: bool,
    start_latch: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Pause => self.pause_latch = true,
            Key::Start => self.start_latch = true,
            _ => {}
        }
        self.held.insert(key);
    }

    /// Record a key release
    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Sample the frame's input; one-shot latches clear on read
    pub fn sample(&mut self) -> TickInput {
        let input = TickInput {
            left: self.is_held(Key::Left),
            right: self.is_held(Key::Right),
            up: self.is_held(Key::Up),
            down: self.is_held(Key::Down),
            pause: self.pause_latch,
            start: self.start_latch,
        };
        self.pause_latch = false;
        self.start_latch = false;
        input
    }

    /// Drop all held state (host lost focus, teardown)
    pub fn clear(&mut self) {
        self.held.clear();
        self.pause_latch = false;
        self.start_latch = false;
    }
}
