//! Frame-driven session shell
//!
//! Bridges a host loop (animation callback, test harness, headless runner)
//! to the simulation: one `frame(elapsed)` call per host frame. Elapsed time
//! is capped so a stalled host cannot produce runaway simulation steps.
//!
//! The session owns both the game state and the input tracker, so listener
//! teardown is plain ownership: drop the session and everything goes.

use crate::config::LevelTable;
use crate::consts::MAX_FRAME_DT;
use crate::input::{InputState, Key};
use crate::sim::{GameEvent, GameState, tick};

pub struct Session {
    state: GameState,
    input: InputState,
}

impl Session {
    pub fn new(seed: u64, levels: LevelTable) -> Self {
        log::info!("Session created (seed {seed})");
        Self {
            state: GameState::new(seed, levels),
            input: InputState::new(),
        }
    }

    /// Read access for a presentation layer
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Forward a key press from the host
    pub fn key_down(&mut self, key: Key) {
        self.input.press(key);
    }

    /// Forward a key release from the host
    pub fn key_up(&mut self, key: Key) {
        self.input.release(key);
    }

    /// Start or resume the game
    pub fn start(&mut self) {
        self.state.start();
    }

    /// Reset the current level back to menu
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Drop held input, e.g. when the host window loses focus
    pub fn blur(&mut self) {
        self.input.clear();
    }

    /// Advance one host frame.
    ///
    /// `elapsed` is wall-clock seconds since the previous frame, clamped to
    /// [`MAX_FRAME_DT`]. Returns the events the frame produced.
    pub fn frame(&mut self, elapsed: f32) -> Vec<GameEvent> {
        let dt = crate::clamp(elapsed, 0.0, MAX_FRAME_DT);
        let input = self.input.sample();
        tick(&mut self.state, &input, dt);
        self.state.drain_events()
    }
}
