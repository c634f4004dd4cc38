//! Per-frame simulation update
//!
//! Advances one frame of gameplay from a sampled input and elapsed seconds.
//! The shell clamps wall-clock dt before calling in; the tick itself trusts
//! its argument so tests can feed synthetic values.

use crate::clamp;
use crate::consts::*;

use super::rect::overlaps;
use super::state::{GameEvent, GamePhase, GameState};

/// Input sample for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Held directional keys
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Pause toggle (one-shot)
    pub pause: bool,
    /// Start/resume (one-shot)
    pub start: bool,
}

/// Advance the session by one frame.
///
/// Order matters and is observable: countdown, movement, spawning,
/// collection, goal check, purge. The goal check resets the timer when it
/// advances a level, so a frame that hits both the goal and the final tick
/// resolves to a level advance, never a game over.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.start {
        state.start();
    }
    if input.pause {
        match state.phase {
            GamePhase::Playing => state.set_phase(GamePhase::Paused),
            GamePhase::Paused => state.set_phase(GamePhase::Playing),
            _ => {}
        }
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    // Countdown first; once it hits zero nothing else in the frame runs
    let limit = state.levels.params_for(state.level).time_limit;
    state.time_left = clamp(state.time_left - dt, 0.0, limit);
    if state.time_left <= 0.0 {
        let end = if state.score >= state.goal {
            GamePhase::Win
        } else {
            GamePhase::GameOver
        };
        state.set_phase(end);
        return;
    }

    // Player movement
    let dx = input.right as i8 - input.left as i8;
    let dy = input.down as i8 - input.up as i8;
    state.farmer.set_heading(dx, dy);
    state.farmer.advance(dt, &state.obstacles);

    // Spawning; the interval decays toward a floor as the level wears on
    state.spawn_accum += dt;
    state.spawn_every = (state.spawn_every - dt * SPAWN_DECAY_PER_SEC).max(SPAWN_EVERY_FLOOR);
    while state.spawn_accum >= state.spawn_every {
        state.spawn_accum -= state.spawn_every;
        state.spawn_crop();
    }

    // Collection: score the whole overlap set in one step
    let mut points = 0u32;
    let mut count = 0u32;
    for crop in &mut state.crops {
        if !crop.dead && overlaps(&state.farmer.rect, &crop.rect) {
            crop.dead = true;
            points += crop.points();
            count += 1;
        }
    }
    if count > 0 {
        state.score += points;
        state.push_event(GameEvent::CropsCollected { count, points });
        state.push_event(GameEvent::ScoreChanged(state.score));

        if state.score >= state.goal {
            state.level += 1;
            if state.level > state.levels.max_level() {
                state.set_phase(GamePhase::Win);
            } else {
                let level = state.level;
                state.reset();
                state.push_event(GameEvent::LevelAdvanced(level));
                state.set_phase(GamePhase::Playing);
            }
        }
    }

    // Purge collected crops, sway the rest
    state.crops.retain(|c| !c.dead);
    for crop in &mut state.crops {
        crop.animate(dt);
    }
}
