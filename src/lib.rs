//! Farmer Harvest - a top-down harvest-the-crops arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game state)
//! - `config`: Data-driven level tuning with built-in fallbacks
//! - `input`: Held-key tracking feeding the simulation
//! - `session`: Frame-driven shell connecting a host loop to the sim

pub mod config;
pub mod input;
pub mod session;
pub mod sim;

pub use config::LevelTable;
pub use session::Session;

/// Game configuration constants
pub mod consts {
    /// Logical playfield size
    pub const WIDTH: f32 = 900.0;
    pub const HEIGHT: f32 = 540.0;
    /// Grid tile size; crop spawn cells align to this
    pub const TILE: f32 = 30.0;

    /// Hard cap on per-frame elapsed time (backgrounded tab, debugger stall)
    pub const MAX_FRAME_DT: f32 = 0.05;

    /// Fallback level tuning when no config document is available
    pub const DEFAULT_GOAL: u32 = 15;
    pub const DEFAULT_SPAWN_EVERY: f32 = 0.8;
    pub const DEFAULT_TIME_LIMIT: f32 = 60.0;

    /// Spawn interval shrinks by this much per elapsed second
    pub const SPAWN_DECAY_PER_SEC: f32 = 0.01;
    /// Spawn interval never drops below this
    pub const SPAWN_EVERY_FLOOR: f32 = 0.25;

    /// Farmer defaults
    pub const FARMER_SIZE: f32 = 34.0;
    pub const FARMER_SPEED: f32 = 120.0;
    /// Walk animation: columns in the sheet, frames per second
    pub const FARMER_ANIM_COLS: u32 = 4;
    pub const FARMER_ANIM_FPS: f32 = 8.0;

    /// Crop defaults
    pub const CROP_W: f32 = 20.0;
    pub const CROP_H: f32 = 26.0;
    /// Sway phase advance in radians per second, cosmetic only
    pub const CROP_SWAY_RATE: f32 = 2.0;

    /// Scarecrow defaults
    pub const SCARECROW_W: f32 = 26.0;
    pub const SCARECROW_H: f32 = 46.0;
}

/// Clamp a scalar to [lo, hi]
#[inline]
pub fn clamp(v: f32, lo: f32, hi: f32) -> f32 {
    v.max(lo).min(hi)
}

#[cfg(test)]
mod tests {
    use super::clamp;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(11.0, 0.0, 10.0), 10.0);
    }
}
