//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Elapsed time arrives as a parameter, never from a clock
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod rect;
pub mod state;
pub mod tick;

pub use rect::{Rect, overlaps};
pub use state::{Crop, CropKind, Facing, Farmer, GameEvent, GamePhase, GameState, Scarecrow};
pub use tick::{TickInput, tick};
