//! Game state and core simulation types
//!
//! Everything a snapshot needs lives here. Cosmetic-only fields (sway phase,
//! walk frame) ride along but never feed back into gameplay.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::{Rect, overlaps};
use crate::config::LevelTable;
use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for start
    Menu,
    /// Active gameplay
    Playing,
    /// Frozen mid-level
    Paused,
    /// Timer expired below goal
    GameOver,
    /// Goal met on the final level, or at the final whistle
    Win,
}

/// Which way the farmer sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

/// Crop varieties, each with a point value and display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CropKind {
    Wheat,
    Pumpkin,
    GoldenApple,
}

impl CropKind {
    pub const ALL: [CropKind; 3] = [CropKind::Wheat, CropKind::Pumpkin, CropKind::GoldenApple];

    pub fn points(&self) -> u32 {
        match self {
            CropKind::Wheat => 1,
            CropKind::Pumpkin => 3,
            CropKind::GoldenApple => 5,
        }
    }

    /// Display color for a presentation layer
    pub fn color(&self) -> &'static str {
        match self {
            CropKind::Wheat => "#d9a441",
            CropKind::Pumpkin => "#ff8c00",
            CropKind::GoldenApple => "#ffd700",
        }
    }
}

/// A collectible crop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Crop {
    pub rect: Rect,
    pub kind: CropKind,
    /// Sway phase in radians, cosmetic only
    pub sway: f32,
    /// Marked when collected; purged at end of frame
    pub dead: bool,
}

impl Crop {
    pub fn new(x: f32, y: f32, kind: CropKind, sway: f32) -> Self {
        Self {
            rect: Rect::new(x, y, CROP_W, CROP_H),
            kind,
            sway,
            dead: false,
        }
    }

    pub fn points(&self) -> u32 {
        self.kind.points()
    }

    /// Advance the sway animation; no gameplay effect
    pub fn animate(&mut self, dt: f32) {
        self.sway += dt * CROP_SWAY_RATE;
    }
}

/// Static obstacle; exists only to block the farmer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scarecrow {
    pub rect: Rect,
}

impl Scarecrow {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            rect: Rect::new(x, y, SCARECROW_W, SCARECROW_H),
        }
    }
}

/// The player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Farmer {
    pub rect: Rect,
    pub vel: Vec2,
    pub speed: f32,
    pub facing: Facing,
    pub moving: bool,
    /// Walk-cycle column (0..FARMER_ANIM_COLS)
    pub frame: u32,
    anim_timer: f32,
}

impl Farmer {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            rect: Rect::new(x, y, FARMER_SIZE, FARMER_SIZE),
            vel: Vec2::ZERO,
            speed: FARMER_SPEED,
            facing: Facing::default(),
            moving: false,
            frame: 0,
            anim_timer: 0.0,
        }
    }

    /// Derive velocity and facing from a held-direction sample.
    ///
    /// `dx`/`dy` are -1, 0 or 1 (right/down positive). Diagonal movement is
    /// deliberately not normalized, so it runs ~1.41x faster than axis
    /// movement; normalizing would change the game feel. Facing: horizontal
    /// wins when |vx| > |vy|, otherwise vertical (ties prefer vertical).
    pub fn set_heading(&mut self, dx: i8, dy: i8) {
        self.vel = Vec2::new(dx as f32, dy as f32) * self.speed;
        self.moving = self.vel != Vec2::ZERO;
        if self.moving {
            if self.vel.x.abs() > self.vel.y.abs() {
                self.facing = if self.vel.x > 0.0 { Facing::Right } else { Facing::Left };
            } else if self.vel.y != 0.0 {
                self.facing = if self.vel.y > 0.0 { Facing::Down } else { Facing::Up };
            }
        }
    }

    /// Move by velocity for `dt` seconds, clamped to world bounds.
    ///
    /// Collision response is all-or-nothing: if the clamped destination
    /// overlaps any obstacle the whole move is reverted. No sliding.
    pub fn advance(&mut self, dt: f32, obstacles: &[Scarecrow]) {
        let before = self.rect.pos;
        self.rect.pos += self.vel * dt;
        self.rect.clamp_to(WIDTH, HEIGHT);
        if obstacles.iter().any(|o| overlaps(&self.rect, &o.rect)) {
            self.rect.pos = before;
        }

        if self.moving {
            self.anim_timer += dt;
            let frame_len = 1.0 / FARMER_ANIM_FPS;
            while self.anim_timer >= frame_len {
                self.anim_timer -= frame_len;
                self.frame = (self.frame + 1) % FARMER_ANIM_COLS;
            }
        } else {
            self.frame = 0;
            self.anim_timer = 0.0;
        }
    }
}

/// Observable state changes for a presentation layer.
///
/// The core never touches UI; a shell drains these once per frame and
/// updates whatever sinks it has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    PhaseChanged(GamePhase),
    ScoreChanged(u32),
    LevelAdvanced(u32),
    CropsCollected { count: u32, points: u32 },
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Spawn RNG; serialized so snapshots replay identically
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Accumulated score for the current level
    pub score: u32,
    /// Current level, 1-based
    pub level: u32,
    /// Seconds left on the current level
    pub time_left: f32,
    /// Score needed to advance
    pub goal: u32,
    /// Current spawn interval; decays while playing
    pub spawn_every: f32,
    /// Elapsed time not yet converted into spawns
    pub spawn_accum: f32,
    /// The player
    pub farmer: Farmer,
    /// Live crops
    pub crops: Vec<Crop>,
    /// Fixed obstacles for the level
    pub obstacles: Vec<Scarecrow>,
    /// Level tuning table (config document or built-in defaults)
    pub levels: LevelTable,
    /// Pending events since the last drain
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh session in the Menu phase
    pub fn new(seed: u64, levels: LevelTable) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            score: 0,
            level: 1,
            time_left: 0.0,
            goal: 0,
            spawn_every: 0.0,
            spawn_accum: 0.0,
            farmer: Farmer::new(0.0, 0.0),
            crops: Vec::new(),
            obstacles: Vec::new(),
            levels,
            events: Vec::new(),
        };
        state.reset();
        state
    }

    /// Return to Menu semantics: entities cleared, score zeroed, timer, goal
    /// and spawn rate reloaded from the current level's tuning, obstacles
    /// re-placed at their fixed spots.
    ///
    /// Callable from any phase. The level number itself is preserved so the
    /// advance path can reset into the next level.
    pub fn reset(&mut self) {
        let params = self.levels.params_for(self.level);
        self.set_phase(GamePhase::Menu);
        self.farmer = Farmer::new(WIDTH / 2.0 - 17.0, HEIGHT - 80.0);
        self.crops.clear();
        self.score = 0;
        self.time_left = params.time_limit;
        self.spawn_every = params.spawn_every;
        self.goal = params.goal;
        self.spawn_accum = 0.0;
        self.obstacles.clear();
        self.obstacles.push(Scarecrow::new(200.0, 220.0));
        self.obstacles.push(Scarecrow::new(650.0, 160.0));
    }

    /// Start or resume. From Menu/GameOver/Win this resets the current level
    /// and enters Playing; from Paused it just resumes.
    pub fn start(&mut self) {
        match self.phase {
            GamePhase::Menu | GamePhase::GameOver | GamePhase::Win => {
                self.reset();
                self.set_phase(GamePhase::Playing);
            }
            GamePhase::Paused => self.set_phase(GamePhase::Playing),
            GamePhase::Playing => {}
        }
    }

    /// Spawn one crop at a uniform random grid cell inside the border ring.
    ///
    /// Cell choice ignores occupancy: crops may stack on crops or obstacles.
    pub(crate) fn spawn_crop(&mut self) {
        let cols = ((WIDTH - 2.0 * TILE) / TILE) as u32;
        let rows = ((HEIGHT - 2.0 * TILE) / TILE) as u32;
        let gx = self.rng.random_range(0..cols) as f32 * TILE + TILE;
        let gy = self.rng.random_range(0..rows) as f32 * TILE + TILE;
        let kind = CropKind::ALL[self.rng.random_range(0..CropKind::ALL.len())];
        let sway = self.rng.random_range(0.0..std::f32::consts::TAU);
        self.crops.push(Crop::new(gx, gy, kind, sway));
    }

    /// Transition phase, emitting an event only on actual change
    pub(crate) fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            self.phase = phase;
            self.events.push(GameEvent::PhaseChanged(phase));
        }
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events accumulated since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
