//! Road Blaster - An endless lane-scrolling car shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (scrolling, hazards, collisions, game state)
//! - `renderer`: Per-tick draw list for an external draw layer
//! - `platform`: Input source abstraction and edge-detecting key state
//! - `persistence`: High score store (file / LocalStorage / memory)
//! - `tuning`: Data-driven game balance
//! - `scene`: Menu scene identifiers and transitions
//! - `session`: Embedding driver tying the simulation to input and storage

pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod scene;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use highscores::ScoreKeeper;
pub use settings::{LaneStyle, Settings};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Nominal frame timestep (60 FPS)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Window dimensions
    pub const SCREEN_WIDTH: f32 = 1080.0;
    pub const SCREEN_HEIGHT: f32 = 800.0;

    /// Track geometry: grass | border | road | border | grass
    pub const GRASS_WIDTH: f32 = 200.0;
    pub const BORDER_WIDTH: f32 = 20.0;
    pub const LANE_MARKER_WIDTH: f32 = 5.0;
    pub const LANE_MARKER_HEIGHT: f32 = 50.0;

    /// Spectator markers scrolling on the grass
    pub const CROWD_MARKER_WIDTH: f32 = 30.0;
    pub const CROWD_MARKER_HEIGHT: f32 = 40.0;

    /// Player car
    pub const CAR_WIDTH: f32 = 100.0;
    pub const CAR_HEIGHT: f32 = 160.0;
    pub const CAR_START_Y: f32 = 100.0;
    /// Pixels per tick while a direction key is held
    pub const CAR_MOVE_STEP: f32 = 10.0;
    /// Pixels per tick while boosting
    pub const CAR_BOOST_STEP: f32 = 20.0;
    /// Number of selectable vehicles
    pub const VEHICLE_COUNT: u8 = 5;

    /// Missiles
    pub const MISSILE_WIDTH: f32 = 10.0;
    pub const MISSILE_HEIGHT: f32 = 40.0;
    pub const MISSILE_SPEED: f32 = 15.0;

    /// Hazards
    pub const HAZARD_WIDTH: f32 = 90.0;
    pub const HAZARD_HEIGHT: f32 = 140.0;
    /// Per-tick spawn chance while no hazard is alive
    pub const HAZARD_SPAWN_CHANCE: f64 = 0.02;
    /// Hazards close in this much faster than the background scroll
    pub const HAZARD_SPEED_OFFSET: f32 = 3.0;

    /// Scrolling and difficulty
    pub const INITIAL_SCROLL_SPEED: f32 = 5.0;
    pub const RAMP_INTERVAL_SECS: f32 = 10.0;
    pub const RAMP_INCREMENT: f32 = 0.5;

    /// Score awarded per destroyed hazard
    pub const HAZARD_BONUS: u64 = 10;
}

/// Axis-aligned rectangle anchored at its bottom-left corner (y grows upward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap: rectangles that only share an edge do not overlap
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x
            && a_max.x > other.min.x
            && self.min.y < b_max.y
            && a_max.y > other.min.y
    }
}
