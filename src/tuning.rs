//! Data-driven game balance
//!
//! Every number the simulation reads lives here so a run can be re-tuned
//! from a JSON document without touching code. Missing fields fall back to
//! the defaults in [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::Rect;
use crate::consts::*;

/// Balance and geometry parameters for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub screen_width: f32,
    pub screen_height: f32,

    pub grass_width: f32,
    pub border_width: f32,
    pub lane_marker_width: f32,
    pub lane_marker_height: f32,
    pub crowd_marker_width: f32,
    pub crowd_marker_height: f32,

    pub car_width: f32,
    pub car_height: f32,
    pub car_start_y: f32,
    pub move_step: f32,
    pub boost_step: f32,

    pub missile_width: f32,
    pub missile_height: f32,
    pub missile_speed: f32,

    pub hazard_width: f32,
    pub hazard_height: f32,
    /// Probability per tick (0.0 - 1.0)
    pub spawn_chance: f64,
    pub hazard_speed_offset: f32,

    pub initial_scroll_speed: f32,
    pub ramp_interval_secs: f32,
    pub ramp_increment: f32,

    pub hazard_bonus: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            grass_width: GRASS_WIDTH,
            border_width: BORDER_WIDTH,
            lane_marker_width: LANE_MARKER_WIDTH,
            lane_marker_height: LANE_MARKER_HEIGHT,
            crowd_marker_width: CROWD_MARKER_WIDTH,
            crowd_marker_height: CROWD_MARKER_HEIGHT,

            car_width: CAR_WIDTH,
            car_height: CAR_HEIGHT,
            car_start_y: CAR_START_Y,
            move_step: CAR_MOVE_STEP,
            boost_step: CAR_BOOST_STEP,

            missile_width: MISSILE_WIDTH,
            missile_height: MISSILE_HEIGHT,
            missile_speed: MISSILE_SPEED,

            hazard_width: HAZARD_WIDTH,
            hazard_height: HAZARD_HEIGHT,
            spawn_chance: HAZARD_SPAWN_CHANCE,
            hazard_speed_offset: HAZARD_SPEED_OFFSET,

            initial_scroll_speed: INITIAL_SCROLL_SPEED,
            ramp_interval_secs: RAMP_INTERVAL_SECS,
            ramp_increment: RAMP_INCREMENT,

            hazard_bonus: HAZARD_BONUS,
        }
    }
}

impl Tuning {
    /// Parse a tuning document, falling back to defaults when it is unusable
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Tuning>(json) {
            Ok(tuning) => tuning.sanitized(),
            Err(e) => {
                log::warn!("Invalid tuning document ({e}), using defaults");
                Self::default()
            }
        }
    }

    /// Clamp values the simulation cannot work with
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        self.spawn_chance = if self.spawn_chance.is_nan() {
            defaults.spawn_chance
        } else {
            self.spawn_chance.clamp(0.0, 1.0)
        };
        if !(self.ramp_interval_secs > 0.0) {
            self.ramp_interval_secs = defaults.ramp_interval_secs;
        }
        if !(self.lane_marker_height > 0.0) {
            self.lane_marker_height = defaults.lane_marker_height;
        }
        if !(self.crowd_marker_height > 0.0) {
            self.crowd_marker_height = defaults.crowd_marker_height;
        }
        if !(self.missile_speed > 0.0) {
            self.missile_speed = defaults.missile_speed;
        }
        self.initial_scroll_speed = self.initial_scroll_speed.max(0.0);
        self.ramp_increment = self.ramp_increment.max(0.0);
        // Hazards must always close in, or one would never leave the screen
        if !(self.initial_scroll_speed + self.hazard_speed_offset > 0.0) {
            self.hazard_speed_offset = defaults.hazard_speed_offset;
        }
        if self.road_right() - self.road_left() < self.car_width.max(self.hazard_width) {
            log::warn!("Road narrower than the car, restoring default geometry");
            self.screen_width = defaults.screen_width;
            self.grass_width = defaults.grass_width;
            self.border_width = defaults.border_width;
            self.car_width = defaults.car_width;
            self.hazard_width = defaults.hazard_width;
        }
        self
    }

    /// Left edge of the drivable road
    #[inline]
    pub fn road_left(&self) -> f32 {
        self.grass_width + self.border_width
    }

    /// Right edge of the drivable road
    #[inline]
    pub fn road_right(&self) -> f32 {
        self.screen_width - self.grass_width - self.border_width
    }

    /// Region the player's bottom-left corner is clamped to
    pub fn player_bounds(&self) -> Rect {
        let left = self.road_left();
        let right = self.road_right() - self.car_width;
        let bottom = 0.0;
        let top = (self.screen_height - self.car_height).max(bottom);
        Rect::new(left, bottom, right - left, top - bottom)
    }

    /// Horizontal spawn interval `[min, max]` for a hazard's left edge
    pub fn hazard_x_range(&self) -> (f32, f32) {
        let min = self.road_left();
        let max = (self.road_right() - self.hazard_width).max(min);
        (min, max)
    }
}
