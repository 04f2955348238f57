//! Hazard spawning and movement
//!
//! At most one hazard is alive at a time. It is held in an `Option` so the
//! limit cannot be broken by construction.

use glam::Vec2;
use rand::Rng;

use crate::Rect;
use crate::tuning::Tuning;

/// Visual variant; the draw layer maps it to an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HazardVariant {
    A,
    B,
}

/// An obstacle driving down the road (bottom-left corner at `pos`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hazard {
    pub pos: Vec2,
    pub variant: HazardVariant,
}

/// Spawns and advances the single live hazard
#[derive(Debug, Clone, PartialEq)]
pub struct HazardSpawner {
    live: Option<Hazard>,
    spawn_chance: f64,
    size: Vec2,
    /// Left-edge spawn interval across the road
    x_range: (f32, f32),
    spawn_y: f32,
    speed_offset: f32,
}

impl HazardSpawner {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            live: None,
            spawn_chance: tuning.spawn_chance.clamp(0.0, 1.0),
            size: Vec2::new(tuning.hazard_width, tuning.hazard_height),
            x_range: tuning.hazard_x_range(),
            spawn_y: tuning.screen_height,
            speed_offset: tuning.hazard_speed_offset,
        }
    }

    /// Roll for a new hazard. Only rolls while no hazard is alive.
    ///
    /// Returns the hazard if one was spawned.
    pub fn maybe_spawn<R: Rng>(&mut self, rng: &mut R) -> Option<Hazard> {
        if self.live.is_some() || !rng.random_bool(self.spawn_chance) {
            return None;
        }

        let (min_x, max_x) = self.x_range;
        let x = if min_x < max_x {
            rng.random_range(min_x..=max_x)
        } else {
            min_x
        };
        let variant = if rng.random_bool(0.5) {
            HazardVariant::A
        } else {
            HazardVariant::B
        };

        let hazard = Hazard {
            pos: Vec2::new(x, self.spawn_y),
            variant,
        };
        self.live = Some(hazard);
        Some(hazard)
    }

    /// Move the hazard toward the player, faster than the scenery.
    ///
    /// Returns the hazard if it left the bottom of the screen this tick.
    pub fn advance(&mut self, scroll_speed: f32) -> Option<Hazard> {
        let hazard = self.live.as_mut()?;
        hazard.pos.y -= scroll_speed + self.speed_offset;
        if hazard.pos.y + self.size.y <= 0.0 {
            return self.live.take();
        }
        None
    }

    /// Remove the live hazard (hit or game over)
    pub fn destroy(&mut self) -> Option<Hazard> {
        self.live.take()
    }

    pub fn live(&self) -> Option<&Hazard> {
        self.live.as_ref()
    }

    /// Live hazards as a slice (length 0 or 1)
    pub fn hazards(&self) -> &[Hazard] {
        self.live.as_slice()
    }

    pub fn rect(&self, hazard: &Hazard) -> Rect {
        Rect::new(hazard.pos.x, hazard.pos.y, self.size.x, self.size.y)
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[cfg(test)]
    pub(crate) fn place(&mut self, hazard: Hazard) {
        self.live = Some(hazard);
    }
}
