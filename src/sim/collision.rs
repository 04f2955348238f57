//! Hit and crash detection
//!
//! Boxes overlap only when their interiors intersect; shared edges do not
//! count (see [`Rect::overlaps`]). Missile hits are resolved before the
//! crash check, so a hazard shot on the tick it reaches the car cannot end
//! the run.

use super::hazard::{Hazard, HazardSpawner};
use super::projectile::{Projectile, ProjectileTrack};
use crate::Rect;

/// What happened to the live hazard this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CollisionResult {
    /// Nothing touched
    Miss,
    /// A missile destroyed the hazard; the missile was consumed
    HazardDestroyed {
        hazard: Hazard,
        projectile: Projectile,
    },
    /// The hazard reached the player
    PlayerHit { hazard: Hazard },
}

impl CollisionResult {
    pub fn is_player_hit(&self) -> bool {
        matches!(self, CollisionResult::PlayerHit { .. })
    }
}

/// Index of the first missile (in firing order) overlapping `target`
pub fn first_projectile_hit(track: &ProjectileTrack, target: &Rect) -> Option<usize> {
    track
        .as_slice()
        .iter()
        .position(|p| track.rect(p).overlaps(target))
}

/// Run the per-tick collision pass.
///
/// The first overlapping missile destroys the hazard and is removed; every
/// other missile is left untouched. Only a hazard that survives the missile
/// pass is tested against the player.
pub fn resolve_collisions(
    projectiles: &mut ProjectileTrack,
    hazards: &mut HazardSpawner,
    player: &Rect,
) -> CollisionResult {
    let Some(hazard) = hazards.live().copied() else {
        return CollisionResult::Miss;
    };
    let hazard_rect = hazards.rect(&hazard);

    if let Some(index) = first_projectile_hit(projectiles, &hazard_rect) {
        if let Some(projectile) = projectiles.take(index) {
            hazards.destroy();
            return CollisionResult::HazardDestroyed { hazard, projectile };
        }
    }

    if hazard_rect.overlaps(player) {
        return CollisionResult::PlayerHit { hazard };
    }

    CollisionResult::Miss
}
