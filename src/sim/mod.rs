//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Delta time supplied by the caller, no wall clock
//! - Seeded RNG only
//! - Stable iteration order (insertion order)
//! - No rendering, input device or storage dependencies

pub mod autopilot;
pub mod collision;
pub mod difficulty;
pub mod hazard;
pub mod projectile;
pub mod scroller;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, resolve_collisions};
pub use difficulty::DifficultyRamp;
pub use hazard::{Hazard, HazardSpawner, HazardVariant};
pub use projectile::{Projectile, ProjectileTrack};
pub use scroller::{Parity, Scroller, TrackElement, TrackKind, TrackSequence};
pub use state::{GameEvent, GamePhase, GameState, Player};
pub use tick::{TickInput, tick};
