//! Per-frame simulation tick
//!
//! Order within a Playing tick: steer and fire, scroll scenery, move
//! missiles, move then roll the hazard, resolve collisions, ramp speed.

use glam::Vec2;

use super::autopilot;
use super::collision::{CollisionResult, resolve_collisions};
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick
///
/// Direction fields are levels (held keys); `fire`, `pause`, `restart` and
/// `quit` are edges that must be true for exactly one tick per press.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Steering direction, each axis in {-1, 0, 1} (y up)
    pub steer: Vec2,
    /// Move at boost speed while held
    pub boost: bool,
    /// Fire a missile
    pub fire: bool,
    /// Pause toggle
    pub pause: bool,
    /// Restart from the game-over screen
    pub restart: bool,
    /// Quit from the game-over screen
    pub quit: bool,
    /// Idle/demo mode - autopilot drives and fires
    pub autopilot: bool,
}

/// Advance the game state by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    match state.phase {
        GamePhase::Terminated => return,
        GamePhase::GameOver => {
            if input.restart {
                state.restart();
                state.emit(GameEvent::Restarted);
                log::info!("Race restarted");
            } else if input.quit {
                state.phase = GamePhase::Terminated;
                state.emit(GameEvent::Terminated);
                log::info!("Race terminated");
            }
            return;
        }
        GamePhase::Paused => {
            if input.pause {
                state.phase = GamePhase::Playing;
                state.emit(GameEvent::Resumed);
            }
            return;
        }
        GamePhase::Playing => {
            if input.pause {
                state.phase = GamePhase::Paused;
                state.emit(GameEvent::Paused);
                return;
            }
        }
    }

    state.time_ticks += 1;

    let driven;
    let input = if input.autopilot {
        driven = autopilot::drive(state, input);
        &driven
    } else {
        input
    };

    // Steer within the track
    let step = if input.boost {
        state.tuning.boost_step
    } else {
        state.tuning.move_step
    };
    let bounds = state.tuning.player_bounds();
    state.player.translate(input.steer * step, &bounds);

    if input.fire {
        let size = state.player_size();
        state.projectiles.fire(&state.player, size);
        state.emit(GameEvent::ProjectileFired);
    }

    let screen_height = state.tuning.screen_height;
    state.scroller.advance(state.scroll_speed, screen_height);
    state.projectiles.advance(screen_height);

    if state.hazards.advance(state.scroll_speed).is_some() {
        log::debug!("Hazard escaped");
        state.emit(GameEvent::HazardEscaped);
    }
    if let Some(hazard) = state.hazards.maybe_spawn(&mut state.rng) {
        log::debug!("Hazard {:?} spawned at x={:.1}", hazard.variant, hazard.pos.x);
        state.emit(GameEvent::HazardSpawned {
            variant: hazard.variant,
            x: hazard.pos.x,
        });
    }

    let player_rect = state.player_rect();
    match resolve_collisions(&mut state.projectiles, &mut state.hazards, &player_rect) {
        CollisionResult::Miss => {}
        CollisionResult::HazardDestroyed { hazard, .. } => {
            state.score.on_hazard_destroyed();
            let score = state.score.score();
            log::debug!("Hazard {:?} destroyed, score {}", hazard.variant, score);
            state.emit(GameEvent::HazardDestroyed {
                variant: hazard.variant,
                score,
            });
        }
        CollisionResult::PlayerHit { .. } => {
            state.hazards.destroy();
            state.phase = GamePhase::GameOver;
            let score = state.score.score();
            log::info!("Game over after {} ticks, score {}", state.time_ticks, score);
            state.emit(GameEvent::GameOver { score });
            return;
        }
    }

    if state.ramp.apply(dt, &mut state.scroll_speed) > 0 {
        log::info!("Scroll speed raised to {:.1}", state.scroll_speed);
        state.emit(GameEvent::SpeedUp {
            speed: state.scroll_speed,
        });
    }
}
