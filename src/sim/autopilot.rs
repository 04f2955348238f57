//! Idle/demo mode driver
//!
//! Replaces the player's steering with a simple policy: line up under the
//! live hazard and shoot it, but swerve away once it gets close and the
//! shot has not landed. With no hazard around, drift back to the start line
//! in the middle of the road.

use glam::Vec2;

use super::state::GameState;
use super::tick::TickInput;

/// Vertical gap (car top to hazard bottom) at which the autopilot swerves
const DANGER_GAP: f32 = 220.0;
/// Ticks between autopilot shots
const FIRE_COOLDOWN_TICKS: u64 = 6;

/// Produce the input the autopilot would give this tick.
///
/// Pause/restart/quit edges from the real input are passed through.
pub fn drive(state: &GameState, input: &TickInput) -> TickInput {
    let tuning = &state.tuning;
    let car = state.player_rect();
    let car_center = car.min.x + car.size.x / 2.0;

    let mut out = TickInput {
        pause: input.pause,
        restart: input.restart,
        quit: input.quit,
        autopilot: true,
        ..Default::default()
    };

    let Some(hazard) = state.hazards.live() else {
        // Nothing to do: return to the start position
        let home = Vec2::new(
            tuning.screen_width / 2.0 - tuning.car_width / 2.0,
            tuning.car_start_y,
        );
        out.steer = steer_toward(car.min, home, tuning.move_step);
        return out;
    };

    let hazard_rect = state.hazards.rect(hazard);
    let hazard_center = hazard_rect.min.x + hazard_rect.size.x / 2.0;
    let gap = hazard_rect.min.y - car.max().y;
    let lanes_overlap = hazard_rect.min.x < car.max().x && hazard_rect.max().x > car.min.x;

    if gap < DANGER_GAP && lanes_overlap {
        // Swerve toward whichever side has more road
        let room_left = hazard_rect.min.x - tuning.road_left();
        let room_right = tuning.road_right() - hazard_rect.max().x;
        out.steer.x = if room_left > room_right { -1.0 } else { 1.0 };
        out.steer.y = -1.0;
        out.boost = true;
    } else {
        let dx = hazard_center - car_center;
        // Within one step is close enough; otherwise it jitters
        if dx.abs() > tuning.move_step {
            out.steer.x = dx.signum();
            out.boost = dx.abs() > tuning.boost_step;
        }
    }

    // Shoot while lined up
    let aligned = (hazard_center - car_center).abs() < hazard_rect.size.x / 2.0;
    out.fire = aligned && gap > 0.0 && state.time_ticks % FIRE_COOLDOWN_TICKS == 0;

    out
}

fn steer_toward(from: Vec2, to: Vec2, dead_zone: f32) -> Vec2 {
    let delta = to - from;
    let axis = |d: f32| if d.abs() > dead_zone { d.signum() } else { 0.0 };
    Vec2::new(axis(delta.x), axis(delta.y))
}
