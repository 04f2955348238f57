//! Game state and core simulation types
//!
//! Everything one race needs lives in [`GameState`]; a restart rebuilds the
//! world from the same tuning, keeping only the RNG stream and high score.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::difficulty::DifficultyRamp;
use super::hazard::{HazardSpawner, HazardVariant};
use super::projectile::ProjectileTrack;
use super::scroller::Scroller;
use crate::Rect;
use crate::highscores::ScoreKeeper;
use crate::settings::{LaneStyle, Settings};
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Frozen until the pause key is pressed again
    Paused,
    /// Crashed; waiting for restart or quit
    GameOver,
    /// Player quit from the game-over screen
    Terminated,
}

/// The player's car (bottom-left corner at `pos`)
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    /// Selected vehicle, for the draw layer
    pub vehicle: u8,
}

impl Player {
    /// Car centred on the road at the start height
    pub fn spawn(tuning: &Tuning, vehicle: u8) -> Self {
        let x = tuning.screen_width / 2.0 - tuning.car_width / 2.0;
        let bounds = tuning.player_bounds();
        Self {
            pos: Vec2::new(x, tuning.car_start_y).clamp(bounds.min, bounds.max()),
            vehicle,
        }
    }

    /// Move by `delta`, staying inside `bounds`
    pub fn translate(&mut self, delta: Vec2, bounds: &Rect) {
        self.pos = (self.pos + delta).clamp(bounds.min, bounds.max());
    }
}

/// Something the host may want to react to (sound, logging, persistence)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    ProjectileFired,
    HazardSpawned { variant: HazardVariant, x: f32 },
    HazardDestroyed { variant: HazardVariant, score: u64 },
    /// Hazard left the bottom of the screen without scoring
    HazardEscaped,
    SpeedUp { speed: f32 },
    Paused,
    Resumed,
    GameOver { score: u64 },
    Restarted,
    Terminated,
}

/// Complete state of one race
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub lane_style: LaneStyle,
    pub crowd: bool,
    pub phase: GamePhase,
    /// Playing ticks simulated this episode
    pub time_ticks: u64,
    pub player: Player,
    pub scroller: Scroller,
    pub projectiles: ProjectileTrack,
    pub hazards: HazardSpawner,
    pub scroll_speed: f32,
    pub ramp: DifficultyRamp,
    pub score: ScoreKeeper,
    /// Events raised since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh race with default preferences
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self::with_settings(seed, tuning, &Settings::default())
    }

    /// Create a fresh race for the given preferences
    pub fn with_settings(seed: u64, tuning: Tuning, settings: &Settings) -> Self {
        let tuning = tuning.sanitized();
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player: Player::spawn(&tuning, settings.vehicle_index()),
            scroller: Scroller::new(&tuning, settings.lane_style, settings.crowd),
            projectiles: ProjectileTrack::new(&tuning),
            hazards: HazardSpawner::new(&tuning),
            scroll_speed: tuning.initial_scroll_speed,
            ramp: DifficultyRamp::new(tuning.ramp_interval_secs, tuning.ramp_increment),
            score: ScoreKeeper::new(tuning.hazard_bonus),
            lane_style: settings.lane_style,
            crowd: settings.crowd,
            phase: GamePhase::Playing,
            time_ticks: 0,
            events: Vec::new(),
            tuning,
        }
    }

    /// Full world reset for a new episode.
    ///
    /// Positions, sequences, score and speed return to their initial values.
    /// The RNG keeps running so the next episode differs, and the high score
    /// is kept.
    pub fn restart(&mut self) {
        let tuning = &self.tuning;
        self.player = Player::spawn(tuning, self.player.vehicle);
        self.scroller = Scroller::new(tuning, self.lane_style, self.crowd);
        self.projectiles = ProjectileTrack::new(tuning);
        self.hazards = HazardSpawner::new(tuning);
        self.scroll_speed = tuning.initial_scroll_speed;
        self.ramp.reset();
        self.score.reset();
        self.time_ticks = 0;
        self.phase = GamePhase::Playing;
    }

    pub fn player_size(&self) -> Vec2 {
        Vec2::new(self.tuning.car_width, self.tuning.car_height)
    }

    pub fn player_rect(&self) -> Rect {
        let size = self.player_size();
        Rect::new(self.player.pos.x, self.player.pos.y, size.x, size.y)
    }

    /// Take all events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_defaults() {
        let state = GameState::new(1, Tuning::default());
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.pos, Vec2::new(490.0, 100.0));
        assert_eq!(state.scroll_speed, 5.0);
        assert_eq!(state.score.score(), 0);
        assert!(state.hazards.live().is_none());
        assert!(state.projectiles.is_empty());
        assert!(state.scroller.crowd.is_some());
    }

    #[test]
    fn test_translate_clamps_to_bounds() {
        let tuning = Tuning::default();
        let bounds = tuning.player_bounds();
        let mut player = Player::spawn(&tuning, 0);

        player.translate(Vec2::new(-10_000.0, -10_000.0), &bounds);
        assert_eq!(player.pos, bounds.min);

        player.translate(Vec2::new(10_000.0, 10_000.0), &bounds);
        assert_eq!(player.pos, bounds.max());
    }

    #[test]
    fn test_settings_carry_into_state() {
        let settings = Settings {
            vehicle: 4,
            lane_style: LaneStyle::WideGap,
            crowd: false,
            autopilot: false,
        };
        let state = GameState::with_settings(9, Tuning::default(), &settings);
        assert_eq!(state.player.vehicle, 4);
        assert_eq!(state.scroller.lane_markers.step(), 100.0);
        assert!(state.scroller.crowd.is_none());
    }
}
