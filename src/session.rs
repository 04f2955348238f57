//! Race session: simulation plus input and high-score storage
//!
//! A host owns one [`Session`] per race scene and calls [`Session::frame`]
//! once per display frame. The session reads the high score when each
//! episode starts and offers the final score to the store on game over.

use crate::persistence::ScoreStore;
use crate::platform::{Action, InputSource, poll};
use crate::renderer::DrawList;
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, tick};
use crate::tuning::Tuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    /// The player quit; hand control back to the scene navigator
    Terminated,
}

pub struct Session<S: ScoreStore> {
    state: GameState,
    store: S,
    autopilot: bool,
    /// Events raised during the most recent frame
    events: Vec<GameEvent>,
}

impl<S: ScoreStore> Session<S> {
    pub fn new(seed: u64, tuning: Tuning, settings: &Settings, store: S) -> Self {
        let mut state = GameState::with_settings(seed, tuning, settings);
        let high_score = state.score.load_high_score(&store);
        log::info!(
            "Race started (seed {seed}, vehicle {}, high score {high_score})",
            state.player.vehicle
        );
        Self {
            state,
            store,
            autopilot: settings.autopilot,
            events: Vec::new(),
        }
    }

    /// Run one simulation tick from the current input
    pub fn frame(&mut self, source: &impl InputSource, dt: f32) -> SessionStatus {
        if source.just_pressed(Action::Autopilot) {
            self.autopilot = !self.autopilot;
            log::info!(
                "Autopilot {}",
                if self.autopilot { "enabled" } else { "disabled" }
            );
        }

        let mut input = poll(source);
        input.autopilot = self.autopilot;
        tick(&mut self.state, &input, dt);

        self.events = self.state.drain_events();
        for event in &self.events {
            match event {
                GameEvent::GameOver { .. } => {
                    if self.state.score.on_game_over(&mut self.store) {
                        log::info!("New high score: {}", self.state.score.high_score());
                    }
                }
                GameEvent::Restarted => {
                    self.state.score.load_high_score(&self.store);
                }
                _ => {}
            }
        }

        self.status()
    }

    pub fn status(&self) -> SessionStatus {
        if self.state.phase == GamePhase::Terminated {
            SessionStatus::Terminated
        } else {
            SessionStatus::Running
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn autopilot(&self) -> bool {
        self.autopilot
    }

    pub fn set_autopilot(&mut self, on: bool) {
        self.autopilot = on;
    }

    pub fn draw_list(&self) -> DrawList {
        DrawList::capture(&self.state, self.autopilot)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
