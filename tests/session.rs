//! End-to-end races driven through the public API with scripted keys

use road_blaster::consts::FRAME_DT;
use road_blaster::persistence::{MemorySlot, ScoreStore};
use road_blaster::platform::{Action, KeyState, poll};
use road_blaster::session::{Session, SessionStatus};
use road_blaster::sim::{GameEvent, GamePhase, GameState, ProjectileTrack, tick};
use road_blaster::{Rect, Settings, Tuning};

/// Steer under the live hazard, optionally firing every frame
fn chase(keys: &mut KeyState, state: &GameState, fire: bool) {
    keys.release_all();
    let Some(hazard) = state.hazards.live() else {
        return;
    };
    let target = hazard.pos.x + state.tuning.hazard_width / 2.0;
    let car = state.player_rect();
    let dx = target - (car.min.x + car.size.x / 2.0);
    if dx > 5.0 {
        keys.key_down(Action::Right);
    } else if dx < -5.0 {
        keys.key_down(Action::Left);
    }
    if dx.abs() > 20.0 {
        keys.key_down(Action::Boost);
    }
    if fire {
        keys.key_down(Action::Fire);
    }
}

fn always_spawning() -> Tuning {
    Tuning {
        spawn_chance: 1.0,
        ..Default::default()
    }
}

#[test]
fn test_no_hazards_when_spawn_chance_is_zero() {
    let tuning = Tuning {
        spawn_chance: 0.0,
        ..Default::default()
    };
    let mut state = GameState::new(99, tuning);
    let keys = KeyState::new();
    for _ in 0..1000 {
        tick(&mut state, &poll(&keys), FRAME_DT);
        assert!(state.hazards.hazards().is_empty());
    }
    assert_eq!(state.phase, GamePhase::Playing);
}

#[test]
fn test_certain_spawn_places_one_hazard_at_the_top() {
    let mut state = GameState::new(7, always_spawning());
    tick(&mut state, &poll(&KeyState::new()), FRAME_DT);

    let hazards = state.hazards.hazards();
    assert_eq!(hazards.len(), 1);
    let (lo, hi) = state.tuning.hazard_x_range();
    assert!(hazards[0].pos.x >= lo && hazards[0].pos.x <= hi);
    assert_eq!(hazards[0].pos.y, state.tuning.screen_height);
}

#[test]
fn test_projectiles_leave_above_the_screen() {
    let tuning = Tuning::default();
    let state = GameState::new(1, tuning.clone());
    let mut track = ProjectileTrack::new(&tuning);
    track.fire(&state.player, state.player_size());

    let mut ticks = 0;
    while !track.is_empty() {
        track.advance(tuning.screen_height);
        assert!(track.as_slice().iter().all(|p| p.pos.y <= tuning.screen_height));
        ticks += 1;
        assert!(ticks < 100);
    }
}

#[test]
fn test_touching_boxes_do_not_collide() {
    let car = Rect::new(100.0, 100.0, 100.0, 160.0);
    assert!(!car.overlaps(&Rect::new(100.0, 260.0, 90.0, 140.0)));
    assert!(car.overlaps(&Rect::new(100.0, 259.0, 90.0, 140.0)));
}

#[test]
fn test_shooting_scores_and_high_score_persists() {
    let mut session = Session::new(
        11,
        always_spawning(),
        &Settings::default(),
        MemorySlot::default(),
    );
    let mut keys = KeyState::new();
    let mut final_score = None;

    for _ in 0..20_000 {
        let state = session.state();
        // Score two hazards, then drive into the next one
        let firing = state.score.score() < 20;
        chase(&mut keys, state, firing);
        session.frame(&keys, FRAME_DT);

        if let Some(GameEvent::GameOver { score }) = session
            .events()
            .iter()
            .find(|e| matches!(e, GameEvent::GameOver { .. }))
        {
            final_score = Some(*score);
            break;
        }
    }

    let score = final_score.unwrap();
    assert!(score >= 20);
    assert_eq!(score % 10, 0);
    assert_eq!(session.state().score.high_score(), score);

    // A new session reads it back
    let store = session.into_store();
    assert_eq!(store.load().unwrap(), score);
    let next = Session::new(12, always_spawning(), &Settings::default(), store);
    assert_eq!(next.state().score.high_score(), score);
}

#[test]
fn test_lower_score_leaves_high_score_alone() {
    let mut store = MemorySlot::default();
    store.save(1000).unwrap();
    let mut session = Session::new(5, always_spawning(), &Settings::default(), store);
    let mut keys = KeyState::new();

    while session.state().phase != GamePhase::GameOver {
        let state = session.state();
        chase(&mut keys, state, false);
        session.frame(&keys, FRAME_DT);
    }
    assert_eq!(session.state().score.score(), 0);
    assert_eq!(session.store().load().unwrap(), 1000);
}

#[test]
fn test_restart_matches_a_fresh_episode() {
    let seed = 21;
    let mut state = GameState::new(seed, always_spawning());
    let mut keys = KeyState::new();

    let mut guard = 0;
    while state.phase != GamePhase::GameOver {
        chase(&mut keys, &state, false);
        tick(&mut state, &poll(&keys), FRAME_DT);
        guard += 1;
        assert!(guard < 20_000);
    }

    keys.release_all();
    keys.key_down(Action::Restart);
    tick(&mut state, &poll(&keys), FRAME_DT);

    let fresh = GameState::new(seed, always_spawning());
    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.player, fresh.player);
    assert_eq!(state.scroller, fresh.scroller);
    assert_eq!(state.score.score(), 0);
    assert_eq!(state.scroll_speed, fresh.scroll_speed);
    assert!(state.projectiles.is_empty());
    assert!(state.hazards.live().is_none());
    assert_eq!(state.time_ticks, 0);
}

#[test]
fn test_quit_from_game_over_terminates_session() {
    let mut session = Session::new(
        8,
        always_spawning(),
        &Settings::default(),
        MemorySlot::default(),
    );
    let mut keys = KeyState::new();

    // Quit is ignored while racing
    keys.key_down(Action::Quit);
    assert_eq!(session.frame(&keys, FRAME_DT), SessionStatus::Running);

    while session.state().phase != GamePhase::GameOver {
        let state = session.state();
        chase(&mut keys, state, false);
        session.frame(&keys, FRAME_DT);
    }

    keys.release_all();
    keys.key_down(Action::Quit);
    assert_eq!(session.frame(&keys, FRAME_DT), SessionStatus::Terminated);
    assert_eq!(session.events(), &[GameEvent::Terminated]);
}
