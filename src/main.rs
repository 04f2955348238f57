//! Road Blaster entry point
//!
//! Native builds run a headless autopilot race: the autopilot drives for a
//! fixed number of ticks, restarting after each crash, and the best score is
//! kept in a file next to the executable.
//!
//! Usage: `road-blaster [seed] [ticks]` (log level via `RUST_LOG`)

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use road_blaster::consts::FRAME_DT;
    use road_blaster::persistence::{HIGH_SCORE_KEY, Slot, default_slot};
    use road_blaster::platform::{Action, KeyState};
    use road_blaster::session::{Session, SessionStatus};
    use road_blaster::sim::GameEvent;
    use road_blaster::{Settings, Tuning};

    env_logger::init();
    log::info!("Road Blaster (native, headless) starting...");

    let mut args = std::env::args().skip(1);
    let seed = parse_arg(args.next(), "seed", 0x5EED);
    let ticks = parse_arg(args.next(), "ticks", 60 * 60 * 5);

    let tuning = match default_slot("road_blaster_tuning").read() {
        Ok(Some(json)) => Tuning::from_json(&json),
        Ok(None) => Tuning::default(),
        Err(e) => {
            log::warn!("Tuning unreadable ({e}), using defaults");
            Tuning::default()
        }
    };
    let settings = Settings::load(&default_slot(Settings::STORAGE_KEY));

    let store = default_slot(HIGH_SCORE_KEY);
    log::info!("High score file: {}", store.path().display());
    let mut session = Session::new(seed, tuning, &settings, store);
    // Headless runs always let the autopilot drive
    session.set_autopilot(true);

    let mut keys = KeyState::new();
    let mut episodes = 1u32;
    let mut best = 0u64;

    for _ in 0..ticks {
        let status = session.frame(&keys, FRAME_DT);
        keys.release_all();
        if status == SessionStatus::Terminated {
            break;
        }

        for event in session.events() {
            if let GameEvent::GameOver { score } = event {
                best = best.max(*score);
                log::info!("Episode {episodes} over with score {score}");
                // Straight back into the next race
                keys.key_down(Action::Restart);
                episodes += 1;
            }
        }
    }

    let state = session.state();
    println!(
        "{} episodes, best score {}, current score {}, high score {}",
        episodes,
        best.max(state.score.score()),
        state.score.score(),
        state.score.high_score()
    );
}

#[cfg(not(target_arch = "wasm32"))]
fn parse_arg<T: std::str::FromStr + std::fmt::Display + Copy>(
    arg: Option<String>,
    name: &str,
    default: T,
) -> T {
    match arg {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("Invalid {name} '{raw}', using {default}");
            default
        }),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser host embeds the library directly
}
