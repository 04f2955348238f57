//! Score keeping and the persisted high score
//!
//! The score only grows during an episode. The high score is read once when
//! an episode starts and written at most once, on game over, and only when
//! the run strictly beats it.

use crate::persistence::ScoreStore;

/// Per-episode score plus the best score seen so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreKeeper {
    score: u64,
    high_score: u64,
    bonus: u64,
    /// Set once the game-over comparison has run for this episode
    settled: bool,
}

impl ScoreKeeper {
    pub fn new(bonus: u64) -> Self {
        Self {
            score: 0,
            high_score: 0,
            bonus,
            settled: false,
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    /// Award the hazard bonus
    pub fn on_hazard_destroyed(&mut self) {
        self.score = self.score.saturating_add(self.bonus);
    }

    /// Read the stored high score. Missing or corrupt data counts as 0.
    ///
    /// Never lowers a high score already known in memory, so a failed save
    /// from the previous episode is not forgotten on restart.
    pub fn load_high_score(&mut self, store: &impl ScoreStore) -> u64 {
        let stored = match store.load() {
            Ok(value) => value,
            Err(e) => {
                log::warn!("High score unreadable ({e}), starting from 0");
                0
            }
        };
        self.high_score = self.high_score.max(stored);
        self.high_score
    }

    /// Compare against the high score and persist a strictly better run.
    ///
    /// Returns true if this run set a new high score. Write failures are
    /// logged; the in-memory high score is still updated.
    pub fn on_game_over(&mut self, store: &mut impl ScoreStore) -> bool {
        if self.settled {
            return false;
        }
        self.settled = true;

        if self.score <= self.high_score {
            return false;
        }

        self.high_score = self.score;
        match store.save(self.score) {
            Ok(()) => log::info!("New high score saved: {}", self.score),
            Err(e) => log::warn!("Failed to save high score {}: {e}", self.score),
        }
        true
    }

    /// Start a new episode: score back to 0, high score kept
    pub fn reset(&mut self) {
        self.score = 0;
        self.settled = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{MemorySlot, ScoreStore};

    #[test]
    fn test_bonus_accumulates() {
        let mut keeper = ScoreKeeper::new(10);
        assert_eq!(keeper.score(), 0);
        keeper.on_hazard_destroyed();
        assert_eq!(keeper.score(), 10);
        keeper.on_hazard_destroyed();
        assert_eq!(keeper.score(), 20);
    }

    #[test]
    fn test_high_score_saved_when_strictly_greater() {
        let mut store = MemorySlot::default();
        store.save(5).unwrap();

        let mut keeper = ScoreKeeper::new(10);
        assert_eq!(keeper.load_high_score(&store), 5);
        keeper.on_hazard_destroyed();
        assert!(keeper.on_game_over(&mut store));
        assert_eq!(keeper.high_score(), 10);
        assert_eq!(store.load().unwrap(), 10);
    }

    #[test]
    fn test_equal_score_is_not_a_new_high() {
        let mut store = MemorySlot::default();
        store.save(10).unwrap();

        let mut keeper = ScoreKeeper::new(10);
        keeper.load_high_score(&store);
        keeper.on_hazard_destroyed();
        assert!(!keeper.on_game_over(&mut store));
        assert_eq!(store.load().unwrap(), 10);
    }

    #[test]
    fn test_game_over_settles_once_per_episode() {
        let mut store = MemorySlot::default();
        let mut keeper = ScoreKeeper::new(10);
        keeper.on_hazard_destroyed();
        assert!(keeper.on_game_over(&mut store));

        keeper.on_hazard_destroyed();
        assert!(!keeper.on_game_over(&mut store));
        assert_eq!(store.load().unwrap(), 10);

        keeper.reset();
        assert_eq!(keeper.score(), 0);
        assert_eq!(keeper.high_score(), 10);
    }

    #[test]
    fn test_corrupt_store_defaults_to_zero() {
        let store = MemorySlot::with_contents("???");
        let mut keeper = ScoreKeeper::new(10);
        assert_eq!(keeper.load_high_score(&store), 0);
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let mut store = MemorySlot::read_only(None);
        let mut keeper = ScoreKeeper::new(10);
        keeper.on_hazard_destroyed();
        assert!(keeper.on_game_over(&mut store));
        assert_eq!(keeper.high_score(), 10);
        assert_eq!(store.load().unwrap(), 0);

        // Reloading at the next episode keeps the unsaved best
        keeper.reset();
        assert_eq!(keeper.load_high_score(&store), 10);
    }
}
