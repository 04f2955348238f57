//! High score and preference persistence
//!
//! Storage is a named slot holding one small JSON document:
//! - `FileSlot`: native file, written through a temp file then renamed
//! - `LocalStorageSlot`: browser LocalStorage (wasm32 only)
//! - `MemorySlot`: in-process, for tests and headless runs
//!
//! Every backend is synchronous and best-effort. Callers log failures and
//! carry on; nothing here is fatal to the simulation.

pub mod file;
pub mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use file::FileSlot;
pub use memory::MemorySlot;
#[cfg(target_arch = "wasm32")]
pub use web::LocalStorageSlot;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by a storage backend
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored data is corrupt: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("could not encode data: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, PersistenceError>;

/// A single named storage slot
pub trait Slot {
    /// Read the raw slot contents (`None` if never written)
    fn read(&self) -> Result<Option<String>>;
    /// Replace the slot contents
    fn write(&mut self, contents: &str) -> Result<()>;
}

/// Decode a JSON document from a slot
pub fn load_json<T: DeserializeOwned>(slot: &(impl Slot + ?Sized)) -> Result<Option<T>> {
    match slot.read()? {
        Some(json) => serde_json::from_str(&json)
            .map(Some)
            .map_err(PersistenceError::Parse),
        None => Ok(None),
    }
}

/// Encode a JSON document into a slot
pub fn save_json<T: Serialize>(slot: &mut (impl Slot + ?Sized), value: &T) -> Result<()> {
    let json = serde_json::to_string(value).map_err(PersistenceError::Serialize)?;
    slot.write(&json)
}

/// On-disk shape of the high score slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub high_score: u64,
}

/// Integer high score store
pub trait ScoreStore {
    /// Stored high score (`Ok(0)` if nothing was ever saved)
    fn load(&self) -> Result<u64>;
    fn save(&mut self, high_score: u64) -> Result<()>;
}

impl<S: Slot + ?Sized> ScoreStore for S {
    fn load(&self) -> Result<u64> {
        Ok(load_json::<HighScoreRecord>(self)?
            .map(|r| r.high_score)
            .unwrap_or(0))
    }

    fn save(&mut self, high_score: u64) -> Result<()> {
        save_json(self, &HighScoreRecord { high_score })
    }
}

/// Slot name for the high score
pub const HIGH_SCORE_KEY: &str = "road_blaster_highscore";

/// The platform's usual slot for `key`: a file next to the executable
#[cfg(not(target_arch = "wasm32"))]
pub fn default_slot(key: &str) -> FileSlot {
    FileSlot::beside_executable(key)
}

/// The platform's usual slot for `key`: browser LocalStorage
#[cfg(target_arch = "wasm32")]
pub fn default_slot(key: &str) -> LocalStorageSlot {
    LocalStorageSlot::new(key)
}
