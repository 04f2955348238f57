//! Browser LocalStorage slot (wasm32 only)

use super::{PersistenceError, Result, Slot};

/// A slot stored under one LocalStorage key
#[derive(Debug, Clone)]
pub struct LocalStorageSlot {
    key: String,
}

impl LocalStorageSlot {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }

    fn storage() -> Result<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| PersistenceError::Unavailable("LocalStorage not available".into()))
    }
}

impl Slot for LocalStorageSlot {
    fn read(&self) -> Result<Option<String>> {
        Self::storage()?
            .get_item(&self.key)
            .map_err(|e| PersistenceError::Unavailable(format!("{e:?}")))
    }

    fn write(&mut self, contents: &str) -> Result<()> {
        Self::storage()?
            .set_item(&self.key, contents)
            .map_err(|e| PersistenceError::Unavailable(format!("{e:?}")))
    }
}
