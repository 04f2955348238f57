//! In-process slot

use super::{PersistenceError, Result, Slot};

/// Slot kept in memory; can be told to reject writes
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    contents: Option<String>,
    reject_writes: bool,
}

impl MemorySlot {
    pub fn with_contents(contents: &str) -> Self {
        Self {
            contents: Some(contents.to_string()),
            reject_writes: false,
        }
    }

    /// A slot whose writes always fail (read-only media, full quota, ...)
    pub fn read_only(contents: Option<&str>) -> Self {
        Self {
            contents: contents.map(str::to_string),
            reject_writes: true,
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Slot for MemorySlot {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.contents.clone())
    }

    fn write(&mut self, contents: &str) -> Result<()> {
        if self.reject_writes {
            return Err(PersistenceError::Unavailable("slot is read-only".into()));
        }
        self.contents = Some(contents.to_string());
        Ok(())
    }
}
