//! File-backed slot for native builds

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{Result, Slot};

/// A slot stored as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Slot named `key` inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>, key: &str) -> Self {
        Self::new(dir.as_ref().join(format!("{key}.json")))
    }

    /// Slot named `key` next to the running executable (falls back to cwd)
    pub fn beside_executable(key: &str) -> Self {
        let dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_default();
        Self::in_dir(dir, key)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

impl Slot for FileSlot {
    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, contents: &str) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        // Never leave a half-written slot behind
        let tmp = self.tmp_path();
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{PersistenceError, ScoreStore};

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "road_blaster_{name}_{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_missing_file_reads_none() {
        let slot = FileSlot::in_dir(scratch_dir("missing"), "hs");
        assert!(slot.read().unwrap().is_none());
        assert_eq!(slot.load().unwrap(), 0);
    }

    #[test]
    fn test_file_roundtrip_creates_directory() {
        let dir = scratch_dir("roundtrip");
        let mut slot = FileSlot::in_dir(dir.join("nested"), "hs");
        slot.save(1234).unwrap();
        assert_eq!(slot.load().unwrap(), 1234);
        assert!(!slot.tmp_path().exists());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_garbage_file_is_parse_error() {
        let dir = scratch_dir("garbage");
        fs::create_dir_all(&dir).unwrap();
        let slot = FileSlot::in_dir(&dir, "hs");
        fs::write(slot.path(), "\u{0}\u{1}garbage").unwrap();
        assert!(matches!(slot.load(), Err(PersistenceError::Parse(_))));
        let _ = fs::remove_dir_all(&dir);
    }
}
