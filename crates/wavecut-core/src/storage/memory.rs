//! In-memory waveform store

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::WaveformStore;
use crate::error::{WaveformError, WaveformResult};

/// Store keeping files in a map keyed by path
///
/// Written files are keyed by their bare name, so they can be read back
/// with `Path::new(name)`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: Mutex<HashMap<PathBuf, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file that `read_text` can later return
    pub fn insert(&self, handle: impl Into<PathBuf>, contents: impl Into<String>) {
        self.lock().insert(handle.into(), contents.into());
    }

    /// Contents stored under `handle`, if any
    pub fn get(&self, handle: impl AsRef<Path>) -> Option<String> {
        self.lock().get(handle.as_ref()).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<PathBuf, String>> {
        // A poisoned map still holds consistent strings
        self.files.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl WaveformStore for MemoryStore {
    fn read_text(&self, handle: &Path) -> WaveformResult<String> {
        self.get(handle).ok_or_else(|| WaveformError::Read {
            path: handle.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such entry"),
        })
    }

    fn write_text(&self, name: &str, contents: &str) -> WaveformResult<String> {
        self.insert(name, contents);
        Ok(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        store.write_text("a.txt", "1 2\n").unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.read_text(Path::new("a.txt")).unwrap(), "1 2\n");
    }

    #[test]
    fn test_missing_entry() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.read_text(Path::new("missing.txt")),
            Err(WaveformError::Read { .. })
        ));
    }
}
