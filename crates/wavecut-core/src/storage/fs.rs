//! Filesystem-backed waveform store

use std::path::{Path, PathBuf};

use super::WaveformStore;
use crate::error::{WaveformError, WaveformResult};

/// Store that reads from any path and writes into a single export directory
#[derive(Debug, Clone)]
pub struct FsStore {
    export_dir: PathBuf,
}

impl FsStore {
    pub fn new(export_dir: impl Into<PathBuf>) -> Self {
        Self {
            export_dir: export_dir.into(),
        }
    }

    /// Directory that exported files land in
    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }
}

impl WaveformStore for FsStore {
    fn read_text(&self, handle: &Path) -> WaveformResult<String> {
        log::info!("FsStore: reading {:?}", handle);
        std::fs::read_to_string(handle).map_err(|source| WaveformError::Read {
            path: handle.to_path_buf(),
            source,
        })
    }

    fn write_text(&self, name: &str, contents: &str) -> WaveformResult<String> {
        let path = self.export_dir.join(name);
        log::info!("FsStore: writing {} bytes to {:?}", contents.len(), path);

        std::fs::create_dir_all(&self.export_dir).map_err(|source| WaveformError::Write {
            path: self.export_dir.clone(),
            source,
        })?;
        std::fs::write(&path, contents).map_err(|source| WaveformError::Write {
            path: path.clone(),
            source,
        })?;

        Ok(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsStore::new(dir.path().join("exports"));

        let id = store.write_text("selected.txt", "0.1 0.5\n").unwrap();
        assert_eq!(id, "selected.txt");

        let path = store.export_dir().join("selected.txt");
        assert_eq!(store.read_text(&path).unwrap(), "0.1 0.5\n");
    }

    #[test]
    fn test_read_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsStore::new(dir.path());
        let missing = dir.path().join("nope.txt");

        match store.read_text(&missing) {
            Err(WaveformError::Read { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected read error, got {:?}", other),
        }
    }
}
