//! Storage seam for waveform text
//!
//! The editor never touches files directly. It talks to a [`WaveformStore`],
//! which only knows how to read raw text behind a handle and how to persist
//! raw text under a name. Where the bytes end up is the store's business.
//!
//! - [`FsStore`]: reads arbitrary paths, writes into an export directory
//! - [`MemoryStore`]: keeps everything in a map (tests, previews)

mod fs;
mod memory;

pub use fs::FsStore;
pub use memory::MemoryStore;

use std::path::Path;

use crate::error::WaveformResult;

/// Read/write capability handed to the import and export use cases
pub trait WaveformStore: Send + Sync {
    /// Read the full text behind `handle`
    fn read_text(&self, handle: &Path) -> WaveformResult<String>;

    /// Persist `contents` under `name` and return an identifier the user can recognise
    fn write_text(&self, name: &str, contents: &str) -> WaveformResult<String>;
}
