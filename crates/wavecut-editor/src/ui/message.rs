//! Application messages

use std::path::PathBuf;

use wavecut_core::Sample;
use wavecut_widgets::CanvasInput;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Import
    ImportRequested,
    /// File picker closed (None = cancelled)
    ImportPicked(Option<PathBuf>),
    /// Read + parse finished on the blocking pool
    ImportComplete(Result<Vec<Sample>, String>),

    // Selection
    /// Raw pointer/resize input from the waveform canvas
    Canvas(CanvasInput),
    ResetSelection,

    // Export
    ExportRequested,
    /// Identifier of the written file, or the error text
    ExportComplete(Result<String, String>),

    // Notices
    DismissNotice(u64),
}
