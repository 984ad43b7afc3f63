//! Wavecut Core - Shared library for the waveform editor
//!
//! Everything here is UI-agnostic:
//!
//! - **Types**: `Sample` (min/max column) and `NormalizedRange` (selection in 0.0-1.0)
//! - **Format**: text codec for the line-based waveform format
//! - **Storage**: the `WaveformStore` seam plus filesystem and in-memory stores
//! - **Import / Export**: the two use cases the editor drives
//! - **Config**: generic YAML config I/O and default paths

pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod import;
pub mod storage;
pub mod types;

pub use error::{WaveformError, WaveformResult};
pub use types::*;
