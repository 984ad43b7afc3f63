//! Waveform import/export error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the import and export collaborators
///
/// The display strings are shown to the user verbatim, so they stay short.
/// The canvas itself never produces any of these.
#[derive(Error, Debug)]
pub enum WaveformError {
    /// A line did not hold exactly two finite numbers
    #[error("Invalid waveform data format")]
    InvalidFormat {
        /// 1-based line number in the source text
        line: usize,
    },

    /// No samples left after skipping blank lines
    #[error("Waveform data is empty")]
    Empty,

    /// Export was asked to write an empty selection
    #[error("No selected region")]
    NoSelection,

    /// Reading the source handle failed
    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the export target failed
    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for waveform import/export operations
pub type WaveformResult<T> = Result<T, WaveformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(
            WaveformError::InvalidFormat { line: 3 }.to_string(),
            "Invalid waveform data format"
        );
        assert_eq!(WaveformError::Empty.to_string(), "Waveform data is empty");
        assert_eq!(WaveformError::NoSelection.to_string(), "No selected region");
    }

    #[test]
    fn test_io_errors_keep_source() {
        let err = WaveformError::Read {
            path: PathBuf::from("/tmp/missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("missing.txt"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
