//! Selection export use case
//!
//! Serializes the selected samples and hands them to a [`WaveformStore`]
//! under a timestamped file name.

use crate::error::{WaveformError, WaveformResult};
use crate::format::serialize_samples;
use crate::storage::WaveformStore;
use crate::types::Sample;

/// Default prefix for exported file names
pub const DEFAULT_EXPORT_PREFIX: &str = "selected_range";

/// Build an export file name: `<prefix>_<unix millis>.txt`
pub fn export_file_name(prefix: &str, timestamp_millis: i64) -> String {
    format!("{}_{}.txt", prefix, timestamp_millis)
}

/// Export `selection` and return the identifier reported by the store
///
/// An empty selection is rejected with [`WaveformError::NoSelection`];
/// nothing is written in that case.
pub fn export_selection<S>(store: &S, prefix: &str, selection: &[Sample]) -> WaveformResult<String>
where
    S: WaveformStore + ?Sized,
{
    if selection.is_empty() {
        log::warn!("export_selection: nothing selected");
        return Err(WaveformError::NoSelection);
    }

    let name = export_file_name(prefix, chrono::Utc::now().timestamp_millis());
    let id = store.write_text(&name, &serialize_samples(selection))?;
    log::info!("export_selection: {} samples written as {}", selection.len(), id);
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::parse_waveform;
    use crate::storage::MemoryStore;
    use std::path::Path;

    #[test]
    fn test_file_name_shape() {
        assert_eq!(
            export_file_name(DEFAULT_EXPORT_PREFIX, 1_700_000_000_123),
            "selected_range_1700000000123.txt"
        );
    }

    #[test]
    fn test_empty_selection_is_rejected() {
        let store = MemoryStore::new();
        let err = export_selection(&store, DEFAULT_EXPORT_PREFIX, &[]).unwrap_err();
        assert_eq!(err.to_string(), "No selected region");
        assert!(store.is_empty());
    }

    #[test]
    fn test_export_then_reimport() {
        let store = MemoryStore::new();
        let selection = vec![Sample::new(0.1, 0.5), Sample::new(-0.2, 0.3)];

        let id = export_selection(&store, "clip", &selection).unwrap();
        assert!(id.starts_with("clip_") && id.ends_with(".txt"));

        let text = store.get(Path::new(&id)).unwrap();
        assert_eq!(parse_waveform(&text).unwrap(), selection);
    }
}
