//! Waveform import use case
//!
//! Reads raw text through a [`WaveformStore`] and parses it into samples.

use std::path::Path;

use crate::error::WaveformResult;
use crate::format::parse_waveform;
use crate::storage::WaveformStore;
use crate::types::Sample;

/// Read and parse the waveform behind `handle`
pub fn import_waveform<S>(store: &S, handle: &Path) -> WaveformResult<Vec<Sample>>
where
    S: WaveformStore + ?Sized,
{
    let text = store.read_text(handle)?;
    let samples = parse_waveform(&text).map_err(|e| {
        log::warn!("import_waveform: {:?} rejected: {:?}", handle, e);
        e
    })?;
    log::info!("import_waveform: {} samples from {:?}", samples.len(), handle);
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WaveformError;
    use crate::storage::MemoryStore;

    #[test]
    fn test_import_from_store() {
        let store = MemoryStore::new();
        store.insert("wave.txt", "0.1 0.5\n-0.2 0.3\n");

        let samples = import_waveform(&store, Path::new("wave.txt")).unwrap();
        assert_eq!(samples, vec![Sample::new(0.1, 0.5), Sample::new(-0.2, 0.3)]);
    }

    #[test]
    fn test_import_propagates_parse_errors() {
        let store = MemoryStore::new();
        store.insert("bad.txt", "1.0\n");
        store.insert("blank.txt", "\n\n");

        assert!(matches!(
            import_waveform(&store, Path::new("bad.txt")),
            Err(WaveformError::InvalidFormat { .. })
        ));
        assert!(matches!(
            import_waveform(&store, Path::new("blank.txt")),
            Err(WaveformError::Empty)
        ));
    }
}
