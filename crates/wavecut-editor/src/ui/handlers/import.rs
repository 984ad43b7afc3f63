//! Import message handlers
//!
//! Handles: ImportRequested, ImportPicked, ImportComplete

use std::path::PathBuf;

use iced::Task;
use wavecut_core::import::import_waveform;
use wavecut_core::Sample;

use super::super::app::WavecutApp;
use super::super::message::Message;
use crate::notice::NoticeKind;

impl WavecutApp {
    /// Handle ImportRequested message: open the native file picker
    pub fn handle_import_requested(&mut self) -> Task<Message> {
        Task::perform(
            async {
                let file = rfd::AsyncFileDialog::new()
                    .set_title("Import waveform")
                    .add_filter("Waveform text", &["txt", "TXT"])
                    .pick_file()
                    .await;
                file.map(|f| f.path().to_path_buf())
            },
            Message::ImportPicked,
        )
    }

    /// Handle ImportPicked message: read and parse off the UI thread
    pub fn handle_import_picked(&mut self, path: Option<PathBuf>) -> Task<Message> {
        let Some(path) = path else {
            log::debug!("Import cancelled");
            return Task::none();
        };

        self.busy = true;
        self.pending_source = Some(path.clone());
        let store = self.store.clone();

        Task::perform(
            async move {
                tokio::task::spawn_blocking(move || {
                    import_waveform(store.as_ref(), &path).map_err(|e| e.to_string())
                })
                .await
                .unwrap_or_else(|e| Err(format!("Import task failed: {}", e)))
            },
            Message::ImportComplete,
        )
    }

    /// Handle ImportComplete message
    ///
    /// Failures only raise a notice; the current waveform stays as it was.
    pub fn handle_import_complete(&mut self, result: Result<Vec<Sample>, String>) -> Task<Message> {
        self.busy = false;
        match result {
            Ok(samples) => {
                self.selection.load(samples);
                self.source = self.pending_source.take();
                Task::none()
            }
            Err(e) => {
                log::warn!("Import failed: {}", e);
                self.pending_source = None;
                self.notify(NoticeKind::Error, e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use std::sync::Arc;
    use wavecut_core::storage::MemoryStore;
    use wavecut_core::NormalizedRange;

    fn app() -> WavecutApp {
        WavecutApp::with_parts(EditorConfig::default(), Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_successful_import_loads_full_range() {
        let mut app = app();
        let samples = vec![Sample::new(0.1, 0.5), Sample::new(-0.2, 0.3)];
        let _ = app.handle_import_complete(Ok(samples.clone()));

        assert!(!app.busy);
        assert_eq!(app.selection.canvas().samples(), samples.as_slice());
        assert_eq!(app.selection.range(), NormalizedRange::FULL);
        assert!(app.notices.is_empty());
    }

    #[test]
    fn test_failed_import_keeps_canvas() {
        let mut app = app();
        let samples = vec![Sample::new(-0.5, 0.5); 4];
        let _ = app.handle_import_complete(Ok(samples.clone()));
        app.selection.push_range(NormalizedRange::new(0.25, 0.5));

        let _ = app.handle_import_complete(Err(String::from("Invalid waveform data format")));

        assert_eq!(app.selection.canvas().samples(), samples.as_slice());
        assert_eq!(app.selection.range(), NormalizedRange::new(0.25, 0.5));
        assert_eq!(
            app.notices.current().map(|n| n.text.as_str()),
            Some("Invalid waveform data format")
        );
    }

    #[test]
    fn test_cancelled_pick_does_nothing() {
        let mut app = app();
        let _ = app.handle_import_picked(None);
        assert!(!app.busy);
        assert!(app.source.is_none());
    }

    #[test]
    fn test_title_follows_successful_import() {
        let mut app = app();
        app.pending_source = Some(PathBuf::from("/data/kick.txt"));
        let _ = app.handle_import_complete(Err(String::from("Waveform data is empty")));
        assert_eq!(app.title(), "wavecut");

        app.pending_source = Some(PathBuf::from("/data/kick.txt"));
        let _ = app.handle_import_complete(Ok(vec![Sample::new(0.0, 0.1)]));
        assert_eq!(app.title(), "wavecut - kick.txt");
    }
}
