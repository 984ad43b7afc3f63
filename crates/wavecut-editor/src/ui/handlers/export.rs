//! Export message handlers
//!
//! Handles: ExportRequested, ExportComplete

use iced::Task;
use wavecut_core::export::export_selection;
use wavecut_core::WaveformError;

use super::super::app::WavecutApp;
use super::super::message::Message;
use crate::notice::NoticeKind;

impl WavecutApp {
    /// Handle ExportRequested message: write the selected samples off the UI thread
    pub fn handle_export_requested(&mut self) -> Task<Message> {
        let selection = self.selection.selected_samples();
        if selection.is_empty() {
            return self.notify(NoticeKind::Error, WaveformError::NoSelection.to_string());
        }

        self.busy = true;
        let store = self.store.clone();
        let prefix = self.config.export.file_prefix.clone();

        Task::perform(
            async move {
                tokio::task::spawn_blocking(move || {
                    export_selection(store.as_ref(), &prefix, &selection).map_err(|e| e.to_string())
                })
                .await
                .unwrap_or_else(|e| Err(format!("Export task failed: {}", e)))
            },
            Message::ExportComplete,
        )
    }

    /// Handle ExportComplete message
    pub fn handle_export_complete(&mut self, result: Result<String, String>) -> Task<Message> {
        self.busy = false;
        match result {
            Ok(id) => self.notify(NoticeKind::Info, format!("Exported {} successfully", id)),
            Err(e) => {
                log::warn!("Export failed: {}", e);
                self.notify(NoticeKind::Error, e)
            }
        }
    }
}
