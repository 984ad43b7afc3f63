//! Notice message handlers
//!
//! Handles: DismissNotice

use iced::Task;

use super::super::app::WavecutApp;
use super::super::message::Message;

impl WavecutApp {
    /// Handle DismissNotice message (manual button or expired timer)
    ///
    /// The next queued notice becomes visible and gets its own timer.
    pub fn handle_dismiss_notice(&mut self, id: u64) -> Task<Message> {
        self.notices.dismiss(id);
        self.schedule_shown_notice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use crate::notice::NoticeKind;
    use std::sync::Arc;
    use wavecut_core::storage::MemoryStore;

    #[test]
    fn test_notice_shown_once() {
        let mut config = EditorConfig::default();
        config.notice_seconds = 0;
        let mut app = WavecutApp::with_parts(config, Arc::new(MemoryStore::new()));

        let _ = app.notify(NoticeKind::Info, "first");
        let _ = app.notify(NoticeKind::Info, "second");
        let first = app.notices.current().unwrap().id;

        let _ = app.handle_dismiss_notice(first);
        // Late timer for the same notice
        let _ = app.handle_dismiss_notice(first);

        assert_eq!(app.notices.current().map(|n| n.text.as_str()), Some("second"));
        assert_eq!(app.notices.len(), 1);
    }

    #[test]
    fn test_timer_starts_when_notice_reaches_screen() {
        let mut config = EditorConfig::default();
        config.notice_seconds = 5;
        let mut app = WavecutApp::with_parts(config, Arc::new(MemoryStore::new()));

        let _ = app.notify(NoticeKind::Info, "first");
        let _ = app.notify(NoticeKind::Error, "second");
        // Only the visible notice was scheduled; the queued one waits
        assert_eq!(app.notices.take_newly_shown(), None);

        let first = app.notices.current().unwrap().id;
        let _ = app.handle_dismiss_notice(first);
        let second = app.notices.current().unwrap();
        assert_eq!(second.text, "second");
        // Dismissing the first started the second's timer
        assert_eq!(app.notices.take_newly_shown(), None);

        // Late timer for the first notice schedules nothing new
        let _ = app.handle_dismiss_notice(first);
        assert_eq!(app.notices.len(), 1);
    }
}
