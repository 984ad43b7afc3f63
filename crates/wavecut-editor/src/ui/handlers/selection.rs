//! Selection message handlers
//!
//! Handles: Canvas, ResetSelection

use iced::Task;
use wavecut_widgets::CanvasInput;

use super::super::app::WavecutApp;
use super::super::message::Message;

impl WavecutApp {
    /// Handle Canvas message: feed pointer/resize input into the model
    pub fn handle_canvas_input(&mut self, input: CanvasInput) -> Task<Message> {
        if let Some(range) = self.selection.handle_input(input) {
            log::debug!("Selection committed: {:.4}..{:.4}", range.start, range.end);
        }
        Task::none()
    }

    /// Handle ResetSelection message
    pub fn handle_reset_selection(&mut self) -> Task<Message> {
        self.selection.reset_range();
        Task::none()
    }
}
