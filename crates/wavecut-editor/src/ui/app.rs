//! Main application state and iced implementation

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use iced::widget::{button, column, container, row, text, Space};
use iced::{Color, Element, Length, Task, Theme};
use wavecut_core::storage::{FsStore, WaveformStore};
use wavecut_widgets::{waveform_selector, WaveformPalette};

use super::message::Message;
use crate::config::{self, EditorConfig};
use crate::notice::{NoticeKind, NoticeQueue};
use crate::selection::SelectionController;

/// Main application
pub struct WavecutApp {
    /// Canvas plus committed range
    pub(crate) selection: SelectionController,
    /// Pending one-shot notices
    pub(crate) notices: NoticeQueue,
    /// Where imports are read from and exports written to
    pub(crate) store: Arc<dyn WaveformStore>,
    pub(crate) config: Arc<EditorConfig>,
    pub(crate) palette: WaveformPalette,
    /// Import or export running on the blocking pool
    pub(crate) busy: bool,
    /// File the current waveform came from
    pub(crate) source: Option<PathBuf>,
    /// File being imported, promoted to `source` on success
    pub(crate) pending_source: Option<PathBuf>,
}

impl WavecutApp {
    /// Create a new application instance
    ///
    /// `startup_file` is imported right away when given.
    pub fn new(startup_file: Option<PathBuf>) -> (Self, Task<Message>) {
        let config_path = config::default_config_path();
        let config = config::load_config(&config_path);

        // Write the defaults once so there is a file to edit
        if !config_path.exists() {
            if let Err(e) = config::save_config(&config, &config_path) {
                log::warn!("Could not write default config: {:#}", e);
            }
        }

        let export_dir = config.export.resolved_directory();
        log::info!("Exports go to {:?}", export_dir);
        let app = Self::with_parts(config, Arc::new(FsStore::new(export_dir)));

        let task = match startup_file {
            Some(path) => Task::done(Message::ImportPicked(Some(path))),
            None => Task::none(),
        };
        (app, task)
    }

    /// Build the app around an explicit store
    pub fn with_parts(config: EditorConfig, store: Arc<dyn WaveformStore>) -> Self {
        Self {
            selection: SelectionController::new(config.display),
            notices: NoticeQueue::new(),
            store,
            config: Arc::new(config),
            palette: WaveformPalette::default(),
            busy: false,
            source: None,
            pending_source: None,
        }
    }

    /// Window title
    pub fn title(&self) -> String {
        match self.source.as_ref().and_then(|p| p.file_name()) {
            Some(name) => format!("wavecut - {}", name.to_string_lossy()),
            None => String::from("wavecut"),
        }
    }

    /// Update state based on message
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // Import
            Message::ImportRequested => self.handle_import_requested(),
            Message::ImportPicked(path) => self.handle_import_picked(path),
            Message::ImportComplete(result) => self.handle_import_complete(result),

            // Selection
            Message::Canvas(input) => self.handle_canvas_input(input),
            Message::ResetSelection => self.handle_reset_selection(),

            // Export
            Message::ExportRequested => self.handle_export_requested(),
            Message::ExportComplete(result) => self.handle_export_complete(result),

            // Notices
            Message::DismissNotice(id) => self.handle_dismiss_notice(id),
        }
    }

    /// Queue a notice; its dismissal timer starts once it is on screen
    pub(crate) fn notify(&mut self, kind: NoticeKind, text: impl Into<String>) -> Task<Message> {
        self.notices.push(kind, text);
        self.schedule_shown_notice()
    }

    /// Start the auto-dismiss timer for a notice that just reached the screen
    pub(crate) fn schedule_shown_notice(&mut self) -> Task<Message> {
        let seconds = self.config.notice_seconds;
        if seconds == 0 {
            return Task::none();
        }
        match self.notices.take_newly_shown() {
            Some(id) => Task::perform(
                async move { tokio::time::sleep(Duration::from_secs(seconds)).await },
                move |_| Message::DismissNotice(id),
            ),
            None => Task::none(),
        }
    }

    /// Render the UI
    pub fn view(&self) -> Element<'_, Message> {
        let controls = self.view_controls();

        let waveform: Element<Message> = if self.selection.has_samples() {
            waveform_selector(self.selection.canvas(), self.palette, Message::Canvas)
        } else {
            container(text("Import a waveform file to begin").size(14))
                .center_x(Length::Fill)
                .center_y(Length::Fixed(self.config.display.height))
                .into()
        };

        let mut content = column![controls, waveform].spacing(10);
        if let Some(notice) = self.view_notice() {
            content = content.push(notice);
        }

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(20)
            .into()
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Import / reset / export buttons plus a selection readout
    fn view_controls(&self) -> Element<'_, Message> {
        let idle = !self.busy;
        let loaded = self.selection.has_samples();

        let import_btn = button(text("Import"))
            .on_press_maybe(idle.then_some(Message::ImportRequested));
        let reset_btn = button(text("Reset selection"))
            .on_press_maybe((idle && loaded).then_some(Message::ResetSelection))
            .style(button::secondary);
        let export_btn = button(text("Export selection"))
            .on_press_maybe((idle && loaded).then_some(Message::ExportRequested));

        let range = self.selection.range();
        let readout = if loaded {
            format!(
                "{} samples, selected {:.1}% to {:.1}%",
                self.selection.canvas().samples().len(),
                range.start * 100.0,
                range.end * 100.0
            )
        } else {
            String::new()
        };

        row![
            import_btn,
            reset_btn,
            export_btn,
            Space::new().width(Length::Fill),
            text(readout).size(14),
        ]
        .spacing(10)
        .into()
    }

    /// Oldest pending notice with a dismiss button
    fn view_notice(&self) -> Option<Element<'_, Message>> {
        let notice = self.notices.current()?;
        let background = match notice.kind {
            NoticeKind::Info => Color::from_rgb(0.15, 0.25, 0.18),
            NoticeKind::Error => Color::from_rgb(0.35, 0.12, 0.12),
        };

        let bar = row![
            text(notice.text.as_str()).width(Length::Fill),
            button(text("Dismiss"))
                .on_press(Message::DismissNotice(notice.id))
                .style(button::text),
        ]
        .spacing(10);

        Some(
            container(bar)
                .width(Length::Fill)
                .padding(10)
                .style(move |_theme| container::Style {
                    background: Some(background.into()),
                    ..Default::default()
                })
                .into(),
        )
    }
}
