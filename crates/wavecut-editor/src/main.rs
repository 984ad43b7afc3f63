//! Wavecut - waveform viewer and range exporter
//!
//! ## Usage
//!
//! `wavecut [FILE]` opens the editor and, when FILE is given, imports it.
//! Set `RUST_LOG=debug` for verbose output.

use std::path::PathBuf;

use wavecut_editor::ui::WavecutApp;

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let startup_file = std::env::args_os().nth(1).map(PathBuf::from);
    log::info!("wavecut starting up");
    if let Some(path) = &startup_file {
        log::info!("Importing {:?} at startup", path);
    }

    iced::application(
        move || WavecutApp::new(startup_file.clone()),
        WavecutApp::update,
        WavecutApp::view,
    )
    .title(WavecutApp::title)
    .window_size(iced::Size::new(960.0, 420.0))
    .theme(WavecutApp::theme)
    .run()
}
