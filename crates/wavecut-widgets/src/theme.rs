//! Colors used by the waveform canvas

use iced::Color;

/// Canvas background
pub const BACKGROUND_COLOR: Color = Color::from_rgb(0.1, 0.1, 0.12);

/// Unselected part of the waveform silhouette
pub const WAVEFORM_COLOR: Color = Color::from_rgb(0.5, 0.5, 0.5);

/// Selected part of the waveform silhouette
pub const SELECTION_COLOR: Color = Color::from_rgb(0.2, 0.4, 1.0);

/// Selection handles (semi-transparent so the waveform shows through)
pub const HANDLE_COLOR: Color = Color::from_rgba(1.0, 0.2, 0.2, 0.5);

/// Color set used when painting a waveform canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveformPalette {
    pub background: Color,
    pub waveform: Color,
    pub selection: Color,
    pub handle: Color,
}

impl Default for WaveformPalette {
    fn default() -> Self {
        Self {
            background: BACKGROUND_COLOR,
            waveform: WAVEFORM_COLOR,
            selection: SELECTION_COLOR,
            handle: HANDLE_COLOR,
        }
    }
}
