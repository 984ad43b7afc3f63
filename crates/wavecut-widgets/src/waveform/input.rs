//! Canvas input events

use iced::{Point, Size};

/// Raw input for the waveform canvas, already in widget-local coordinates
///
/// Produced by `SelectionCanvas` from mouse and touch events and fed back
/// into `WaveformCanvas::handle_input` by the application.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasInput {
    /// Widget bounds changed (or were measured for the first time)
    Resized(Size),
    /// Primary pointer went down inside the widget, with the current bounds
    PointerDown(Point, Size),
    /// Primary pointer moved while down, with the current bounds
    PointerMove(Point, Size),
    /// Primary pointer released
    PointerUp,
    /// Gesture interrupted (finger lost, window lost focus)
    PointerCancel,
}
