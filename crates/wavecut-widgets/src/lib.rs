//! Interactive waveform widgets for wavecut
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! - **Canvas model** (`WaveformCanvas`): samples, layout, selection and
//!   gesture state. Plain data, no iced runtime needed, fully testable.
//! - **Canvas Program** (`SelectionCanvas`): turns raw mouse/touch events into
//!   `CanvasInput` messages and paints the model onto an iced `Frame`.
//! - **View function** (`waveform_selector`): takes the model + a callback and
//!   returns an `Element<Message>`.
//!
//! The application owns the model and feeds every `CanvasInput` back into it
//! from its `update`, so all mutation stays on the UI thread.

pub mod theme;
pub mod waveform;

pub use theme::WaveformPalette;

pub use waveform::{
    waveform_selector, CanvasInput, CanvasMetrics, DragHandle, Insets, Layout, PointerSource,
    SelectionCanvas, SelectionInteraction, Surface, WaveformCanvas,
};
