//! Waveform view function
//!
//! ## Usage
//!
//! ```ignore
//! fn view(&self) -> Element<Message> {
//!     let waveform = waveform_selector(
//!         self.selection.canvas(),
//!         WaveformPalette::default(),
//!         Message::Canvas,
//!     );
//!
//!     column![waveform, /* buttons */].into()
//! }
//! ```

use iced::widget::Canvas;
use iced::{Element, Length};

use super::canvas::SelectionCanvas;
use super::input::CanvasInput;
use super::state::WaveformCanvas;
use crate::theme::WaveformPalette;

/// Create the selectable waveform element
///
/// `on_input` wraps every pointer and resize event; feed the result back
/// into `WaveformCanvas::handle_input` from the application's update.
pub fn waveform_selector<'a, Message>(
    canvas: &'a WaveformCanvas,
    palette: WaveformPalette,
    on_input: impl Fn(CanvasInput) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    Canvas::new(SelectionCanvas {
        canvas,
        palette,
        on_input,
    })
    .width(Length::Fill)
    .height(Length::Fixed(canvas.metrics().height))
    .into()
}
