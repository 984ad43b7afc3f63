//! Waveform selection canvas
//!
//! Displays a list of (min, max) samples as a filled silhouette and lets the
//! user drag two handles to select a horizontal sub-range.
//!
//! ## Usage
//!
//! ```ignore
//! // update():
//! Message::Canvas(input) => {
//!     if let Some(range) = self.canvas.handle_input(input) {
//!         // drag finished, `range` is the new normalized selection
//!     }
//! }
//!
//! // view():
//! let selector = waveform_selector(&self.canvas, WaveformPalette::default(), Message::Canvas);
//! ```
//!
//! ## Coordinate spaces
//!
//! The selection exists twice: in pixels (hit tests, drawing) and normalized
//! to 0.0-1.0 (everything that leaves the canvas). The normalized range is
//! authoritative; pixels are recomputed from it on every layout change. Only
//! while a handle is being dragged do the pixels lead.

mod canvas;
mod config;
mod geometry;
mod input;
mod layout;
mod state;
mod surface;
mod view;

pub use canvas::{PointerSource, SelectionCanvas, SelectionInteraction};
pub use config::{CanvasMetrics, Insets};
pub use geometry::{clip_polygon, silhouette};
pub use input::CanvasInput;
pub use layout::Layout;
pub use state::{DragHandle, WaveformCanvas};
pub use surface::Surface;
pub use view::waveform_selector;
