//! Waveform canvas model
//!
//! Owns samples, layout, selection and drag state. Pure data plus the
//! operations the canvas Program and the application drive; nothing here
//! needs a running iced runtime.

use std::fmt;

use iced::{Point, Rectangle, Size};
use wavecut_core::{NormalizedRange, Sample};

use super::config::CanvasMetrics;
use super::geometry::{clip_polygon, silhouette};
use super::input::CanvasInput;
use super::layout::Layout;
use super::surface::Surface;
use crate::theme::WaveformPalette;

/// Which selection edge a gesture moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragHandle {
    Start,
    End,
}

/// Active drag gesture
#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    /// Decided once on pointer-down, fixed until release
    handle: DragHandle,
    /// Pointer x at the previous event
    last_x: f32,
}

type RangeListener = Box<dyn FnMut(NormalizedRange) + Send>;

/// Edge tolerance for sample selection, as a fraction of one sample step
const EDGE_TOLERANCE: f32 = 1e-3;

/// Interactive waveform with a two-handle selection
///
/// Selection lives in two coordinate spaces. `range` (normalized) is the
/// source of truth; `start_x`/`end_x` (pixels) are rebuilt from it on every
/// layout change. While a drag is active the pixels lead and `range` is
/// updated when the gesture ends.
pub struct WaveformCanvas {
    samples: Vec<Sample>,
    metrics: CanvasMetrics,
    layout: Layout,
    range: NormalizedRange,
    start_x: f32,
    end_x: f32,
    drag: Option<Drag>,
    listener: Option<RangeListener>,
}

impl Default for WaveformCanvas {
    fn default() -> Self {
        Self::new(CanvasMetrics::default())
    }
}

impl fmt::Debug for WaveformCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WaveformCanvas")
            .field("samples", &self.samples.len())
            .field("layout", &self.layout)
            .field("range", &self.range)
            .field("start_x", &self.start_x)
            .field("end_x", &self.end_x)
            .field("drag", &self.drag)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl WaveformCanvas {
    pub fn new(metrics: CanvasMetrics) -> Self {
        Self {
            samples: Vec::new(),
            metrics,
            layout: Layout::default(),
            range: NormalizedRange::FULL,
            start_x: 0.0,
            end_x: 0.0,
            drag: None,
            listener: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn metrics(&self) -> &CanvasMetrics {
        &self.metrics
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Current normalized selection
    ///
    /// During a drag this is the value from before the gesture started.
    pub fn range(&self) -> NormalizedRange {
        self.range
    }

    /// Current selection in pixels (meaningful once the layout is valid)
    pub fn pixel_selection(&self) -> (f32, f32) {
        (self.start_x, self.end_x)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Handle moved by the active gesture, if any
    pub fn dragging(&self) -> Option<DragHandle> {
        self.drag.map(|d| d.handle)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Listener slot
    // ─────────────────────────────────────────────────────────────────────

    /// Register the release listener, replacing any previous one
    pub fn set_listener(&mut self, listener: impl FnMut(NormalizedRange) + Send + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    // ─────────────────────────────────────────────────────────────────────
    // External updates
    // ─────────────────────────────────────────────────────────────────────

    /// Replace the sample list
    ///
    /// Identical lists are ignored. Otherwise the layout is recomputed, any
    /// drag is dropped and the selection goes back to the full range.
    /// Returns whether anything changed.
    pub fn set_samples(&mut self, samples: Vec<Sample>) -> bool {
        if samples == self.samples {
            return false;
        }

        log::debug!("WaveformCanvas: {} samples loaded", samples.len());
        self.samples = samples;
        self.drag = None;
        self.range = NormalizedRange::FULL;
        self.relayout(self.layout.size);
        true
    }

    /// Replace the normalized selection
    ///
    /// Inputs are clamped to 0.0-1.0 and swapped if inverted. Before the
    /// canvas has been measured the value is kept and converted to pixels on
    /// the first valid resize.
    pub fn update_selection(&mut self, start: f32, end: f32) {
        self.range = NormalizedRange::new(start, end);
        self.drag = None;
        self.sync_pixels();
    }

    /// Widget bounds changed
    pub fn resize(&mut self, size: Size) {
        if size == self.layout.size {
            return;
        }
        // Keep a live drag: its pixels are re-expressed for the new layout
        self.fold_drag_into_range();
        self.relayout(size);
    }

    fn relayout(&mut self, size: Size) {
        self.layout = Layout::compute(size, &self.metrics, self.samples.len());
        self.sync_pixels();
    }

    /// Rebuild the pixel selection from the normalized one
    fn sync_pixels(&mut self) {
        if !self.layout.is_valid() {
            return;
        }
        self.start_x = self.layout.to_pixel(self.range.start);
        self.end_x = self.layout.to_pixel(self.range.end);
    }

    fn fold_drag_into_range(&mut self) {
        if self.drag.is_some() && self.layout.is_valid() {
            self.range = self.pixel_range();
        }
    }

    fn pixel_range(&self) -> NormalizedRange {
        NormalizedRange::new(
            self.layout.to_normalized(self.start_x),
            self.layout.to_normalized(self.end_x),
        )
    }

    // ─────────────────────────────────────────────────────────────────────
    // Gestures
    // ─────────────────────────────────────────────────────────────────────

    /// Dispatch an input event, returning the published range on release
    pub fn handle_input(&mut self, input: CanvasInput) -> Option<NormalizedRange> {
        match input {
            CanvasInput::Resized(size) => {
                self.resize(size);
                None
            }
            CanvasInput::PointerDown(point, size) => {
                self.resize(size);
                self.pointer_down(point);
                None
            }
            CanvasInput::PointerMove(point, size) => {
                self.resize(size);
                self.pointer_move(point);
                None
            }
            CanvasInput::PointerUp => self.pointer_up(),
            CanvasInput::PointerCancel => self.pointer_cancel(),
        }
    }

    /// Start a gesture and decide which handle it moves
    ///
    /// The start handle wins if the point is inside its padded touch area,
    /// or if it is at least as close horizontally as the end handle.
    pub fn pointer_down(&mut self, point: Point) {
        if !self.layout.is_valid() {
            return;
        }

        let in_start_touch_area = self
            .handle_rect(self.start_x)
            .expand(self.metrics.touch_padding)
            .contains(point);
        let start_dist = (self.start_x - point.x).abs();
        let end_dist = (self.end_x - point.x).abs();

        let handle = if in_start_touch_area || start_dist <= end_dist {
            DragHandle::Start
        } else {
            DragHandle::End
        };

        log::trace!("WaveformCanvas: drag {:?} from x={}", handle, point.x);
        self.drag = Some(Drag {
            handle,
            last_x: point.x,
        });
    }

    /// Move the dragged handle by the horizontal pointer delta
    ///
    /// Handles stay inside the drawable range and keep at least one handle
    /// width apart. If there is no room to satisfy both, the handle stays put.
    pub fn pointer_move(&mut self, point: Point) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };

        let dx = point.x - drag.last_x;
        drag.last_x = point.x;
        let gap = self.metrics.handle_width;

        match drag.handle {
            DragHandle::Start => {
                self.start_x = clamp_or_keep(
                    self.start_x + dx,
                    self.layout.left,
                    self.end_x - gap,
                    self.start_x,
                );
            }
            DragHandle::End => {
                self.end_x = clamp_or_keep(
                    self.end_x + dx,
                    self.start_x + gap,
                    self.layout.right,
                    self.end_x,
                );
            }
        }
    }

    /// Finish the gesture and publish the resulting range once
    pub fn pointer_up(&mut self) -> Option<NormalizedRange> {
        self.finish_drag()
    }

    /// Interrupted gesture: whatever was dragged so far is kept and published
    pub fn pointer_cancel(&mut self) -> Option<NormalizedRange> {
        self.finish_drag()
    }

    fn finish_drag(&mut self) -> Option<NormalizedRange> {
        self.drag.take()?;

        self.range = self.pixel_range();
        log::debug!(
            "WaveformCanvas: selection {:.4}..{:.4}",
            self.range.start,
            self.range.end
        );
        if let Some(listener) = self.listener.as_mut() {
            listener(self.range);
        }
        Some(self.range)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────

    /// Samples whose x position falls inside the selection, in order
    ///
    /// Edges are compared with a tolerance of a small fraction of one sample
    /// step, so a handle resting on a sample keeps it even after the pixel
    /// position went through a normalized round trip. Before the canvas is
    /// measured the test runs in normalized space (`index / count`).
    pub fn selected_samples(&self) -> Vec<Sample> {
        if self.layout.is_valid() {
            let tolerance = self.layout.step * EDGE_TOLERANCE;
            let (start, end) = (self.start_x - tolerance, self.end_x + tolerance);
            self.samples
                .iter()
                .enumerate()
                .filter(|(i, _)| {
                    let x = self.layout.x_at(*i);
                    x >= start && x <= end
                })
                .map(|(_, s)| *s)
                .collect()
        } else {
            let count = self.samples.len() as f32;
            let tolerance = EDGE_TOLERANCE / count;
            let (start, end) = (self.range.start - tolerance, self.range.end + tolerance);
            self.samples
                .iter()
                .enumerate()
                .filter(|(i, _)| {
                    let position = *i as f32 / count;
                    position >= start && position <= end
                })
                .map(|(_, s)| *s)
                .collect()
        }
    }

    /// Handle bar for an edge at `x`, clipped to the drawable range
    fn handle_rect(&self, x: f32) -> Rectangle {
        let x = self.layout.clamp_x(x);
        let half = self.metrics.handle_width / 2.0;
        let left = (x - half).max(self.layout.left);
        let right = (x + half).min(self.layout.right);
        Rectangle::new(
            Point::new(left, self.layout.top),
            Size::new(right - left, self.layout.height()),
        )
    }

    /// Start and end handle bars, when the selection is drawable
    pub fn handle_rects(&self) -> Option<(Rectangle, Rectangle)> {
        if !self.layout.is_valid() || self.start_x >= self.end_x {
            return None;
        }
        Some((self.handle_rect(self.start_x), self.handle_rect(self.end_x)))
    }

    /// Handle under `point` (padded by the touch margin), for cursor feedback
    pub fn handle_at(&self, point: Point) -> Option<DragHandle> {
        let (start, end) = self.handle_rects()?;
        let padding = self.metrics.touch_padding;
        if start.expand(padding).contains(point) {
            Some(DragHandle::Start)
        } else if end.expand(padding).contains(point) {
            Some(DragHandle::End)
        } else {
            None
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────

    /// Paint waveform, highlight and handles
    ///
    /// Draws nothing without samples or before the canvas is measured.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, palette: &WaveformPalette) {
        if self.samples.is_empty() || !self.layout.is_valid() {
            return;
        }

        let outline = silhouette(&self.samples, &self.layout);
        surface.fill_polygon(&outline, palette.waveform);

        if self.end_x > self.start_x {
            let window = Rectangle::new(
                Point::new(self.start_x, self.layout.top),
                Size::new(self.end_x - self.start_x, self.layout.height()),
            );
            let highlight = clip_polygon(&outline, &window);
            if highlight.len() >= 3 {
                surface.fill_polygon(&highlight, palette.selection);
            }
        }

        if let Some((start, end)) = self.handle_rects() {
            surface.fill_rect(start, palette.handle);
            surface.fill_rect(end, palette.handle);
        }
    }
}

/// Clamp into `[lo, hi]`, or return `current` when the interval is empty
#[inline]
fn clamp_or_keep(value: f32, lo: f32, hi: f32, current: f32) -> f32 {
    if lo > hi {
        current
    } else {
        value.clamp(lo, hi)
    }
}
