//! Selection controller
//!
//! Owns the waveform canvas and remembers the last normalized range the user
//! committed. Release events reach it through the canvas listener slot, which
//! feeds a crossbeam channel drained after every input.

use crossbeam::channel::{self, Receiver};
use wavecut_core::{NormalizedRange, Sample};
use wavecut_widgets::{CanvasInput, CanvasMetrics, WaveformCanvas};

#[derive(Debug)]
pub struct SelectionController {
    canvas: WaveformCanvas,
    range: NormalizedRange,
    releases: Receiver<NormalizedRange>,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new(CanvasMetrics::default())
    }
}

impl SelectionController {
    pub fn new(metrics: CanvasMetrics) -> Self {
        let (tx, releases) = channel::unbounded();
        let mut canvas = WaveformCanvas::new(metrics);
        canvas.set_listener(move |range| {
            // Receiver lives as long as the controller, which owns the canvas
            let _ = tx.send(range);
        });

        Self {
            canvas,
            range: NormalizedRange::FULL,
            releases,
        }
    }

    /// Canvas model, for the view
    pub fn canvas(&self) -> &WaveformCanvas {
        &self.canvas
    }

    /// Last committed range
    pub fn range(&self) -> NormalizedRange {
        self.range
    }

    pub fn has_samples(&self) -> bool {
        !self.canvas.samples().is_empty()
    }

    /// Replace the waveform; the selection goes back to the full range
    pub fn load(&mut self, samples: Vec<Sample>) {
        if !self.canvas.set_samples(samples) {
            // Same data reloaded: still honour the reset
            self.canvas.update_selection(0.0, 1.0);
        }
        self.range = NormalizedRange::FULL;
        log::info!("SelectionController: {} samples loaded", self.canvas.samples().len());
    }

    /// Push a range from outside the canvas (clamped and ordered)
    pub fn push_range(&mut self, range: NormalizedRange) {
        self.canvas.update_selection(range.start, range.end);
        self.range = self.canvas.range();
    }

    pub fn reset_range(&mut self) {
        self.push_range(NormalizedRange::FULL);
    }

    /// Forward a canvas input; returns the range committed by a release
    pub fn handle_input(&mut self, input: CanvasInput) -> Option<NormalizedRange> {
        self.canvas.handle_input(input);

        let mut committed = None;
        for range in self.releases.try_iter() {
            log::debug!(
                "SelectionController: range {:.4}..{:.4}",
                range.start,
                range.end
            );
            self.range = range;
            committed = Some(range);
        }
        committed
    }

    /// Samples inside the current selection
    pub fn selected_samples(&self) -> Vec<Sample> {
        self.canvas.selected_samples()
    }
}
