//! Core types shared by the canvas, the controller and the codec

/// One waveform column: the vertical extent of the signal at that x position
///
/// Both values are conventionally in [-1.0, 1.0]. Nothing enforces
/// `min <= max`; the canvas draws whatever it is given.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sample {
    pub min: f32,
    pub max: f32,
}

impl Sample {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }
}

impl From<(f32, f32)> for Sample {
    fn from((min, max): (f32, f32)) -> Self {
        Self { min, max }
    }
}

impl From<Sample> for (f32, f32) {
    fn from(sample: Sample) -> Self {
        (sample.min, sample.max)
    }
}

/// Selection expressed independently of canvas pixels
///
/// `start` and `end` are in 0.0 to 1.0 with `start <= end` once built
/// through [`NormalizedRange::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedRange {
    pub start: f32,
    pub end: f32,
}

impl NormalizedRange {
    /// The whole waveform
    pub const FULL: Self = Self { start: 0.0, end: 1.0 };

    /// Build a range, clamping both ends to 0.0-1.0 and swapping them if inverted
    ///
    /// NaN inputs collapse to the nearest full-range edge.
    pub fn new(start: f32, end: f32) -> Self {
        let start = clamp_unit(start, 0.0);
        let end = clamp_unit(end, 1.0);
        if start <= end {
            Self { start, end }
        } else {
            Self { start: end, end: start }
        }
    }
}

impl Default for NormalizedRange {
    fn default() -> Self {
        Self::FULL
    }
}

fn clamp_unit(value: f32, fallback: f32) -> f32 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(0.0, 1.0)
    }
}
