//! Canvas metrics for serialization
//!
//! Stored under `display:` in the editor's YAML config.

use serde::{Deserialize, Serialize};

/// Insets between the canvas edge and the drawable region, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub const ZERO: Self = Self {
        left: 0.0,
        right: 0.0,
        top: 0.0,
        bottom: 0.0,
    };

    pub const fn uniform(value: f32) -> Self {
        Self {
            left: value,
            right: value,
            top: value,
            bottom: value,
        }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::uniform(8.0)
    }
}

/// Geometry knobs for the waveform canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasMetrics {
    /// Space around the drawable region
    pub padding: Insets,
    /// Width of each selection handle, also the minimum selection width while dragging
    pub handle_width: f32,
    /// Extra hit area around the start handle for touch input
    pub touch_padding: f32,
    /// Fraction of the half-height a full-scale sample reaches (0.9 leaves a margin)
    pub vertical_scale: f32,
    /// Canvas height in the editor window
    pub height: f32,
}

impl Default for CanvasMetrics {
    fn default() -> Self {
        Self {
            padding: Insets::default(),
            handle_width: 10.0,
            touch_padding: 30.0,
            vertical_scale: 0.9,
            height: 240.0,
        }
    }
}

impl CanvasMetrics {
    /// Clamp every field to a usable value
    pub fn validate(&mut self) {
        let sane = |v: f32, fallback: f32| if v.is_finite() { v } else { fallback };
        let defaults = Self::default();

        self.padding.left = sane(self.padding.left, 0.0).max(0.0);
        self.padding.right = sane(self.padding.right, 0.0).max(0.0);
        self.padding.top = sane(self.padding.top, 0.0).max(0.0);
        self.padding.bottom = sane(self.padding.bottom, 0.0).max(0.0);
        self.handle_width = sane(self.handle_width, defaults.handle_width).clamp(1.0, 64.0);
        self.touch_padding = sane(self.touch_padding, defaults.touch_padding).clamp(0.0, 128.0);
        self.vertical_scale = sane(self.vertical_scale, defaults.vertical_scale).clamp(0.1, 1.0);
        self.height = sane(self.height, defaults.height).clamp(48.0, 2000.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let metrics = CanvasMetrics::default();
        assert_eq!(metrics.handle_width, 10.0);
        assert_eq!(metrics.touch_padding, 30.0);
        assert_eq!(metrics.vertical_scale, 0.9);
    }

    #[test]
    fn test_validate_clamps() {
        let mut metrics = CanvasMetrics {
            padding: Insets {
                left: -4.0,
                right: f32::NAN,
                top: 2.0,
                bottom: 2.0,
            },
            handle_width: 0.0,
            touch_padding: 1000.0,
            vertical_scale: 3.0,
            height: f32::INFINITY,
        };
        metrics.validate();
        assert_eq!(metrics.padding.left, 0.0);
        assert_eq!(metrics.padding.right, 0.0);
        assert_eq!(metrics.handle_width, 1.0);
        assert_eq!(metrics.touch_padding, 128.0);
        assert_eq!(metrics.vertical_scale, 1.0);
        assert_eq!(metrics.height, 240.0);
    }

    #[test]
    fn test_yaml_partial() {
        let metrics: CanvasMetrics = serde_yaml::from_str("handle_width: 14.0\n").unwrap();
        assert_eq!(metrics.handle_width, 14.0);
        assert_eq!(metrics.padding, Insets::default());
    }
}
