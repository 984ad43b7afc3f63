//! Canvas layout derived from widget size, metrics and sample count

use iced::Size;

use super::config::CanvasMetrics;

/// Pixel geometry of the drawable region
///
/// Recomputed whenever the canvas is resized or the sample count changes.
/// `top` and `bottom` are where a full-scale sample (-1.0 / 1.0) lands,
/// which is also the vertical extent of the handles and the highlight.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Layout {
    /// Full widget size
    pub size: Size,
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    /// Vertical center of the drawable region
    pub center_y: f32,
    /// Pixels per unit of sample value
    pub amplitude: f32,
    /// Horizontal distance between adjacent samples (0 with no samples)
    pub step: f32,
}

impl Layout {
    pub fn compute(size: Size, metrics: &CanvasMetrics, sample_count: usize) -> Self {
        let padding = metrics.padding;
        let left = padding.left;
        let right = (size.width - padding.right).max(left);
        let width = right - left;

        let available_height = (size.height - padding.top - padding.bottom).max(0.0);
        let center_y = padding.top + available_height / 2.0;
        let amplitude = metrics.vertical_scale * available_height / 2.0;

        let step = if sample_count > 0 {
            width / sample_count as f32
        } else {
            0.0
        };

        Self {
            size,
            left,
            right,
            top: center_y - amplitude,
            bottom: center_y + amplitude,
            center_y,
            amplitude,
            step,
        }
    }

    /// Width of the drawable region
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Height spanned by full-scale samples
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Whether the canvas has been measured with a usable drawable area
    pub fn is_valid(&self) -> bool {
        self.width() > 0.0 && self.amplitude > 0.0
    }

    /// X position of sample `index`
    #[inline]
    pub fn x_at(&self, index: usize) -> f32 {
        self.left + index as f32 * self.step
    }

    /// Y position of a sample value
    #[inline]
    pub fn y_at(&self, value: f32) -> f32 {
        self.center_y - value * self.amplitude
    }

    /// Map a normalized position (0.0-1.0) to an x pixel
    #[inline]
    pub fn to_pixel(&self, normalized: f32) -> f32 {
        self.left + normalized * self.width()
    }

    /// Map an x pixel to a normalized position, clamped to 0.0-1.0
    pub fn to_normalized(&self, x: f32) -> f32 {
        let width = self.width();
        if width <= 0.0 {
            return 0.0;
        }
        ((x - self.left) / width).clamp(0.0, 1.0)
    }

    /// Clamp an x pixel into the drawable horizontal range
    #[inline]
    pub fn clamp_x(&self, x: f32) -> f32 {
        x.max(self.left).min(self.right)
    }
}
