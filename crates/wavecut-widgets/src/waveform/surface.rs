//! Drawing target abstraction
//!
//! `WaveformCanvas::render` only needs two primitives, so it draws onto a
//! [`Surface`] instead of an iced `Frame` directly. The iced implementation
//! lives here; tests use a recording surface.

use iced::widget::canvas::{Frame, Path};
use iced::{Color, Point, Rectangle};

/// Minimal fill-only drawing target
pub trait Surface {
    /// Fill a closed polygon (the closing edge is implied)
    fn fill_polygon(&mut self, points: &[Point], color: Color);

    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, rect: Rectangle, color: Color);
}

impl Surface for Frame {
    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let path = Path::new(|builder| {
            builder.move_to(*first);
            for point in rest {
                builder.line_to(*point);
            }
            builder.close();
        });
        self.fill(&path, color);
    }

    fn fill_rect(&mut self, rect: Rectangle, color: Color) {
        self.fill_rectangle(rect.position(), rect.size(), color);
    }
}

/// Surface that records what was drawn
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub polygons: Vec<(Vec<Point>, Color)>,
    pub rects: Vec<(Rectangle, Color)>,
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.polygons.push((points.to_vec(), color));
    }

    fn fill_rect(&mut self, rect: Rectangle, color: Color) {
        self.rects.push((rect, color));
    }
}
