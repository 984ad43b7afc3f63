//! Waveform outline and selection clipping
//!
//! The waveform is drawn as one closed polygon: the min envelope left to
//! right, then the max envelope right to left. The selection highlight is
//! that polygon intersected with the selection rectangle, so the highlight
//! follows the waveform's vertical profile exactly.

use iced::{Point, Rectangle};
use wavecut_core::Sample;

use super::layout::Layout;

/// Closed outline between the min and max envelopes of `samples`
///
/// Returns an empty vector for an empty sample list. The closing edge from
/// the last point back to the first is implied.
pub fn silhouette(samples: &[Sample], layout: &Layout) -> Vec<Point> {
    if samples.is_empty() {
        return Vec::new();
    }

    let mut outline = Vec::with_capacity(samples.len() * 2);
    outline.extend(
        samples
            .iter()
            .enumerate()
            .map(|(i, s)| Point::new(layout.x_at(i), layout.y_at(s.min))),
    );
    outline.extend(
        samples
            .iter()
            .enumerate()
            .rev()
            .map(|(i, s)| Point::new(layout.x_at(i), layout.y_at(s.max))),
    );
    outline
}

/// Intersect a polygon with an axis-aligned rectangle (Sutherland-Hodgman)
///
/// Works for any simple or self-touching subject polygon because the clip
/// region is convex. Returns fewer than three points when nothing remains.
pub fn clip_polygon(polygon: &[Point], rect: &Rectangle) -> Vec<Point> {
    let (x0, x1) = (rect.x, rect.x + rect.width);
    let (y0, y1) = (rect.y, rect.y + rect.height);

    let clipped = clip_edge(polygon, |p| p.x >= x0, |a, b| at_x(a, b, x0));
    let clipped = clip_edge(&clipped, |p| p.x <= x1, |a, b| at_x(a, b, x1));
    let clipped = clip_edge(&clipped, |p| p.y >= y0, |a, b| at_y(a, b, y0));
    clip_edge(&clipped, |p| p.y <= y1, |a, b| at_y(a, b, y1))
}

fn clip_edge(
    input: &[Point],
    inside: impl Fn(Point) -> bool,
    intersect: impl Fn(Point, Point) -> Point,
) -> Vec<Point> {
    let Some(&last) = input.last() else {
        return Vec::new();
    };

    let mut output = Vec::with_capacity(input.len() + 4);
    let mut prev = last;
    for &current in input {
        match (inside(prev), inside(current)) {
            (true, true) => output.push(current),
            (true, false) => output.push(intersect(prev, current)),
            (false, true) => {
                output.push(intersect(prev, current));
                output.push(current);
            }
            (false, false) => {}
        }
        prev = current;
    }
    output
}

/// Point on segment a-b at horizontal position `x`
///
/// Only called when a and b straddle `x`, so `a.x != b.x`.
fn at_x(a: Point, b: Point, x: f32) -> Point {
    let t = (x - a.x) / (b.x - a.x);
    Point::new(x, a.y + t * (b.y - a.y))
}

/// Point on segment a-b at vertical position `y`
fn at_y(a: Point, b: Point, y: f32) -> Point {
    let t = (y - a.y) / (b.y - a.y);
    Point::new(a.x + t * (b.x - a.x), y)
}

/// Shoelace area, used to sanity-check clipping results
#[cfg(test)]
pub(crate) fn polygon_area(points: &[Point]) -> f32 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        sum += a.x * b.y - b.x * a.y;
    }
    sum.abs() / 2.0
}
