//! Builders for the approximated shapes fed to the clippers.
//!
//! Circles are approximated either as a ring of vertices (for polygon
//! clipping) or as the chain of segments joining them (for line clipping).

use std::f32::consts::TAU;

use crate::clipper::{Polygon, Segment};
use crate::math::vec2::Point;

/// Vertices of a regular `segments`-gon inscribed in the circle.
///
/// Vertex `i` sits at angle `2πi / segments`, counter-clockwise from +X.
pub fn circle_points(center: Point, radius: f32, segments: usize) -> Vec<Point> {
    (0..segments)
        .map(|i| {
            let theta = TAU * i as f32 / segments as f32;
            center + Point::from_angle(theta) * radius
        })
        .collect()
}

pub fn circle_polygon(center: Point, radius: f32, segments: usize) -> Polygon {
    Polygon::new(circle_points(center, radius, segments))
}

/// The circle outline as `segments` chords, the last one closing the loop.
pub fn circle_outline(center: Point, radius: f32, segments: usize) -> Vec<Segment> {
    let points = circle_points(center, radius, segments);
    let n = points.len();
    (0..n)
        .map(|i| Segment::new(points[i], points[(i + 1) % n]))
        .collect()
}
