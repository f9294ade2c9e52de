//! Sutherland–Hodgman polygon clipping against a [`ClipRect`].
//!
//! The rectangle is treated as the intersection of four half-planes. A
//! polygon is clipped against each [`Boundary`] in turn, left, right, bottom,
//! then top, with every pass consuming the previous pass's output.

use super::line::{clip_line, LineClip};
use super::rect::ClipRect;
use crate::math::vec2::Point;

/// The side of the rectangle a boundary belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    /// Keeps `x >= xmin`
    Left,
    /// Keeps `x <= xmax`
    Right,
    /// Keeps `y >= ymin`
    Bottom,
    /// Keeps `y <= ymax`
    Top,
}

/// One axis-aligned half-plane of a clip rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boundary {
    pub edge: Edge,
    pub value: f32,
}

impl Boundary {
    pub const fn new(edge: Edge, value: f32) -> Self {
        Self { edge, value }
    }

    /// The four boundaries of `rect` in clipping order.
    pub fn edges(rect: &ClipRect) -> [Boundary; 4] {
        [
            Boundary::new(Edge::Left, rect.xmin),
            Boundary::new(Edge::Right, rect.xmax),
            Boundary::new(Edge::Bottom, rect.ymin),
            Boundary::new(Edge::Top, rect.ymax),
        ]
    }

    /// Signed distance from `p` to the boundary line.
    /// Positive = inside, negative = outside, NaN for NaN input.
    pub fn signed_distance(&self, p: Point) -> f32 {
        match self.edge {
            Edge::Left => p.x - self.value,
            Edge::Right => self.value - p.x,
            Edge::Bottom => p.y - self.value,
            Edge::Top => self.value - p.y,
        }
    }

    /// Points on the boundary line count as inside.
    pub fn is_inside(&self, p: Point) -> bool {
        self.signed_distance(p) >= 0.0
    }

    /// Where the edge `prev`-`curr` crosses the boundary line.
    ///
    /// The crossed coordinate is pinned to the boundary value; the other is
    /// interpolated. Returns `None` if the edge is parallel to the boundary.
    pub fn intersect(&self, prev: Point, curr: Point) -> Option<Point> {
        let (from, to) = match self.edge {
            Edge::Left | Edge::Right => (prev.x, curr.x),
            Edge::Bottom | Edge::Top => (prev.y, curr.y),
        };
        let denom = to - from;
        if denom == 0.0 {
            return None;
        }
        let t = (self.value - from) / denom;
        if !t.is_finite() {
            return None;
        }

        let mut point = prev.lerp(curr, t);
        match self.edge {
            Edge::Left | Edge::Right => point.x = self.value,
            Edge::Bottom | Edge::Top => point.y = self.value,
        }
        point.is_finite().then_some(point)
    }

    /// Clip a closed ring of vertices against this single boundary.
    pub fn clip(&self, vertices: &[Point]) -> Vec<Point> {
        let Some(&last) = vertices.last() else {
            return Vec::new();
        };

        let mut output = Vec::with_capacity(vertices.len() + 1);
        let mut prev = last;
        let mut prev_inside = self.is_inside(prev);

        for &curr in vertices {
            let curr_inside = self.is_inside(curr);

            if curr_inside != prev_inside {
                // Crossing the boundary, in either direction
                match self.intersect(prev, curr) {
                    Some(point) => output.push(point),
                    None => log::trace!("skipping degenerate crossing {prev:?} -> {curr:?}"),
                }
            }
            if curr_inside {
                output.push(curr);
            }

            prev = curr;
            prev_inside = curr_inside;
        }

        output
    }
}

/// A polygon represented as an implicitly closed list of vertices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if nothing is left of the polygon.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Fewer than three vertices cannot enclose any area.
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Shoelace area; positive for counter-clockwise winding.
    pub fn signed_area(&self) -> f32 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }
        let twice: f32 = (0..n)
            .map(|i| self.vertices[i].cross(self.vertices[(i + 1) % n]))
            .sum();
        twice / 2.0
    }

    pub fn area(&self) -> f32 {
        self.signed_area().abs()
    }

    /// Clip this polygon against `rect`. See [`clip_polygon`].
    pub fn clip(&self, rect: &ClipRect) -> Self {
        Self::new(clip_polygon(&self.vertices, rect))
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(vertices: Vec<Point>) -> Self {
        Self::new(vertices)
    }
}

/// Clip a polygon against `rect` using the Sutherland–Hodgman algorithm.
///
/// Returns the clipped ring, which is empty if the polygon lies entirely
/// outside or the rectangle is invalid. Inputs with fewer than three vertices
/// are clipped the same way and produce degenerate output.
pub fn clip_polygon(vertices: &[Point], rect: &ClipRect) -> Vec<Point> {
    RectClipper::new(*rect).clip_vertices(vertices)
}

/// Clips lines and polygons against one fixed rectangle.
///
/// Stateless apart from the rectangle, so one clipper can be shared across
/// threads and reused for every shape in a scene.
#[derive(Clone, Copy, Debug)]
pub struct RectClipper {
    rect: ClipRect,
    boundaries: [Boundary; 4],
}

impl RectClipper {
    pub fn new(rect: ClipRect) -> Self {
        Self {
            rect,
            boundaries: Boundary::edges(&rect),
        }
    }

    pub fn clip_line(&self, p0: Point, p1: Point) -> LineClip {
        clip_line(p0, p1, &self.rect)
    }

    pub fn clip_polygon(&self, polygon: &Polygon) -> Polygon {
        Polygon::new(self.clip_vertices(&polygon.vertices))
    }

    fn clip_vertices(&self, vertices: &[Point]) -> Vec<Point> {
        if !self.rect.is_valid() {
            log::trace!("invalid clip rect {:?}, polygon clipped away", self.rect);
            return Vec::new();
        }

        let mut result = vertices.to_vec();
        for boundary in &self.boundaries {
            if result.is_empty() {
                break;
            }
            result = boundary.clip(&result);
        }
        result
    }
}
