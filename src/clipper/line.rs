//! Cohen–Sutherland line clipping against a [`ClipRect`].

use super::outcode::{outcode, Outcode};
use super::rect::ClipRect;
use crate::math::vec2::Point;

/// Upper bound on refinement steps. Each step pins one coordinate of one
/// endpoint to a boundary, so a finite segment needs at most four.
const MAX_ITERATIONS: usize = 8;

/// A directed line segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub p0: Point,
    pub p1: Point,
}

impl Segment {
    pub const fn new(p0: Point, p1: Point) -> Self {
        Self { p0, p1 }
    }

    /// Clip this segment against `rect`. See [`clip_line`].
    pub fn clip(&self, rect: &ClipRect) -> LineClip {
        clip_line(self.p0, self.p1, rect)
    }
}

/// Result of clipping a segment.
///
/// When `accepted` is false the endpoints hold whatever partial refinement
/// happened before rejection and must not be drawn. Prefer
/// [`LineClip::segment`], which only yields accepted geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineClip {
    pub accepted: bool,
    pub p0: Point,
    pub p1: Point,
}

impl LineClip {
    fn accept(p0: Point, p1: Point) -> Self {
        Self {
            accepted: true,
            p0,
            p1,
        }
    }

    fn reject(p0: Point, p1: Point) -> Self {
        Self {
            accepted: false,
            p0,
            p1,
        }
    }

    /// The visible part of the segment, if any survived.
    pub fn segment(&self) -> Option<Segment> {
        self.accepted.then(|| Segment::new(self.p0, self.p1))
    }
}

/// Clip the segment `p0`-`p1` against `rect`.
///
/// Endpoints outside the rectangle are moved onto its boundary one edge at a
/// time, testing TOP, BOTTOM, RIGHT, LEFT in that order. When both endpoints
/// are outside, `p0` is refined first.
///
/// Invalid rectangles, non-finite endpoints and intersections that would
/// divide by zero all reject rather than produce NaN geometry.
pub fn clip_line(mut p0: Point, mut p1: Point, rect: &ClipRect) -> LineClip {
    if !rect.is_valid() {
        log::trace!("rejecting segment against invalid clip rect {rect:?}");
        return LineClip::reject(p0, p1);
    }
    if !p0.is_finite() || !p1.is_finite() {
        log::trace!("rejecting non-finite segment {p0:?} -> {p1:?}");
        return LineClip::reject(p0, p1);
    }

    let mut code0 = outcode(p0, rect);
    let mut code1 = outcode(p1, rect);

    for _ in 0..MAX_ITERATIONS {
        if (code0 | code1).is_inside() {
            return LineClip::accept(p0, p1);
        }
        if code0.intersects(code1) {
            // Both endpoints beyond the same edge
            return LineClip::reject(p0, p1);
        }

        let refine_p0 = !code0.is_inside();
        let code_out = if refine_p0 { code0 } else { code1 };

        let Some(point) = edge_intersection(p0, p1, code_out, rect) else {
            log::trace!("degenerate intersection for {p0:?} -> {p1:?}, rejecting");
            return LineClip::reject(p0, p1);
        };

        if refine_p0 {
            p0 = point;
            code0 = outcode(p0, rect);
        } else {
            p1 = point;
            code1 = outcode(p1, rect);
        }
    }

    log::warn!("line clip did not converge for {p0:?} -> {p1:?} against {rect:?}");
    LineClip::reject(p0, p1)
}

/// Intersects the line through `p0`-`p1` with the highest priority edge set
/// in `code`.
fn edge_intersection(p0: Point, p1: Point, code: Outcode, rect: &ClipRect) -> Option<Point> {
    let dx = p1.x - p0.x;
    let dy = p1.y - p0.y;

    let point = if code.contains(Outcode::TOP) {
        if dy == 0.0 {
            return None;
        }
        Point::new(p0.x + dx * (rect.ymax - p0.y) / dy, rect.ymax)
    } else if code.contains(Outcode::BOTTOM) {
        if dy == 0.0 {
            return None;
        }
        Point::new(p0.x + dx * (rect.ymin - p0.y) / dy, rect.ymin)
    } else if code.contains(Outcode::RIGHT) {
        if dx == 0.0 {
            return None;
        }
        Point::new(rect.xmax, p0.y + dy * (rect.xmax - p0.x) / dx)
    } else if code.contains(Outcode::LEFT) {
        if dx == 0.0 {
            return None;
        }
        Point::new(rect.xmin, p0.y + dy * (rect.xmin - p0.x) / dx)
    } else {
        return None;
    };

    point.is_finite().then_some(point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const BOARD: ClipRect = ClipRect::new(100.0, 400.0, 300.0, 450.0);
    const SQUARE: ClipRect = ClipRect::new(100.0, 200.0, 100.0, 200.0);

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn inside_segment_is_unchanged() {
        let clip = clip_line(p(120.0, 310.0), p(390.0, 440.0), &BOARD);
        assert!(clip.accepted);
        assert_eq!(clip.p0, p(120.0, 310.0));
        assert_eq!(clip.p1, p(390.0, 440.0));
    }

    #[test]
    fn segment_on_boundary_is_accepted() {
        let clip = clip_line(p(100.0, 300.0), p(400.0, 300.0), &BOARD);
        assert_eq!(
            clip.segment(),
            Some(Segment::new(p(100.0, 300.0), p(400.0, 300.0)))
        );
    }

    #[test]
    fn shared_outside_side_is_rejected() {
        let clip = clip_line(p(10.0, 310.0), p(90.0, 440.0), &BOARD);
        assert!(!clip.accepted);
        assert_eq!(clip.segment(), None);
    }

    #[test]
    fn segment_below_board_is_rejected() {
        let clip = clip_line(p(0.0, 150.0), p(300.0, 150.0), &BOARD);
        assert!(!clip.accepted);
    }

    #[test]
    fn crossing_left_edge_moves_outside_endpoint() {
        let rect = ClipRect::new(100.0, 300.0, 0.0, 300.0);
        let clip = clip_line(p(50.0, 200.0), p(150.0, 200.0), &rect);
        assert!(clip.accepted);
        assert_eq!(clip.p0, p(100.0, 200.0));
        assert_eq!(clip.p1, p(150.0, 200.0));
    }

    #[test]
    fn crossing_right_edge_moves_second_endpoint() {
        let clip = clip_line(p(150.0, 150.0), p(250.0, 150.0), &SQUARE);
        assert_eq!(
            clip.segment(),
            Some(Segment::new(p(150.0, 150.0), p(200.0, 150.0)))
        );
    }

    #[test]
    fn vertical_segment_through_rect() {
        let clip = clip_line(p(150.0, 0.0), p(150.0, 300.0), &SQUARE);
        assert!(clip.accepted);
        assert_eq!(clip.p0, p(150.0, 100.0));
        assert_eq!(clip.p1, p(150.0, 200.0));
    }

    #[test]
    fn diagonal_through_both_corners() {
        let clip = clip_line(p(50.0, 50.0), p(250.0, 250.0), &SQUARE);
        assert!(clip.accepted);
        assert_relative_eq!(clip.p0, p(100.0, 100.0));
        assert_relative_eq!(clip.p1, p(200.0, 200.0));
    }

    #[test]
    fn diagonal_missing_corner_is_rejected() {
        // Passes outside the top-left corner without a shared outcode bit.
        let clip = clip_line(p(50.0, 180.0), p(120.0, 250.0), &SQUARE);
        assert!(!clip.accepted);
    }

    #[test]
    fn direction_does_not_change_result() {
        let forward = clip_line(p(50.0, 120.0), p(260.0, 170.0), &SQUARE);
        let backward = clip_line(p(260.0, 170.0), p(50.0, 120.0), &SQUARE);
        assert!(forward.accepted && backward.accepted);
        assert_relative_eq!(forward.p0, backward.p1, epsilon = 1e-4);
        assert_relative_eq!(forward.p1, backward.p0, epsilon = 1e-4);
    }

    #[test]
    fn zero_length_inside_is_accepted() {
        let clip = clip_line(p(150.0, 150.0), p(150.0, 150.0), &SQUARE);
        assert!(clip.accepted);
        assert_eq!(clip.p0, clip.p1);
    }

    #[test]
    fn zero_length_outside_is_rejected() {
        let clip = clip_line(p(50.0, 150.0), p(50.0, 150.0), &SQUARE);
        assert!(!clip.accepted);
    }

    #[test]
    fn invalid_rect_always_rejects() {
        let inverted = ClipRect::new(200.0, 100.0, 100.0, 200.0);
        let clip = clip_line(p(150.0, 150.0), p(160.0, 160.0), &inverted);
        assert!(!clip.accepted);
    }

    #[test]
    fn nan_endpoint_is_rejected() {
        let clip = clip_line(p(f32::NAN, 150.0), p(160.0, 160.0), &SQUARE);
        assert!(!clip.accepted);
    }

    #[test]
    fn zero_area_rect_keeps_touching_segment() {
        let line = ClipRect::new(100.0, 200.0, 150.0, 150.0);
        let clip = clip_line(p(50.0, 150.0), p(250.0, 150.0), &line);
        assert_eq!(
            clip.segment(),
            Some(Segment::new(p(100.0, 150.0), p(200.0, 150.0)))
        );
    }

    #[test]
    fn clock_outline_stays_on_board() {
        // The classroom clock hangs off the left edge of the board.
        let center = p(80.0, 400.0);
        let segments = 50;
        let mut visible = 0;
        for i in 0..segments {
            let a0 = std::f32::consts::TAU * i as f32 / segments as f32;
            let a1 = std::f32::consts::TAU * (i + 1) as f32 / segments as f32;
            let seg = Segment::new(
                center + Point::from_angle(a0) * 50.0,
                center + Point::from_angle(a1) * 50.0,
            );
            if let Some(clipped) = seg.clip(&BOARD).segment() {
                visible += 1;
                assert!(BOARD.contains(clipped.p0) && BOARD.contains(clipped.p1));
            }
        }
        assert!(visible > 0 && visible < segments);
    }
}
