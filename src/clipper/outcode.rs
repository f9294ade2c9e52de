//! Cohen–Sutherland region codes.

use bitflags::bitflags;

use super::rect::ClipRect;
use crate::math::vec2::Point;

bitflags! {
    /// The sides of a clip rectangle a point lies beyond.
    ///
    /// LEFT/RIGHT and BOTTOM/TOP are mutually exclusive for a valid rectangle.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Outcode: u8 {
        const LEFT   = 0b0001;
        const RIGHT  = 0b0010;
        const BOTTOM = 0b0100;
        const TOP    = 0b1000;
    }
}

impl Outcode {
    /// No bits set: the point lies inside the rectangle or on its boundary.
    pub const INSIDE: Self = Self::empty();

    pub fn is_inside(self) -> bool {
        self.is_empty()
    }
}

/// Computes the region code of `p` relative to `rect`.
///
/// The x axis is tested left first, the y axis bottom first. A point exactly
/// on a boundary is inside on that axis.
pub fn outcode(p: Point, rect: &ClipRect) -> Outcode {
    let mut code = Outcode::INSIDE;
    if p.x < rect.xmin {
        code |= Outcode::LEFT;
    } else if p.x > rect.xmax {
        code |= Outcode::RIGHT;
    }
    if p.y < rect.ymin {
        code |= Outcode::BOTTOM;
    } else if p.y > rect.ymax {
        code |= Outcode::TOP;
    }
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: ClipRect = ClipRect::new(100.0, 200.0, 100.0, 200.0);

    #[test]
    fn inside_and_boundary_points() {
        assert_eq!(outcode(Point::new(150.0, 150.0), &RECT), Outcode::INSIDE);
        assert_eq!(outcode(Point::new(100.0, 200.0), &RECT), Outcode::INSIDE);
        assert_eq!(outcode(Point::new(200.0, 100.0), &RECT), Outcode::INSIDE);
    }

    #[test]
    fn single_sides() {
        assert_eq!(outcode(Point::new(50.0, 150.0), &RECT), Outcode::LEFT);
        assert_eq!(outcode(Point::new(250.0, 150.0), &RECT), Outcode::RIGHT);
        assert_eq!(outcode(Point::new(150.0, 50.0), &RECT), Outcode::BOTTOM);
        assert_eq!(outcode(Point::new(150.0, 250.0), &RECT), Outcode::TOP);
    }

    #[test]
    fn corner_regions_combine_bits() {
        assert_eq!(
            outcode(Point::new(50.0, 250.0), &RECT),
            Outcode::LEFT | Outcode::TOP
        );
        assert_eq!(
            outcode(Point::new(250.0, 50.0), &RECT),
            Outcode::RIGHT | Outcode::BOTTOM
        );
    }

    #[test]
    fn inverted_rect_checks_left_first() {
        // xmin > xmax: x = 150 is both left of xmin and right of xmax.
        let inverted = ClipRect::new(200.0, 100.0, 100.0, 200.0);
        assert_eq!(outcode(Point::new(150.0, 150.0), &inverted), Outcode::LEFT);
    }
}
