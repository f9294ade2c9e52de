//! Axis-aligned clip rectangle.

use std::fmt;

use crate::math::vec2::Point;

/// The axis a rectangle bound belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Reasons a set of bounds does not describe a usable clip region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RectError {
    /// The minimum bound on `axis` is greater than the maximum.
    Inverted { axis: Axis },
    /// At least one bound is NaN or infinite.
    NonFinite,
}

impl fmt::Display for RectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RectError::Inverted { axis } => {
                write!(f, "clip rectangle has {axis}min greater than {axis}max")
            }
            RectError::NonFinite => f.write_str("clip rectangle bounds must be finite"),
        }
    }
}

impl std::error::Error for RectError {}

/// An axis-aligned clip region `[xmin, xmax] x [ymin, ymax]`, inclusive.
///
/// [`ClipRect::new`] accepts any bounds so rectangles can be declared as
/// constants. The clippers treat an invalid rectangle (see
/// [`ClipRect::is_valid`]) as an empty region: every line is rejected and
/// every polygon clips to nothing. Use [`ClipRect::try_new`] to catch bad
/// bounds at construction instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipRect {
    pub xmin: f32,
    pub xmax: f32,
    pub ymin: f32,
    pub ymax: f32,
}

/// Integer pixel rectangle in the `(x, y, width, height)` layout scissor
/// tests expect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScissorBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl ClipRect {
    pub const fn new(xmin: f32, xmax: f32, ymin: f32, ymax: f32) -> Self {
        Self {
            xmin,
            xmax,
            ymin,
            ymax,
        }
    }

    /// Creates a rectangle, rejecting inverted or non-finite bounds.
    pub fn try_new(xmin: f32, xmax: f32, ymin: f32, ymax: f32) -> Result<Self, RectError> {
        let rect = Self::new(xmin, xmax, ymin, ymax);
        rect.validate()?;
        Ok(rect)
    }

    /// Creates the rectangle spanned by two opposite corners, in any order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::new(a.x.min(b.x), a.x.max(b.x), a.y.min(b.y), a.y.max(b.y))
    }

    pub fn validate(&self) -> Result<(), RectError> {
        let bounds = [self.xmin, self.xmax, self.ymin, self.ymax];
        if !bounds.iter().all(|b| b.is_finite()) {
            return Err(RectError::NonFinite);
        }
        if self.xmin > self.xmax {
            return Err(RectError::Inverted { axis: Axis::X });
        }
        if self.ymin > self.ymax {
            return Err(RectError::Inverted { axis: Axis::Y });
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn width(&self) -> f32 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f32 {
        self.ymax - self.ymin
    }

    /// Returns true if `p` lies inside or on the boundary.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.xmin && p.x <= self.xmax && p.y >= self.ymin && p.y <= self.ymax
    }

    /// Corners in counter-clockwise order starting at `(xmin, ymin)`.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.xmin, self.ymin),
            Point::new(self.xmax, self.ymin),
            Point::new(self.xmax, self.ymax),
            Point::new(self.xmin, self.ymax),
        ]
    }

    /// Pixel scissor region covering this rectangle.
    ///
    /// Bounds are truncated toward zero, so a fractional rectangle loses at
    /// most one pixel on each side.
    pub fn scissor_box(&self) -> ScissorBox {
        ScissorBox {
            x: self.xmin as i32,
            y: self.ymin as i32,
            width: (self.xmax - self.xmin) as i32,
            height: (self.ymax - self.ymin) as i32,
        }
    }
}
