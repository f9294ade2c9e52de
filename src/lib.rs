//! 2D clipping against axis-aligned rectangles.
//!
//! This crate provides Cohen–Sutherland line clipping and Sutherland–Hodgman
//! polygon clipping. Drawing is left to the caller: geometry goes in, clipped
//! geometry comes out.
//!
//! # Quick Start
//!
//! ```
//! use rectclip::prelude::*;
//!
//! let board = ClipRect::new(100.0, 400.0, 300.0, 450.0);
//!
//! let clip = clip_line(Point::new(50.0, 350.0), Point::new(150.0, 350.0), &board);
//! let visible = clip.segment().unwrap();
//! assert_eq!(visible.p0, Point::new(100.0, 350.0));
//! assert_eq!(visible.p1, Point::new(150.0, 350.0));
//!
//! let square = [
//!     Point::new(50.0, 250.0),
//!     Point::new(250.0, 250.0),
//!     Point::new(250.0, 500.0),
//!     Point::new(50.0, 500.0),
//! ];
//! assert_eq!(clip_polygon(&square, &board).len(), 4);
//! ```

pub mod clipper;
pub mod logging;
pub mod math;
pub mod shapes;

// Re-export commonly needed types at crate root for convenience
pub use clipper::{
    clip_line, clip_polygon, outcode, ClipRect, LineClip, Outcode, Polygon, RectClipper, RectError,
    Segment,
};
pub use math::vec2::{Point, Vec2};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use rectclip::prelude::*;
/// ```
pub mod prelude {
    // Clipping
    pub use crate::clipper::{
        clip_line, clip_polygon, outcode, Boundary, ClipRect, Edge, LineClip, Outcode, Polygon,
        RectClipper, Segment,
    };

    // Shapes
    pub use crate::shapes::{circle_outline, circle_points, circle_polygon};

    // Math
    pub use crate::math::vec2::{Point, Vec2};
}
