//! Clipping against axis-aligned rectangles.
//!
//! - [`line`]: Cohen–Sutherland line clipping, driven by [`outcode`] region
//!   codes.
//! - [`polygon`]: Sutherland–Hodgman polygon clipping, one pass per
//!   rectangle edge.
//!
//! Both take the clip region as an explicit [`ClipRect`] and never fail:
//! geometry that cannot be clipped sensibly is rejected or clipped away.

pub mod line;
pub mod outcode;
pub mod polygon;
pub mod rect;

pub use line::{clip_line, LineClip, Segment};
pub use outcode::{outcode, Outcode};
pub use polygon::{clip_polygon, Boundary, Edge, Polygon, RectClipper};
pub use rect::{Axis, ClipRect, RectError, ScissorBox};
