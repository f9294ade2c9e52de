//! The demo scenes: the clipped parts of the classroom and playground.
//!
//! Each scene supplies its clip rectangle and input geometry, runs it through
//! the clippers, and reports what a renderer would draw.

use rectclip::prelude::*;
use rectclip::RectError;

pub const WINDOW_WIDTH: u32 = 500;
pub const WINDOW_HEIGHT: u32 = 500;

/// Classroom board: clips the clock outline and the welcome text.
pub const BOARD: ClipRect = ClipRect::new(100.0, 400.0, 300.0, 450.0);
/// Playground play area: clips the ball.
pub const PLAY_AREA: ClipRect = ClipRect::new(150.0, 350.0, 150.0, 350.0);

pub const CLOCK_CENTER: Point = Point::new(80.0, 400.0);
pub const CLOCK_RADIUS: f32 = 50.0;
pub const CLOCK_SEGMENTS: usize = 50;

pub const BALL_CENTER: Point = Point::new(300.0, 300.0);
pub const BALL_RADIUS: f32 = 60.0;
pub const BALL_SEGMENTS: usize = 50;

pub const WELCOME_TEXT: &str = "Welcome to OpenGL Classroom!";

/// Clock outline clipped segment by segment against the board.
pub fn classroom_clock() -> Result<Vec<Segment>, RectError> {
    BOARD.validate()?;
    let visible: Vec<Segment> = circle_outline(CLOCK_CENTER, CLOCK_RADIUS, CLOCK_SEGMENTS)
        .iter()
        .filter_map(|seg| seg.clip(&BOARD).segment())
        .collect();

    log::info!(
        "classroom: {} of {} clock segments visible on the board",
        visible.len(),
        CLOCK_SEGMENTS
    );
    for seg in &visible {
        log::debug!(
            "  ({:.1}, {:.1}) -> ({:.1}, {:.1})",
            seg.p0.x,
            seg.p0.y,
            seg.p1.x,
            seg.p1.y
        );
    }
    Ok(visible)
}

/// Ball polygon clipped against the play area.
pub fn playground_ball() -> Result<Polygon, RectError> {
    PLAY_AREA.validate()?;
    let ball = circle_polygon(BALL_CENTER, BALL_RADIUS, BALL_SEGMENTS);
    let inside = RectClipper::new(PLAY_AREA).clip_polygon(&ball);

    log::info!(
        "playground: ball clipped from {} to {} vertices, area {:.0} of {:.0}",
        ball.len(),
        inside.len(),
        inside.area(),
        ball.area()
    );
    Ok(inside)
}

/// The welcome text is clipped by a pixel scissor covering the board.
pub fn text_clip() -> Result<rectclip::clipper::ScissorBox, RectError> {
    BOARD.validate()?;
    let scissor = BOARD.scissor_box();
    log::info!(
        "text: {:?} drawn through scissor x={} y={} w={} h={}",
        WELCOME_TEXT,
        scissor.x,
        scissor.y,
        scissor.width,
        scissor.height
    );
    Ok(scissor)
}
