//! Turning shapes into pixels.
//!
//! Everything here is a pure function of its inputs: given the same history the
//! same raster comes out, which is what lets the engine throw the raster away
//! and rebuild it from history whenever it needs to.

use crate::color;
use crate::draw::{self, Stroke};
use crate::types::{Brush, FrameBuffer, Point, Shape, ShapeKind, WHITE, circle_radius, triangle_vertices};

/// Resolve a brush into a rasterizer stroke style.
pub fn stroke_for(brush: &Brush) -> Stroke {
    Stroke { color: color::resolve(&brush.color), width: brush.width, opacity: brush.opacity }
}

/// Draw a circle or triangle spanned by `start` and `end`.
/// Freehand has no two-point form; it draws the straight segment between them.
pub fn draw_outline(fb: &mut FrameBuffer, kind: ShapeKind, stroke: Stroke, start: Point, end: Point) {
    match kind {
        ShapeKind::Circle => draw::stroke_circle(fb, start, circle_radius(start, end), stroke),
        ShapeKind::Triangle => draw::stroke_polyline(fb, &triangle_vertices(start, end), true, stroke),
        ShapeKind::Freehand => draw::stroke_segment(fb, start, end, stroke),
    }
}

/// Draw one committed shape exactly as it was drawn live.
pub fn draw_shape(fb: &mut FrameBuffer, shape: &Shape) {
    let stroke = stroke_for(&shape.brush());
    match shape.kind {
        // Live freehand strokes go down one segment per pointer move.
        ShapeKind::Freehand => {
            for pair in shape.path.windows(2) {
                draw::stroke_segment(fb, pair[0], pair[1], stroke);
            }
        }
        kind => draw_outline(fb, kind, stroke, shape.start, shape.end),
    }
}

/// Rebuild a raster from nothing: white page, then every shape in commit order.
pub fn replay(fb: &mut FrameBuffer, history: &[Shape]) {
    fb.fill(WHITE);
    for shape in history {
        draw_shape(fb, shape);
    }
}
