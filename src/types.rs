// Core types shared by the engine, the rasterizer and the window loop.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// Background every blank or cleared surface starts from.
pub const WHITE: u32 = 0x00_FF_FF_FF;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the surface is on screen (pixels)
    pub height: usize,     // how tall the surface is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A `width` x `height` buffer filled with `color`.
    pub fn filled(width: usize, height: usize, color: u32) -> Self {
        Self { width, height, pixels: vec![color; width * height] }
    }

    /// Overwrite every pixel with `color`.
    pub fn fill(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Pixel at (x, y), or `None` outside the buffer.
    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }
}

/// A position on the surface in pixels (surface-local, origin top-left).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// What a gesture draws.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ShapeKind {
    /// Strokes follow the pointer and are drawn segment by segment.
    #[default]
    Freehand,
    Circle,
    Triangle,
}

impl ShapeKind {
    /// Circle and triangle are re-rendered from two points on every move.
    pub fn is_parametric(self) -> bool {
        matches!(self, Self::Circle | Self::Triangle)
    }
}

/// Brush settings read at pointer-down. Nothing here is validated.
#[derive(Clone, Debug, PartialEq)]
pub struct Brush {
    pub color: String, // CSS-style: "#rgb", "#rrggbb", "rgb(r, g, b)" or a name
    pub width: f64,    // stroke width in pixels
    pub opacity: f64,  // alpha applied once per stroke, expected in [0.1, 1.0]
    pub kind: ShapeKind,
}

impl Default for Brush {
    fn default() -> Self {
        Self { color: "#000000".into(), width: 5.0, opacity: 1.0, kind: ShapeKind::Freehand }
    }
}

/// A committed drawing primitive in the history.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub color: String,
    pub width: f64,
    pub opacity: f64,
    pub start: Point,
    pub end: Point,
    /// Every point a freehand stroke passed through, `start` first and `end`
    /// last. Empty for circles and triangles.
    pub path: Vec<Point>,
}

impl Shape {
    /// The brush this shape was drawn with.
    pub fn brush(&self) -> Brush {
        Brush {
            color: self.color.clone(),
            width: self.width,
            opacity: self.opacity,
            kind: self.kind,
        }
    }
}

/// Radius of a circle centered on `start` that passes through `end`.
pub fn circle_radius(start: Point, end: Point) -> f64 {
    start.distance(end)
}

/// The three corners of a triangle gesture: the start point, the current
/// point, and the current point mirrored across the start's x at the current y.
pub fn triangle_vertices(start: Point, end: Point) -> [Point; 3] {
    [start, end, Point::new(2.0 * start.x - end.x, end.y)]
}
