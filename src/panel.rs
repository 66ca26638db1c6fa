// The brush settings the user can change while drawing.
// Stands in for the color picker / sliders / shape buttons: commands come in
// from key presses and adjust the brush that the *next* gesture will use.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use crate::types::{Brush, ShapeKind};
use tracing::info;

pub const MIN_WIDTH: f64 = 1.0;
pub const MAX_WIDTH: f64 = 50.0;
pub const MIN_OPACITY: f64 = 0.1;
pub const MAX_OPACITY: f64 = 1.0;

/// Things the user can ask for outside of drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Shape(ShapeKind),
    Wider,
    Thinner,
    MoreOpaque,
    LessOpaque,
    Color(&'static str),
    Clear,
    Export,
}

pub struct BrushPanel {
    brush: Brush,
}

impl BrushPanel {
    pub fn new(brush: Brush) -> Self {
        Self { brush }
    }

    /// The brush a gesture starting now would use.
    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    /// Apply a brush command. Returns false for commands meant for the engine
    /// (clear, export), which the caller handles.
    pub fn apply(&mut self, cmd: Command) -> bool {
        let b = &mut self.brush;
        match cmd {
            Command::Shape(kind) => b.kind = kind,
            Command::Wider => b.width = (b.width + 1.0).clamp(MIN_WIDTH, MAX_WIDTH),
            Command::Thinner => b.width = (b.width - 1.0).clamp(MIN_WIDTH, MAX_WIDTH),
            Command::MoreOpaque => b.opacity = step_opacity(b.opacity, 1.0),
            Command::LessOpaque => b.opacity = step_opacity(b.opacity, -1.0),
            Command::Color(c) => b.color = c.to_owned(),
            Command::Clear | Command::Export => return false,
        }
        info!(kind = ?b.kind, color = %b.color, width = b.width, opacity = b.opacity, "brush changed");
        true
    }
}

// Opacity moves in tenths; snap to the grid so repeated steps don't drift.
fn step_opacity(current: f64, dir: f64) -> f64 {
    let tenths = (current * 10.0).round() + dir;
    (tenths / 10.0).clamp(MIN_OPACITY, MAX_OPACITY)
}
