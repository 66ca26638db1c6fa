// Startup configuration: the brush you begin with, where exports go, and
// how previews are redrawn. Every flag can also come from the environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use clap::Parser;

use crate::engine::RedrawStrategy;
use crate::export::DEFAULT_FILENAME;
use crate::types::{Brush, ShapeKind};

#[derive(Parser, Debug, Clone)]
#[command(name = "doodle-pad", about = "Freehand, circle and triangle drawing on a fixed canvas")]
pub struct Config {
    /// Starting stroke color (`#rrggbb`, `#rgb`, `rgb(r, g, b)` or a color name).
    #[arg(long, env = "DOODLE_COLOR", default_value = "#000000")]
    pub color: String,

    /// Starting stroke width in pixels.
    #[arg(long, env = "DOODLE_WIDTH", default_value_t = 5.0)]
    pub width: f64,

    /// Starting stroke opacity, 0.1 to 1.0.
    #[arg(long, env = "DOODLE_OPACITY", default_value_t = 1.0)]
    pub opacity: f64,

    /// Starting shape.
    #[arg(long, env = "DOODLE_SHAPE", value_enum, default_value_t = ShapeKind::Freehand)]
    pub shape: ShapeKind,

    /// Where `S` writes the PNG export.
    #[arg(long, env = "DOODLE_OUTPUT", default_value = DEFAULT_FILENAME)]
    pub output: PathBuf,

    /// How shape previews restore the committed drawing underneath them.
    #[arg(long, env = "DOODLE_REDRAW", value_enum, default_value_t = RedrawStrategy::Replay)]
    pub redraw: RedrawStrategy,
}

impl Config {
    /// Brush built from the starting flags. Passed through unvalidated.
    pub fn brush(&self) -> Brush {
        Brush {
            color: self.color.clone(),
            width: self.width,
            opacity: self.opacity,
            kind: self.shape,
        }
    }
}
