// The on-screen window: shows the raster and reports mouse + key input.
// Visual: an 800x600 white page you draw on with the left mouse button.

#[cfg(test)]
#[path = "window_test.rs"]
mod window_test;

use crate::error::Error;
use crate::panel::Command;
use crate::types::{FrameBuffer, Point, ShapeKind};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a window exactly the size of the drawing surface.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        // Nothing blocks in the loop any more, so let minifb pace it.
        window.set_target_fps(60);
        Ok(Self { window })
    }

    /// Push the raster to the screen.
    /// Visual: the window immediately shows the latest strokes.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we'll exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// False while another window has keyboard/mouse focus.
    pub fn is_focused(&mut self) -> bool {
        self.window.is_active()
    }

    /// Mouse position over the surface, or `None` once it leaves the window.
    pub fn mouse_pos(&self) -> Option<Point> {
        self.window
            .get_mouse_pos(MouseMode::Discard)
            .map(|(x, y)| Point::new(f64::from(x), f64::from(y)))
    }

    /// True while the left button is held.
    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    /// Commands for every bound key pressed since the last frame (no auto-repeat).
    pub fn commands(&self) -> Vec<Command> {
        self.window
            .get_keys_pressed(KeyRepeat::No)
            .into_iter()
            .filter_map(command_for_key)
            .collect()
    }
}

/// Key bindings for the brush panel and page actions.
pub fn command_for_key(key: Key) -> Option<Command> {
    let cmd = match key {
        Key::Key1 => Command::Shape(ShapeKind::Freehand),
        Key::Key2 => Command::Shape(ShapeKind::Circle),
        Key::Key3 => Command::Shape(ShapeKind::Triangle),
        Key::RightBracket => Command::Wider,
        Key::LeftBracket => Command::Thinner,
        Key::Equal => Command::MoreOpaque,
        Key::Minus => Command::LessOpaque,
        Key::K => Command::Color("#000000"),
        Key::R => Command::Color("#ff0000"),
        Key::G => Command::Color("#00aa00"),
        Key::B => Command::Color("#0000ff"),
        Key::C => Command::Clear,
        Key::S => Command::Export,
        _ => return None,
    };
    Some(cmd)
}
