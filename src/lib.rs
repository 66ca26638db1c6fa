//! A small drawing pad: freehand strokes, circle and triangle outlines on a
//! fixed-size software raster, with clear and PNG export.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Shape history, gesture state machine, redraw |
//! | [`render`] | Shapes and previews to pixels; history replay |
//! | [`draw`] | Software stroking into the frame buffer |
//! | [`color`] | CSS-style color strings to pixels |
//! | [`input`] | Mouse samples to pointer events |
//! | [`panel`] | Brush settings changed between gestures |
//! | [`window`] | minifb window: present, mouse, key bindings |
//! | [`export`] | PNG encoding of the raster |
//! | [`config`] | Command-line / env configuration |

pub mod color;
pub mod config;
pub mod draw;
pub mod engine;
pub mod error;
pub mod export;
pub mod input;
pub mod panel;
pub mod render;
pub mod types;
pub mod window;
