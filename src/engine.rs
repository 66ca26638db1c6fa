//! The drawing engine: shape history plus the raster derived from it.
//!
//! The raster has no notion of "remove a shape"; it can only be painted over.
//! So the engine keeps the ordered history of committed shapes and, whenever a
//! circle or triangle preview has to move, wipes the raster and replays that
//! history before drawing the preview on top. Freehand strokes are cheaper:
//! each pointer move adds one segment directly to the raster.
//!
//! Every mutation of history or raster goes through the methods here. Calls
//! that make no sense in the current state (moving with no gesture, drawing
//! before a surface exists) are ignored.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use std::mem;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::color;
use crate::draw::{self, Stroke};
use crate::error::Error;
use crate::export;
use crate::render;
use crate::types::{Brush, FrameBuffer, Point, Shape, WHITE};

/// Surface size; fixed for the lifetime of the window.
pub const SURFACE_WIDTH: usize = 800;
pub const SURFACE_HEIGHT: usize = 600;

/// How the committed part of the raster is restored under a moving preview.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum RedrawStrategy {
    /// Wipe and replay every committed shape (O(history) per move).
    #[default]
    Replay,
    /// Keep a copy of the committed raster and paste it back (O(pixels) per move).
    Snapshot,
}

/// One pointer-down-to-pointer-up interaction in progress.
#[derive(Clone, Debug)]
struct Gesture {
    /// Brush as it was at pointer-down; later panel changes don't reach it.
    brush: Brush,
    stroke: Stroke,
    start: Point,
    /// Last point the pointer was seen at (last rendered point for freehand).
    last: Point,
    /// Freehand only: every point rendered so far.
    path: Vec<Point>,
}

#[derive(Clone, Debug, Default)]
enum GestureState {
    #[default]
    Idle,
    Active(Gesture),
}

/// Owns one drawing surface and its history.
#[derive(Debug, Default)]
pub struct Engine {
    surface: Option<FrameBuffer>,
    history: Vec<Shape>,
    state: GestureState,
    strategy: RedrawStrategy,
    /// Committed-history raster, kept only for [`RedrawStrategy::Snapshot`].
    snapshot: Option<FrameBuffer>,
}

/// Put the committed picture back on `surface`, from the snapshot if there is one.
fn restore_committed(surface: &mut FrameBuffer, snapshot: Option<&FrameBuffer>, history: &[Shape]) {
    match snapshot {
        Some(snap) => surface.pixels.copy_from_slice(&snap.pixels),
        None => render::replay(surface, history),
    }
}

impl Engine {
    /// An engine with no surface yet. Drawing calls are no-ops until [`Engine::attach`].
    #[must_use]
    pub fn new(strategy: RedrawStrategy) -> Self {
        Self { strategy, ..Self::default() }
    }

    /// An engine already attached to a blank `width` x `height` surface.
    #[must_use]
    pub fn with_surface(width: usize, height: usize, strategy: RedrawStrategy) -> Self {
        let mut engine = Self::new(strategy);
        engine.attach(width, height);
        engine
    }

    /// Create the surface: a white page with any existing history replayed onto it.
    pub fn attach(&mut self, width: usize, height: usize) {
        let mut surface = FrameBuffer::filled(width, height, WHITE);
        render::replay(&mut surface, &self.history);
        self.snapshot = (self.strategy == RedrawStrategy::Snapshot).then(|| surface.clone());
        self.surface = Some(surface);
        info!(width, height, strategy = ?self.strategy, "drawing surface attached");
    }

    // --- Queries ---

    /// The visible raster, if a surface is attached.
    #[must_use]
    pub fn surface(&self) -> Option<&FrameBuffer> {
        self.surface.as_ref()
    }

    /// Committed shapes, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Shape] {
        &self.history
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.state, GestureState::Active(_))
    }

    #[must_use]
    pub fn strategy(&self) -> RedrawStrategy {
        self.strategy
    }

    // --- Gestures ---

    /// Pointer down: start a gesture with a snapshot of `brush`.
    ///
    /// A second `begin` while a gesture is active is ignored; the first gesture
    /// keeps its start point and brush.
    pub fn begin(&mut self, point: Point, brush: &Brush) {
        if self.surface.is_none() {
            return;
        }
        if self.is_active() {
            debug!(x = point.x, y = point.y, "begin ignored: gesture already active");
            return;
        }
        if color::parse_css_color(&brush.color).is_none() {
            warn!(color = %brush.color, "unrecognized brush color, drawing in black");
        }

        let path = if brush.kind.is_parametric() { Vec::new() } else { vec![point] };
        debug!(kind = ?brush.kind, x = point.x, y = point.y, "gesture started");
        self.state = GestureState::Active(Gesture {
            brush: brush.clone(),
            stroke: render::stroke_for(brush),
            start: point,
            last: point,
            path,
        });
    }

    /// Pointer move: grow the freehand stroke, or redraw the shape preview.
    pub fn extend(&mut self, point: Point) {
        let GestureState::Active(gesture) = &mut self.state else {
            return;
        };
        let Some(surface) = self.surface.as_mut() else {
            return;
        };

        if gesture.brush.kind.is_parametric() {
            restore_committed(surface, self.snapshot.as_ref(), &self.history);
            render::draw_outline(surface, gesture.brush.kind, gesture.stroke, gesture.start, point);
        } else {
            draw::stroke_segment(surface, gesture.last, point, gesture.stroke);
            gesture.path.push(point);
        }
        gesture.last = point;
    }

    /// Pointer up: commit the gesture to history and go back to idle.
    pub fn end(&mut self, point: Point) {
        if !self.is_active() {
            debug!("end ignored: no active gesture");
            return;
        }
        // Freehand: finish the line at the release point if it moved since the last frame.
        let finish_line = matches!(
            &self.state,
            GestureState::Active(g) if !g.brush.kind.is_parametric() && g.last != point
        );
        if finish_line {
            self.extend(point);
        }
        let GestureState::Active(gesture) = mem::take(&mut self.state) else {
            return;
        };
        let Some(surface) = self.surface.as_mut() else {
            return;
        };

        let kind = gesture.brush.kind;
        let shape = Shape {
            kind,
            color: gesture.brush.color,
            width: gesture.brush.width,
            opacity: gesture.brush.opacity,
            start: gesture.start,
            end: point,
            path: gesture.path,
        };

        // Parametric shapes: the raster shows the last preview, which may not
        // match the release point. Redraw with the committed geometry.
        if kind.is_parametric() {
            restore_committed(surface, self.snapshot.as_ref(), &self.history);
            render::draw_shape(surface, &shape);
        }
        if let Some(snap) = self.snapshot.as_mut() {
            snap.pixels.copy_from_slice(&surface.pixels);
        }

        self.history.push(shape);
        debug!(?kind, shapes = self.history.len(), "shape committed");
    }

    /// Pointer left the surface: an implicit pointer-up at the last known position.
    pub fn leave(&mut self) {
        let GestureState::Active(gesture) = &self.state else {
            return;
        };
        let last = gesture.last;
        self.end(last);
    }

    /// Drop the active gesture without committing anything.
    pub fn cancel(&mut self) {
        if !self.is_active() {
            return;
        }
        self.state = GestureState::Idle;
        if let Some(surface) = self.surface.as_mut() {
            restore_committed(surface, self.snapshot.as_ref(), &self.history);
        }
        debug!("gesture cancelled");
    }

    // --- Page actions ---

    /// White page, empty history. Also drops any gesture in progress.
    pub fn clear(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        surface.fill(WHITE);
        if let Some(snap) = self.snapshot.as_mut() {
            snap.fill(WHITE);
        }
        self.history.clear();
        self.state = GestureState::Idle;
        info!("canvas cleared");
    }

    /// Rebuild the raster from history alone. Any preview on screen is lost.
    pub fn replay(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        render::replay(surface, &self.history);
        if let Some(snap) = self.snapshot.as_mut() {
            snap.pixels.copy_from_slice(&surface.pixels);
        }
    }

    /// The visible raster encoded as PNG.
    pub fn export_png(&self) -> Result<Vec<u8>, Error> {
        let surface = self.surface.as_ref().ok_or(Error::SurfaceUnavailable)?;
        export::encode_png(surface)
    }

    /// Write the visible raster to `path` as PNG.
    pub fn save_png(&self, path: &Path) -> Result<(), Error> {
        let surface = self.surface.as_ref().ok_or(Error::SurfaceUnavailable)?;
        export::save_png(surface, path)?;
        info!(path = %path.display(), shapes = self.history.len(), "drawing exported");
        Ok(())
    }
}
