//! Pointer normalization: sampled mouse state in, pointer events out.
//!
//! The window only tells us, once per frame, where the mouse is (if it is over
//! the surface at all) and whether the left button is held. [`PointerTracker`]
//! turns that into edge-triggered `Down` / `Move` / `Up` events, plus `Leave`
//! when the pointer exits the surface in the middle of a gesture.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::engine::Engine;
use crate::types::{Brush, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
    /// Pointer went off the surface with the button still held.
    Leave,
}

/// One normalized input event in surface-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub point: Point,
}

impl PointerEvent {
    #[must_use]
    pub const fn new(kind: PointerKind, point: Point) -> Self {
        Self { kind, point }
    }
}

/// Edge detector over per-frame mouse samples.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    /// A gesture has been reported as started and not yet ended.
    pressed: bool,
    /// Button is held but the press was already consumed (left the surface).
    /// No new `Down` until the button comes back up.
    stale_press: bool,
    last: Option<Point>,
}

impl PointerTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame of mouse state. `pos` is `None` when the pointer is outside the surface.
    pub fn sample(&mut self, pos: Option<Point>, button_down: bool) -> Option<PointerEvent> {
        if !button_down {
            self.stale_press = false;
        }

        let event = match (self.pressed, pos, button_down) {
            // Press starts on the surface.
            (false, Some(p), true) if !self.stale_press => {
                self.pressed = true;
                Some(PointerEvent::new(PointerKind::Down, p))
            }
            // Dragging: only report actual movement.
            (true, Some(p), true) => {
                (self.last != Some(p)).then(|| PointerEvent::new(PointerKind::Move, p))
            }
            // Released over the surface (or released after drifting off it this frame).
            (true, p, false) => {
                self.pressed = false;
                let at = p.or(self.last).unwrap_or_default();
                Some(PointerEvent::new(PointerKind::Up, at))
            }
            // Still held but off the surface: end the gesture where we last saw it.
            (true, None, true) => {
                self.pressed = false;
                self.stale_press = true;
                Some(PointerEvent::new(PointerKind::Leave, self.last.unwrap_or_default()))
            }
            _ => None,
        };

        if pos.is_some() {
            self.last = pos;
        }
        event
    }

    /// Forget any press in progress (window lost focus). A button still held
    /// when focus returns has to be released before it can draw again.
    pub fn reset(&mut self) {
        self.pressed = false;
        self.stale_press = true;
    }
}

/// Route one pointer event to the engine. `brush` is only read on `Down`.
pub fn apply(engine: &mut Engine, event: PointerEvent, brush: &Brush) {
    match event.kind {
        PointerKind::Down => engine.begin(event.point, brush),
        PointerKind::Move => engine.extend(event.point),
        PointerKind::Up => engine.end(event.point),
        PointerKind::Leave => engine.leave(),
    }
}
