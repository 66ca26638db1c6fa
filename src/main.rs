// What you SEE:
// • A white 800x600 page.
// • Hold Left Mouse and drag: draws with the current brush.
//   Freehand follows the mouse; circle/triangle show a live outline until release.
// • 1/2/3 pick freehand/circle/triangle, [ ] change width, - = change opacity,
//   K/R/G/B pick black/red/green/blue.
// • C clears the page, S saves it as a PNG. ESC quits.

use clap::Parser;
use doodle_pad::config::Config;
use doodle_pad::engine::{Engine, SURFACE_HEIGHT, SURFACE_WIDTH};
use doodle_pad::error::Error;
use doodle_pad::input::{self, PointerTracker};
use doodle_pad::panel::{BrushPanel, Command};
use doodle_pad::window::Drawer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    let config = Config::parse();
    info!(output = %config.output.display(), redraw = ?config.redraw, "doodle-pad starting");

    /* --- Engine + window setup ---
       Visual: window opens on a blank white page. */
    let mut engine = Engine::with_surface(SURFACE_WIDTH, SURFACE_HEIGHT, config.redraw);
    let mut drawer = Drawer::new("Doodle Pad", SURFACE_WIDTH, SURFACE_HEIGHT)?;
    let mut panel = BrushPanel::new(config.brush());
    let mut tracker = PointerTracker::new();

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        /* 1) Keys: brush changes go to the panel, page actions to the engine. */
        for cmd in drawer.commands() {
            match cmd {
                Command::Clear => engine.clear(),  // visual: page goes white
                Command::Export => {
                    if let Err(e) = engine.save_png(&config.output) {
                        warn!(error = %e, "export failed");
                    }
                }
                other => {
                    panel.apply(other);
                }
            }
        }

        /* 2) Focus lost mid-drag: drop the half-drawn shape instead of
              leaving the engine stuck waiting for a release we'll never see. */
        if !drawer.is_focused() {
            if engine.is_active() {
                engine.cancel();
            }
            tracker.reset();
        }

        /* 3) Mouse -> pointer events -> engine. */
        if let Some(event) = tracker.sample(drawer.mouse_pos(), drawer.left_mouse_down()) {
            input::apply(&mut engine, event, panel.brush());
        }

        /* 4) Present (this is when the on-screen image updates). */
        if let Some(surface) = engine.surface() {
            drawer.present(surface)?;
        }
    }

    info!(shapes = engine.history().len(), "doodle-pad shutting down");
    Ok(())
}
