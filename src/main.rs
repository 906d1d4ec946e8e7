//! Terminal cube demo (default binary).
//!
//! Flies a camera past eight projected cube corners at a fixed 60 Hz tick.
//! It uses crossterm for input and a plain character framebuffer renderer.

use std::time::Instant;

use anyhow::Result;

use tui_cube::engine::FixedStep;
use tui_cube::input::drain_events;
use tui_cube::term::{FrameBuffer, SceneView, TerminalRenderer, Viewport};
use tui_cube::types::Camera;

fn main() -> Result<()> {
    println!("tui-cube: arrows/wasd move the camera, q quits");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    println!("bye");
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let view = SceneView;
    let mut fb = FrameBuffer::new(1, 1);
    let mut camera = Camera::default();
    let mut step = FixedStep::new(Instant::now());

    loop {
        let now = Instant::now();
        if !step.is_due(now) {
            step.pace();
            continue;
        }

        // Tick: drain input, fold it into the camera, render, reschedule.
        let drained = drain_events()?;
        if drained.quit {
            return Ok(());
        }
        for action in drained.actions {
            camera = camera.apply(action);
        }

        let (w, h) = term.size();
        view.render_into(camera, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        step.advance(now);
    }
}
