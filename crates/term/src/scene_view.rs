//! SceneView: maps a camera position into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{project, to_cell, SCENE};
use crate::fb::FrameBuffer;
use crate::types::{Camera, MIN_COLS, MIN_ROWS, POINT_GLYPH};

/// Terminal viewport dimensions as queried from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Usable grid size: clamped to the 40x12 floor, with the last terminal
    /// row left unused so writing the bottom-right cell never scrolls.
    pub fn grid_size(self) -> (u16, u16) {
        let cols = self.width.max(MIN_COLS);
        let rows = self.height.max(MIN_ROWS).saturating_sub(1);
        (cols, rows)
    }
}

/// Renders the scene as seen from a camera into a character grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneView;

impl SceneView {
    /// Render the scene into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport's grid and cleared to blanks here. Row 0 carries the HUD,
    /// scene points are plotted in array order, later points overwriting
    /// earlier ones on cell collisions.
    pub fn render_into(&self, cam: Camera, viewport: Viewport, fb: &mut FrameBuffer) {
        let (cols, rows) = viewport.grid_size();
        fb.resize(cols, rows);
        fb.clear();

        fb.put_str(0, 0, &hud_line(cam));

        for p in SCENE {
            if let Some(vp) = project(p, cam) {
                let (col, row) = to_cell(vp, cols, rows);
                fb.put_char(col, row, POINT_GLYPH);
            }
        }
    }
}

fn hud_line(cam: Camera) -> String {
    format!(
        "cam x={:.2} z={:.2}  |  arrows/wasd move, q quits",
        cam.x, cam.z
    )
}
