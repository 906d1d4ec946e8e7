//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (projection math, input mapping, rendering).
//!
//! # Virtual Viewport
//!
//! Projection happens on a fixed logical plane, independent of the actual
//! terminal size. Projected points are mapped to terminal cells afterwards.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `VIEW_W` | 480.0 | Virtual viewport width |
//! | `VIEW_H` | 270.0 | Virtual viewport height |
//! | `CENTER_X` | 240.0 | Projection center, x |
//! | `CENTER_Y` | 135.0 | Projection center, y |
//! | `FX` | 270.0 | Focal scale, x |
//! | `FY` | 135.0 | Focal scale, y |
//! | `NEAR_PLANE` | 1.0 | Points at depth <= this are culled |
//!
//! # Timing
//!
//! The loop runs a fixed timestep at `TICK_HZ` (60 Hz). Scheduling constants
//! live here so both the engine crate and tests share one source of truth:
//!
//! - `RESET_AFTER`: if the schedule falls more than this far behind, missed
//!   ticks are discarded instead of replayed in a burst.
//! - `COARSE_SLEEP_MIN` / `SLEEP_MARGIN`: the pacing wait sleeps only while
//!   more than `COARSE_SLEEP_MIN` remains, and always `SLEEP_MARGIN` short of
//!   the deadline, busy-spinning the rest.
//!
//! # Examples
//!
//! ```
//! use tui_cube_types::{Camera, CameraAction, CAMERA_STEP};
//!
//! let cam = Camera::default();
//! let cam = cam.apply(CameraAction::MoveRight);
//! assert_eq!(cam.x, CAMERA_STEP);
//! assert_eq!(cam.z, 0.0);
//! ```

use std::time::Duration;

/// Virtual viewport width.
pub const VIEW_W: f64 = 480.0;

/// Virtual viewport height.
pub const VIEW_H: f64 = 270.0;

/// Projection center, x.
pub const CENTER_X: f64 = 240.0;

/// Projection center, y.
pub const CENTER_Y: f64 = 135.0;

/// Focal scale, x.
pub const FX: f64 = 270.0;

/// Focal scale, y.
pub const FY: f64 = 135.0;

/// Near-plane depth. Points with camera-space depth <= this are not drawn.
pub const NEAR_PLANE: f64 = 1.0;

/// Fixed logical tick rate.
pub const TICK_HZ: u32 = 60;

/// One frame period (1/60 s).
pub const FRAME_PERIOD: Duration = Duration::from_nanos(1_000_000_000 / TICK_HZ as u64);

/// Fall-behind threshold: beyond this the scheduler discards missed ticks.
pub const RESET_AFTER: Duration = Duration::from_secs(1);

/// Minimum remaining time for the pacing wait to use an OS sleep.
pub const COARSE_SLEEP_MIN: Duration = Duration::from_millis(2);

/// The pacing sleep wakes this much before the deadline and spins the rest.
pub const SLEEP_MARGIN: Duration = Duration::from_millis(1);

/// Camera movement per key event, in world units.
pub const CAMERA_STEP: f64 = 0.05;

/// Terminal grid floor, columns.
pub const MIN_COLS: u16 = 40;

/// Terminal grid floor, rows.
pub const MIN_ROWS: u16 = 12;

/// Glyph plotted for a projected scene point.
pub const POINT_GLYPH: char = '#';

/// A point in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Camera position. Only x and z move; the camera has no vertical offset.
///
/// The camera is a plain value: input handling folds actions into it with
/// [`Camera::apply`] and the projection step reads it. Nothing mutates it in
/// place, which keeps the update step testable without any terminal attached.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Camera {
    pub x: f64,
    pub z: f64,
}

impl Camera {
    pub const fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    /// Apply one movement action, returning the moved camera.
    ///
    /// Each queued key event applies exactly one step, so effective movement
    /// speed follows the host key-repeat rate.
    #[must_use]
    pub fn apply(self, action: CameraAction) -> Self {
        match action {
            CameraAction::MoveLeft => Self::new(self.x - CAMERA_STEP, self.z),
            CameraAction::MoveRight => Self::new(self.x + CAMERA_STEP, self.z),
            CameraAction::MoveForward => Self::new(self.x, self.z - CAMERA_STEP),
            CameraAction::MoveBack => Self::new(self.x, self.z + CAMERA_STEP),
        }
    }
}

/// Camera movement actions produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraAction {
    /// Move camera one step in -x.
    MoveLeft,
    /// Move camera one step in +x.
    MoveRight,
    /// Move camera one step towards the scene (-z offset).
    MoveForward,
    /// Move camera one step away from the scene (+z offset).
    MoveBack,
}
