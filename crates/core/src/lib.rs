//! Core projection module - pure, deterministic, and testable
//!
//! This module contains the whole 3D-to-2D pipeline. It has **zero
//! dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: identical camera and scene always project identically
//! - **Testable**: every culling and mapping rule has unit tests
//! - **Portable**: usable against any character surface, not just a terminal
//!
//! # Module Structure
//!
//! - [`projection`]: camera-space translation, near-plane cull, perspective
//!   divide, virtual-viewport cull, and virtual-to-cell mapping
//! - [`scene`]: the fixed eight-point cuboid scene
//!
//! # Pipeline
//!
//! For each scene point, in array order:
//!
//! 1. Translate into camera space (`x - cam.x`, `y`, `z + cam.z`).
//! 2. Cull if depth <= 1.0 (behind or too close to the camera).
//! 3. Perspective-divide onto the fixed 480x270 virtual viewport.
//! 4. Cull if outside `[0, 480) x [0, 270)`.
//! 5. Scale the virtual coordinate to an actual grid cell.
//!
//! # Example
//!
//! ```
//! use tui_cube_core::{project, to_cell};
//! use tui_cube_types::{Camera, Vec3};
//!
//! let cam = Camera::default();
//! let vp = project(Vec3::new(-1.5, -0.5, 5.0), cam).unwrap();
//! assert_eq!((vp.sx, vp.sy), (159.0, 121.5));
//!
//! // A point behind the camera never projects.
//! assert!(project(Vec3::new(0.0, 0.0, -2.0), cam).is_none());
//!
//! let (col, row) = to_cell(vp, 80, 24);
//! assert!(col < 80 && row < 24);
//! ```

pub mod projection;
pub mod scene;

pub use tui_cube_types as types;

// Re-export commonly used items for convenience
pub use projection::{project, to_cell, ViewPoint};
pub use scene::SCENE;
