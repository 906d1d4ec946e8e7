//! The fixed scene: eight corners of a unit cuboid.
//!
//! The cuboid sits slightly left of the view axis at depth 4..5, so a camera
//! starting at the origin sees all eight corners.

use crate::types::Vec3;

/// Scene points in draw order. Later points overwrite earlier ones when they
/// land on the same cell (no depth test).
pub const SCENE: [Vec3; 8] = [
    Vec3::new(-1.5, -0.5, 4.0),
    Vec3::new(-0.5, -0.5, 4.0),
    Vec3::new(-1.5, 0.5, 4.0),
    Vec3::new(-0.5, 0.5, 4.0),
    Vec3::new(-1.5, -0.5, 5.0),
    Vec3::new(-0.5, -0.5, 5.0),
    Vec3::new(-1.5, 0.5, 5.0),
    Vec3::new(-0.5, 0.5, 5.0),
];
