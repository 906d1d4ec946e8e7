//! Perspective projection onto the fixed virtual viewport.

use crate::types::{Camera, Vec3, CENTER_X, CENTER_Y, FX, FY, NEAR_PLANE, VIEW_H, VIEW_W};

/// A projected point on the virtual viewport, in `[0, 480) x [0, 270)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPoint {
    pub sx: f64,
    pub sy: f64,
}

/// Project a world-space point as seen from `cam`.
///
/// Returns `None` when the point is culled: camera-space depth at or below
/// the near plane, or projected coordinate outside the virtual viewport.
pub fn project(p: Vec3, cam: Camera) -> Option<ViewPoint> {
    let x = p.x - cam.x;
    let y = p.y;
    let z = p.z + cam.z;

    if z <= NEAR_PLANE {
        return None;
    }

    let sx = x / z * FX + CENTER_X;
    let sy = y / z * FY + CENTER_Y;

    if !(0.0..VIEW_W).contains(&sx) || !(0.0..VIEW_H).contains(&sy) {
        return None;
    }

    Some(ViewPoint { sx, sy })
}

/// Map a virtual-viewport coordinate to a grid cell.
///
/// Linear scale over the inclusive coordinate ranges, so virtual (479, 269)
/// lands exactly on the bottom-right cell. Coordinates in the fractional
/// margin above 479 (resp. 269) can round one past the last cell on grids
/// wider than ~240 columns, so the result is clamped to the grid.
pub fn to_cell(vp: ViewPoint, cols: u16, rows: u16) -> (u16, u16) {
    debug_assert!(cols > 0 && rows > 0);
    let col = (vp.sx / (VIEW_W - 1.0) * f64::from(cols - 1)).round() as u16;
    let row = (vp.sy / (VIEW_H - 1.0) * f64::from(rows - 1)).round() as u16;
    (col.min(cols - 1), row.min(rows - 1))
}
