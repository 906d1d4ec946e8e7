//! Integration tests for the projection pipeline via the facade crate.
//!
//! These pin down the visibility rule: a point is drawn if and only if its
//! camera-space depth exceeds the near plane AND its projected coordinate
//! lies inside the virtual viewport.

use tui_cube::core::{project, to_cell, SCENE};
use tui_cube::types::{Camera, Vec3, CENTER_X, CENTER_Y, FX, FY, NEAR_PLANE, VIEW_H, VIEW_W};

/// Reimplementation of the visibility rule straight from the math, used to
/// cross-check `project`'s culling decisions.
fn visible_by_definition(p: Vec3, cam: Camera) -> bool {
    let z = p.z + cam.z;
    if z <= NEAR_PLANE {
        return false;
    }
    let sx = (p.x - cam.x) / z * FX + CENTER_X;
    let sy = p.y / z * FY + CENTER_Y;
    (0.0..VIEW_W).contains(&sx) && (0.0..VIEW_H).contains(&sy)
}

#[test]
fn drawn_iff_depth_and_viewport_pass() {
    let cameras = [
        Camera::default(),
        Camera::new(0.05, 0.0),
        Camera::new(-2.0, 0.0),
        Camera::new(5.0, 0.0),
        Camera::new(0.0, -3.0),
        Camera::new(0.0, -3.5),
        Camera::new(0.0, -4.0),
        Camera::new(0.0, 10.0),
        Camera::new(-1.0, -3.9),
    ];
    let points = [
        Vec3::new(-1.5, -0.5, 5.0),
        Vec3::new(-1.5, -0.5, 4.0),
        Vec3::new(0.0, 0.0, 2.0),
        Vec3::new(3.0, 0.0, 1.5),
        Vec3::new(0.0, -3.0, 2.0),
        Vec3::new(0.0, 0.0, -1.0),
    ];

    for cam in cameras {
        for p in points {
            assert_eq!(
                project(p, cam).is_some(),
                visible_by_definition(p, cam),
                "visibility mismatch for {p:?} from {cam:?}"
            );
        }
        for p in SCENE {
            assert_eq!(project(p, cam).is_some(), visible_by_definition(p, cam));
        }
    }
}

#[test]
fn reference_point_projects_to_159_by_121_5() {
    let vp = project(Vec3::new(-1.5, -0.5, 5.0), Camera::default()).unwrap();
    assert_eq!(vp.sx, 159.0);
    assert_eq!(vp.sy, 121.5);
}

#[test]
fn camera_z_offset_culls_a_close_point() {
    // Depth 4 + (-3.5) = 0.5 <= 1.0.
    assert!(project(Vec3::new(-1.5, -0.5, 4.0), Camera::new(0.0, -3.5)).is_none());
}

#[test]
fn moving_the_camera_equals_moving_the_world_the_other_way() {
    let step = 0.05;
    let points = [
        Vec3::new(-1.5, -0.5, 5.0),
        Vec3::new(0.3, 0.4, 3.0),
        Vec3::new(-0.5, 0.5, 4.0),
    ];
    for p in points {
        for n in 1..=20 {
            let offset = step * f64::from(n);
            let from_camera = project(p, Camera::new(offset, 0.0));
            let from_world = project(Vec3::new(p.x - offset, p.y, p.z), Camera::default());
            assert_eq!(from_camera, from_world, "offset {offset} at {p:?}");
        }
    }
}

#[test]
fn cell_mapping_covers_the_grid_exactly() {
    use tui_cube::core::ViewPoint;

    let (cols, rows) = (40u16, 11u16);
    let (c0, r0) = to_cell(ViewPoint { sx: 0.0, sy: 0.0 }, cols, rows);
    let (c1, r1) = to_cell(
        ViewPoint {
            sx: VIEW_W - 1.0,
            sy: VIEW_H - 1.0,
        },
        cols,
        rows,
    );
    assert_eq!((c0, r0), (0, 0));
    assert_eq!((c1, r1), (cols - 1, rows - 1));
}
