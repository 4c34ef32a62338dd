//! Translate gizmo: handle hit-testing and per-frame drag solves.
//!
//! 2D handles live in world space but keep a constant screen length by
//! dividing by the camera zoom. 3D handles are fixed-length world
//! segments; the axis drag re-solves the closest-approach parameter
//! every frame and applies `t_now - t_start` to the snapshot, never an
//! incremental step.

use vantage_math::{closest_axis_t, ray_plane, ray_segment_distance, Ray, Vec2, Vec3};

use super::gizmo::{snap_value, DragState, GizmoAxis};
use crate::scene::SceneObject;

/// Screen-space handle length, divided by zoom.
pub const HANDLE_LEN_2D: f64 = 80.0;
/// Screen-space hit tolerance, divided by zoom.
pub const TOLERANCE_2D: f64 = 10.0;

/// World-space axis segment length.
pub const AXIS_LEN_3D: f64 = 1.2;
/// World-space hit tolerance.
pub const TOLERANCE_3D: f64 = 0.25;

/// Distance from a point to a 2D segment.
fn point_segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f64 {
    let seg = b - a;
    let len_sq = seg.length_squared();
    if len_sq == 0.0 {
        return (p - a).length();
    }
    let t = ((p - a).dot(seg) / len_sq).clamp(0.0, 1.0);
    (p - (a + seg * t)).length()
}

/// Hit-test the 2D translate handles at a world-space mouse point.
///
/// Handles are evaluated center, then X, then Y, keeping the strictly
/// smallest distance under tolerance, so the earlier handle wins exact
/// ties. Evaluation order, not a ranking.
pub fn hit_test_2d(obj: &SceneObject, world_mouse: Vec2, zoom: f64) -> GizmoAxis {
    let Some(anchor) = obj.anchor_2d() else {
        return GizmoAxis::None;
    };
    let len = HANDLE_LEN_2D / zoom;
    let tol = TOLERANCE_2D / zoom;

    let candidates = [
        (GizmoAxis::Center, (world_mouse - anchor).length()),
        (
            GizmoAxis::X,
            point_segment_distance(world_mouse, anchor, anchor + Vec2::new(len, 0.0)),
        ),
        (
            GizmoAxis::Y,
            point_segment_distance(world_mouse, anchor, anchor + Vec2::new(0.0, len)),
        ),
    ];

    let mut best = GizmoAxis::None;
    let mut best_dist = tol;
    for (axis, dist) in candidates {
        if dist < best_dist {
            best = axis;
            best_dist = dist;
        }
    }
    best
}

/// Record the 2D drag-start snapshot.
pub fn begin_2d(drag: &mut DragState, world_mouse: Vec2) {
    drag.start_mouse_world = world_mouse;
}

/// Per-frame 2D translate solve: snapshot position plus mouse-world
/// delta, with the non-dragged axis frozen to its snapshot value.
pub fn update_2d(drag: &DragState, obj: &mut SceneObject, world_mouse: Vec2, snap: Option<f64>) {
    let delta = world_mouse - drag.start_mouse_world;
    let (mut dx, mut dy) = (delta.x, delta.y);
    if let Some(step) = snap {
        dx = snap_value(dx, step);
        dy = snap_value(dy, step);
    }

    let (sx, sy) = (drag.before.x, drag.before.y);
    match drag.axis {
        GizmoAxis::X => {
            obj.x = sx.map(|x| x + dx);
            obj.y = sy;
        }
        GizmoAxis::Y => {
            obj.x = sx;
            obj.y = sy.map(|y| y + dy);
        }
        GizmoAxis::Center => {
            obj.x = sx.map(|x| x + dx);
            obj.y = sy.map(|y| y + dy);
        }
        _ => {}
    }
}

/// Hit-test the 3D translate handles with the cursor ray.
///
/// Axis handles measure the smallest ray/segment distance; the center
/// handle measures the ray's hit on the camera-facing plane through the
/// anchor. Smallest distance under tolerance wins.
pub fn hit_test_3d(obj: &SceneObject, ray: &Ray, cam_pos: Vec3) -> GizmoAxis {
    let Some(anchor) = obj.anchor_3d() else {
        return GizmoAxis::None;
    };

    let mut best = GizmoAxis::None;
    let mut best_dist = TOLERANCE_3D;

    for axis in [GizmoAxis::X, GizmoAxis::Y, GizmoAxis::Z] {
        let dir = axis.dir().unwrap();
        if let Some(dist) = ray_segment_distance(ray, anchor, anchor + dir * AXIS_LEN_3D) {
            if dist < best_dist {
                best = axis;
                best_dist = dist;
            }
        }
    }

    let normal = (cam_pos - anchor).normalize();
    if let Some(hit) = ray_plane(ray.origin, ray.dir, anchor, normal) {
        let dist = hit.distance(anchor);
        if dist < best_dist {
            best = GizmoAxis::Center;
        }
    }

    best
}

/// Record the 3D drag-start snapshot. Returns false if the start solve
/// is degenerate (camera looking down the axis, plane edge-on), in
/// which case no drag starts.
pub fn begin_3d(drag: &mut DragState, ray: &Ray, cam_pos: Vec3) -> bool {
    let Some(anchor) = drag.before.position else {
        return false;
    };
    drag.start_pos = anchor;

    match drag.axis {
        GizmoAxis::X | GizmoAxis::Y | GizmoAxis::Z => {
            let dir = drag.axis.dir().unwrap();
            match closest_axis_t(anchor, dir, ray.origin, ray.dir) {
                Some(t) => {
                    drag.start_axis_t = t;
                    true
                }
                None => false,
            }
        }
        GizmoAxis::Center => {
            drag.plane_normal = (cam_pos - anchor).normalize();
            match ray_plane(ray.origin, ray.dir, anchor, drag.plane_normal) {
                Some(hit) => {
                    drag.start_plane_hit = hit;
                    true
                }
                None => false,
            }
        }
        _ => false,
    }
}

/// Per-frame 3D translate solve against the drag-start snapshot.
///
/// A degenerate frame (parallel plane, axis-aligned view) leaves the
/// object at its last valid value.
pub fn update_3d(drag: &DragState, obj: &mut SceneObject, ray: &Ray, snap: Option<f64>) {
    match drag.axis {
        GizmoAxis::X | GizmoAxis::Y | GizmoAxis::Z => {
            let dir = drag.axis.dir().unwrap();
            let Some(t_now) = closest_axis_t(drag.start_pos, dir, ray.origin, ray.dir) else {
                return;
            };
            let mut delta = t_now - drag.start_axis_t;
            if let Some(step) = snap {
                delta = snap_value(delta, step);
            }
            apply_translation(drag, obj, dir * delta);
        }
        GizmoAxis::Center => {
            let Some(hit) = ray_plane(ray.origin, ray.dir, drag.start_pos, drag.plane_normal)
            else {
                return;
            };
            let mut delta = hit - drag.start_plane_hit;
            if let Some(step) = snap {
                delta = Vec3::new(
                    snap_value(delta.x, step),
                    snap_value(delta.y, step),
                    snap_value(delta.z, step),
                );
            }
            apply_translation(drag, obj, delta);
        }
        _ => {}
    }
}

/// Write a world delta against the snapshot. Camera-like objects move
/// position and target together to preserve the look direction.
fn apply_translation(drag: &DragState, obj: &mut SceneObject, delta: Vec3) {
    if let Some(start) = drag.before.position {
        obj.position = Some(start + delta);
    }
    if let Some(start_target) = drag.before.target {
        obj.target = Some(start_target + delta);
    }
}
