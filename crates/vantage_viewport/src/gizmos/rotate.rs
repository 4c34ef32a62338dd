//! Rotate gizmo: ring hit-testing and per-frame angle solves.
//!
//! Every update restores the drag-start snapshot before applying the
//! current total angle, so a drag is one rotation from the start pose
//! rather than an accumulation of per-frame steps.

use vantage_math::{plane_basis, ray_plane, rotate_axis_angle, Ray, Vec2, Vec3};

use super::gizmo::{snap_value, DragState, GizmoAxis, RotateTarget};
use crate::scene::SceneObject;

/// Screen-space ring radius, divided by zoom.
pub const RING_RADIUS_2D: f64 = 55.0;
/// Screen-space band tolerance, divided by zoom.
pub const RING_TOLERANCE_2D: f64 = 8.0;

/// World-space ring radius.
pub const RING_RADIUS_3D: f64 = 1.0;
/// World-space band tolerance on the radial error.
pub const RING_TOLERANCE_3D: f64 = 0.18;

/// Hit-test the single 2D rotation ring around the object anchor.
pub fn hit_test_2d(obj: &SceneObject, world_mouse: Vec2, zoom: f64) -> GizmoAxis {
    let Some(anchor) = obj.anchor_2d() else {
        return GizmoAxis::None;
    };
    let radius = RING_RADIUS_2D / zoom;
    let tol = RING_TOLERANCE_2D / zoom;
    if ((world_mouse - anchor).length() - radius).abs() <= tol {
        GizmoAxis::Ring
    } else {
        GizmoAxis::None
    }
}

/// Record the 2D drag-start angle from the anchor to the mouse.
pub fn begin_2d(drag: &mut DragState, world_mouse: Vec2) -> bool {
    let rotation = drag.before.rotation.unwrap_or(0.0);
    let anchor = Vec2::new(
        drag.before.x.unwrap_or(0.0),
        drag.before.y.unwrap_or(0.0),
    );
    let offset = world_mouse - anchor;
    drag.start_angle = offset.y.atan2(offset.x);
    drag.rotate_target = Some(RotateTarget::Planar { start: rotation });
    true
}

/// Per-frame 2D rotate solve: snapshot rotation plus the swept angle.
pub fn update_2d(drag: &DragState, obj: &mut SceneObject, world_mouse: Vec2, snap: Option<f64>) {
    let Some(RotateTarget::Planar { start }) = drag.rotate_target else {
        return;
    };
    let anchor = Vec2::new(
        drag.before.x.unwrap_or(0.0),
        drag.before.y.unwrap_or(0.0),
    );
    let offset = world_mouse - anchor;
    let mut delta = offset.y.atan2(offset.x) - drag.start_angle;
    if let Some(step) = snap {
        delta = snap_value(delta, step);
    }
    drag.before.apply(obj);
    obj.rotation = Some(start + delta);
}

/// Hit-test the three axis-aligned 3D rotation rings.
///
/// Each ring is intersected on its own plane and scored by how far the
/// hit's radial distance is from the ring radius; the smallest radial
/// error within tolerance wins across all three, regardless of axis
/// order. A ring whose plane is edge-on to the ray is skipped.
pub fn hit_test_3d(obj: &SceneObject, ray: &Ray) -> GizmoAxis {
    let Some(anchor) = obj.anchor_3d() else {
        return GizmoAxis::None;
    };

    let mut best = GizmoAxis::None;
    let mut best_err = RING_TOLERANCE_3D;
    for axis in [GizmoAxis::X, GizmoAxis::Y, GizmoAxis::Z] {
        let normal = axis.dir().unwrap();
        let Some(hit) = ray_plane(ray.origin, ray.dir, anchor, normal) else {
            continue;
        };
        let err = ((hit - anchor).length() - RING_RADIUS_3D).abs();
        if err <= best_err {
            best = axis;
            best_err = err;
        }
    }
    best
}

/// Record the 3D drag-start angle on the ring plane and resolve which
/// rotation representation the object carries. Returns false when the
/// plane solve fails or the object has nothing to rotate.
pub fn begin_3d(drag: &mut DragState, obj: &SceneObject, ray: &Ray) -> bool {
    let Some(anchor) = drag.before.position else {
        return false;
    };
    let Some(normal) = drag.axis.dir() else {
        return false;
    };
    let Some(target) = RotateTarget::resolve_3d(obj) else {
        return false;
    };
    let Some(hit) = ray_plane(ray.origin, ray.dir, anchor, normal) else {
        return false;
    };

    drag.start_pos = anchor;
    drag.plane_normal = normal;
    drag.start_angle = ring_angle(hit - anchor, normal);
    drag.rotate_target = Some(target);
    true
}

/// Per-frame 3D rotate solve. Restores the snapshot, then applies the
/// total swept angle to whichever representation the drag resolved.
pub fn update_3d(drag: &DragState, obj: &mut SceneObject, ray: &Ray, snap: Option<f64>) {
    let Some(target) = &drag.rotate_target else {
        return;
    };
    let Some(hit) = ray_plane(ray.origin, ray.dir, drag.start_pos, drag.plane_normal) else {
        return;
    };
    let mut delta = ring_angle(hit - drag.start_pos, drag.plane_normal) - drag.start_angle;
    if let Some(step) = snap {
        delta = snap_value(delta, step);
    }

    drag.before.apply(obj);
    match *target {
        RotateTarget::Planar { .. } => {}
        RotateTarget::Euler { start } => {
            obj.euler = Some(start + drag.plane_normal * delta);
        }
        RotateTarget::Direction { start } => {
            obj.direction = Some(rotate_axis_angle(start, drag.plane_normal, delta).normalize());
        }
        RotateTarget::LookAt { start_offset } => {
            if let Some(position) = drag.before.position {
                obj.target =
                    Some(position + rotate_axis_angle(start_offset, drag.plane_normal, delta));
            }
        }
    }
}

/// Signed angle of an in-plane offset, measured against a stable basis
/// derived from the plane normal. Consistent with `rotate_axis_angle`:
/// rotating the first basis vector about the normal by `a` lands at
/// angle `a`.
fn ring_angle(offset: Vec3, normal: Vec3) -> f64 {
    let (b1, b2) = plane_basis(normal);
    offset.dot(b2).atan2(offset.dot(b1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gizmos::gizmo::{GizmoMode, TransformSnapshot};
    use crate::scene::ObjectId;
    use std::f64::consts::FRAC_PI_2;

    fn drag_for(obj: &SceneObject, axis: GizmoAxis) -> DragState {
        DragState::new(
            ObjectId(0),
            GizmoMode::Rotate,
            axis,
            TransformSnapshot::capture(obj),
        )
    }

    #[test]
    fn test_hit_test_2d_ring_band() {
        let obj = SceneObject::new("s").with_rect(0.0, 0.0, 10.0, 10.0);
        assert_eq!(hit_test_2d(&obj, Vec2::new(55.0, 0.0), 1.0), GizmoAxis::Ring);
        assert_eq!(hit_test_2d(&obj, Vec2::new(0.0, -48.0), 1.0), GizmoAxis::Ring);
        assert_eq!(hit_test_2d(&obj, Vec2::new(40.0, 0.0), 1.0), GizmoAxis::None);
        // Zoomed in, the band shrinks in world units.
        assert_eq!(hit_test_2d(&obj, Vec2::new(29.0, 0.0), 2.0), GizmoAxis::Ring);
        assert_eq!(hit_test_2d(&obj, Vec2::new(40.0, 0.0), 2.0), GizmoAxis::None);
    }

    #[test]
    fn test_2d_drag_adds_swept_angle() {
        let mut obj = SceneObject::new("s")
            .with_rect(10.0, 0.0, 4.0, 4.0)
            .with_rotation(0.3);
        let mut drag = drag_for(&obj, GizmoAxis::Ring);
        assert!(begin_2d(&mut drag, Vec2::new(65.0, 0.0)));

        // Quarter turn counterclockwise around the anchor.
        update_2d(&drag, &mut obj, Vec2::new(10.0, 55.0), None);
        assert!((obj.rotation.unwrap() - (0.3 + FRAC_PI_2)).abs() < 1e-9);
    }

    #[test]
    fn test_2d_snap_in_radians() {
        let mut obj = SceneObject::new("s").with_rect(0.0, 0.0, 4.0, 4.0);
        let mut drag = drag_for(&obj, GizmoAxis::Ring);
        assert!(begin_2d(&mut drag, Vec2::new(55.0, 0.0)));

        let step = 15.0_f64.to_radians();
        update_2d(&drag, &mut obj, Vec2::new(55.0, 12.0), Some(step));
        // 12.3 degrees swept, snapped to 15.
        assert!((obj.rotation.unwrap() - step).abs() < 1e-9);
    }

    #[test]
    fn test_hit_test_3d_smallest_radial_error_wins() {
        let obj = SceneObject::new("m").with_position(Vec3::ZERO);
        // This ray crosses the Z plane 0.04 off the ring and the X plane
        // 0.05 off it; the Y plane is parallel and skipped.
        let ray = Ray::new(
            Vec3::new(0.6, 0.99578, -0.3332),
            Vec3::new(-0.3, 0.0, 0.3332),
        );
        assert_eq!(hit_test_3d(&obj, &ray), GizmoAxis::Z);
    }

    #[test]
    fn test_hit_test_3d_outside_band() {
        let obj = SceneObject::new("m").with_position(Vec3::ZERO);
        let ray = Ray::new(Vec3::new(2.0, 2.0, 5.0), Vec3::NEG_Z);
        assert_eq!(hit_test_3d(&obj, &ray), GizmoAxis::None);
    }

    #[test]
    fn test_3d_euler_drag() {
        let mut obj = SceneObject::new("m")
            .with_position(Vec3::ZERO)
            .with_euler(Vec3::new(0.1, 0.2, 0.3));
        let mut drag = drag_for(&obj, GizmoAxis::Z);
        let start = Ray::new(Vec3::new(0.0, 1.0, 5.0), Vec3::NEG_Z);
        assert!(begin_3d(&mut drag, &obj, &start));

        let end = Ray::new(Vec3::new(-1.0, 0.0, 5.0), Vec3::NEG_Z);
        update_3d(&drag, &mut obj, &end, None);

        let euler = obj.euler.unwrap();
        assert!((euler.x - 0.1).abs() < 1e-9);
        assert!((euler.y - 0.2).abs() < 1e-9);
        assert!((euler.z - (0.3 + FRAC_PI_2)).abs() < 1e-9);
    }

    #[test]
    fn test_3d_direction_drag() {
        let mut obj = SceneObject::new("m")
            .with_position(Vec3::ZERO)
            .with_direction(Vec3::NEG_Y);
        let mut drag = drag_for(&obj, GizmoAxis::Z);
        let start = Ray::new(Vec3::new(0.0, 1.0, 5.0), Vec3::NEG_Z);
        assert!(begin_3d(&mut drag, &obj, &start));

        let end = Ray::new(Vec3::new(-1.0, 0.0, 5.0), Vec3::NEG_Z);
        update_3d(&drag, &mut obj, &end, None);

        let dir = obj.direction.unwrap();
        assert!((dir - Vec3::X).length() < 1e-9);
    }

    #[test]
    fn test_3d_look_at_drag_orbits_target() {
        let mut obj = SceneObject::new("cam")
            .with_position(Vec3::new(2.0, 0.0, 0.0))
            .with_target(Vec3::new(2.0, 0.0, -3.0));
        let mut drag = drag_for(&obj, GizmoAxis::Y);
        // Ring plane is Y through the anchor; approach from above.
        let start = Ray::new(Vec3::new(3.0, 5.0, 0.0), Vec3::NEG_Y);
        assert!(begin_3d(&mut drag, &obj, &start));

        let end = Ray::new(Vec3::new(2.0, 5.0, -1.0), Vec3::NEG_Y);
        update_3d(&drag, &mut obj, &end, None);

        // Position is untouched, the look offset keeps its length.
        assert_eq!(obj.position, Some(Vec3::new(2.0, 0.0, 0.0)));
        let offset = obj.target.unwrap() - obj.position.unwrap();
        assert!((offset.length() - 3.0).abs() < 1e-9);
        // A quarter turn about Y takes -Z toward -X or +X, not back to -Z.
        assert!(offset.z.abs() < 1e-9);
    }

    #[test]
    fn test_3d_update_restores_snapshot_each_frame() {
        let mut obj = SceneObject::new("m")
            .with_position(Vec3::ZERO)
            .with_euler(Vec3::ZERO);
        let mut drag = drag_for(&obj, GizmoAxis::Z);
        let start = Ray::new(Vec3::new(1.0, 0.0, 5.0), Vec3::NEG_Z);
        assert!(begin_3d(&mut drag, &obj, &start));

        // Sweep out and back; many intermediate frames must not drift.
        let quarter = Ray::new(Vec3::new(0.0, 1.0, 5.0), Vec3::NEG_Z);
        for _ in 0..50 {
            update_3d(&drag, &mut obj, &quarter, None);
            update_3d(&drag, &mut obj, &start, None);
        }
        assert!(obj.euler.unwrap().length() < 1e-9);
    }

    #[test]
    fn test_begin_3d_fails_without_rotation_target() {
        let obj = SceneObject::new("m").with_position(Vec3::ZERO);
        let mut drag = drag_for(&obj, GizmoAxis::Z);
        let ray = Ray::new(Vec3::new(0.0, 1.0, 5.0), Vec3::NEG_Z);
        assert!(!begin_3d(&mut drag, &obj, &ray));
    }

    #[test]
    fn test_begin_3d_fails_on_edge_on_plane() {
        let obj = SceneObject::new("m")
            .with_position(Vec3::ZERO)
            .with_euler(Vec3::ZERO);
        let mut drag = drag_for(&obj, GizmoAxis::Y);
        // Ray lies in the ring plane.
        let ray = Ray::new(Vec3::new(5.0, 0.0, 0.0), Vec3::NEG_X);
        assert!(!begin_3d(&mut drag, &obj, &ray));
    }
}
