//! Intersection and closest-point solves for gizmo interaction
//!
//! All functions return `None` for degenerate configurations (parallel
//! ray/plane, camera looking down an axis) instead of erroring; callers
//! skip the interaction for that frame.

use crate::ray::Ray;
use crate::vector::Vec3;

/// Ray/plane intersection.
///
/// Returns `None` when the ray is parallel to the plane
/// (`|dot(normal, dir)| < 1e-6`). The returned hit may lie behind the
/// ray origin (negative t): drags are allowed to pass behind the
/// camera, so callers do not reject it here.
pub fn ray_plane(origin: Vec3, dir: Vec3, plane_p: Vec3, plane_n: Vec3) -> Option<Vec3> {
    let denom = plane_n.dot(dir);
    if denom.abs() < 1e-6 {
        return None;
    }
    let t = (plane_p - origin).dot(plane_n) / denom;
    Some(origin + dir * t)
}

/// Parameter along an axis line of the point closest to a ray.
///
/// Classic skew-line closest-approach solve with unit directions.
/// Returns `None` when the lines are near-parallel
/// (`|1 - (d0.d1)^2| < 1e-6`), i.e. the camera is looking straight
/// down the axis.
pub fn closest_axis_t(p0: Vec3, d0: Vec3, p1: Vec3, d1: Vec3) -> Option<f64> {
    let b = d0.dot(d1);
    let denom = 1.0 - b * b;
    if denom.abs() < 1e-6 {
        return None;
    }
    let w = p0 - p1;
    let d = d0.dot(w);
    let e = d1.dot(w);
    Some((b * e - d) / denom)
}

/// Smallest distance between a ray and a line segment.
///
/// Returns `None` for a zero-length segment.
pub fn ray_segment_distance(ray: &Ray, a: Vec3, b: Vec3) -> Option<f64> {
    let seg = b - a;
    let seg_len_sq = seg.length_squared();
    if seg_len_sq < 1e-12 {
        return None;
    }

    let u = ray.dir;
    let w = ray.origin - a;

    let ub = u.dot(seg);
    let d = u.dot(w);
    let e = seg.dot(w);

    let denom = seg_len_sq - ub * ub;
    let (s, t) = if denom.abs() < 1e-12 {
        // Ray parallel to the segment: measure against the segment start.
        ((-d).max(0.0), 0.0)
    } else {
        let t = ((e - ub * d) / denom).clamp(0.0, 1.0);
        let s = (ub * t - d).max(0.0);
        (s, t)
    };

    let on_ray = ray.at(s);
    let on_seg = a + seg * t;
    Some(on_ray.distance(on_seg))
}

/// Rotate a vector about an axis by an angle (Rodrigues' formula).
///
/// The axis is normalized internally.
pub fn rotate_axis_angle(v: Vec3, axis: Vec3, angle: f64) -> Vec3 {
    let k = axis.normalize();
    let (sin, cos) = angle.sin_cos();
    v * cos + k.cross(v) * sin + k * (k.dot(v) * (1.0 - cos))
}

/// Build an orthonormal basis `(b1, b2)` spanning the plane with the
/// given normal. Used to measure ring angles in 2D.
pub fn plane_basis(normal: Vec3) -> (Vec3, Vec3) {
    let n = normal.normalize();
    let helper = if n.x.abs() < 0.9 { Vec3::X } else { Vec3::Y };
    let b1 = n.cross(helper).normalize();
    let b2 = n.cross(b1);
    (b1, b2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_plane_hit() {
        let hit = ray_plane(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::NEG_Z,
            Vec3::ZERO,
            Vec3::Z,
        )
        .unwrap();
        assert!((hit - Vec3::ZERO).length() < 1e-12);
    }

    #[test]
    fn test_ray_plane_parallel() {
        let hit = ray_plane(Vec3::new(0.0, 1.0, 0.0), Vec3::X, Vec3::ZERO, Vec3::Y);
        assert!(hit.is_none());
    }

    #[test]
    fn test_ray_plane_behind_origin() {
        // Plane behind the ray origin still yields a hit (negative t).
        let hit = ray_plane(
            Vec3::new(0.0, 0.0, -5.0),
            Vec3::NEG_Z,
            Vec3::ZERO,
            Vec3::Z,
        )
        .unwrap();
        assert!((hit - Vec3::ZERO).length() < 1e-12);
    }

    #[test]
    fn test_closest_axis_t() {
        // X axis through origin; ray dropping straight down onto x=2.
        let t = closest_axis_t(
            Vec3::ZERO,
            Vec3::X,
            Vec3::new(2.0, 5.0, 0.0),
            Vec3::NEG_Y,
        )
        .unwrap();
        assert!((t - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_closest_axis_t_parallel() {
        let t = closest_axis_t(Vec3::ZERO, Vec3::X, Vec3::new(0.0, 1.0, 0.0), Vec3::X);
        assert!(t.is_none());
    }

    #[test]
    fn test_ray_segment_distance() {
        let ray = Ray::new(Vec3::new(0.5, 3.0, 0.0), Vec3::NEG_Y);
        let d = ray_segment_distance(&ray, Vec3::ZERO, Vec3::X).unwrap();
        assert!(d.abs() < 1e-9);

        // Past the clamped end of the segment.
        let ray = Ray::new(Vec3::new(4.0, 3.0, 0.0), Vec3::NEG_Y);
        let d = ray_segment_distance(&ray, Vec3::ZERO, Vec3::X).unwrap();
        assert!((d - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_ray_segment_distance_offset_segment() {
        // Drop vertically onto the midpoint of an axis arm away from the
        // origin; the result must be the ray-to-segment distance, not the
        // ray-origin-to-segment distance.
        let a = Vec3::new(50.0, 50.0, 0.0);
        let b = Vec3::new(51.2, 50.0, 0.0);
        let ray = Ray::new(Vec3::new(50.6, 55.0, 0.0), Vec3::NEG_Y);
        let d = ray_segment_distance(&ray, a, b).unwrap();
        assert!(d.abs() < 1e-9);

        // Pass over the arm with a lateral offset.
        let ray = Ray::new(Vec3::new(50.6, 50.2, 5.0), Vec3::NEG_Z);
        let d = ray_segment_distance(&ray, a, b).unwrap();
        assert!((d - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_ray_segment_distance_parallel() {
        // Parallel ray alongside the segment keeps its lateral offset.
        let ray = Ray::new(Vec3::new(-5.0, 0.1, 0.0), Vec3::X);
        let d = ray_segment_distance(&ray, Vec3::ZERO, Vec3::new(1.2, 0.0, 0.0)).unwrap();
        assert!((d - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_ray_segment_distance_segment_behind_ray() {
        // Segment behind the ray origin: the ray parameter clamps to 0.
        let ray = Ray::new(Vec3::new(0.5, -1.0, 0.0), Vec3::NEG_Y);
        let d = ray_segment_distance(&ray, Vec3::ZERO, Vec3::X).unwrap();
        assert!((d - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_rotate_axis_angle_quarter_turn() {
        let v = rotate_axis_angle(Vec3::X, Vec3::Z, core::f64::consts::FRAC_PI_2);
        assert!((v - Vec3::Y).length() < 1e-12);
    }

    #[test]
    fn test_rotate_preserves_length() {
        let v = Vec3::new(1.0, -2.0, 3.0);
        let r = rotate_axis_angle(v, Vec3::new(1.0, 1.0, 0.0), 0.7);
        assert!((r.length() - v.length()).abs() < 1e-12);
    }

    #[test]
    fn test_plane_basis_orthonormal() {
        let (b1, b2) = plane_basis(Vec3::new(0.3, 0.7, -0.2));
        assert!((b1.length() - 1.0).abs() < 1e-12);
        assert!((b2.length() - 1.0).abs() < 1e-12);
        assert!(b1.dot(b2).abs() < 1e-12);
    }
}
