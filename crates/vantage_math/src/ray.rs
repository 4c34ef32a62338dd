//! Cursor ray construction
//!
//! Rays are ephemeral: rebuilt every frame from the current camera and
//! cursor position, never cached across frames.

use crate::matrix::Mat4;
use crate::vector::Vec3;

/// A ray with normalized direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    /// Create a new ray with normalized direction.
    #[inline]
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize(),
        }
    }

    /// Get a point at distance t along the ray.
    #[inline]
    pub fn at(&self, t: f64) -> Vec3 {
        self.origin + self.dir * t
    }

    /// Build the cursor ray from a point in NDC, unprojecting at the
    /// near (z=-1) and far (z=1) planes.
    pub fn from_ndc(inv_view_proj: &Mat4, ndc_x: f64, ndc_y: f64) -> Self {
        let near = unproject(inv_view_proj, Vec3::new(ndc_x, ndc_y, -1.0));
        let far = unproject(inv_view_proj, Vec3::new(ndc_x, ndc_y, 1.0));
        Self::new(near, far - near)
    }
}

/// Unproject a point in NDC through the inverse view-projection matrix.
///
/// When the homogeneous w collapses (`|w| < 1e-8`) the pre-divide point
/// is returned unchanged. Degenerate but defined, not an error.
pub fn unproject(inv_view_proj: &Mat4, ndc: Vec3) -> Vec3 {
    let h = *inv_view_proj * ndc.extend(1.0);
    if h.w.abs() < 1e-8 {
        return h.truncate();
    }
    h.truncate() / h.w
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Mat4;

    #[test]
    fn test_ray_normalizes() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 4.0));
        assert!((ray.dir.length() - 1.0).abs() < 1e-12);
        assert!((ray.at(2.0) - Vec3::new(0.0, 0.0, 2.0)).length() < 1e-12);
    }

    #[test]
    fn test_unproject_identity() {
        let p = unproject(&Mat4::IDENTITY, Vec3::new(0.5, -0.25, 0.0));
        assert!((p - Vec3::new(0.5, -0.25, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_center_ray_matches_camera_forward() {
        let eye = Vec3::new(0.0, 1.5, 6.0);
        let target = Vec3::new(0.0, 1.5, 0.0);
        let view = Mat4::look_at(eye, target, Vec3::Y);
        let proj = Mat4::perspective(1.0, 16.0 / 9.0, 0.1, 100.0);
        let inv = (proj * view).inverse();

        let ray = Ray::from_ndc(&inv, 0.0, 0.0);
        assert!((ray.dir - Vec3::NEG_Z).length() < 1e-6);
        // Origin lies on the near plane in front of the eye.
        assert!((ray.origin - eye).length() < 0.2);
    }
}
