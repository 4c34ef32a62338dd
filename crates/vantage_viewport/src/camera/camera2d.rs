//! 2D editor camera: pan/zoom origin with a screen-to-world transform.

use vantage_math::Vec2;

/// Zoom is clamped to this range.
pub const ZOOM_MIN: f64 = 0.05;
pub const ZOOM_MAX: f64 = 50.0;

/// Wheel zoom factor per notch.
const ZOOM_STEP: f64 = 1.1;

/// 2D camera: world-space origin plus zoom.
///
/// A `rotation` field exists because authored scenes carry one, but it
/// is not applied to the screen/world transform; picking and overlay
/// math are axis-aligned. Known limitation of the system, preserved.
#[derive(Clone, Copy, Debug)]
pub struct Camera2D {
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
    pub rotation: f64,
}

impl Default for Camera2D {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            zoom: 1.0,
            rotation: 0.0,
        }
    }
}

impl Camera2D {
    pub fn new() -> Self {
        Self::default()
    }

    /// Screen point to world point: `world = origin + screen / zoom`.
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        Vec2::new(self.x + screen.x / self.zoom, self.y + screen.y / self.zoom)
    }

    /// Pan by a screen-space mouse delta (middle-button drag).
    pub fn pan(&mut self, delta: Vec2) {
        self.x -= delta.x / self.zoom;
        self.y -= delta.y / self.zoom;
    }

    /// Zoom by one wheel notch per call; sign picks the direction.
    pub fn zoom_by(&mut self, wheel_delta: f64) {
        if wheel_delta == 0.0 {
            return;
        }
        let factor = if wheel_delta > 0.0 {
            1.0 / ZOOM_STEP
        } else {
            ZOOM_STEP
        };
        self.zoom = (self.zoom * factor).clamp(ZOOM_MIN, ZOOM_MAX);
    }
}

/// The editor substitutes its own camera for rendering while scripts
/// keep using the authored one. Keeping both references explicit avoids
/// the mutate-and-restore footgun on a shared scene field.
#[derive(Clone, Copy, Debug, Default)]
pub struct ActiveCameraSet {
    /// Editor camera: what the viewport renders and picks through.
    pub render: Camera2D,
    /// Authored camera: what scene logic reads. Never mutated here.
    pub logic: Camera2D,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_mapping() {
        // Camera at origin with zoom 1: screen == world.
        let cam = Camera2D::new();
        let world = cam.screen_to_world(Vec2::new(100.0, 100.0));
        assert_eq!(world, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_screen_to_world_with_zoom_and_origin() {
        let cam = Camera2D {
            x: 10.0,
            y: -20.0,
            zoom: 2.0,
            rotation: 0.0,
        };
        let world = cam.screen_to_world(Vec2::new(100.0, 50.0));
        assert_eq!(world, Vec2::new(60.0, 5.0));
    }

    #[test]
    fn test_pan_scales_with_zoom() {
        let mut cam = Camera2D {
            zoom: 2.0,
            ..Camera2D::new()
        };
        cam.pan(Vec2::new(10.0, -4.0));
        assert_eq!(cam.x, -5.0);
        assert_eq!(cam.y, 2.0);
    }

    #[test]
    fn test_zoom_stays_clamped() {
        let mut cam = Camera2D::new();
        for _ in 0..200 {
            cam.zoom_by(1.0);
        }
        assert!(cam.zoom >= ZOOM_MIN);
        for _ in 0..400 {
            cam.zoom_by(-1.0);
        }
        assert!(cam.zoom <= ZOOM_MAX);
    }

    #[test]
    fn test_zoom_zero_delta_is_noop() {
        let mut cam = Camera2D::new();
        cam.zoom_by(0.0);
        assert_eq!(cam.zoom, 1.0);
    }
}
