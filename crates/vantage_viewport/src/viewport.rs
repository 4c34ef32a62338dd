//! Viewport metrics: client rect, device pixel size, and the sub-rect
//! actually rendered into (letterboxed/split layouts).

use vantage_math::Vec2;

/// Sub-rectangle of the device canvas the scene is rendered into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Canvas and viewport metrics, refreshed by the host on resize.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    /// Client (CSS) size in logical pixels.
    pub client_width: f64,
    pub client_height: f64,
    /// Backing store size in device pixels.
    pub device_width: f64,
    pub device_height: f64,
    /// Rendered sub-rect in device pixels.
    pub rect: ViewportRect,
}

impl Viewport {
    /// Full-canvas viewport with a 1:1 CSS-to-device scale.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            client_width: width,
            client_height: height,
            device_width: width,
            device_height: height,
            rect: ViewportRect {
                x: 0.0,
                y: 0.0,
                width,
                height,
            },
        }
    }

    /// CSS-to-device pixel scale.
    pub fn device_scale(&self) -> f64 {
        if self.client_width > 0.0 {
            self.device_width / self.client_width
        } else {
            1.0
        }
    }

    pub fn aspect(&self) -> f64 {
        if self.rect.height > 0.0 {
            self.rect.width / self.rect.height
        } else {
            1.0
        }
    }

    /// Convert a screen (CSS pixel) point to NDC.
    ///
    /// Out-of-viewport points are clamped to the edge, not rejected:
    /// a drag that leaves the viewport keeps tracking its border.
    pub fn screen_to_ndc(&self, screen: Vec2) -> Vec2 {
        let scale = self.device_scale();
        let device = screen * scale;

        let u = if self.rect.width > 0.0 {
            ((device.x - self.rect.x) / self.rect.width).clamp(0.0, 1.0)
        } else {
            0.5
        };
        let v = if self.rect.height > 0.0 {
            ((device.y - self.rect.y) / self.rect.height).clamp(0.0, 1.0)
        } else {
            0.5
        };

        // Screen y grows downward, NDC y grows upward.
        Vec2::new(u * 2.0 - 1.0, 1.0 - v * 2.0)
    }
}
