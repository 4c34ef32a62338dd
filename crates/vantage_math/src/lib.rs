//! # vantage_math - Double-Precision Viewport Math
//!
//! Math primitives underpinning picking and gizmo interaction:
//! vectors, camera matrices, cursor rays, and the closest-point /
//! intersection solves the gizmo state machine is built on.

pub mod intersect;
pub mod matrix;
pub mod ray;
pub mod vector;

pub use intersect::*;
pub use matrix::*;
pub use ray::*;
pub use vector::*;

/// Common math constants
pub mod consts {
    pub const PI: f64 = core::f64::consts::PI;
    pub const TAU: f64 = PI * 2.0;
    pub const FRAC_PI_2: f64 = PI / 2.0;
    pub const EPSILON: f64 = 1e-6;
}

/// Linear interpolation
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Angle-aware interpolation taking the shortest signed arc mod 2π.
#[inline]
pub fn lerp_angle(a: f64, b: f64, t: f64) -> f64 {
    let mut delta = (b - a) % consts::TAU;
    if delta > consts::PI {
        delta -= consts::TAU;
    } else if delta < -consts::PI {
        delta += consts::TAU;
    }
    a + delta * t
}

/// Frame-rate-independent smoothing factor: `1 - exp(-dt / tau)`.
#[inline]
pub fn smoothing_alpha(dt: f64, smooth_time: f64) -> f64 {
    if smooth_time <= 0.0 {
        return 1.0;
    }
    1.0 - (-dt / smooth_time).exp()
}
