//! Viewport camera controllers.

mod camera2d;
mod camera3d;

pub use camera2d::{ActiveCameraSet, Camera2D, ZOOM_MAX, ZOOM_MIN};
pub use camera3d::{cursor_ray, Camera3D, Camera3DController, Camera3DState, PITCH_LIMIT};
