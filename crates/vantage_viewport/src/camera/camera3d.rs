//! 3D fly camera controller.
//!
//! The controller maintains target state (`yaw_target`, `pitch_target`,
//! `pos_target`) separately from the rendered state and converges the
//! latter every frame via exponential smoothing, decoupling raw input
//! deltas from rendered motion so the camera feel is frame-rate
//! independent.

use vantage_math::{lerp, lerp_angle, smoothing_alpha, Mat4, Ray, Vec2, Vec3};

use crate::input::{FrameInput, MouseButton};
use crate::viewport::Viewport;

/// Pitch stays just shy of straight up/down to avoid gimbal flip.
pub const PITCH_LIMIT: f64 = 1.5;

/// Default editor camera position after a scene load.
const DEFAULT_POSITION: Vec3 = Vec3::new(0.0, 1.5, 6.0);

/// Renderable 3D camera, owned by the scene.
#[derive(Clone, Copy, Debug)]
pub struct Camera3D {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_y: f64,
    pub near: f64,
    pub far: f64,
}

impl Default for Camera3D {
    fn default() -> Self {
        Self {
            position: DEFAULT_POSITION,
            target: DEFAULT_POSITION + Vec3::NEG_Z,
            fov_y: 60f64.to_radians(),
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Camera3D {
    pub fn view_projection(&self, aspect: f64) -> Mat4 {
        let view = Mat4::look_at(self.position, self.target, Vec3::Y);
        let proj = Mat4::perspective(self.fov_y, aspect, self.near, self.far);
        proj * view
    }
}

/// Build the cursor ray for a screen point through the camera.
///
/// Recomputed every frame; never cache a ray across frames.
pub fn cursor_ray(camera: &Camera3D, viewport: &Viewport, screen: Vec2) -> Ray {
    let ndc = viewport.screen_to_ndc(screen);
    let inv = camera.view_projection(viewport.aspect()).inverse();
    Ray::from_ndc(&inv, ndc.x, ndc.y)
}

/// Controller-local fly state. Never persisted; reset on scene load.
#[derive(Clone, Copy, Debug)]
pub struct Camera3DState {
    pub yaw: f64,
    pub pitch: f64,
    pub yaw_target: f64,
    pub pitch_target: f64,
    pub pos_target: Vec3,
    pub move_speed: f64,
    pub smooth_time_rot: f64,
    pub smooth_time_pos: f64,
}

impl Default for Camera3DState {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            yaw_target: 0.0,
            pitch_target: 0.0,
            pos_target: DEFAULT_POSITION,
            move_speed: 4.0,
            smooth_time_rot: 0.08,
            smooth_time_pos: 0.12,
        }
    }
}

/// Fly-camera controller: mouse look, pan, WASD flight, wheel dolly.
pub struct Camera3DController {
    pub state: Camera3DState,
    pub look_sensitivity: f64,
    pub pan_sensitivity: f64,
    pub invert_y: bool,
}

impl Default for Camera3DController {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera3DController {
    pub fn new() -> Self {
        Self {
            state: Camera3DState::default(),
            look_sensitivity: 0.005,
            pan_sensitivity: 0.01,
            invert_y: false,
        }
    }

    /// Forward vector from yaw and pitch; yaw=0, pitch=0 looks down -Z.
    pub fn forward(yaw: f64, pitch: f64) -> Vec3 {
        Vec3::new(
            yaw.sin() * pitch.cos(),
            pitch.sin(),
            -yaw.cos() * pitch.cos(),
        )
    }

    /// Strafe vector from yaw only, kept level for predictability.
    pub fn right(yaw: f64) -> Vec3 {
        Vec3::new(yaw.cos(), 0.0, yaw.sin())
    }

    /// Reset on scene load: angles zeroed, position back to default,
    /// looking down -Z.
    pub fn reset(&mut self, camera: &mut Camera3D) {
        let move_speed = self.state.move_speed;
        let smooth_time_rot = self.state.smooth_time_rot;
        let smooth_time_pos = self.state.smooth_time_pos;
        self.state = Camera3DState {
            move_speed,
            smooth_time_rot,
            smooth_time_pos,
            ..Camera3DState::default()
        };
        camera.position = DEFAULT_POSITION;
        camera.target = DEFAULT_POSITION + Self::forward(0.0, 0.0);
        log::debug!("camera3d reset to {:?}", camera.position);
    }

    /// Per-frame navigation update. The caller guarantees the gizmo does
    /// not own input this frame.
    pub fn update(&mut self, camera: &mut Camera3D, input: &FrameInput, dt: f64) {
        let rotate_held = input.button(MouseButton::Right);
        let delta = input.mouse_delta();

        // Mouse look, only while the rotate modifier is held.
        if rotate_held {
            let dy = if self.invert_y { -delta.y } else { delta.y };
            self.state.yaw_target += delta.x * self.look_sensitivity;
            self.state.pitch_target = (self.state.pitch_target - dy * self.look_sensitivity)
                .clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        // Pan along camera-right (level) and world-up.
        if input.button(MouseButton::Middle) {
            let right = Self::right(self.state.yaw);
            let step = self.pan_sensitivity * self.state.move_speed;
            self.state.pos_target -= right * (delta.x * step);
            self.state.pos_target += Vec3::Y * (delta.y * step);
        }

        // Fly keys share the rotate modifier so they never collide with
        // text entry elsewhere in the host.
        if rotate_held {
            self.apply_fly_keys(input, dt);
        }

        // Wheel dolly along the full look direction.
        let wheel = input.wheel();
        if wheel != 0.0 {
            let amount = (wheel / 100.0).clamp(-10.0, 10.0) * self.state.move_speed * 0.25;
            let fwd = Self::forward(self.state.yaw, self.state.pitch);
            self.state.pos_target += fwd * amount;
        }

        self.converge(camera, dt);
    }

    fn apply_fly_keys(&mut self, input: &FrameInput, dt: f64) {
        let fwd = Self::forward(self.state.yaw, self.state.pitch);
        let right = Self::right(self.state.yaw);

        let mut wish = Vec3::ZERO;
        if input.key("w") {
            wish += fwd;
        }
        if input.key("s") {
            wish -= fwd;
        }
        if input.key("d") {
            wish += right;
        }
        if input.key("a") {
            wish -= right;
        }
        if input.key("e") {
            wish += Vec3::Y;
        }
        if input.key("q") {
            wish -= Vec3::Y;
        }

        if wish.length_squared() == 0.0 {
            return;
        }

        let multiplier = if input.key("shift") {
            3.0
        } else if input.key("alt") {
            0.35
        } else {
            1.0
        };
        let speed = self.state.move_speed * multiplier;
        self.state.pos_target += wish.normalize() * (speed * dt);
    }

    /// Converge current state toward targets with exponential smoothing.
    fn converge(&mut self, camera: &mut Camera3D, dt: f64) {
        let alpha_rot = smoothing_alpha(dt, self.state.smooth_time_rot);
        let alpha_pos = smoothing_alpha(dt, self.state.smooth_time_pos);

        self.state.yaw = lerp_angle(self.state.yaw, self.state.yaw_target, alpha_rot);
        self.state.pitch = lerp(self.state.pitch, self.state.pitch_target, alpha_rot)
            .clamp(-PITCH_LIMIT, PITCH_LIMIT);

        camera.position = camera.position.lerp(self.state.pos_target, alpha_pos);
        camera.target = camera.position + Self::forward(self.state.yaw, self.state.pitch);
    }
}
