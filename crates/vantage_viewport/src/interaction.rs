//! Per-frame viewport interaction loop.
//!
//! One `update` call per frame routes input with a fixed priority: an
//! active gizmo drag owns the pointer outright; otherwise the gizmo
//! gets first refusal on a left press via hover, then picking, then
//! camera navigation. Camera movement never runs while the gizmo owns
//! input, so a drag can never pan the view out from under itself.

use crate::camera::{cursor_ray, ActiveCameraSet, Camera3D, Camera3DController};
use crate::gizmo_state::GizmoController;
use crate::gizmos::{DragCommit, GizmoAxis, GizmoMode};
use crate::input::{FrameInput, MouseButton};
use crate::picker::pick_2d;
use crate::scene::{ObjectId, Scene};
use crate::viewport::Viewport;

/// Which projection the viewport is currently editing through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    TwoD,
    ThreeD,
}

/// Editor-side interaction state for one viewport.
pub struct ViewportInteraction {
    pub view_mode: ViewMode,
    pub viewport: Viewport,
    pub cameras: ActiveCameraSet,
    pub camera3d: Camera3D,
    pub controller3d: Camera3DController,
    pub gizmo: GizmoController,
    selected: Option<ObjectId>,
}

impl ViewportInteraction {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            view_mode: ViewMode::default(),
            viewport,
            cameras: ActiveCameraSet::default(),
            camera3d: Camera3D::default(),
            controller3d: Camera3DController::new(),
            gizmo: GizmoController::new(),
            selected: None,
        }
    }

    pub fn selected(&self) -> Option<ObjectId> {
        self.selected
    }

    /// Change the selection. Any gizmo hover or drag belongs to the old
    /// selection and is dropped.
    pub fn select(&mut self, id: Option<ObjectId>) {
        if self.selected != id {
            self.selected = id;
            self.gizmo.reset();
        }
    }

    /// Advance interaction by one frame. Returns a finished drag's
    /// before/after pair when the button came up this frame.
    pub fn update(
        &mut self,
        scene: &mut Scene,
        input: &FrameInput,
        dt: f64,
    ) -> Option<DragCommit> {
        self.handle_hotkeys(scene, input);

        // Selection deleted out from under us.
        if let Some(id) = self.selected {
            if scene.get(id).is_none() {
                self.select(None);
            }
        }

        match self.view_mode {
            ViewMode::TwoD => self.update_2d(scene, input),
            ViewMode::ThreeD => self.update_3d(scene, input, dt),
        }
    }

    fn handle_hotkeys(&mut self, scene: &mut Scene, input: &FrameInput) {
        if input.key_pressed("escape") {
            self.gizmo.cancel_drag(scene);
        }
        // W/E double as fly keys while the right button is held.
        if input.text_input_focused || input.button(MouseButton::Right) {
            return;
        }
        if input.key_pressed("w") {
            self.gizmo.set_mode(GizmoMode::Translate);
        }
        if input.key_pressed("e") {
            self.gizmo.set_mode(GizmoMode::Rotate);
        }
    }

    fn update_2d(&mut self, scene: &mut Scene, input: &FrameInput) -> Option<DragCommit> {
        let screen = input.mouse_position();
        let world = self.cameras.render.screen_to_world(screen);

        if self.gizmo.is_dragging() {
            self.gizmo.update_drag_2d(scene, world);
            if input.button_released(MouseButton::Left) {
                return self.gizmo.end_drag(scene);
            }
            return None;
        }

        let mut gizmo_owns_press = false;
        if let Some(id) = self.selected {
            let hit = self
                .gizmo
                .hit_test_2d(scene, id, world, self.cameras.render.zoom);
            if input.button_pressed(MouseButton::Left) && hit != GizmoAxis::None {
                gizmo_owns_press = self.gizmo.begin_drag_2d(scene, id, world);
            }
        }

        if input.button_pressed(MouseButton::Left) && !gizmo_owns_press {
            self.select(pick_2d(scene, &self.cameras.render, screen));
        }

        if !gizmo_owns_press {
            if input.button(MouseButton::Middle) {
                self.cameras.render.pan(input.mouse_delta());
            }
            self.cameras.render.zoom_by(input.wheel());
        }
        None
    }

    fn update_3d(&mut self, scene: &mut Scene, input: &FrameInput, dt: f64) -> Option<DragCommit> {
        let ray = cursor_ray(&self.camera3d, &self.viewport, input.mouse_position());

        if self.gizmo.is_dragging() {
            self.gizmo.update_drag_3d(scene, &ray);
            if input.button_released(MouseButton::Left) {
                return self.gizmo.end_drag(scene);
            }
            return None;
        }

        let mut gizmo_owns_press = false;
        if let Some(id) = self.selected {
            let hit = self
                .gizmo
                .hit_test_3d(scene, id, &ray, self.camera3d.position);
            if input.button_pressed(MouseButton::Left) && hit != GizmoAxis::None {
                gizmo_owns_press = self.gizmo.begin_drag_3d(scene, id, &ray, self.camera3d.position);
            }
        }

        if !gizmo_owns_press {
            self.controller3d.update(&mut self.camera3d, input, dt);
        }
        None
    }
}
