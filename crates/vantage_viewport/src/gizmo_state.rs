//! Gizmo controller: mode, hover, and drag lifecycle.
//!
//! The controller owns the active drag. While a drag is live the gizmo
//! owns the pointer; mode switches are deferred and camera navigation
//! stays out of the way.

use vantage_math::{Ray, Vec2, Vec3};

use crate::gizmos::{rotate, translate};
use crate::gizmos::{DragCommit, DragState, GizmoAxis, GizmoMode, SnapSettings, TransformSnapshot};
use crate::scene::{ObjectId, Scene};

#[derive(Debug, Default)]
pub struct GizmoController {
    mode: GizmoMode,
    pub snap: SnapSettings,
    hovered: GizmoAxis,
    drag: Option<DragState>,
}

impl GizmoController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> GizmoMode {
        self.mode
    }

    /// Switch gizmo mode. Ignored while a drag is in flight so the
    /// active solve never changes meaning mid-gesture.
    pub fn set_mode(&mut self, mode: GizmoMode) {
        if self.drag.is_some() {
            return;
        }
        if self.mode != mode {
            self.mode = mode;
            self.hovered = GizmoAxis::None;
        }
    }

    pub fn hovered(&self) -> GizmoAxis {
        self.hovered
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Update hover against the 2D handles of the current mode.
    pub fn hit_test_2d(&mut self, scene: &Scene, id: ObjectId, world_mouse: Vec2, zoom: f64) -> GizmoAxis {
        self.hovered = match scene.get(id) {
            Some(obj) => match self.mode {
                GizmoMode::Translate => translate::hit_test_2d(obj, world_mouse, zoom),
                GizmoMode::Rotate => rotate::hit_test_2d(obj, world_mouse, zoom),
            },
            None => GizmoAxis::None,
        };
        self.hovered
    }

    /// Update hover against the 3D handles of the current mode.
    pub fn hit_test_3d(&mut self, scene: &Scene, id: ObjectId, ray: &Ray, cam_pos: Vec3) -> GizmoAxis {
        self.hovered = match scene.get(id) {
            Some(obj) => match self.mode {
                GizmoMode::Translate => translate::hit_test_3d(obj, ray, cam_pos),
                GizmoMode::Rotate => rotate::hit_test_3d(obj, ray),
            },
            None => GizmoAxis::None,
        };
        self.hovered
    }

    /// Begin a 2D drag on the hovered handle. Returns false when no
    /// handle is hovered or the object is gone.
    pub fn begin_drag_2d(&mut self, scene: &Scene, id: ObjectId, world_mouse: Vec2) -> bool {
        if self.hovered == GizmoAxis::None || self.drag.is_some() {
            return false;
        }
        let Some(obj) = scene.get(id) else {
            return false;
        };
        let mut drag = DragState::new(id, self.mode, self.hovered, TransformSnapshot::capture(obj));
        let ok = match self.mode {
            GizmoMode::Translate => {
                translate::begin_2d(&mut drag, world_mouse);
                true
            }
            GizmoMode::Rotate => rotate::begin_2d(&mut drag, world_mouse),
        };
        if ok {
            log::debug!("begin {:?} drag on {} ({:?})", self.mode, id, self.hovered);
            self.drag = Some(drag);
        }
        ok
    }

    /// Begin a 3D drag on the hovered handle. Returns false when the
    /// start solve is degenerate; nothing changes in that case.
    pub fn begin_drag_3d(&mut self, scene: &Scene, id: ObjectId, ray: &Ray, cam_pos: Vec3) -> bool {
        if self.hovered == GizmoAxis::None || self.drag.is_some() {
            return false;
        }
        let Some(obj) = scene.get(id) else {
            return false;
        };
        let mut drag = DragState::new(id, self.mode, self.hovered, TransformSnapshot::capture(obj));
        let ok = match self.mode {
            GizmoMode::Translate => translate::begin_3d(&mut drag, ray, cam_pos),
            GizmoMode::Rotate => rotate::begin_3d(&mut drag, obj, ray),
        };
        if ok {
            log::debug!("begin {:?} drag on {} ({:?})", self.mode, id, self.hovered);
            self.drag = Some(drag);
        } else {
            log::debug!("degenerate {:?} drag start on {} rejected", self.mode, id);
        }
        ok
    }

    fn snap_step(&self) -> Option<f64> {
        match self.mode {
            GizmoMode::Translate => self.snap.translate_step(),
            GizmoMode::Rotate => self.snap.rotate_step_radians(),
        }
    }

    /// Drive the active 2D drag with the current mouse world position.
    pub fn update_drag_2d(&self, scene: &mut Scene, world_mouse: Vec2) {
        let Some(drag) = &self.drag else { return };
        let Some(obj) = scene.get_mut(drag.object) else {
            return;
        };
        match drag.mode {
            GizmoMode::Translate => translate::update_2d(drag, obj, world_mouse, self.snap_step()),
            GizmoMode::Rotate => rotate::update_2d(drag, obj, world_mouse, self.snap_step()),
        }
    }

    /// Drive the active 3D drag with the current cursor ray.
    pub fn update_drag_3d(&self, scene: &mut Scene, ray: &Ray) {
        let Some(drag) = &self.drag else { return };
        let Some(obj) = scene.get_mut(drag.object) else {
            return;
        };
        match drag.mode {
            GizmoMode::Translate => translate::update_3d(drag, obj, ray, self.snap_step()),
            GizmoMode::Rotate => rotate::update_3d(drag, obj, ray, self.snap_step()),
        }
    }

    /// Finish the active drag and report the before/after pair for undo
    /// history. None when nothing was dragging or the object vanished.
    pub fn end_drag(&mut self, scene: &Scene) -> Option<DragCommit> {
        let drag = self.drag.take()?;
        let obj = scene.get(drag.object)?;
        let commit = DragCommit {
            object: drag.object,
            mode: drag.mode,
            axis: drag.axis,
            before: drag.before,
            after: TransformSnapshot::capture(obj),
        };
        log::debug!("end {:?} drag on {}", commit.mode, commit.object);
        Some(commit)
    }

    /// Abort the active drag and put the object back exactly where the
    /// drag found it.
    pub fn cancel_drag(&mut self, scene: &mut Scene) {
        let Some(drag) = self.drag.take() else { return };
        if let Some(obj) = scene.get_mut(drag.object) {
            drag.before.apply(obj);
        }
        log::debug!("cancel {:?} drag on {}", drag.mode, drag.object);
    }

    /// Drop hover and any in-flight drag without touching the scene.
    /// Used when the selection changes or the object is deleted.
    pub fn reset(&mut self) {
        self.hovered = GizmoAxis::None;
        self.drag = None;
    }
}
