//! Common gizmo types: mode, axis, drag snapshot, snapping.

use vantage_math::{Vec2, Vec3};

use crate::scene::{ObjectId, SceneObject};

/// Current gizmo operation mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GizmoMode {
    #[default]
    Translate,
    Rotate,
}

/// Handle associated with a drag for its whole lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GizmoAxis {
    #[default]
    None,
    X,
    Y,
    Z,
    /// Unconstrained handle at the anchor.
    Center,
    /// The single 2D rotation ring.
    Ring,
}

impl GizmoAxis {
    /// World direction for axis handles (also the ring normal in 3D
    /// rotate mode).
    pub fn dir(self) -> Option<Vec3> {
        match self {
            GizmoAxis::X => Some(Vec3::X),
            GizmoAxis::Y => Some(Vec3::Y),
            GizmoAxis::Z => Some(Vec3::Z),
            _ => None,
        }
    }

    pub fn is_axis(self) -> bool {
        matches!(self, GizmoAxis::X | GizmoAxis::Y | GizmoAxis::Z)
    }
}

/// Snap settings for gizmo operations.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct SnapSettings {
    pub enabled: bool,
    /// Translation snap in world units.
    pub translate: f64,
    /// Rotation snap in degrees.
    pub rotate: f64,
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            translate: 0.5,
            rotate: 15.0,
        }
    }
}

impl SnapSettings {
    pub fn translate_step(&self) -> Option<f64> {
        self.enabled.then_some(self.translate)
    }

    pub fn rotate_step_radians(&self) -> Option<f64> {
        self.enabled.then_some(self.rotate.to_radians())
    }
}

/// Round a value to a multiple of `snap` (no-op for non-positive snap).
pub fn snap_value(value: f64, snap: f64) -> f64 {
    if snap > 0.0 {
        (value / snap).round() * snap
    } else {
        value
    }
}

/// Full copy of an object's transform fields, captured at drag start.
///
/// Used both to compute absolute deltas (never incremental updates, so
/// long drags cannot drift) and to restore the object on cancel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransformSnapshot {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub rotation: Option<f64>,
    pub position: Option<Vec3>,
    pub euler: Option<Vec3>,
    pub direction: Option<Vec3>,
    pub target: Option<Vec3>,
}

impl TransformSnapshot {
    pub fn capture(obj: &SceneObject) -> Self {
        Self {
            x: obj.x,
            y: obj.y,
            rotation: obj.rotation,
            position: obj.position,
            euler: obj.euler,
            direction: obj.direction,
            target: obj.target,
        }
    }

    pub fn apply(&self, obj: &mut SceneObject) {
        obj.x = self.x;
        obj.y = self.y;
        obj.rotation = self.rotation;
        obj.position = self.position;
        obj.euler = self.euler;
        obj.direction = self.direction;
        obj.target = self.target;
    }
}

/// How a rotation drag writes back to its target, resolved once at
/// drag start from the fields the object carries. Each variant holds
/// the snapshot the per-frame solve restores before reapplying the
/// accumulated angle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RotateTarget {
    /// 2D scalar rotation.
    Planar { start: f64 },
    /// Euler-angle objects: rotate the stored angles directly.
    Euler { start: Vec3 },
    /// Direction-vector objects (directional lights): rotate and
    /// renormalize the vector.
    Direction { start: Vec3 },
    /// Camera-like objects: rotate the target-position offset about the
    /// anchor and rewrite the target.
    LookAt { start_offset: Vec3 },
}

impl RotateTarget {
    /// Resolve the 3D rotation shape of an object. Euler beats
    /// direction beats look-at when an object carries several.
    pub fn resolve_3d(obj: &SceneObject) -> Option<Self> {
        if let Some(start) = obj.euler {
            return Some(RotateTarget::Euler { start });
        }
        if let Some(start) = obj.direction {
            return Some(RotateTarget::Direction { start });
        }
        if let (Some(position), Some(target)) = (obj.position, obj.target) {
            return Some(RotateTarget::LookAt {
                start_offset: target - position,
            });
        }
        None
    }
}

/// Snapshot-driven state of one drag. Populated at drag start and
/// immutable for the drag's duration; all per-frame deltas are solved
/// against it. Never serialized.
#[derive(Clone, Debug)]
pub struct DragState {
    pub object: ObjectId,
    pub mode: GizmoMode,
    pub axis: GizmoAxis,
    /// Full pre-drag transform, for commits and cancellation.
    pub before: TransformSnapshot,
    /// Anchor position at drag start (3D drags).
    pub start_pos: Vec3,
    /// Mouse world position at drag start (2D drags).
    pub start_mouse_world: Vec2,
    /// Axis parameter at drag start (3D axis translate).
    pub start_axis_t: f64,
    /// Plane hit at drag start (3D center translate).
    pub start_plane_hit: Vec3,
    /// Drag plane normal, frozen for the drag (3D center translate).
    pub plane_normal: Vec3,
    /// Ring angle at drag start (rotate drags).
    pub start_angle: f64,
    /// Rotation write-back shape (rotate drags).
    pub rotate_target: Option<RotateTarget>,
}

impl DragState {
    pub fn new(object: ObjectId, mode: GizmoMode, axis: GizmoAxis, before: TransformSnapshot) -> Self {
        Self {
            object,
            mode,
            axis,
            before,
            start_pos: Vec3::ZERO,
            start_mouse_world: Vec2::ZERO,
            start_axis_t: 0.0,
            start_plane_hit: Vec3::ZERO,
            plane_normal: Vec3::Z,
            start_angle: 0.0,
            rotate_target: None,
        }
    }
}

/// Summary of a finished drag, handed to the host's undo recorder.
#[derive(Clone, Debug)]
pub struct DragCommit {
    pub object: ObjectId,
    pub mode: GizmoMode,
    pub axis: GizmoAxis,
    pub before: TransformSnapshot,
    pub after: TransformSnapshot,
}
