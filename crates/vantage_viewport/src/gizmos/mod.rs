//! Transform gizmos for the interactive viewport.

pub mod gizmo;
pub mod rotate;
pub mod translate;

pub use gizmo::{
    snap_value, DragCommit, DragState, GizmoAxis, GizmoMode, RotateTarget, SnapSettings,
    TransformSnapshot,
};
