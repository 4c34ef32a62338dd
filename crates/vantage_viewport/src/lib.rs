//! Interactive viewport core for the scene editor.
//!
//! Hosts the per-frame interaction loop that routes pointer and key
//! input between camera navigation, object picking, and transform
//! gizmos, for both the 2D and the 3D view. Rendering lives elsewhere;
//! this crate only decides what the input means and mutates the scene
//! accordingly.

pub mod camera;
pub mod gizmo_state;
pub mod gizmos;
pub mod input;
pub mod interaction;
pub mod picker;
pub mod preferences;
pub mod scene;
pub mod viewport;

pub use camera::{cursor_ray, ActiveCameraSet, Camera2D, Camera3D, Camera3DController};
pub use gizmo_state::GizmoController;
pub use gizmos::{DragCommit, GizmoAxis, GizmoMode, SnapSettings};
pub use input::{FrameInput, MouseButton};
pub use interaction::{ViewMode, ViewportInteraction};
pub use picker::pick_2d;
pub use preferences::{PreferencesError, ViewportPreferences};
pub use scene::{ObjectId, Scene, SceneObject};
pub use viewport::{Viewport, ViewportRect};
