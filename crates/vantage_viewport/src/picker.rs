//! 2D picking: topmost interactive object under a screen point.
//!
//! 3D picking is delegated to the host's renderer raycast; the gizmo
//! math does not depend on it.

use vantage_math::Vec2;

use crate::camera::Camera2D;
use crate::scene::{ObjectId, Scene};

/// Resolve the topmost 2D object under a screen point.
///
/// Candidates are scanned in depth-first traversal order (parents
/// before children) and must be 2D-shaped. Higher `layer` wins;
/// equal layer, later in traversal wins. Objects that are invisible or
/// inactive are skipped.
pub fn pick_2d(scene: &Scene, camera: &Camera2D, screen: Vec2) -> Option<ObjectId> {
    let world = camera.screen_to_world(screen);

    let mut best: Option<(ObjectId, i32)> = None;
    for id in scene.traversal() {
        let Some(obj) = scene.get(id) else { continue };
        if !obj.visible || !obj.active || !obj.is_rect2d() {
            continue;
        }

        let x = obj.x.unwrap_or(0.0);
        let y = obj.y.unwrap_or(0.0);
        let w = obj.width.unwrap_or(0.0);
        let h = obj.height.unwrap_or(0.0);

        // Rects may have negative sizes; normalize to min/max.
        let (min_x, max_x) = if w >= 0.0 { (x, x + w) } else { (x + w, x) };
        let (min_y, max_y) = if h >= 0.0 { (y, y + h) } else { (y + h, y) };

        if world.x < min_x || world.x > max_x || world.y < min_y || world.y > max_y {
            continue;
        }

        // Later-in-traversal overrides on equal layer.
        match best {
            Some((_, layer)) if obj.layer < layer => {}
            _ => best = Some((id, obj.layer)),
        }
    }

    best.map(|(id, _)| id)
}
