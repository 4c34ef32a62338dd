//! Minimal scene model the viewport core reads and writes.
//!
//! The real scene graph lives in the host; this mirrors the contract
//! the interaction code relies on: positionable objects with optional
//! 2D rect, 3D position, rotation and look-target fields. Which fields
//! an object carries decides how the gizmo manipulates it.

use std::collections::HashMap;

use vantage_math::{Vec2, Vec3};

/// Object identifier within a scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjectId(pub u32);

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Object({})", self.0)
    }
}

/// A scene object with the transform fields the viewport manipulates.
///
/// Fields are optional because authored objects are heterogeneous:
/// sprites carry a 2D rect, lights carry a direction vector, cameras
/// carry a position/target pair.
#[derive(Clone, Debug)]
pub struct SceneObject {
    pub id: ObjectId,
    pub name: String,
    pub parent: Option<ObjectId>,

    // 2D shape (sprites, UI rects)
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// 2D rotation in radians.
    pub rotation: Option<f64>,
    pub layer: i32,

    // 3D shape
    pub position: Option<Vec3>,
    /// Euler rotation (radians) for mesh-like objects.
    pub euler: Option<Vec3>,
    /// Unit direction for light-like objects.
    pub direction: Option<Vec3>,
    /// Look target for camera-like objects.
    pub target: Option<Vec3>,

    pub visible: bool,
    pub active: bool,
}

impl SceneObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ObjectId(0),
            name: name.into(),
            parent: None,
            x: None,
            y: None,
            width: None,
            height: None,
            rotation: None,
            layer: 0,
            position: None,
            euler: None,
            direction: None,
            target: None,
            visible: true,
            active: true,
        }
    }

    pub fn with_rect(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = Some(rotation);
        self
    }

    pub fn with_layer(mut self, layer: i32) -> Self {
        self.layer = layer;
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_euler(mut self, euler: Vec3) -> Self {
        self.euler = Some(euler);
        self
    }

    pub fn with_direction(mut self, direction: Vec3) -> Self {
        self.direction = Some(direction.normalize());
        self
    }

    pub fn with_target(mut self, target: Vec3) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_parent(mut self, parent: ObjectId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// 2D-shaped: has a numeric x, y, width and height.
    pub fn is_rect2d(&self) -> bool {
        self.x.is_some() && self.y.is_some() && self.width.is_some() && self.height.is_some()
    }

    /// Camera-like: position and look target move together so a
    /// translate preserves the look direction.
    pub fn is_camera_like(&self) -> bool {
        self.position.is_some() && self.target.is_some()
    }

    /// 2D anchor point.
    pub fn anchor_2d(&self) -> Option<Vec2> {
        Some(Vec2::new(self.x?, self.y?))
    }

    /// 3D anchor point (gizmo origin).
    pub fn anchor_3d(&self) -> Option<Vec3> {
        self.position
    }
}

/// Flat scene container preserving authoring order.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    objects: HashMap<u32, SceneObject>,
    /// Insertion order; traversal derives from it.
    order: Vec<ObjectId>,
    next_id: u32,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object, assigning its id.
    pub fn spawn(&mut self, mut object: SceneObject) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        object.id = id;
        self.objects.insert(id.0, object);
        self.order.push(id);
        id
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(&id.0)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.get_mut(&id.0)
    }

    /// Remove an object. Children stay in the scene with a dangling
    /// parent; traversal treats them as orphans and skips them.
    pub fn remove(&mut self, id: ObjectId) -> Option<SceneObject> {
        let removed = self.objects.remove(&id.0)?;
        self.order.retain(|&o| o != id);
        Some(removed)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Depth-first traversal order, parents before children. Roots and
    /// siblings keep authoring order.
    pub fn traversal(&self) -> Vec<ObjectId> {
        let mut out = Vec::with_capacity(self.order.len());
        for &id in &self.order {
            let is_root = self
                .objects
                .get(&id.0)
                .map(|o| o.parent.is_none())
                .unwrap_or(false);
            if is_root {
                self.push_subtree(id, &mut out);
            }
        }
        out
    }

    fn push_subtree(&self, id: ObjectId, out: &mut Vec<ObjectId>) {
        out.push(id);
        for &child in &self.order {
            if self.objects.get(&child.0).and_then(|o| o.parent) == Some(id) {
                self.push_subtree(child, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traversal_parents_before_children() {
        let mut scene = Scene::new();
        let a = scene.spawn(SceneObject::new("a"));
        let b = scene.spawn(SceneObject::new("b"));
        let a1 = scene.spawn(SceneObject::new("a1").with_parent(a));
        let a2 = scene.spawn(SceneObject::new("a2").with_parent(a));

        assert_eq!(scene.traversal(), vec![a, a1, a2, b]);
    }

    #[test]
    fn test_rect2d_predicate() {
        let full = SceneObject::new("sprite").with_rect(0.0, 0.0, 10.0, 10.0);
        assert!(full.is_rect2d());

        let mut partial = SceneObject::new("odd");
        partial.x = Some(1.0);
        partial.y = Some(2.0);
        assert!(!partial.is_rect2d());
    }

    #[test]
    fn test_direction_normalized_on_build() {
        let light = SceneObject::new("light").with_direction(Vec3::new(0.0, -2.0, 0.0));
        assert!((light.direction.unwrap().length() - 1.0).abs() < 1e-12);
    }
}
