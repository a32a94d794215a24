use glam::Vec3;

use crate::error::SceneError;
use crate::geometry::Geometry;

/// One animated, drawable scene object.
///
/// The local transform is uniform scale, a rotation about `spin_axis`, and a
/// translation expressed in the parent's local frame, applied in exactly that
/// order. `rotation_angle` is the only field that mutates after construction;
/// the evaluator advances it by `angular_velocity` once per frame.
#[derive(Debug)]
pub struct Node {
    pub name: String,
    pub local_scale: f32,
    pub rotation_angle: f32,
    pub angular_velocity: f32,
    pub spin_axis: Vec3,
    pub translation: Vec3,
    /// Whether this node's world transform is retained for children this frame.
    pub is_parent: bool,
    /// Index of the parent in declaration order; `None` means root (the
    /// camera/view matrix is the base transform).
    pub parent_index: Option<usize>,
    pub geometry: Geometry,
}

impl Node {
    /// A root node with an identity local transform and no geometry.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            local_scale: 1.0,
            rotation_angle: 0.0,
            angular_velocity: 0.0,
            spin_axis: Vec3::Y,
            translation: Vec3::ZERO,
            is_parent: false,
            parent_index: None,
            geometry: Geometry::default(),
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.local_scale = scale;
        self
    }

    pub fn with_rotation(mut self, angle: f32, velocity: f32) -> Self {
        self.rotation_angle = angle;
        self.angular_velocity = velocity;
        self
    }

    /// Set the rotation axis. Normalized here so the evaluator always sees
    /// a unit axis; a zero vector falls back to +Y.
    pub fn with_spin_axis(mut self, axis: Vec3) -> Self {
        self.spin_axis = axis.normalize_or(Vec3::Y);
        self
    }

    pub fn with_translation(mut self, translation: Vec3) -> Self {
        self.translation = translation;
        self
    }

    pub fn as_parent(mut self) -> Self {
        self.is_parent = true;
        self
    }

    pub fn with_parent(mut self, index: usize) -> Self {
        self.parent_index = Some(index);
        self
    }

    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }
}

/// An ordered, parent-before-child list of nodes.
///
/// Construction validates the hierarchy once, before any frame runs: every
/// `parent_index` must point strictly before the node itself and at a node
/// flagged `is_parent`. A malformed scene is rejected here rather than
/// producing wrong visuals mid-frame.
#[derive(Debug)]
pub struct Scene {
    pub nodes: Vec<Node>,
}

impl Scene {
    pub fn new(nodes: Vec<Node>) -> Result<Self, SceneError> {
        for (i, node) in nodes.iter().enumerate() {
            if let Some(p) = node.parent_index {
                if p >= i || !nodes[p].is_parent {
                    return Err(SceneError::InvalidParentReference { node: i, parent: p });
                }
            }
        }
        log::debug!("scene validated: {} nodes", nodes.len());
        Ok(Self { nodes })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parent_node(name: &str) -> Node {
        Node::new(name).as_parent()
    }

    #[test]
    fn test_empty_scene() {
        let scene = Scene::new(Vec::new()).unwrap();
        assert!(scene.is_empty());
    }

    #[test]
    fn test_valid_hierarchy() {
        let nodes = vec![
            parent_node("sun"),
            parent_node("planet").with_parent(0),
            Node::new("moon").with_parent(1),
        ];
        let scene = Scene::new(nodes).unwrap();
        assert_eq!(scene.len(), 3);
    }

    #[test]
    fn test_forward_reference_rejected() {
        let nodes = vec![
            Node::new("moon").with_parent(1),
            parent_node("planet"),
        ];
        let err = Scene::new(nodes).unwrap_err();
        assert_eq!(err, SceneError::InvalidParentReference { node: 0, parent: 1 });
    }

    #[test]
    fn test_self_reference_rejected() {
        let nodes = vec![parent_node("ouroboros").with_parent(0)];
        let err = Scene::new(nodes).unwrap_err();
        assert_eq!(err, SceneError::InvalidParentReference { node: 0, parent: 0 });
    }

    #[test]
    fn test_out_of_range_parent_rejected() {
        let nodes = vec![parent_node("sun"), Node::new("lost").with_parent(7)];
        let err = Scene::new(nodes).unwrap_err();
        assert_eq!(err, SceneError::InvalidParentReference { node: 1, parent: 7 });
    }

    #[test]
    fn test_scene_and_node_are_debug_printable() {
        // unwrap_err and assert diagnostics rely on these formats
        let scene = Scene::new(vec![parent_node("sun")]).unwrap();
        assert!(format!("{:?}", scene).contains("sun"));
        assert!(format!("{:?}", scene.nodes[0]).contains("sun"));
    }

    #[test]
    fn test_spin_axis_normalized_by_builder() {
        let stretched = Node::new("a").with_spin_axis(Vec3::new(0.0, 2.0, 0.0));
        assert!((stretched.spin_axis - Vec3::Y).length() < 1e-6);

        let skewed = Node::new("b").with_spin_axis(Vec3::new(3.0, 0.0, 4.0));
        assert!((skewed.spin_axis.length() - 1.0).abs() < 1e-6);

        let degenerate = Node::new("c").with_spin_axis(Vec3::ZERO);
        assert_eq!(degenerate.spin_axis, Vec3::Y);
    }

    #[test]
    fn test_non_parent_reference_rejected() {
        // "sun" never enters the accumulator, so "planet" may not point at it
        let nodes = vec![Node::new("sun"), Node::new("planet").with_parent(0)];
        let err = Scene::new(nodes).unwrap_err();
        assert_eq!(err, SceneError::InvalidParentReference { node: 1, parent: 0 });
    }
}
