use glam::{Mat4, Vec3};
use std::f32::consts::TAU;

use crate::error::SceneError;
use crate::scene::Scene;

/// Compute world transform matrices for all nodes in the scene, once per
/// animation frame, and advance each node's rotation for the next frame.
///
/// Nodes are evaluated in declaration order, parents before children. A
/// root's base transform is the camera/view matrix; a child's base is its
/// parent's world matrix as computed this frame. Onto the base each node
/// applies, in this exact order: uniform scale, rotation about `spin_axis`
/// (`spin_axis` must be a unit vector), translation. The order is load
/// bearing — reversing it changes the visuals.
///
/// The parent lookup goes through a per-frame accumulator that only nodes
/// flagged `is_parent` enter, and which is discarded when the call returns.
/// Parent entries are copied, never aliased, so siblings composing onto the
/// same parent cannot disturb each other.
///
/// Pure state transform: no GPU or I/O side effects. The returned matrices
/// are handed to a renderer together with each node's geometry.
pub fn evaluate_frame(scene: &mut Scene, camera: &Mat4) -> Result<Vec<Mat4>, SceneError> {
    if !camera.to_cols_array().iter().all(|v| v.is_finite()) {
        return Err(SceneError::InvalidTransform);
    }

    // Scene::new enforces parent-before-child, but the node list is plain
    // data; a reference broken after construction is caught here, before any
    // rotation state mutates, so the error branch leaves the scene intact.
    for (i, node) in scene.nodes.iter().enumerate() {
        if let Some(p) = node.parent_index {
            if p >= i || !scene.nodes[p].is_parent {
                return Err(SceneError::InvalidParentReference { node: i, parent: p });
            }
        }
    }

    let n = scene.nodes.len();
    let mut accumulator: Vec<Option<Mat4>> = vec![None; n];
    let mut worlds = Vec::with_capacity(n);

    for i in 0..n {
        let node = &scene.nodes[i];

        let base = match node.parent_index {
            // Present by the pre-scan above; propagate rather than unwrap
            Some(p) => accumulator
                .get(p)
                .copied()
                .flatten()
                .ok_or(SceneError::InvalidParentReference { node: i, parent: p })?,
            None => *camera,
        };

        let world = base
            * Mat4::from_scale(Vec3::splat(node.local_scale))
            * Mat4::from_axis_angle(node.spin_axis, node.rotation_angle)
            * Mat4::from_translation(node.translation);

        if node.is_parent {
            accumulator[i] = Some(world);
        }
        worlds.push(world);

        let node = &mut scene.nodes[i];
        node.rotation_angle = (node.rotation_angle + node.angular_velocity).rem_euclid(TAU);
    }

    Ok(worlds)
}
