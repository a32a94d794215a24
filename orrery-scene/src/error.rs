use thiserror::Error;

/// Errors raised by scene construction and frame evaluation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// A node's parent reference does not point at an earlier node that is
    /// flagged as a parent. Rejected at scene-construction time so a bad
    /// hierarchy never reaches the per-frame loop.
    #[error("node {node} has invalid parent reference {parent}")]
    InvalidParentReference { node: usize, parent: usize },

    /// The camera/base matrix handed to the evaluator contains non-finite
    /// values. Propagated to the caller, never silently corrected.
    #[error("base transform is not a finite 4x4 matrix")]
    InvalidTransform,
}
