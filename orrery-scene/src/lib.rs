//! Orrery scene library.
//!
//! Holds the declarative scene model (nodes with local transforms and owned
//! geometry), the per-frame world-transform evaluator, camera math, and the
//! shape tessellators used by the demo scenes. Pure computation: no GPU or
//! browser types leak in here, so everything is testable natively. The web
//! runtime and CLI consume this crate and hand the results to a renderer.

mod camera;
mod error;
mod geometry;
mod scene;
mod scenes;
mod transform;

pub use camera::Camera;
pub use error::SceneError;
pub use geometry::{circle, cube, face_normals, pyramid, triangle, uv_sphere, Geometry};
pub use scene::{Node, Scene};
pub use scenes::{solar_system, spinning_pyramid};
pub use transform::evaluate_frame;
