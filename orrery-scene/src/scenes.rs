//! Preset scenes, the original classroom exercises restated as data.

use glam::Vec3;

use crate::camera::Camera;
use crate::error::SceneError;
use crate::geometry::{pyramid, uv_sphere};
use crate::scene::{Node, Scene};

const YELLOW: [f32; 4] = [1.0, 0.85, 0.2, 1.0];
const BLUE: [f32; 4] = [0.2, 0.45, 1.0, 1.0];
const RUST: [f32; 4] = [0.85, 0.4, 0.2, 1.0];
const GRAY: [f32; 4] = [0.7, 0.7, 0.7, 1.0];

/// Toy solar system: a spinning sun, two planets orbiting it, and a moon
/// orbiting the first planet. Depth-3 hierarchy with siblings sharing the
/// sun as parent.
///
/// Orbital motion falls out of the transform order: each body's own rotation
/// is applied before its translation, so advancing the angle swings the
/// translation around the parent.
pub fn solar_system() -> Result<(Scene, Camera), SceneError> {
    let nodes = vec![
        Node::new("sun")
            .as_parent()
            .with_rotation(0.0, 0.002)
            .with_geometry(uv_sphere(16, 24, 0.6, YELLOW)),
        Node::new("planet")
            .as_parent()
            .with_parent(0)
            .with_scale(0.45)
            .with_rotation(0.0, 0.01)
            .with_translation(Vec3::new(4.8, 0.0, 0.0))
            .with_geometry(uv_sphere(12, 18, 0.5, BLUE)),
        Node::new("moon")
            .with_parent(1)
            .with_scale(0.4)
            .with_rotation(0.0, 0.04)
            .with_translation(Vec3::new(1.6, 0.0, 0.0))
            .with_geometry(uv_sphere(8, 12, 0.5, GRAY)),
        Node::new("outer-planet")
            .with_parent(0)
            .with_scale(0.3)
            .with_rotation(1.7, 0.004)
            .with_translation(Vec3::new(8.5, 0.0, 0.0))
            .with_geometry(uv_sphere(12, 18, 0.5, RUST)),
    ];

    let scene = Scene::new(nodes)?;
    let camera = Camera::new(Vec3::new(0.0, 4.0, 9.0), Vec3::ZERO);
    Ok((scene, camera))
}

/// Single lit pyramid spinning about +Y, the `eas` exercise: camera at
/// (4, 0, 0) looking at the origin, 0.01 rad per frame.
pub fn spinning_pyramid() -> Result<(Scene, Camera), SceneError> {
    let nodes = vec![Node::new("pyramid")
        .with_rotation(0.0, 0.01)
        .with_geometry(pyramid([1.0, 0.38, 0.31, 1.0]))];

    let scene = Scene::new(nodes)?;
    let camera = Camera::new(Vec3::new(4.0, 0.0, 0.0), Vec3::ZERO);
    Ok((scene, camera))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::evaluate_frame;

    #[test]
    fn test_solar_system_is_valid_and_evaluates() {
        let (mut scene, camera) = solar_system().unwrap();
        assert_eq!(scene.len(), 4);
        let worlds = evaluate_frame(&mut scene, &camera.view_matrix()).unwrap();
        assert_eq!(worlds.len(), 4);
        for w in &worlds {
            assert!(w.to_cols_array().iter().all(|v| v.is_finite()));
        }
    }

    #[test]
    fn test_solar_system_orbits_move_over_time() {
        let (mut scene, camera) = solar_system().unwrap();
        let view = camera.view_matrix();

        let first = evaluate_frame(&mut scene, &view).unwrap();
        for _ in 0..50 {
            evaluate_frame(&mut scene, &view).unwrap();
        }
        let later = evaluate_frame(&mut scene, &view).unwrap();

        // The moon has the fastest angular velocity; it must have moved
        let moon_then = first[2].transform_point3(glam::Vec3::ZERO);
        let moon_now = later[2].transform_point3(glam::Vec3::ZERO);
        assert!((moon_now - moon_then).length() > 0.01);
    }

    #[test]
    fn test_spinning_pyramid_keeps_origin_fixed() {
        let (mut scene, camera) = spinning_pyramid().unwrap();
        let view = camera.view_matrix();

        let first = evaluate_frame(&mut scene, &view).unwrap();
        for _ in 0..30 {
            evaluate_frame(&mut scene, &view).unwrap();
        }
        let later = evaluate_frame(&mut scene, &view).unwrap();

        // No translation: the pyramid spins in place
        let then = first[0].transform_point3(glam::Vec3::ZERO);
        let now = later[0].transform_point3(glam::Vec3::ZERO);
        assert!((now - then).length() < 1e-4);
        // But the orientation changed
        let tip_then = first[0].transform_point3(glam::Vec3::new(1.0, 0.0, 0.0));
        let tip_now = later[0].transform_point3(glam::Vec3::new(1.0, 0.0, 0.0));
        assert!((tip_now - tip_then).length() > 0.01);
    }
}
