use glam::{Mat4, Vec3};

/// Fixed look-at camera, the base transform for root nodes.
///
/// Matches the setup every original exercise uses: eye position and target
/// with +Y up, a 45 degree vertical field of view, and a 0.1..100.0 depth
/// range.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(4.0, 0.0, 0.0),
            target: Vec3::ZERO,
        }
    }
}

impl Camera {
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    /// The view matrix, used as the base transform for root nodes.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    /// Perspective projection for the given viewport aspect ratio (GL depth
    /// range, matching the WebGL consumer).
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(45.0_f32.to_radians(), aspect, 0.1, 100.0)
    }
}
