//! Free-look camera.
//!
//! The viewer keeps one camera looking at the scene origin with +Z up, the
//! way the legacy room scenes are authored. Its position is seeded once from
//! the scene description's `camera.pos` (when present) and afterwards only
//! moves through discrete keyboard deltas.

use cgmath::{Matrix4, Point3, Vector3};

#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub position: Vector3<f32>,
}

impl Camera {
    /// Back five units and up two, the classic starting view for these scenes.
    pub fn default_position() -> Vector3<f32> {
        Vector3::new(0.0, -5.0, 2.0)
    }

    pub fn new(position: Vector3<f32>) -> Self {
        Self { position }
    }

    pub fn translate(&mut self, delta: Vector3<f32>) {
        self.position += delta;
    }

    /// View matrix looking at the origin, Z-up.
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(
            Point3::new(self.position.x, self.position.y, self.position.z),
            Point3::new(0.0, 0.0, 0.0),
            Vector3::unit_z(),
        )
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Self::default_position())
    }
}
