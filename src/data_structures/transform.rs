//! Per-node transformation data.
//!
//! Every scene node carries one [`Transform`]: a translation, a set of Euler
//! rotation angles in degrees, and a per-axis scale. The composition order is
//! fixed and load-bearing (see [`Transform::to_matrix`]): the scene data
//! encodes its rotations assuming that exact order.

use cgmath::{Deg, Matrix4};

/// A local transform: position, Euler rotation (degrees) and scale.
///
/// Rotation angles are kept as plain degrees rather than quaternions because
/// the viewer edits and animates individual axis angles in place (e.g. a
/// clock hand accumulating `rz` every tick).
#[derive(Clone, Debug, PartialEq)]
pub struct Transform {
    pub position: cgmath::Vector3<f32>,
    pub rotation: cgmath::Vector3<f32>,
    pub scale: cgmath::Vector3<f32>,
}

impl Transform {
    /// Create a new transform with identity values (no move, rotate, or scale).
    pub fn new() -> Self {
        Self {
            position: cgmath::Vector3::new(0.0, 0.0, 0.0),
            rotation: cgmath::Vector3::new(0.0, 0.0, 0.0),
            scale: cgmath::Vector3::new(1.0, 1.0, 1.0),
        }
    }

    /// Build the local matrix as `T * Rz * Ry * Rx * S`.
    ///
    /// Applied to a local-space vertex this scales first, then rotates about
    /// X, then Y, then Z, then translates. The order is not commutative and
    /// must not change: the numeric scene data assumes it.
    pub fn to_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position)
            * Matrix4::from_angle_z(Deg(self.rotation.z))
            * Matrix4::from_angle_y(Deg(self.rotation.y))
            * Matrix4::from_angle_x(Deg(self.rotation.x))
            * Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl From<cgmath::Vector3<f32>> for Transform {
    fn from(position: cgmath::Vector3<f32>) -> Self {
        Transform {
            position,
            ..Default::default()
        }
    }
}
