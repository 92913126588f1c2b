//! Math utilities and types
//!
//! Provides the fundamental math types shared by both sides of the bridge.
//! All scalars are `f64`; the tracer's scene format is written with full
//! precision and truncating on the editor side buys nothing.

pub use nalgebra::{Matrix3, Matrix4, Quaternion, Unit, UnitQuaternion, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f64>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f64>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f64>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f64>;

/// Quaternion type for rotations
pub type Quat = UnitQuaternion<f64>;

/// Transform representing position, rotation, and scale
///
/// This is the decomposed form used where the editor target only supports
/// translation + rotation + per-axis scale (area lights), as opposed to the
/// full matrix assignment used for mesh objects.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Convert to a transformation matrix (TRS order)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// Create a transform from a transformation matrix (decompose TRS)
    ///
    /// Scale is read off the column lengths, rotation from the normalized
    /// columns. A sheared matrix cannot be represented exactly in TRS form;
    /// the result is the closest rotation to the normalized basis.
    pub fn from_matrix(matrix: Mat4) -> Self {
        // Extract position
        let position = Vec3::new(matrix.m14, matrix.m24, matrix.m34);

        // Extract scale from the matrix columns
        let scale_x = Vec3::new(matrix.m11, matrix.m21, matrix.m31).magnitude();
        let scale_y = Vec3::new(matrix.m12, matrix.m22, matrix.m32).magnitude();
        let scale_z = Vec3::new(matrix.m13, matrix.m23, matrix.m33).magnitude();
        let scale = Vec3::new(scale_x, scale_y, scale_z);

        // Extract rotation by removing scale from the rotation matrix
        let rotation_matrix = Matrix3::new(
            matrix.m11 / scale_x,
            matrix.m12 / scale_y,
            matrix.m13 / scale_z,
            matrix.m21 / scale_x,
            matrix.m22 / scale_y,
            matrix.m23 / scale_z,
            matrix.m31 / scale_x,
            matrix.m32 / scale_y,
            matrix.m33 / scale_z,
        );
        let rotation = Quat::from_matrix(&rotation_matrix);

        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Apply this transform to a point
    pub fn transform_point(&self, point: Point3) -> Point3 {
        let matrix = self.to_matrix();
        matrix.transform_point(&point)
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f64 = std::f64::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f64 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f64 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f64) -> f64 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f64) -> f64 {
        radians * constants::RAD_TO_DEG
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_transform_identity() {
        let transform = Transform::identity();

        assert_eq!(transform.position, Vec3::zeros());
        assert_eq!(transform.scale, Vec3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(
            transform.to_matrix(),
            Mat4::identity(),
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_transform_matrix_round_trip() {
        let original = Transform {
            position: Vec3::new(1.0, -2.0, 3.5),
            rotation: Quat::from_euler_angles(0.3, -0.7, 1.1),
            scale: Vec3::new(2.0, 0.5, 3.0),
        };

        let recovered = Transform::from_matrix(original.to_matrix());

        assert_relative_eq!(recovered.position, original.position, epsilon = EPSILON);
        assert_relative_eq!(recovered.scale, original.scale, epsilon = 1e-6);
        // Compare rotations by their action, which sidesteps the q/-q ambiguity
        let probe = Vec3::new(1.0, 2.0, 3.0);
        assert_relative_eq!(
            recovered.rotation * probe,
            original.rotation * probe,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_transform_point() {
        let transform = Transform {
            position: Vec3::new(10.0, 0.0, 0.0),
            rotation: Quat::identity(),
            scale: Vec3::new(2.0, 2.0, 2.0),
        };

        let result = transform.transform_point(Point3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(
            result,
            Point3::new(12.0, 2.0, 2.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_angle_conversions() {
        assert_relative_eq!(utils::deg_to_rad(180.0), constants::PI, epsilon = EPSILON);
        assert_relative_eq!(utils::rad_to_deg(constants::PI), 180.0, epsilon = EPSILON);
    }
}
