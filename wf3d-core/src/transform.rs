/// Rotation matrices and rotation state
use nalgebra::DMatrix;

/// Accumulated rotation around three axes (in radians).
///
/// Angles are never wrapped; sine and cosine take care of periodicity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationState {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl RotationState {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Rotate by delta amounts (in radians)
    pub fn rotate(&mut self, dx: f64, dy: f64, dz: f64) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }
}

/// Builders for the 3×3 matrices used by the projection
pub struct Transform;

impl Transform {
    /// Rotation of the Y/Z plane about the X axis
    pub fn rotation_x(angle: f64) -> DMatrix<f64> {
        let (s, c) = angle.sin_cos();
        DMatrix::from_row_slice(3, 3, &[1.0, 0.0, 0.0, 0.0, c, -s, 0.0, s, c])
    }

    /// Rotation of the X/Z plane about the Y axis
    pub fn rotation_y(angle: f64) -> DMatrix<f64> {
        let (s, c) = angle.sin_cos();
        DMatrix::from_row_slice(3, 3, &[c, 0.0, s, 0.0, 1.0, 0.0, -s, 0.0, c])
    }

    /// Rotation of the X/Y plane about the Z axis
    pub fn rotation_z(angle: f64) -> DMatrix<f64> {
        let (s, c) = angle.sin_cos();
        DMatrix::from_row_slice(3, 3, &[c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0])
    }

    /// Orthographic projection onto the X/Y plane: z is dropped
    pub fn orthographic() -> DMatrix<f64> {
        DMatrix::from_row_slice(3, 3, &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::multiply;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    /// Single matrix equivalent to applying X, then Y, then Z rotations
    fn rotation_matrix(rotation: &RotationState) -> DMatrix<f64> {
        let rx = Transform::rotation_x(rotation.x);
        let ry = Transform::rotation_y(rotation.y);
        let rz = Transform::rotation_z(rotation.z);

        multiply(&rz, &multiply(&ry, &rx))
    }

    #[test]
    fn test_rotation_state() {
        let mut state = RotationState::zero();
        assert_eq!(state, RotationState::new(0.0, 0.0, 0.0));

        state.rotate(0.1, 0.2, 0.3);
        state.rotate(0.1, 0.0, 0.0);
        assert_abs_diff_eq!(state.x, 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(state.y, 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(state.z, 0.3, epsilon = 1e-12);
    }

    #[test]
    fn test_identity_rotation() {
        let matrix = rotation_matrix(&RotationState::zero());
        assert_abs_diff_eq!(matrix, DMatrix::identity(3, 3), epsilon = 1e-12);
    }

    #[test]
    fn test_quarter_turns_are_right_handed() {
        let x_axis = DMatrix::from_column_slice(3, 1, &[1.0, 0.0, 0.0]);
        let y_axis = DMatrix::from_column_slice(3, 1, &[0.0, 1.0, 0.0]);
        let z_axis = DMatrix::from_column_slice(3, 1, &[0.0, 0.0, 1.0]);

        // X: y -> z, Y: z -> x, Z: x -> y
        assert_abs_diff_eq!(
            multiply(&Transform::rotation_x(FRAC_PI_2), &y_axis),
            z_axis,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            multiply(&Transform::rotation_y(FRAC_PI_2), &z_axis),
            x_axis,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            multiply(&Transform::rotation_z(FRAC_PI_2), &x_axis),
            y_axis,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_rotation_order_matters() {
        let rotation = RotationState::new(FRAC_PI_2, FRAC_PI_2, 0.0);
        let composed = rotation_matrix(&rotation);
        let reversed = multiply(
            &Transform::rotation_x(rotation.x),
            &Transform::rotation_y(rotation.y),
        );
        assert!((composed - reversed).norm() > 1e-3);
    }

    #[test]
    fn test_orthographic_drops_z() {
        let v = DMatrix::from_column_slice(3, 1, &[2.0, -3.0, 7.0]);
        let p = multiply(&Transform::orthographic(), &v);
        assert_eq!(p, DMatrix::from_column_slice(3, 1, &[2.0, -3.0, 0.0]));
    }
}
