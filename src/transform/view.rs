//! View transforms.

use crate::{matrix::Matrix4, vector::Vector3};

impl Matrix4 {
    /// Creates a right-handed view matrix for a camera at `eye` looking at
    /// `target`, with `up` giving the approximate upward direction.
    ///
    /// The camera looks down its local negative z-axis. The rows of the
    /// rotation part are the camera's right, up and backward directions, and
    /// the last column holds `-eye` expressed in that basis.
    ///
    /// The result is non-finite if `eye` equals `target` or `up` is parallel
    /// to the viewing direction.
    pub fn look_at(eye: &Vector3, target: &Vector3, up: &Vector3) -> Self {
        let backward = (eye - target).normalized();
        let right = up.cross(&backward).normalized();
        let up = backward.cross(&right);

        Self::from_cells([
            right.x(),
            up.x(),
            backward.x(),
            0.0,
            right.y(),
            up.y(),
            backward.y(),
            0.0,
            right.z(),
            up.z(),
            backward.z(),
            0.0,
            -right.dot(eye),
            -up.dot(eye),
            -backward.dot(eye),
            1.0,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn look_at_matches_glam() {
        let eye = Vector3::new(3.0, 4.0, 5.0);
        let target = Vector3::new(-1.0, 0.5, 2.0);
        let up = Vector3::unit_y();
        let expected = glam::Mat4::look_at_rh(eye.into(), target.into(), up.into());
        assert_abs_diff_eq!(
            Matrix4::look_at(&eye, &target, &up),
            Matrix4::from(expected),
            epsilon = EPSILON
        );
    }

    #[test]
    fn look_at_moves_eye_to_origin_and_target_down_negative_z() {
        let eye = Vector3::new(1.0, 2.0, 3.0);
        let target = Vector3::new(1.0, 2.0, -7.0);
        let view = Matrix4::look_at(&eye, &target, &Vector3::unit_y());

        assert_abs_diff_eq!(view.transform_point(&eye), Vector3::zeros(), epsilon = EPSILON);
        assert_abs_diff_eq!(
            view.transform_point(&target),
            Vector3::new(0.0, 0.0, -10.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn look_at_from_positive_z_toward_origin_is_translation() {
        let view = Matrix4::look_at(
            &Vector3::new(0.0, 0.0, 5.0),
            &Vector3::zeros(),
            &Vector3::unit_y(),
        );
        assert_abs_diff_eq!(
            view,
            Matrix4::translation(0.0, 0.0, -5.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn look_at_rotation_part_is_orthonormal() {
        let view = Matrix4::look_at(
            &Vector3::new(-2.0, 7.0, 1.0),
            &Vector3::new(0.5, 0.0, -3.0),
            &Vector3::new(0.1, 1.0, 0.0),
        );
        let mut rotation = view;
        rotation.set_column(3, crate::vector::Vector4::unit_w());
        assert_abs_diff_eq!(
            rotation * rotation.transposed(),
            Matrix4::identity(),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(rotation.determinant(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn look_at_with_coincident_eye_and_target_is_non_finite() {
        let p = Vector3::new(1.0, 1.0, 1.0);
        assert!(!Matrix4::look_at(&p, &p, &Vector3::unit_y()).is_finite());
    }
}
