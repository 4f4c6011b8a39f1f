// Copyright 2026 the Tactus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pose operations used to apply a gesture delta about a pivot.

use glam::{EulerRot, Quat, Vec3};

use crate::axes::Axes;
use crate::pose::Pose;

/// Zeroes the components of `v` that are not in `axes`.
#[must_use]
pub fn mask_components(v: Vec3, axes: Axes) -> Vec3 {
    v * axes.to_vec3()
}

/// Rotates `pose` about a world-space `axis` through `pivot`.
///
/// Both the position (orbiting the pivot) and the orientation change. A zero
/// or non-finite `axis` leaves the pose unchanged.
#[must_use]
pub fn rotate_around(pose: Pose, pivot: Vec3, axis: Vec3, angle_degrees: f32) -> Pose {
    let Some(axis) = axis.try_normalize() else {
        return pose;
    };
    let q = Quat::from_axis_angle(axis, angle_degrees.to_radians());
    Pose {
        position: pivot + q * (pose.position - pivot),
        rotation: (q * pose.rotation).normalize(),
        scale: pose.scale,
    }
}

/// Scales `pose` by `factor` about `pivot` on the given axes.
///
/// The local scale and the pivot-to-position offset are both multiplied on
/// masked axes; unmasked components are left as they are.
#[must_use]
pub fn scale_around(pose: Pose, pivot: Vec3, factor: f32, axes: Axes) -> Pose {
    let s = Vec3::ONE + (factor - 1.0) * axes.to_vec3();
    Pose {
        position: pivot + (pose.position - pivot) * s,
        rotation: pose.rotation,
        scale: pose.scale * s,
    }
}

/// Yaw of `rotation` in degrees.
///
/// Decomposes as Y, then X, then Z (the Z-X-Y application order common to
/// left-handed engines), so a pure rotation about world Y reports its angle
/// exactly.
#[must_use]
pub fn yaw_degrees(rotation: Quat) -> f32 {
    let (yaw, _, _) = rotation.to_euler(EulerRot::YXZ);
    yaw.to_degrees()
}

#[cfg(test)]
mod tests {
    use glam::{Quat, Vec3};

    use super::{mask_components, rotate_around, scale_around, yaw_degrees};
    use crate::axes::Axes;
    use crate::pose::Pose;

    #[test]
    fn mask_keeps_only_selected_axes() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(mask_components(v, Axes::HORIZONTAL), Vec3::new(1.0, 0.0, 3.0));
        assert_eq!(mask_components(v, Axes::Y), Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(mask_components(v, Axes::all()), v);
    }

    #[test]
    fn rotate_around_orbits_the_pivot() {
        let pose = Pose::from_position(Vec3::new(2.0, 0.0, 0.0));
        let pivot = Vec3::new(1.0, 0.0, 0.0);

        let rotated = rotate_around(pose, pivot, Vec3::Y, 180.0);

        assert!(rotated.position.abs_diff_eq(Vec3::new(0.0, 0.0, 0.0), 1e-5));
        assert!((rotated.rotation * Vec3::X).abs_diff_eq(-Vec3::X, 1e-5));
        assert_eq!(rotated.scale, pose.scale);
    }

    #[test]
    fn rotate_around_zero_axis_is_a_no_op() {
        let pose = Pose::from_position(Vec3::new(3.0, 1.0, 2.0));
        assert_eq!(rotate_around(pose, Vec3::ZERO, Vec3::ZERO, 90.0), pose);
    }

    #[test]
    fn rotate_around_pivot_on_position_only_turns() {
        let pose = Pose::from_position(Vec3::new(1.0, 2.0, 3.0));
        let rotated = rotate_around(pose, pose.position, Vec3::Y, 45.0);

        assert!(rotated.position.abs_diff_eq(pose.position, 1e-5));
        assert!((yaw_degrees(rotated.rotation) - 45.0).abs() < 1e-3);
    }

    #[test]
    fn scale_around_respects_axis_mask() {
        let pose = Pose::from_position(Vec3::new(2.0, 5.0, 2.0));
        let scaled = scale_around(pose, Vec3::new(0.0, 5.0, 0.0), 3.0, Axes::HORIZONTAL);

        assert!(scaled.position.abs_diff_eq(Vec3::new(6.0, 5.0, 6.0), 1e-5));
        assert!(scaled.scale.abs_diff_eq(Vec3::new(3.0, 1.0, 3.0), 1e-6));
    }

    #[test]
    fn scale_around_identity_factor_is_a_no_op() {
        let pose = Pose::from_position(Vec3::new(2.0, 5.0, 2.0)).with_scale(Vec3::splat(1.5));
        let scaled = scale_around(pose, Vec3::ZERO, 1.0, Axes::all());
        assert_eq!(scaled, pose);
    }

    #[test]
    fn yaw_of_pure_y_rotation() {
        let q = Quat::from_rotation_y(30_f32.to_radians());
        assert!((yaw_degrees(q) - 30.0).abs() < 1e-3);
        assert!(yaw_degrees(Quat::IDENTITY).abs() < 1e-6);
    }
}
