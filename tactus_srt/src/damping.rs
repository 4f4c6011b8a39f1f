// Copyright 2026 the Tactus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame-rate aware smoothing of a delta toward its target.

use crate::gesture::SrtDelta;

/// Interpolation factor for one frame of `elapsed` seconds.
///
/// This is `elapsed / damping_speed` clamped to `[0, 1]`: a larger damping
/// speed converges more slowly, and a frame at least as long as the damping
/// speed snaps straight to the target. A non-positive or non-finite damping
/// speed also snaps.
#[must_use]
pub fn damping_factor(elapsed: f32, damping_speed: f32) -> f32 {
    if !damping_speed.is_finite() || damping_speed <= 0.0 {
        return 1.0;
    }
    let t = elapsed / damping_speed;
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

/// Moves `current` a fraction `t` of the way toward `target`.
///
/// Translation and scale are interpolated linearly; rotation takes the
/// normalized shortest-path interpolation.
#[must_use]
pub fn smooth(current: SrtDelta, target: SrtDelta, t: f32) -> SrtDelta {
    SrtDelta {
        translation: current.translation.lerp(target.translation, t),
        rotation: current.rotation.lerp(target.rotation, t),
        scale: current.scale + (target.scale - current.scale) * t,
    }
}

#[cfg(test)]
mod tests {
    use glam::{Quat, Vec3};

    use super::{damping_factor, smooth};
    use crate::gesture::SrtDelta;

    #[test]
    fn factor_is_elapsed_over_speed() {
        assert!((damping_factor(0.01, 0.05) - 0.2).abs() < 1e-6);
    }

    #[test]
    fn factor_is_clamped() {
        assert_eq!(damping_factor(1.0, 0.05), 1.0);
        assert_eq!(damping_factor(-1.0, 0.05), 0.0);
        assert_eq!(damping_factor(f32::NAN, 0.05), 0.0);
    }

    #[test]
    fn degenerate_speed_snaps() {
        assert_eq!(damping_factor(0.01, 0.0), 1.0);
        assert_eq!(damping_factor(0.01, -3.0), 1.0);
        assert_eq!(damping_factor(0.01, f32::INFINITY), 1.0);
    }

    #[test]
    fn smooth_endpoints() {
        let target = SrtDelta {
            translation: Vec3::new(4.0, 0.0, 2.0),
            rotation: Quat::from_rotation_y(1.0),
            scale: 3.0,
        };
        assert_eq!(smooth(SrtDelta::IDENTITY, target, 0.0), SrtDelta::IDENTITY);

        let snapped = smooth(SrtDelta::IDENTITY, target, 1.0);
        assert!(snapped.translation.abs_diff_eq(target.translation, 1e-6));
        assert!(snapped.rotation.abs_diff_eq(target.rotation, 1e-6));
        assert!((snapped.scale - target.scale).abs() < 1e-6);
    }

    #[test]
    fn smooth_halfway() {
        let target = SrtDelta {
            translation: Vec3::new(4.0, 0.0, 2.0),
            rotation: Quat::IDENTITY,
            scale: 3.0,
        };
        let half = smooth(SrtDelta::IDENTITY, target, 0.5);
        assert!(half.translation.abs_diff_eq(Vec3::new(2.0, 0.0, 1.0), 1e-6));
        assert!((half.scale - 2.0).abs() < 1e-6);
    }
}
