// Copyright 2026 the Tactus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use glam::Vec3;

use crate::axes::Axes;

/// Static configuration of a [`Manipulator`](crate::Manipulator).
///
/// The defaults suit a tabletop: horizontal pan and pinch only, yaw about
/// world up, absolute scale between one half and three times unit size, and
/// a short damping time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ManipulatorConfig {
    /// Seconds-scale smoothing constant; larger is slower. Must be positive.
    pub damping_speed: f32,
    /// Smallest absolute object scale. Compared by magnitude.
    pub min_scale: Vec3,
    /// Largest absolute object scale. Compared by magnitude.
    pub max_scale: Vec3,
    /// Axes that receive the gesture scale.
    pub scale_axes: Axes,
    /// Axes that receive the gesture translation.
    pub move_axes: Axes,
    /// World-space axis the gesture yaw is applied about.
    pub rotate_axis: Vec3,
}

impl ManipulatorConfig {
    /// Returns a copy with `damping_speed` replaced.
    #[must_use]
    pub fn with_damping_speed(mut self, damping_speed: f32) -> Self {
        self.damping_speed = damping_speed;
        self
    }

    /// Returns a copy with the absolute scale bounds replaced.
    #[must_use]
    pub fn with_scale_limits(mut self, min_scale: Vec3, max_scale: Vec3) -> Self {
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self
    }

    /// Returns a copy with `scale_axes` replaced.
    #[must_use]
    pub fn with_scale_axes(mut self, axes: Axes) -> Self {
        self.scale_axes = axes;
        self
    }

    /// Returns a copy with `move_axes` replaced.
    #[must_use]
    pub fn with_move_axes(mut self, axes: Axes) -> Self {
        self.move_axes = axes;
        self
    }

    /// Returns a copy with `rotate_axis` replaced.
    #[must_use]
    pub fn with_rotate_axis(mut self, axis: Vec3) -> Self {
        self.rotate_axis = axis;
        self
    }

    /// Checks that the configuration can drive a manipulator.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.damping_speed.is_finite() || self.damping_speed <= 0.0 {
            return Err(ConfigError::NonPositiveDamping(self.damping_speed));
        }
        let positive = |v: Vec3| v.is_finite() && v.cmpgt(Vec3::ZERO).all();
        if !positive(self.min_scale)
            || !positive(self.max_scale)
            || self.min_scale.length() > self.max_scale.length()
        {
            return Err(ConfigError::InvalidScaleLimits {
                min: self.min_scale,
                max: self.max_scale,
            });
        }
        if !self.rotate_axis.is_finite() || self.rotate_axis.length_squared() == 0.0 {
            return Err(ConfigError::ZeroRotateAxis(self.rotate_axis));
        }
        Ok(())
    }

    /// Magnitude range an accepted object scale must fall in.
    pub(crate) fn scale_range(&self) -> (f32, f32) {
        (self.min_scale.length(), self.max_scale.length())
    }
}

impl Default for ManipulatorConfig {
    fn default() -> Self {
        Self {
            damping_speed: 0.05,
            min_scale: Vec3::splat(0.5),
            max_scale: Vec3::splat(3.0),
            scale_axes: Axes::HORIZONTAL,
            move_axes: Axes::HORIZONTAL,
            rotate_axis: Vec3::Y,
        }
    }
}

/// Error returned when a [`ManipulatorConfig`] is unusable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// The damping speed is zero, negative or not finite.
    NonPositiveDamping(f32),
    /// A scale bound has a non-positive or non-finite component, or the
    /// minimum is larger than the maximum.
    InvalidScaleLimits {
        /// Configured minimum.
        min: Vec3,
        /// Configured maximum.
        max: Vec3,
    },
    /// The rotation axis has no direction.
    ZeroRotateAxis(Vec3),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveDamping(speed) => {
                write!(f, "damping speed must be positive and finite, got {speed}")
            }
            Self::InvalidScaleLimits { min, max } => {
                write!(f, "invalid scale limits: min {min}, max {max}")
            }
            Self::ZeroRotateAxis(axis) => {
                write!(f, "rotation axis {axis} has no direction")
            }
        }
    }
}

impl core::error::Error for ConfigError {}
