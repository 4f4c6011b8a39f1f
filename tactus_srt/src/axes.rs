// Copyright 2026 the Tactus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use glam::Vec3;

bitflags::bitflags! {
    /// World axes that receive a gesture delta.
    ///
    /// Used to restrict scaling and movement; the default allows the
    /// horizontal plane only, so pinch and pan keep the object's height.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Axes: u8 {
        /// World X.
        const X = 0b001;
        /// World Y (up).
        const Y = 0b010;
        /// World Z.
        const Z = 0b100;
        /// The ground plane, X and Z.
        const HORIZONTAL = Self::X.bits() | Self::Z.bits();
    }
}

impl Axes {
    /// Axes whose component in `selector` is non-zero.
    ///
    /// Matches hosts that express axis masks as vectors such as `(1, 0, 1)`.
    #[must_use]
    pub fn from_vec3(selector: Vec3) -> Self {
        let mut axes = Self::empty();
        axes.set(Self::X, selector.x != 0.0);
        axes.set(Self::Y, selector.y != 0.0);
        axes.set(Self::Z, selector.z != 0.0);
        axes
    }

    /// `1.0` on masked axes and `0.0` elsewhere.
    #[must_use]
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(
            if self.contains(Self::X) { 1.0 } else { 0.0 },
            if self.contains(Self::Y) { 1.0 } else { 0.0 },
            if self.contains(Self::Z) { 1.0 } else { 0.0 },
        )
    }
}

impl Default for Axes {
    fn default() -> Self {
        Self::HORIZONTAL
    }
}
