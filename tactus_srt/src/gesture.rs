// Copyright 2026 the Tactus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch anchors and the scale/rotate/translate delta they describe.

use glam::{Quat, Vec3};

/// Squared length below which an anchor vector is treated as zero.
///
/// Rotation and scale are undefined between coinciding touch points.
pub const DEGENERATE_EPSILON: f32 = 1e-10;

/// One or two tracked touch points, in world (or ground-plane) space.
///
/// A single touch behaves like two coinciding touches and only ever
/// translates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TouchAnchors {
    /// A single touch group.
    One(Vec3),
    /// Two touch groups: the primary (pivot) and the secondary.
    Two(Vec3, Vec3),
}

impl TouchAnchors {
    /// The primary anchor, which drives translation and acts as the pivot.
    #[must_use]
    pub fn primary(self) -> Vec3 {
        match self {
            Self::One(a) | Self::Two(a, _) => a,
        }
    }

    /// The secondary anchor; equal to the primary for a single touch.
    #[must_use]
    pub fn secondary(self) -> Vec3 {
        match self {
            Self::One(a) => a,
            Self::Two(_, b) => b,
        }
    }

    /// Returns `true` for a single touch.
    #[must_use]
    pub fn is_single(self) -> bool {
        matches!(self, Self::One(_))
    }

    /// Vector from the primary to the secondary anchor.
    #[must_use]
    pub fn span(self) -> Vec3 {
        self.secondary() - self.primary()
    }
}

impl From<Vec3> for TouchAnchors {
    fn from(a: Vec3) -> Self {
        Self::One(a)
    }
}

impl From<(Vec3, Vec3)> for TouchAnchors {
    fn from((a, b): (Vec3, Vec3)) -> Self {
        Self::Two(a, b)
    }
}

/// A scale/rotate/translate delta relative to a captured pose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SrtDelta {
    /// Offset of the primary anchor from its session start.
    pub translation: Vec3,
    /// Rotation from the starting anchor span to the current one.
    pub rotation: Quat,
    /// Ratio of the current anchor span length to the starting one.
    pub scale: f32,
}

impl SrtDelta {
    /// No translation, no rotation, unit scale.
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: 1.0,
    };
}

impl Default for SrtDelta {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Computes the delta that takes the session-start anchors to `anchors`.
///
/// `anchor_a0` is the primary anchor at session start, already moved onto the
/// object's height; `baseline` is the starting span from primary to secondary.
///
/// Single touches and degenerate baselines only translate. If the current
/// span collapses while the baseline did not, rotation stays at identity and
/// the scale is `0.0`.
#[must_use]
pub fn compute_delta(anchor_a0: Vec3, baseline: Vec3, anchors: TouchAnchors) -> SrtDelta {
    let translation = anchors.primary() - anchor_a0;
    if anchors.is_single() || is_degenerate(baseline) {
        return SrtDelta {
            translation,
            ..SrtDelta::IDENTITY
        };
    }

    let span = anchors.span();
    if is_degenerate(span) {
        return SrtDelta {
            translation,
            rotation: Quat::IDENTITY,
            scale: 0.0,
        };
    }

    let baseline_len = baseline.length();
    let span_len = span.length();
    SrtDelta {
        translation,
        rotation: Quat::from_rotation_arc(baseline / baseline_len, span / span_len),
        scale: span_len / baseline_len,
    }
}

fn is_degenerate(v: Vec3) -> bool {
    let len_sq = v.length_squared();
    !len_sq.is_finite() || len_sq < DEGENERATE_EPSILON
}
