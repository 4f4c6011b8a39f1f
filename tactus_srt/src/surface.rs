// Copyright 2026 the Tactus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use glam::Vec3;
use kurbo::{Affine, Point, Rect};

use crate::gesture::TouchAnchors;

/// Maps 2D touch-surface coordinates onto a horizontal world plane.
///
/// Touch trackers such as TUIO report positions in a normalized `[0, 1]`
/// square with `y` growing downward. A `TouchSurface` sends such points to
/// world space: surface `x`/`y` become world `x`/`z`, at a fixed world height.
///
/// ```
/// use kurbo::{Point, Rect};
/// use tactus_srt::TouchSurface;
///
/// // A 4x2 table centered on the origin, at height 0.
/// let table = TouchSurface::new(Rect::new(-2.0, -1.0, 2.0, 1.0), 0.0);
///
/// let top_left = table.to_world(Point::new(0.0, 0.0));
/// assert_eq!((top_left.x, top_left.z), (-2.0, 1.0));
///
/// let center = table.to_world(Point::new(0.5, 0.5));
/// assert_eq!((center.x, center.z), (0.0, 0.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchSurface {
    surface_to_plane: Affine,
    height: f32,
}

impl TouchSurface {
    /// Maps the unit touch square onto `world_rect` (world `x` by world `z`).
    ///
    /// Surface `y = 0` lands on `world_rect.y1`, so "up" on the touch surface
    /// points toward increasing world `z`.
    #[must_use]
    pub fn new(world_rect: Rect, height: f32) -> Self {
        let surface_to_plane = Affine::new([
            world_rect.width(),
            0.0,
            0.0,
            -world_rect.height(),
            world_rect.x0,
            world_rect.y1,
        ]);
        Self::from_affine(surface_to_plane, height)
    }

    /// Uses an arbitrary 2D transform from surface coordinates to world `x`/`z`.
    #[must_use]
    pub fn from_affine(surface_to_plane: Affine, height: f32) -> Self {
        Self {
            surface_to_plane,
            height,
        }
    }

    /// World height of the plane.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Transform from surface coordinates to world `x`/`z`.
    #[must_use]
    pub fn surface_to_plane(&self) -> Affine {
        self.surface_to_plane
    }

    /// Maps a surface point into world space.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "world positions are single precision"
    )]
    pub fn to_world(&self, point: Point) -> Vec3 {
        let p = self.surface_to_plane * point;
        Vec3::new(p.x as f32, self.height, p.y as f32)
    }

    /// Anchors for the first one or two surface points, or `None` for none.
    #[must_use]
    pub fn anchors(&self, points: &[Point]) -> Option<TouchAnchors> {
        match points {
            [] => None,
            [a] => Some(TouchAnchors::One(self.to_world(*a))),
            [a, b, ..] => Some(TouchAnchors::Two(self.to_world(*a), self.to_world(*b))),
        }
    }
}
