// Copyright 2026 the Tactus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// A set of up to 32 layers, stored as the host's raw layer bitmask.
///
/// # Example
///
/// ```
/// use tactus_layers::LayerMask;
///
/// let mut mask = LayerMask::EMPTY;
/// mask.insert(3);
/// mask.insert(8);
///
/// assert!(mask.contains(3));
/// assert_eq!(mask.bits(), (1 << 3) | (1 << 8));
///
/// // Everything except layer 8.
/// let others = !LayerMask::EMPTY.with(8);
/// assert!(!(mask & others).contains(8));
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct LayerMask(u32);

impl LayerMask {
    /// Number of layers a mask can hold.
    pub const MAX_LAYERS: u8 = 32;

    /// A mask with no layers.
    pub const EMPTY: Self = Self(0);

    /// A mask with all 32 layers.
    pub const ALL: Self = Self(u32::MAX);

    /// Wraps a raw bitmask.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the raw bitmask.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Builds a mask with bit `i` set for every index `i` in `layers`.
    #[must_use]
    pub fn from_layers<I: IntoIterator<Item = u8>>(layers: I) -> Self {
        let mut mask = Self::EMPTY;
        mask.extend(layers);
        mask
    }

    /// Returns `true` if the mask holds no layers.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if `layer` is in the mask.
    ///
    /// Out-of-range layers are never contained.
    #[must_use]
    pub const fn contains(self, layer: u8) -> bool {
        (self.0 & bit(layer)) != 0
    }

    /// Adds `layer` to the mask.
    pub fn insert(&mut self, layer: u8) {
        debug_assert!(
            layer < Self::MAX_LAYERS,
            "layer index {layer} is outside the 32-layer range"
        );
        self.0 |= bit(layer);
    }

    /// Removes `layer` from the mask.
    pub fn remove(&mut self, layer: u8) {
        self.0 &= !bit(layer);
    }

    /// Returns a copy of the mask with `layer` added.
    #[must_use]
    pub fn with(mut self, layer: u8) -> Self {
        self.insert(layer);
        self
    }

    /// Returns the number of layers in the mask.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Iterates the layer indices in ascending order.
    #[must_use]
    pub const fn iter(self) -> LayerIter {
        LayerIter { bits: self.0 }
    }
}

/// Single-bit mask for `layer`, or `0` when the index is out of range.
const fn bit(layer: u8) -> u32 {
    match 1_u32.checked_shl(layer as u32) {
        Some(b) => b,
        None => 0,
    }
}

impl fmt::Debug for LayerMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl BitOr for LayerMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for LayerMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for LayerMask {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for LayerMask {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl Not for LayerMask {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

impl From<LayerMask> for u32 {
    fn from(mask: LayerMask) -> Self {
        mask.0
    }
}

impl FromIterator<u8> for LayerMask {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self::from_layers(iter)
    }
}

impl Extend<u8> for LayerMask {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for layer in iter {
            self.insert(layer);
        }
    }
}

impl IntoIterator for LayerMask {
    type Item = u8;
    type IntoIter = LayerIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the layer indices in a [`LayerMask`].
#[derive(Clone, Debug)]
pub struct LayerIter {
    bits: u32,
}

impl Iterator for LayerIter {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation, reason = "trailing_zeros <= 31")]
        let layer = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(layer)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.bits.count_ones() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for LayerIter {}
