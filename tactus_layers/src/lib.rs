// Copyright 2026 the Tactus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tactus_layers --heading-base-level=0

//! Tactus Layers: layer bitmasks for raycast and physics filtering.
//!
//! Hosts commonly tag scene objects with a small layer index (0 through 31)
//! and filter raycasts with a 32-bit mask where bit `i` means "layer `i` may
//! be hit". This crate builds those masks.
//!
//! ```rust
//! use tactus_layers::{LayerMask, layer_mask};
//!
//! // The host-facing helper: absent or empty input gives an empty mask.
//! assert_eq!(layer_mask(None), 0);
//! assert_eq!(layer_mask(Some(&[])), 0);
//! assert_eq!(layer_mask(Some(&[0, 2, 5])), 0b10_0101);
//!
//! // The typed mask supports set-style queries.
//! let mask = LayerMask::from_layers([0, 2, 5]);
//! assert!(mask.contains(2));
//! assert!(!mask.contains(1));
//! assert_eq!(mask.iter().collect::<Vec<_>>(), vec![0, 2, 5]);
//! ```
//!
//! Layer indices at or above [`LayerMask::MAX_LAYERS`] are outside the host's
//! layer system. Passing them is a caller bug: debug builds assert, release
//! builds ignore the index.
//!
//! This crate is `no_std`.

#![no_std]

mod mask;

pub use mask::{LayerIter, LayerMask};

/// Builds a raw layer bitmask from an optional list of layer indices.
///
/// Bit `i` of the result is set iff `i` appears in `layers`. `None` and an
/// empty slice both produce `0`. Duplicate indices are harmless.
#[must_use]
pub fn layer_mask(layers: Option<&[u8]>) -> u32 {
    layers
        .map(|layers| LayerMask::from_layers(layers.iter().copied()))
        .unwrap_or_default()
        .bits()
}
