// Copyright 2026 the Tactus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tactus_srt --heading-base-level=0

//! Tactus SRT: map pinch, rotate and pan touch gestures onto 3D transforms.
//!
//! A [`Manipulator`] turns one or two tracked touch points into a
//! scale/rotate/translate (SRT) delta for a single scene object, smooths that
//! delta over time, and produces the [`Pose`] the host should apply each frame.
//!
//! The crate is headless. It does not own the object, the frame loop, or the
//! touch tracker. Callers are expected to:
//! - Call [`Manipulator::start`] when a touch group lands on an object, passing
//!   the object's current pose.
//! - Call [`Manipulator::update`] whenever the tracked touch points move.
//! - Call [`Manipulator::advance_frame`] once per rendered frame and write the
//!   returned pose back to the object.
//! - Call [`Manipulator::end`] when the touches lift.
//!
//! ## Minimal example
//!
//! ```rust
//! use glam::Vec3;
//! use tactus_srt::{Manipulator, ManipulatorConfig, Pose};
//!
//! let mut manip = Manipulator::new(ManipulatorConfig::default()).unwrap();
//! let object = Pose::from_position(Vec3::new(0.0, 1.0, 0.0));
//!
//! // Two fingers land one unit apart, then spread to two units.
//! manip.start(object, (Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0)));
//! manip.update((Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0)));
//!
//! // Once per frame: the pose eases toward a 2x horizontal scale.
//! let pose = manip.advance_frame(1.0 / 60.0).unwrap();
//! assert!(pose.scale.x > 1.0 && pose.scale.x < 2.0);
//! assert_eq!(pose.scale.y, 1.0);
//!
//! manip.end();
//! assert!(!manip.is_active());
//! ```
//!
//! ## Behavior notes
//!
//! - Every frame is recomputed from the pose captured at [`Manipulator::start`],
//!   so repeated frames never accumulate drift.
//! - A single touch point (or two that start on top of each other) only
//!   translates; rotation and scale stay at identity.
//! - Scale candidates that would leave the configured bounds are rejected and
//!   the last accepted scale is held.
//! - Only the yaw of the gesture rotation is applied, about
//!   [`ManipulatorConfig::rotate_axis`].
//!
//! ## Features
//!
//! - `std` (default): forward `std` to `glam` (and `kurbo`).
//! - `libm`: use `libm` for float math in `no_std` builds.
//! - `surface` (default): [`TouchSurface`], mapping 2D touch coordinates
//!   (for example normalized TUIO positions) onto the ground plane. Requires
//!   the `kurbo` dependency.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod axes;
mod config;
mod damping;
mod gesture;
mod manipulator;
mod pose;
#[cfg(feature = "surface")]
mod surface;
mod transform;

pub use axes::Axes;
pub use config::{ConfigError, ManipulatorConfig};
pub use damping::{damping_factor, smooth};
pub use gesture::{DEGENERATE_EPSILON, SrtDelta, TouchAnchors, compute_delta};
pub use manipulator::{Manipulator, ManipulatorDebugInfo};
pub use pose::Pose;
#[cfg(feature = "surface")]
pub use surface::TouchSurface;
pub use transform::{mask_components, rotate_around, scale_around, yaw_degrees};
