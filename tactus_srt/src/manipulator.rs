// Copyright 2026 the Tactus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture session state and the per-frame pose update.
//!
//! ## Usage
//!
//! 1) Start a session with [`Manipulator::start`], passing the object's current pose and anchors.
//! 2) On each touch move, call [`Manipulator::update`] to retarget the gesture.
//! 3) Once per frame, call [`Manipulator::advance_frame`] and apply the returned pose.
//! 4) End the session with [`Manipulator::end`] when the touches lift.
//!
//! ## Minimal example
//!
//! ```
//! use glam::Vec3;
//! use tactus_srt::{Manipulator, ManipulatorConfig, Pose};
//!
//! let mut manip = Manipulator::new(ManipulatorConfig::default()).unwrap();
//!
//! // Drag an object at the origin one unit along +X with a single finger.
//! manip.start(Pose::IDENTITY, Vec3::ZERO);
//! manip.update(Vec3::X);
//!
//! // A frame as long as the damping speed snaps to the target.
//! let pose = manip.advance_frame(0.05).unwrap();
//! assert_eq!(pose.position, Vec3::X);
//!
//! manip.end();
//! assert_eq!(manip.advance_frame(0.05), None);
//! assert_eq!(manip.last_pose(), Some(pose));
//! ```

use glam::Vec3;

use crate::config::{ConfigError, ManipulatorConfig};
use crate::damping::{damping_factor, smooth};
use crate::gesture::{SrtDelta, TouchAnchors, compute_delta};
use crate::pose::Pose;
use crate::transform::{mask_components, rotate_around, scale_around, yaw_degrees};

/// Drives one object's transform from a touch gesture.
///
/// Each manipulator owns at most one active session. Manipulators are
/// independent of each other and do no locking; feed all calls for one
/// manipulator from the same thread.
#[derive(Clone, Debug)]
pub struct Manipulator {
    config: ManipulatorConfig,
    session: Option<Session>,
    target: SrtDelta,
    current: SrtDelta,
    last_pose: Option<Pose>,
}

/// State captured at session start plus the latest anchors.
#[derive(Clone, Copy, Debug)]
struct Session {
    anchors: TouchAnchors,
    anchor_a0: Vec3,
    baseline: Vec3,
    initial: Pose,
}

impl Manipulator {
    /// Creates an idle manipulator.
    pub fn new(config: ManipulatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            session: None,
            target: SrtDelta::IDENTITY,
            current: SrtDelta::IDENTITY,
            last_pose: None,
        })
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ManipulatorConfig {
        &self.config
    }

    /// Replaces the configuration.
    ///
    /// An active session keeps running and picks up the new values on the
    /// next frame. On error the previous configuration is kept.
    pub fn set_config(&mut self, config: ManipulatorConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Starts (or restarts) a session for an object currently at `pose`.
    ///
    /// The primary anchor becomes the pivot, moved onto the object's height so
    /// rotation and scaling happen in the object's own horizontal plane. The
    /// span between the anchors is the reference for later rotation and
    /// scale. Target and current deltas are reset to identity.
    pub fn start(&mut self, pose: Pose, anchors: impl Into<TouchAnchors>) {
        let anchors = anchors.into();
        let a = anchors.primary();
        self.session = Some(Session {
            anchors,
            anchor_a0: Vec3::new(a.x, pose.position.y, a.z),
            baseline: anchors.span(),
            initial: pose,
        });
        self.reset_deltas();
    }

    /// Retargets the gesture from new anchor positions.
    ///
    /// Returns the new target delta, or `None` (and does nothing) when no
    /// session is active. The target is reached gradually by
    /// [`Manipulator::advance_frame`].
    pub fn update(&mut self, anchors: impl Into<TouchAnchors>) -> Option<SrtDelta> {
        let session = self.session.as_mut()?;
        let anchors = anchors.into();
        session.anchors = anchors;
        self.target = compute_delta(session.anchor_a0, session.baseline, anchors);
        Some(self.target)
    }

    /// Advances smoothing by `elapsed` seconds and returns the pose to apply.
    ///
    /// Returns `None` when no session is active. The pose is always rebuilt
    /// from the one captured at [`Manipulator::start`]: yaw about the pivot,
    /// then scale about the pivot, then translate.
    ///
    /// A smoothed scale that would put the object's absolute scale magnitude
    /// outside the configured bounds is discarded and the previously accepted
    /// scale is used instead.
    pub fn advance_frame(&mut self, elapsed: f32) -> Option<Pose> {
        let session = self.session?;
        let t = damping_factor(elapsed, self.config.damping_speed);
        let candidate = smooth(self.current, self.target, t);

        let (min, max) = self.config.scale_range();
        let magnitude = (session.initial.scale * candidate.scale).length();
        let scale = if (min..=max).contains(&magnitude) {
            candidate.scale
        } else {
            self.current.scale
        };
        self.current = SrtDelta { scale, ..candidate };

        let pivot = session.anchor_a0;
        let mut pose = rotate_around(
            session.initial,
            pivot,
            self.config.rotate_axis,
            yaw_degrees(self.current.rotation),
        );
        pose = scale_around(pose, pivot, self.current.scale, self.config.scale_axes);
        pose.position += mask_components(self.current.translation, self.config.move_axes);

        self.last_pose = Some(pose);
        Some(pose)
    }

    /// Ends the session and resets deltas to identity.
    ///
    /// The object is not restored: [`Manipulator::last_pose`] still reports
    /// the last applied pose.
    pub fn end(&mut self) {
        self.reset_deltas();
        self.session = None;
    }

    /// Returns `true` between [`Manipulator::start`] and [`Manipulator::end`].
    ///
    /// Other interactions can consult this to stay out of the way while an
    /// object is being manipulated.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Delta the gesture is easing toward.
    #[must_use]
    pub fn target(&self) -> SrtDelta {
        self.target
    }

    /// Smoothed delta applied on the last frame.
    #[must_use]
    pub fn current(&self) -> SrtDelta {
        self.current
    }

    /// Pose captured when the active session started.
    #[must_use]
    pub fn initial_pose(&self) -> Option<Pose> {
        self.session.map(|s| s.initial)
    }

    /// Latest anchors of the active session.
    #[must_use]
    pub fn anchors(&self) -> Option<TouchAnchors> {
        self.session.map(|s| s.anchors)
    }

    /// Pose produced by the most recent frame, kept after the session ends.
    #[must_use]
    pub fn last_pose(&self) -> Option<Pose> {
        self.last_pose
    }

    /// Returns a snapshot of the manipulator state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ManipulatorDebugInfo {
        ManipulatorDebugInfo {
            config: self.config,
            active: self.is_active(),
            anchors: self.session.map(|s| s.anchors),
            pivot: self.session.map(|s| s.anchor_a0),
            baseline: self.session.map(|s| s.baseline),
            initial_pose: self.initial_pose(),
            target: self.target,
            current: self.current,
            last_pose: self.last_pose,
        }
    }

    fn reset_deltas(&mut self) {
        self.target = SrtDelta::IDENTITY;
        self.current = SrtDelta::IDENTITY;
    }
}

/// Debug snapshot of a [`Manipulator`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ManipulatorDebugInfo {
    /// Active configuration.
    pub config: ManipulatorConfig,
    /// Whether a session is active.
    pub active: bool,
    /// Latest anchors, if a session is active.
    pub anchors: Option<TouchAnchors>,
    /// Session pivot: the starting primary anchor at the object's height.
    pub pivot: Option<Vec3>,
    /// Starting span between the anchors.
    pub baseline: Option<Vec3>,
    /// Pose captured at session start.
    pub initial_pose: Option<Pose>,
    /// Target delta.
    pub target: SrtDelta,
    /// Smoothed delta.
    pub current: SrtDelta,
    /// Pose produced by the most recent frame.
    pub last_pose: Option<Pose>,
}
