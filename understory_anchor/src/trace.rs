// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explainability hooks for anchoring steps.
//!
//! [`EdgeAnchor::step`](crate::EdgeAnchor::step) reports nothing about what it
//! did beyond its [`StepOutcome`](crate::StepOutcome). When a host needs to
//! answer "why did this object move?", it can call
//! [`EdgeAnchor::step_with_trace`](crate::EdgeAnchor::step_with_trace) with an
//! [`AnchorTrace`] sink. [`StepRecorder`] is a small sink that keeps every
//! event; `()` discards them.

use alloc::vec::Vec;

use kurbo::Size;

use crate::distances::EdgeDistances;
use crate::reapply::{EdgeTargets, ResizePolicy};

/// A callback sink for anchoring steps.
pub trait AnchorTrace {
    /// Called after a snapshot pass recorded fresh distances.
    ///
    /// `extent` is the viewport size the distances were measured against.
    fn snapshot(&mut self, extent: Size, distances: &EdgeDistances);

    /// Called after a reapply pass wrote `targets` (in object space) onto the object.
    fn applied(&mut self, policy: ResizePolicy, extent: Size, targets: &EdgeTargets);
}

impl AnchorTrace for () {
    fn snapshot(&mut self, _extent: Size, _distances: &EdgeDistances) {}

    fn applied(&mut self, _policy: ResizePolicy, _extent: Size, _targets: &EdgeTargets) {}
}

/// One recorded anchoring step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnchorEvent {
    /// Distances were snapshotted.
    Snapshot {
        /// Viewport size used for the measurement.
        extent: Size,
        /// The recorded distances.
        distances: EdgeDistances,
    },
    /// Cached distances were applied to the object.
    Applied {
        /// Policy that wrote the geometry.
        policy: ResizePolicy,
        /// Viewport size the distances were replayed against.
        extent: Size,
        /// Object-space targets handed to the policy.
        targets: EdgeTargets,
    },
}

/// Records every [`AnchorEvent`] in order.
#[derive(Clone, Debug, Default)]
pub struct StepRecorder {
    events: Vec<AnchorEvent>,
}

impl StepRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Returns the recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[AnchorEvent] {
        &self.events
    }

    /// Returns the most recent event, if any.
    #[must_use]
    pub fn last(&self) -> Option<&AnchorEvent> {
        self.events.last()
    }

    /// Forgets all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl AnchorTrace for StepRecorder {
    fn snapshot(&mut self, extent: Size, distances: &EdgeDistances) {
        self.events.push(AnchorEvent::Snapshot {
            extent,
            distances: *distances,
        });
    }

    fn applied(&mut self, policy: ResizePolicy, extent: Size, targets: &EdgeTargets) {
        self.events.push(AnchorEvent::Applied {
            policy,
            extent,
            targets: *targets,
        });
    }
}
