// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::config::{EdgeAnchorConfig, Reconfigured};
use crate::distances::{DistanceCache, EdgeDistances};
use crate::host::{AnchoredObject, CoordinateTransform, ViewportSize};
use crate::reapply::{AnchoredEdges, EdgeTargets, ResizePolicy};
use crate::trace::AnchorTrace;

/// Name under which engines register this behavior.
pub const BEHAVIOR_TYPE: &str = "AnchorBehavior::AnchorBehavior";

/// Whether the distance cache can be applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorState {
    /// Cache is stale; the next step takes a snapshot.
    Invalid,
    /// Cache is fresh; the next step reapplies it.
    Valid,
}

/// What a call to [`EdgeAnchor::step`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Distances were recorded; the object was not touched.
    Snapshotted,
    /// Cached distances were applied to the object.
    Applied,
}

/// Anchors one object's edges to the edges of a viewport.
///
/// An `EdgeAnchor` alternates between two passes, driven by [`EdgeAnchor::step`]
/// once per simulation tick:
/// - While the cache is invalid (after creation, [`EdgeAnchor::on_activate`]),
///   a step measures the object's drawable box against the viewport and
///   caches one distance per anchored edge.
/// - While it is valid, a step rebuilds the object's position and size from
///   those distances and the viewport's *current* size.
///
/// Nothing else resets the cache: an object moved by other code snaps back
/// along its anchored edges on the next step.
#[derive(Clone, Debug)]
pub struct EdgeAnchor {
    config: EdgeAnchorConfig,
    cache: DistanceCache,
}

impl EdgeAnchor {
    /// Creates an anchor with an invalid cache.
    #[must_use]
    pub const fn new(config: EdgeAnchorConfig) -> Self {
        Self {
            config,
            cache: DistanceCache::new(),
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &EdgeAnchorConfig {
        &self.config
    }

    /// Returns the cache state.
    #[must_use]
    pub fn state(&self) -> AnchorState {
        if self.cache.is_valid() {
            AnchorState::Valid
        } else {
            AnchorState::Invalid
        }
    }

    /// Returns the cached distances while they are valid.
    #[must_use]
    pub fn distances(&self) -> Option<&EdgeDistances> {
        self.cache.is_valid().then(|| self.cache.distances())
    }

    /// Applies a configuration edit in place.
    ///
    /// Each anchor field and the legacy flag that differ between `old` and
    /// `new` are copied over. The cache is left as it is, so the next step
    /// may still replay distances measured under the previous modes.
    ///
    /// A change of [`EdgeAnchorConfig::relative_to_original_window_size`]
    /// changes what the cached distances are measured against; that is
    /// reported as [`Reconfigured::RequiresRecreate`] and the caller must
    /// replace this instance.
    pub fn reconfigure(
        &mut self,
        old: &EdgeAnchorConfig,
        new: &EdgeAnchorConfig,
    ) -> Reconfigured {
        if old.left_edge_anchor != new.left_edge_anchor {
            self.config.left_edge_anchor = new.left_edge_anchor;
        }
        if old.right_edge_anchor != new.right_edge_anchor {
            self.config.right_edge_anchor = new.right_edge_anchor;
        }
        if old.top_edge_anchor != new.top_edge_anchor {
            self.config.top_edge_anchor = new.top_edge_anchor;
        }
        if old.bottom_edge_anchor != new.bottom_edge_anchor {
            self.config.bottom_edge_anchor = new.bottom_edge_anchor;
        }
        if old.use_legacy_edge_semantics != new.use_legacy_edge_semantics {
            self.config.use_legacy_edge_semantics = new.use_legacy_edge_semantics;
        }
        if old.relative_to_original_window_size != new.relative_to_original_window_size {
            return Reconfigured::RequiresRecreate;
        }
        Reconfigured::Updated
    }

    /// Marks the cache stale, e.g. when the object spawns or the behavior is
    /// re-enabled. The next step takes a fresh snapshot.
    pub fn on_activate(&mut self) {
        self.cache.invalidate();
    }

    /// Runs one simulation step: snapshot if the cache is stale, else reapply.
    pub fn step<V, T, O>(&mut self, viewport: &V, layer: &T, object: &mut O) -> StepOutcome
    where
        V: ViewportSize + ?Sized,
        T: CoordinateTransform + ?Sized,
        O: AnchoredObject + ?Sized,
    {
        self.step_with_trace(viewport, layer, object, &mut ())
    }

    /// Like [`EdgeAnchor::step`], reporting what happened to `trace`.
    pub fn step_with_trace<V, T, O, R>(
        &mut self,
        viewport: &V,
        layer: &T,
        object: &mut O,
        trace: &mut R,
    ) -> StepOutcome
    where
        V: ViewportSize + ?Sized,
        T: CoordinateTransform + ?Sized,
        O: AnchoredObject + ?Sized,
        R: AnchorTrace + ?Sized,
    {
        let drawable = object.drawable_origin();
        let current = EdgeTargets {
            top_left: drawable,
            bottom_right: drawable + object.size().to_vec2(),
        }
        .to_viewport_space(layer);

        if !self.cache.is_valid() {
            let extent = if self.config.relative_to_original_window_size {
                viewport.original_size()
            } else {
                viewport.current_size()
            };
            self.cache
                .refresh(&self.config, extent, current.top_left, current.bottom_right);
            trace.snapshot(extent, self.cache.distances());
            return StepOutcome::Snapshotted;
        }

        // Replay against the live size, even for distances measured against
        // the original one.
        let extent = viewport.current_size();
        let targets = EdgeTargets::from_distances(&self.config, self.cache.distances(), extent, current)
            .to_object_space(layer);
        let policy = self.config.policy();
        policy.apply(self.config.anchored_edges(), &targets, object);
        trace.applied(policy, extent, &targets);
        StepOutcome::Applied
    }

    /// Snapshot of the current anchor state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> EdgeAnchorDebugInfo {
        EdgeAnchorDebugInfo {
            config: self.config,
            state: self.state(),
            distances: *self.cache.distances(),
            anchored_edges: self.config.anchored_edges(),
            policy: self.config.policy(),
        }
    }
}

/// Debug snapshot of an [`EdgeAnchor`].
#[derive(Clone, Copy, Debug)]
pub struct EdgeAnchorDebugInfo {
    /// Active configuration.
    pub config: EdgeAnchorConfig,
    /// Cache state.
    pub state: AnchorState,
    /// Raw cached distances; meaningless while `state` is [`AnchorState::Invalid`].
    pub distances: EdgeDistances,
    /// Edges with an anchor other than `None`.
    pub anchored_edges: AnchoredEdges,
    /// Reapply policy in effect.
    pub policy: ResizePolicy,
}
