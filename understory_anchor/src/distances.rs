// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};

use crate::config::EdgeAnchorConfig;

/// Reference distances from the viewport, one per object edge.
///
/// Each field is in the unit of its edge's [`AnchorMode`](crate::AnchorMode):
/// pixels for near/far anchors, a fraction of the viewport extent for
/// proportional ones. Fields for unanchored edges carry no meaning.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeDistances {
    /// Distance recorded for the left edge.
    pub left: f64,
    /// Distance recorded for the top edge.
    pub top: f64,
    /// Distance recorded for the right edge.
    pub right: f64,
    /// Distance recorded for the bottom edge.
    pub bottom: f64,
}

/// Cached [`EdgeDistances`] plus a validity flag.
///
/// The cache starts out invalid. [`DistanceCache::refresh`] is the only way to
/// make it valid again.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DistanceCache {
    distances: EdgeDistances,
    valid: bool,
}

impl DistanceCache {
    /// Creates an invalid, zeroed cache.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            distances: EdgeDistances {
                left: 0.0,
                top: 0.0,
                right: 0.0,
                bottom: 0.0,
            },
            valid: false,
        }
    }

    /// Returns `true` once a snapshot has been taken since the last invalidation.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Marks the cache stale; the next step takes a fresh snapshot.
    pub fn invalidate(&mut self) {
        self.valid = false;
    }

    /// Returns the raw distances, whether or not they are valid.
    #[must_use]
    pub const fn distances(&self) -> &EdgeDistances {
        &self.distances
    }

    /// Snapshots the distances of the object's corners from the viewport edges.
    ///
    /// `top_left` and `bottom_right` are the drawable box corners already
    /// converted to viewport pixels, and `extent` is the viewport size the
    /// distances are measured against. Only anchored edges are written.
    pub fn refresh(
        &mut self,
        config: &EdgeAnchorConfig,
        extent: Size,
        top_left: Point,
        bottom_right: Point,
    ) {
        let d = &mut self.distances;
        if let Some(mode) = config.left_edge_anchor.mode() {
            d.left = mode.distance_from_pixel(top_left.x, extent.width);
        }
        if let Some(mode) = config.top_edge_anchor.mode() {
            d.top = mode.distance_from_pixel(top_left.y, extent.height);
        }
        if let Some(mode) = config.right_edge_anchor.mode() {
            d.right = mode.distance_from_pixel(bottom_right.x, extent.width);
        }
        if let Some(mode) = config.bottom_edge_anchor.mode() {
            d.bottom = mode.distance_from_pixel(bottom_right.y, extent.height);
        }
        self.valid = true;
    }
}
