// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::modes::{HorizontalAnchor, VerticalAnchor};
use crate::reapply::{AnchoredEdges, ResizePolicy};

/// Per-instance anchoring configuration.
///
/// With the `serde` feature this decodes from the engine's behavior data,
/// using its field names (`leftEdgeAnchor`, `useLegacyBottomAndRightAnchors`,
/// ...). Missing fields take their [`Default`] values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct EdgeAnchorConfig {
    /// Anchor for the object's left edge.
    pub left_edge_anchor: HorizontalAnchor,
    /// Anchor for the object's right edge.
    pub right_edge_anchor: HorizontalAnchor,
    /// Anchor for the object's top edge.
    pub top_edge_anchor: VerticalAnchor,
    /// Anchor for the object's bottom edge.
    pub bottom_edge_anchor: VerticalAnchor,
    /// Measure distances against the viewport's original (design-time) size
    /// instead of its current size.
    pub relative_to_original_window_size: bool,
    /// Select the legacy reapply policy. Defaults to `true`.
    #[cfg_attr(feature = "serde", serde(rename = "useLegacyBottomAndRightAnchors"))]
    pub use_legacy_edge_semantics: bool,
}

impl Default for EdgeAnchorConfig {
    fn default() -> Self {
        Self {
            left_edge_anchor: HorizontalAnchor::None,
            right_edge_anchor: HorizontalAnchor::None,
            top_edge_anchor: VerticalAnchor::None,
            bottom_edge_anchor: VerticalAnchor::None,
            relative_to_original_window_size: false,
            use_legacy_edge_semantics: true,
        }
    }
}

impl EdgeAnchorConfig {
    /// Returns a configuration with the given horizontal anchors.
    #[must_use]
    pub const fn with_horizontal(mut self, left: HorizontalAnchor, right: HorizontalAnchor) -> Self {
        self.left_edge_anchor = left;
        self.right_edge_anchor = right;
        self
    }

    /// Returns a configuration with the given vertical anchors.
    #[must_use]
    pub const fn with_vertical(mut self, top: VerticalAnchor, bottom: VerticalAnchor) -> Self {
        self.top_edge_anchor = top;
        self.bottom_edge_anchor = bottom;
        self
    }

    /// Returns a configuration with the given reapply policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: ResizePolicy) -> Self {
        self.use_legacy_edge_semantics = matches!(policy, ResizePolicy::Legacy);
        self
    }

    /// Returns a configuration that measures against the original viewport size.
    #[must_use]
    pub const fn relative_to_original(mut self, relative: bool) -> Self {
        self.relative_to_original_window_size = relative;
        self
    }

    /// The reapply policy selected by [`EdgeAnchorConfig::use_legacy_edge_semantics`].
    #[must_use]
    pub const fn policy(&self) -> ResizePolicy {
        if self.use_legacy_edge_semantics {
            ResizePolicy::Legacy
        } else {
            ResizePolicy::Modern
        }
    }

    /// Which edges have an anchor other than `None`.
    #[must_use]
    pub const fn anchored_edges(&self) -> AnchoredEdges {
        AnchoredEdges {
            left: self.left_edge_anchor.is_anchored(),
            right: self.right_edge_anchor.is_anchored(),
            top: self.top_edge_anchor.is_anchored(),
            bottom: self.bottom_edge_anchor.is_anchored(),
        }
    }
}

/// Outcome of [`EdgeAnchor::reconfigure`](crate::EdgeAnchor::reconfigure).
///
/// Callers must honor [`Reconfigured::RequiresRecreate`] by dropping the
/// instance and building a fresh one from the new configuration.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reconfigured {
    /// The new configuration was applied in place.
    Updated,
    /// The distance unit basis changed; the instance must be recreated.
    RequiresRecreate,
}

impl Reconfigured {
    /// Returns `true` for [`Reconfigured::Updated`].
    #[must_use]
    pub const fn is_updated(self) -> bool {
        matches!(self, Self::Updated)
    }
}

#[cfg(test)]
mod tests {
    use super::EdgeAnchorConfig;
    use crate::modes::{HorizontalAnchor, VerticalAnchor};
    use crate::reapply::ResizePolicy;

    #[test]
    fn default_is_unanchored_legacy() {
        let config = EdgeAnchorConfig::default();
        assert_eq!(config.policy(), ResizePolicy::Legacy);
        assert!(!config.relative_to_original_window_size);
        assert!(config.anchored_edges().is_empty());
    }

    #[test]
    fn builders_set_fields() {
        let config = EdgeAnchorConfig::default()
            .with_horizontal(HorizontalAnchor::WindowLeft, HorizontalAnchor::None)
            .with_vertical(VerticalAnchor::None, VerticalAnchor::Proportional)
            .with_policy(ResizePolicy::Modern)
            .relative_to_original(true);

        let edges = config.anchored_edges();
        assert!(edges.left && !edges.right && !edges.top && edges.bottom);
        assert_eq!(config.policy(), ResizePolicy::Modern);
        assert!(!config.use_legacy_edge_semantics);
        assert!(config.relative_to_original_window_size);
    }
}
