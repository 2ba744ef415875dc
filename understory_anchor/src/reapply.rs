// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reconstructing object geometry from cached distances.
//!
//! Reapplying happens in two stages. [`EdgeTargets::from_distances`] inverts
//! the snapshot formulas against the current viewport extent, giving target
//! corners in viewport pixels, which are then mapped back into object space.
//! A [`ResizePolicy`] then writes position and size onto the object. The two
//! policies are independent functions, [`apply_legacy`] and [`apply_modern`],
//! over the same inputs.

use kurbo::{Point, Size, Vec2};

use crate::config::EdgeAnchorConfig;
use crate::distances::EdgeDistances;
use crate::host::{AnchoredObject, CoordinateTransform};
use crate::modes::AnchorMode;

/// Which object edges are anchored (have a mode other than `None`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnchoredEdges {
    /// Left edge is anchored.
    pub left: bool,
    /// Right edge is anchored.
    pub right: bool,
    /// Top edge is anchored.
    pub top: bool,
    /// Bottom edge is anchored.
    pub bottom: bool,
}

impl AnchoredEdges {
    /// Returns `true` when no edge is anchored.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !(self.left || self.right || self.top || self.bottom)
    }
}

/// Top-left and bottom-right target corners of the object.
///
/// Depending on the stage these are viewport pixels or object-space
/// coordinates; see [`EdgeTargets::from_distances`] and
/// [`EdgeTargets::to_object_space`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeTargets {
    /// Target for the left and top edges.
    pub top_left: Point,
    /// Target for the right and bottom edges.
    pub bottom_right: Point,
}

impl EdgeTargets {
    /// Inverts the cached distances into viewport-pixel targets.
    ///
    /// `current` holds the object's present corners in viewport pixels; an
    /// unanchored edge keeps its current pixel, so it contributes nothing to
    /// the result.
    #[must_use]
    pub fn from_distances(
        config: &EdgeAnchorConfig,
        distances: &EdgeDistances,
        extent: Size,
        current: Self,
    ) -> Self {
        let resolve = |mode: Option<AnchorMode>, distance: f64, extent: f64, fallback: f64| {
            mode.map_or(fallback, |mode| mode.pixel_from_distance(distance, extent))
        };
        Self {
            top_left: Point::new(
                resolve(
                    config.left_edge_anchor.mode(),
                    distances.left,
                    extent.width,
                    current.top_left.x,
                ),
                resolve(
                    config.top_edge_anchor.mode(),
                    distances.top,
                    extent.height,
                    current.top_left.y,
                ),
            ),
            bottom_right: Point::new(
                resolve(
                    config.right_edge_anchor.mode(),
                    distances.right,
                    extent.width,
                    current.bottom_right.x,
                ),
                resolve(
                    config.bottom_edge_anchor.mode(),
                    distances.bottom,
                    extent.height,
                    current.bottom_right.y,
                ),
            ),
        }
    }

    /// Maps both corners from viewport pixels into object space.
    #[must_use]
    pub fn to_object_space<T: CoordinateTransform + ?Sized>(self, transform: &T) -> Self {
        Self {
            top_left: transform.to_object_space(self.top_left),
            bottom_right: transform.to_object_space(self.bottom_right),
        }
    }

    /// Maps both corners from object space into viewport pixels.
    #[must_use]
    pub fn to_viewport_space<T: CoordinateTransform + ?Sized>(self, transform: &T) -> Self {
        Self {
            top_left: transform.to_viewport_space(self.top_left),
            bottom_right: transform.to_viewport_space(self.bottom_right),
        }
    }
}

/// Which reapply algorithm writes the targets onto the object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ResizePolicy {
    /// Historical behavior; see [`apply_legacy`].
    #[default]
    Legacy,
    /// Coupled resize and reposition; see [`apply_modern`].
    Modern,
}

impl ResizePolicy {
    /// Applies this policy to `object`.
    pub fn apply<O: AnchoredObject + ?Sized>(
        self,
        edges: AnchoredEdges,
        targets: &EdgeTargets,
        object: &mut O,
    ) {
        match self {
            Self::Legacy => apply_legacy(edges, targets, object),
            Self::Modern => apply_modern(edges, targets, object),
        }
    }
}

fn origin_offset<O: AnchoredObject + ?Sized>(object: &O) -> Vec2 {
    object.position() - object.drawable_origin()
}

/// Legacy reapply: each anchored edge is handled on its own.
///
/// Width and height are written first, then the left/top edges move the
/// object while preserving the origin-to-drawable offset as it reads *after*
/// the resize. When both edges of an axis are anchored, that offset is still
/// added on top of the near target, unlike [`apply_modern`]. Existing content
/// depends on this.
pub fn apply_legacy<O: AnchoredObject + ?Sized>(
    edges: AnchoredEdges,
    targets: &EdgeTargets,
    object: &mut O,
) {
    let EdgeTargets {
        top_left,
        bottom_right,
    } = *targets;
    if edges.right {
        object.set_width(bottom_right.x - top_left.x);
    }
    if edges.bottom {
        object.set_height(bottom_right.y - top_left.y);
    }
    if edges.left {
        let offset = origin_offset(object);
        object.set_x(top_left.x + offset.x);
    }
    if edges.top {
        let offset = origin_offset(object);
        object.set_y(top_left.y + offset.y);
    }
}

/// Modern reapply: opposing edges resize, single edges move.
///
/// With both edges of an axis anchored the object spans the two targets and
/// its position is set to the near target directly. With one edge anchored
/// the size is kept and the object is moved so that edge lands on its target.
/// An axis with no anchored edge is untouched.
pub fn apply_modern<O: AnchoredObject + ?Sized>(
    edges: AnchoredEdges,
    targets: &EdgeTargets,
    object: &mut O,
) {
    let EdgeTargets {
        top_left,
        bottom_right,
    } = *targets;

    if edges.left && edges.right {
        object.set_width(bottom_right.x - top_left.x);
        object.set_x(top_left.x);
    } else if edges.left {
        let offset = origin_offset(object);
        object.set_x(top_left.x + offset.x);
    } else if edges.right {
        let offset = origin_offset(object);
        object.set_x(bottom_right.x + offset.x - object.size().width);
    }

    if edges.top && edges.bottom {
        object.set_height(bottom_right.y - top_left.y);
        object.set_y(top_left.y);
    } else if edges.top {
        let offset = origin_offset(object);
        object.set_y(top_left.y + offset.y);
    } else if edges.bottom {
        let offset = origin_offset(object);
        object.set_y(bottom_right.y + offset.y - object.size().height);
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::{AnchoredEdges, EdgeTargets, ResizePolicy, apply_legacy, apply_modern};
    use crate::config::EdgeAnchorConfig;
    use crate::distances::EdgeDistances;
    use crate::host::AnchoredObject;
    use crate::modes::{HorizontalAnchor, VerticalAnchor};
    use crate::object::{Origin, SceneObject};

    fn offset_object() -> SceneObject {
        // Drawable box at (100, 100), origin 10px right and 20px below it.
        SceneObject::new(
            Point::new(110.0, 120.0),
            Size::new(50.0, 50.0),
            Origin::Fixed(Vec2::new(10.0, 20.0)),
        )
    }

    const HORIZONTAL: AnchoredEdges = AnchoredEdges {
        left: true,
        right: true,
        top: false,
        bottom: false,
    };

    #[test]
    fn inverse_formulas_use_current_extent() {
        let config = EdgeAnchorConfig::default()
            .with_horizontal(HorizontalAnchor::Proportional, HorizontalAnchor::WindowRight)
            .with_vertical(VerticalAnchor::WindowTop, VerticalAnchor::None);
        let distances = EdgeDistances {
            left: 0.125,
            top: 100.0,
            right: 650.0,
            bottom: 999.0,
        };
        let current = EdgeTargets {
            top_left: Point::new(1.0, 2.0),
            bottom_right: Point::new(3.0, 4.0),
        };
        let px = EdgeTargets::from_distances(&config, &distances, Size::new(1600.0, 600.0), current);
        assert_eq!(px.top_left, Point::new(200.0, 100.0));
        // Unanchored bottom keeps the current pixel.
        assert_eq!(px.bottom_right, Point::new(950.0, 4.0));
    }

    #[test]
    fn nothing_anchored_touches_nothing() {
        let targets = EdgeTargets {
            top_left: Point::new(-500.0, -500.0),
            bottom_right: Point::new(900.0, 900.0),
        };
        for policy in [ResizePolicy::Legacy, ResizePolicy::Modern] {
            let mut obj = offset_object();
            policy.apply(AnchoredEdges::default(), &targets, &mut obj);
            assert_eq!(obj, offset_object());
        }
    }

    #[test]
    fn legacy_keeps_offset_for_both_edges() {
        let targets = EdgeTargets {
            top_left: Point::new(100.0, 100.0),
            bottom_right: Point::new(350.0, 150.0),
        };
        let mut obj = offset_object();
        apply_legacy(HORIZONTAL, &targets, &mut obj);
        assert_eq!(obj.size().width, 250.0);
        assert_eq!(obj.position().x, 110.0);
        assert_eq!(obj.position().y, 120.0);
    }

    #[test]
    fn modern_sets_near_target_directly_for_both_edges() {
        let targets = EdgeTargets {
            top_left: Point::new(100.0, 100.0),
            bottom_right: Point::new(350.0, 150.0),
        };
        let mut obj = offset_object();
        apply_modern(HORIZONTAL, &targets, &mut obj);
        assert_eq!(obj.size().width, 250.0);
        assert_eq!(obj.position().x, 100.0);
    }

    #[test]
    fn modern_far_edge_only_moves_from_the_far_side() {
        let edges = AnchoredEdges {
            right: true,
            bottom: true,
            ..AnchoredEdges::default()
        };
        let targets = EdgeTargets {
            top_left: Point::new(0.0, 0.0),
            bottom_right: Point::new(400.0, 300.0),
        };
        let mut obj = offset_object();
        apply_modern(edges, &targets, &mut obj);
        assert_eq!(obj.size(), Size::new(50.0, 50.0));
        assert_eq!(obj.drawable_origin(), Point::new(350.0, 250.0));
        assert_eq!(obj.position(), Point::new(360.0, 270.0));
    }

    #[test]
    fn legacy_far_edge_only_resizes() {
        let edges = AnchoredEdges {
            right: true,
            ..AnchoredEdges::default()
        };
        let targets = EdgeTargets {
            top_left: Point::new(100.0, 100.0),
            bottom_right: Point::new(400.0, 150.0),
        };
        let mut obj = offset_object();
        apply_legacy(edges, &targets, &mut obj);
        assert_eq!(obj.size().width, 300.0);
        assert_eq!(obj.position(), Point::new(110.0, 120.0));
    }

    #[test]
    fn legacy_reads_offset_after_resize() {
        // Centered pivot: the origin offset grows with the size.
        let mut obj = SceneObject::new(
            Point::new(125.0, 125.0),
            Size::new(50.0, 50.0),
            Origin::Relative(Vec2::new(0.5, 0.5)),
        );
        let targets = EdgeTargets {
            top_left: Point::new(100.0, 100.0),
            bottom_right: Point::new(350.0, 150.0),
        };
        apply_legacy(HORIZONTAL, &targets, &mut obj);
        // Width 250 moves the offset to 125 before X is written.
        assert_eq!(obj.position().x, 225.0);
        assert_eq!(obj.drawable_origin().x, 100.0);
    }
}
