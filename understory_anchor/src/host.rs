// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capabilities the anchoring component consumes from its host engine.
//!
//! The component owns no scene, camera, or window. Hosts implement these
//! traits over their own types; [`GameWindow`](crate::GameWindow),
//! [`Layer`](crate::Layer) and [`SceneObject`](crate::SceneObject) are small
//! reference implementations.

use kurbo::{Point, Size};

/// Viewport size queries.
pub trait ViewportSize {
    /// Current (live) viewport size in pixels.
    fn current_size(&self) -> Size;

    /// Original (design-time) viewport size in pixels.
    fn original_size(&self) -> Size;
}

/// Mapping between object/world space and viewport pixels for one layer.
pub trait CoordinateTransform {
    /// Maps an object-space point to viewport pixels.
    fn to_viewport_space(&self, pt: Point) -> Point;

    /// Maps viewport pixels back to object space.
    fn to_object_space(&self, pt: Point) -> Point;
}

/// Geometry access for the object being anchored.
///
/// The logical position may be offset from the drawable box (for example by a
/// pivot point). Reads after a write must observe that write: the drawable box
/// may move when the size changes.
pub trait AnchoredObject {
    /// Logical position (origin) in object space.
    fn position(&self) -> Point;

    /// Top-left corner of the drawable bounding box in object space.
    fn drawable_origin(&self) -> Point;

    /// Size of the drawable bounding box in object space.
    fn size(&self) -> Size;

    /// Sets the logical X position.
    fn set_x(&mut self, x: f64);

    /// Sets the logical Y position.
    fn set_y(&mut self, y: f64);

    /// Sets the width.
    fn set_width(&mut self, width: f64);

    /// Sets the height.
    fn set_height(&mut self, height: f64);
}

impl<T: ViewportSize + ?Sized> ViewportSize for &T {
    fn current_size(&self) -> Size {
        (**self).current_size()
    }

    fn original_size(&self) -> Size {
        (**self).original_size()
    }
}

impl<T: CoordinateTransform + ?Sized> CoordinateTransform for &T {
    fn to_viewport_space(&self, pt: Point) -> Point {
        (**self).to_viewport_space(pt)
    }

    fn to_object_space(&self, pt: Point) -> Point {
        (**self).to_object_space(pt)
    }
}
