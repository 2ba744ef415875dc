// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

use crate::host::CoordinateTransform;

/// Camera of one rendering layer: a view-space pan plus a uniform zoom.
///
/// Object space maps to viewport pixels as `pixel = object * zoom + pan`.
/// A fresh layer is the identity, so object coordinates are pixels.
#[derive(Clone, Copy, Debug)]
pub struct Layer {
    pan: Vec2,
    zoom: f64,
    object_to_view: Affine,
    view_to_object: Affine,
}

impl Default for Layer {
    fn default() -> Self {
        Self::new()
    }
}

impl Layer {
    /// Creates an identity layer (no pan, zoom `1.0`).
    #[must_use]
    pub fn new() -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: 1.0,
            object_to_view: Affine::IDENTITY,
            view_to_object: Affine::IDENTITY,
        }
    }

    /// Creates a layer with the given pan (in pixels) and zoom.
    ///
    /// A non-positive zoom is ignored and `1.0` is used instead.
    #[must_use]
    pub fn with_camera(pan: Vec2, zoom: f64) -> Self {
        let mut layer = Self::new();
        layer.pan = pan;
        layer.set_zoom(zoom);
        layer.rebuild_transforms();
        layer
    }

    /// Returns the current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Returns the current pan offset in pixels.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Sets the zoom factor. Non-positive values are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom <= 0.0 || (zoom - self.zoom).abs() < f64::EPSILON {
            return;
        }
        self.zoom = zoom;
        self.rebuild_transforms();
    }

    /// Pans the camera by a delta in pixels.
    pub fn pan_by_view(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.pan += delta;
        self.rebuild_transforms();
    }

    fn rebuild_transforms(&mut self) {
        self.object_to_view = Affine::translate(self.pan) * Affine::scale(self.zoom);
        self.view_to_object = self.object_to_view.inverse();
    }
}

impl CoordinateTransform for Layer {
    fn to_viewport_space(&self, pt: Point) -> Point {
        self.object_to_view * pt
    }

    fn to_object_space(&self, pt: Point) -> Point {
        self.view_to_object * pt
    }
}
