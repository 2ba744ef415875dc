// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

use crate::host::AnchoredObject;

/// Where an object's logical position sits relative to its drawable box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Origin {
    /// Constant offset from the drawable box's top-left corner.
    Fixed(Vec2),
    /// Offset as a fraction of the current size; `(0.5, 0.5)` is a centered pivot.
    Relative(Vec2),
}

impl Default for Origin {
    fn default() -> Self {
        Self::Fixed(Vec2::ZERO)
    }
}

impl Origin {
    /// Offset from the drawable top-left corner to the origin for `size`.
    #[must_use]
    pub fn offset(self, size: Size) -> Vec2 {
        match self {
            Self::Fixed(offset) => offset,
            Self::Relative(fraction) => {
                Vec2::new(fraction.x * size.width, fraction.y * size.height)
            }
        }
    }
}

/// Minimal scene object with a logical position, a size, and an [`Origin`].
///
/// The drawable box is derived from these, so a [`Origin::Relative`] object
/// shifts its box when resized.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SceneObject {
    position: Point,
    size: Size,
    origin: Origin,
}

impl SceneObject {
    /// Creates an object at `position` with the given `size` and `origin`.
    #[must_use]
    pub const fn new(position: Point, size: Size, origin: Origin) -> Self {
        Self {
            position,
            size,
            origin,
        }
    }

    /// Creates an object whose origin is its drawable top-left corner.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.origin(), rect.size(), Origin::default())
    }

    /// Moves the logical position.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Replaces the size.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Returns the origin placement.
    #[must_use]
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Drawable bounding box in object space.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.drawable_origin(), self.size)
    }
}

impl AnchoredObject for SceneObject {
    fn position(&self) -> Point {
        self.position
    }

    fn drawable_origin(&self) -> Point {
        self.position - self.origin.offset(self.size)
    }

    fn size(&self) -> Size {
        self.size
    }

    fn set_x(&mut self, x: f64) {
        self.position.x = x;
    }

    fn set_y(&mut self, y: f64) {
        self.position.y = y;
    }

    fn set_width(&mut self, width: f64) {
        self.size.width = width;
    }

    fn set_height(&mut self, height: f64) {
        self.size.height = height;
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};

    use super::{Origin, SceneObject};
    use crate::host::AnchoredObject;

    #[test]
    fn relative_origin_moves_drawable_box_on_resize() {
        let mut obj = SceneObject::new(
            Point::new(100.0, 100.0),
            Size::new(40.0, 20.0),
            Origin::Relative(Vec2::new(0.5, 0.5)),
        );
        assert_eq!(obj.drawable_origin(), Point::new(80.0, 90.0));

        obj.set_width(80.0);
        assert_eq!(obj.drawable_origin(), Point::new(60.0, 90.0));
        assert_eq!(obj.position(), Point::new(100.0, 100.0));
    }

    #[test]
    fn from_rect_uses_top_left_origin() {
        let obj = SceneObject::from_rect(Rect::new(10.0, 20.0, 60.0, 50.0));
        assert_eq!(obj.position(), Point::new(10.0, 20.0));
        assert_eq!(obj.drawable_origin(), Point::new(10.0, 20.0));
        assert_eq!(obj.bounds(), Rect::new(10.0, 20.0, 60.0, 50.0));
    }

    #[test]
    fn fixed_origin_ignores_size() {
        let mut obj = SceneObject::default();
        assert_eq!(obj.origin(), Origin::Fixed(Vec2::ZERO));

        let mut pivoted = SceneObject::new(Point::ZERO, Size::ZERO, Origin::Fixed(Vec2::new(4.0, 2.0)));
        pivoted.set_position(Point::new(14.0, 12.0));
        pivoted.set_size(Size::new(100.0, 100.0));
        assert_eq!(pivoted.bounds(), Rect::new(10.0, 10.0, 110.0, 110.0));

        obj.set_size(Size::new(5.0, 5.0));
        assert_eq!(obj.bounds(), Rect::new(0.0, 0.0, 5.0, 5.0));
    }
}
