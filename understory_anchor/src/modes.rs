// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How a single object edge relates to the viewport along its axis.
///
/// This is the axis-independent core shared by [`HorizontalAnchor`] and
/// [`VerticalAnchor`]. The near edge is the viewport's left (or top) edge,
/// the far edge is its right (or bottom) edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorMode {
    /// Keep a constant pixel distance from the viewport's near edge.
    Near,
    /// Keep a constant pixel distance from the viewport's far edge.
    Far,
    /// Keep a constant fraction of the viewport extent.
    Proportional,
}

impl AnchorMode {
    /// Converts a viewport-space coordinate into a cached distance.
    ///
    /// `extent` is the viewport width or height. For [`AnchorMode::Proportional`]
    /// a zero extent yields a non-finite fraction; it is not guarded.
    #[must_use]
    pub fn distance_from_pixel(self, pixel: f64, extent: f64) -> f64 {
        match self {
            Self::Near => pixel,
            Self::Far => extent - pixel,
            Self::Proportional => pixel / extent,
        }
    }

    /// Converts a cached distance back into a viewport-space coordinate.
    ///
    /// This is the exact inverse of [`AnchorMode::distance_from_pixel`] for a
    /// fixed `extent`.
    #[must_use]
    pub fn pixel_from_distance(self, distance: f64, extent: f64) -> f64 {
        match self {
            Self::Near => distance,
            Self::Far => extent - distance,
            Self::Proportional => distance * extent,
        }
    }
}

/// Anchor for a left or right object edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HorizontalAnchor {
    /// The edge is not anchored.
    #[default]
    None,
    /// Anchored to the viewport's left edge.
    WindowLeft,
    /// Anchored to the viewport's right edge.
    WindowRight,
    /// Anchored to a fraction of the viewport width.
    Proportional,
}

impl HorizontalAnchor {
    /// Returns the axis-independent mode, or `None` for an unanchored edge.
    #[must_use]
    pub const fn mode(self) -> Option<AnchorMode> {
        match self {
            Self::None => None,
            Self::WindowLeft => Some(AnchorMode::Near),
            Self::WindowRight => Some(AnchorMode::Far),
            Self::Proportional => Some(AnchorMode::Proportional),
        }
    }

    /// Returns `true` unless this is [`HorizontalAnchor::None`].
    #[must_use]
    pub const fn is_anchored(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Decodes the engine's numeric anchor code; unknown codes map to `None`.
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            1 => Self::WindowLeft,
            2 => Self::WindowRight,
            3 => Self::Proportional,
            _ => Self::None,
        }
    }

    /// Returns the engine's numeric anchor code.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::None => 0,
            Self::WindowLeft => 1,
            Self::WindowRight => 2,
            Self::Proportional => 3,
        }
    }

    /// Decodes an anchor name such as `"WINDOW_LEFT"`; unknown names map to `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "WINDOW_LEFT" => Self::WindowLeft,
            "WINDOW_RIGHT" => Self::WindowRight,
            "PROPORTIONAL" => Self::Proportional,
            _ => Self::None,
        }
    }
}

/// Anchor for a top or bottom object edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum VerticalAnchor {
    /// The edge is not anchored.
    #[default]
    None,
    /// Anchored to the viewport's top edge.
    WindowTop,
    /// Anchored to the viewport's bottom edge.
    WindowBottom,
    /// Anchored to a fraction of the viewport height.
    Proportional,
}

impl VerticalAnchor {
    /// Returns the axis-independent mode, or `None` for an unanchored edge.
    #[must_use]
    pub const fn mode(self) -> Option<AnchorMode> {
        match self {
            Self::None => None,
            Self::WindowTop => Some(AnchorMode::Near),
            Self::WindowBottom => Some(AnchorMode::Far),
            Self::Proportional => Some(AnchorMode::Proportional),
        }
    }

    /// Returns `true` unless this is [`VerticalAnchor::None`].
    #[must_use]
    pub const fn is_anchored(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Decodes the engine's numeric anchor code; unknown codes map to `None`.
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            1 => Self::WindowTop,
            2 => Self::WindowBottom,
            3 => Self::Proportional,
            _ => Self::None,
        }
    }

    /// Returns the engine's numeric anchor code.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::None => 0,
            Self::WindowTop => 1,
            Self::WindowBottom => 2,
            Self::Proportional => 3,
        }
    }

    /// Decodes an anchor name such as `"WINDOW_BOTTOM"`; unknown names map to `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "WINDOW_TOP" => Self::WindowTop,
            "WINDOW_BOTTOM" => Self::WindowBottom,
            "PROPORTIONAL" => Self::Proportional,
            _ => Self::None,
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use core::fmt;
    use core::marker::PhantomData;

    use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{HorizontalAnchor, VerticalAnchor};

    trait Lenient: Sized {
        const UNANCHORED: Self;
        fn decode_code(code: i64) -> Self;
        fn decode_name(name: &str) -> Self;
    }

    impl Lenient for HorizontalAnchor {
        const UNANCHORED: Self = Self::None;
        fn decode_code(code: i64) -> Self {
            Self::from_code(code)
        }
        fn decode_name(name: &str) -> Self {
            Self::from_name(name)
        }
    }

    impl Lenient for VerticalAnchor {
        const UNANCHORED: Self = Self::None;
        fn decode_code(code: i64) -> Self {
            Self::from_code(code)
        }
        fn decode_name(name: &str) -> Self {
            Self::from_name(name)
        }
    }

    /// Accepts codes, names, and anything else (as unanchored).
    struct LenientVisitor<T>(PhantomData<T>);

    impl<'de, T: Lenient> Visitor<'de> for LenientVisitor<T> {
        type Value = T;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an anchor code or name")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<T, E> {
            Ok(T::decode_code(v))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<T, E> {
            Ok(i64::try_from(v).map_or(T::UNANCHORED, T::decode_code))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<T, E> {
            for code in 0..=3_i32 {
                if v == f64::from(code) {
                    return Ok(T::decode_code(i64::from(code)));
                }
            }
            Ok(T::UNANCHORED)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
            Ok(T::decode_name(v))
        }

        fn visit_bool<E: de::Error>(self, _v: bool) -> Result<T, E> {
            Ok(T::UNANCHORED)
        }

        fn visit_unit<E: de::Error>(self) -> Result<T, E> {
            Ok(T::UNANCHORED)
        }

        fn visit_none<E: de::Error>(self) -> Result<T, E> {
            Ok(T::UNANCHORED)
        }

        fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<T, D::Error> {
            deserializer.deserialize_any(self)
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<T, A::Error> {
            while seq.next_element::<IgnoredAny>()?.is_some() {}
            Ok(T::UNANCHORED)
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<T, A::Error> {
            while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
            Ok(T::UNANCHORED)
        }
    }

    impl<'de> Deserialize<'de> for HorizontalAnchor {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(LenientVisitor(PhantomData))
        }
    }

    impl<'de> Deserialize<'de> for VerticalAnchor {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(LenientVisitor(PhantomData))
        }
    }

    impl Serialize for HorizontalAnchor {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_u8(self.code())
        }
    }

    impl Serialize for VerticalAnchor {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_u8(self.code())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AnchorMode, HorizontalAnchor, VerticalAnchor};

    #[test]
    fn near_and_far_mirror_each_other() {
        let extent = 800.0;
        for pixel in [0.0, 100.0, 799.5, 1200.0, -40.0] {
            let near = AnchorMode::Near.distance_from_pixel(pixel, extent);
            let far = AnchorMode::Far.distance_from_pixel(pixel, extent);
            assert_eq!(near + far, extent, "near and far distances must sum to the extent");
            assert_eq!(AnchorMode::Near.pixel_from_distance(near, extent), pixel);
            assert_eq!(AnchorMode::Far.pixel_from_distance(far, extent), pixel);
        }
    }

    #[test]
    fn proportional_is_a_fraction_of_extent() {
        let d = AnchorMode::Proportional.distance_from_pixel(100.0, 800.0);
        assert_eq!(d, 0.125);
        assert_eq!(AnchorMode::Proportional.pixel_from_distance(d, 1600.0), 200.0);

        // Past the far edge the fraction exceeds one.
        let past = AnchorMode::Proportional.distance_from_pixel(1000.0, 800.0);
        assert!(past > 1.0);
    }

    #[test]
    fn zero_extent_is_not_guarded() {
        let d = AnchorMode::Proportional.distance_from_pixel(100.0, 0.0);
        assert!(!d.is_finite());
        let nan = AnchorMode::Proportional.distance_from_pixel(0.0, 0.0);
        assert!(nan.is_nan());
    }

    #[test]
    fn codes_and_names_decode_leniently() {
        assert_eq!(HorizontalAnchor::from_code(1), HorizontalAnchor::WindowLeft);
        assert_eq!(HorizontalAnchor::from_code(2), HorizontalAnchor::WindowRight);
        assert_eq!(HorizontalAnchor::from_code(3), HorizontalAnchor::Proportional);
        assert_eq!(HorizontalAnchor::from_code(42), HorizontalAnchor::None);
        assert_eq!(HorizontalAnchor::from_code(-1), HorizontalAnchor::None);
        assert_eq!(VerticalAnchor::from_code(2), VerticalAnchor::WindowBottom);
        assert_eq!(VerticalAnchor::from_name("WINDOW_TOP"), VerticalAnchor::WindowTop);
        assert_eq!(VerticalAnchor::from_name("WINDOW_LEFT"), VerticalAnchor::None);

        for code in 0..=3 {
            assert_eq!(i64::from(HorizontalAnchor::from_code(code).code()), code);
            assert_eq!(i64::from(VerticalAnchor::from_code(code).code()), code);
        }
    }

    #[test]
    fn axis_anchors_map_to_shared_modes() {
        assert_eq!(HorizontalAnchor::None.mode(), None);
        assert_eq!(HorizontalAnchor::WindowLeft.mode(), Some(AnchorMode::Near));
        assert_eq!(HorizontalAnchor::WindowRight.mode(), Some(AnchorMode::Far));
        assert_eq!(VerticalAnchor::WindowTop.mode(), Some(AnchorMode::Near));
        assert_eq!(VerticalAnchor::WindowBottom.mode(), Some(AnchorMode::Far));
        assert_eq!(VerticalAnchor::Proportional.mode(), Some(AnchorMode::Proportional));
        assert!(!VerticalAnchor::None.is_anchored());
        assert!(HorizontalAnchor::Proportional.is_anchored());
    }
}
