// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

use crate::Coord;

/// Integral pixel dimensions.
///
/// Used both for the natural size of an image and for the on-screen geometry
/// of a container. Conversions from floating-point sizes go through
/// [`PixelSize::round_from`], which is the single place where screen
/// measurements are snapped to whole pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PixelSize {
    /// A zero-sized extent.
    pub const ZERO: Self = Self::new(0, 0);

    /// A one-by-one extent, the placeholder natural size of an image whose
    /// real size is not known yet.
    pub const UNIT: Self = Self::new(1, 1);

    /// Creates a new pixel size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Rounds a floating-point size to the nearest whole pixels.
    ///
    /// Negative and NaN components become `0`; components beyond `u32::MAX`
    /// saturate.
    #[must_use]
    pub fn round_from(size: Size) -> Self {
        let rounded = size.round();
        Self::new(to_pixels(rounded.width), to_pixels(rounded.height))
    }

    /// Returns this size with any zero dimension replaced by `1`.
    ///
    /// Natural sizes pass through here so that aspect ratios and inverse
    /// scales never divide by zero.
    #[must_use]
    pub fn at_least_one(self) -> Self {
        Self::new(self.width.max(1), self.height.max(1))
    }

    /// Returns `true` if either dimension is zero.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns `width / height`.
    ///
    /// This is infinite or NaN for an empty size; see [`PixelSize::at_least_one`].
    #[must_use]
    pub fn aspect_ratio(self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// Returns the center of the extent, measured from its origin.
    #[must_use]
    pub fn center(self) -> Coord {
        Coord::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// Converts into a floating-point `kurbo` size.
    #[must_use]
    pub fn to_size(self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

impl From<(u32, u32)> for PixelSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

impl From<PixelSize> for Size {
    fn from(size: PixelSize) -> Self {
        size.to_size()
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "float-to-int `as` saturates and maps NaN to zero, which is the coercion we want"
)]
fn to_pixels(v: f64) -> u32 {
    v as u32
}
