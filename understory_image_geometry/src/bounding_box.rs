// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};

use crate::{Coord, GeometryError};

/// A crop or selection rectangle in natural image-pixel space.
///
/// The corners always satisfy `top_left.x <= bottom_right.x` and
/// `top_left.y <= bottom_right.y`, and both are finite. Use
/// [`BoundingBox::new`] to reject inverted corners or
/// [`BoundingBox::from_corners`] to normalize them.
///
/// Ordering is lexicographic on `(top_left, bottom_right)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Corners", into = "Corners")
)]
pub struct BoundingBox {
    top_left: Coord,
    bottom_right: Coord,
}

impl BoundingBox {
    /// Creates a bounding box from its top-left and bottom-right corners.
    ///
    /// Returns [`GeometryError::InvalidBoundingBox`] if the corners are
    /// inverted on either axis, and [`GeometryError::NonFinite`] if any
    /// component is NaN or infinite. Zero-area boxes are allowed.
    pub fn new(top_left: Coord, bottom_right: Coord) -> Result<Self, GeometryError> {
        check_finite(top_left)?;
        check_finite(bottom_right)?;
        if top_left.x > bottom_right.x || top_left.y > bottom_right.y {
            return Err(GeometryError::InvalidBoundingBox {
                top_left,
                bottom_right,
            });
        }
        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// Creates the bounding box spanned by two arbitrary corners.
    ///
    /// This is the constructor for rubber-band selections, where the drag can
    /// start at any corner.
    pub fn from_corners(a: Coord, b: Coord) -> Result<Self, GeometryError> {
        // `f64::min` drops NaN operands, so check before normalizing.
        check_finite(a)?;
        check_finite(b)?;
        Self::new(
            Coord::new(a.x.min(b.x), a.y.min(b.y)),
            Coord::new(a.x.max(b.x), a.y.max(b.y)),
        )
    }

    /// Creates a bounding box of `size` centered on `center`.
    ///
    /// Negative sizes are treated as their absolute value.
    pub fn centered_at(center: Coord, size: Size) -> Result<Self, GeometryError> {
        let half_w = size.width.abs() / 2.0;
        let half_h = size.height.abs() / 2.0;
        Self::new(
            Coord::new(center.x - half_w, center.y - half_h),
            Coord::new(center.x + half_w, center.y + half_h),
        )
    }

    /// Converts a `kurbo` rectangle, normalizing its corners.
    pub fn from_rect(rect: Rect) -> Result<Self, GeometryError> {
        Self::from_corners(Coord::new(rect.x0, rect.y0), Coord::new(rect.x1, rect.y1))
    }

    /// Returns the top-left corner.
    #[must_use]
    pub const fn top_left(&self) -> Coord {
        self.top_left
    }

    /// Returns the bottom-right corner.
    #[must_use]
    pub const fn bottom_right(&self) -> Coord {
        self.bottom_right
    }

    /// Returns the horizontal extent in image pixels.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.bottom_right.x - self.top_left.x
    }

    /// Returns the vertical extent in image pixels.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom_right.y - self.top_left.y
    }

    /// Returns the extent as a `kurbo` size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> Coord {
        Coord::new(
            (self.top_left.x + self.bottom_right.x) / 2.0,
            (self.top_left.y + self.bottom_right.y) / 2.0,
        )
    }

    /// Returns `true` if the box has zero width or height.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Returns `true` if `point` lies inside the box, edges included.
    #[must_use]
    pub fn contains(&self, point: Coord) -> bool {
        point.x >= self.top_left.x
            && point.x <= self.bottom_right.x
            && point.y >= self.top_left.y
            && point.y <= self.bottom_right.y
    }

    /// Scales the box by `factor` around `pivot`.
    ///
    /// The pivot keeps its position relative to the box, so a pivot inside the
    /// box stays inside it. `factor` must be positive and finite.
    pub fn scaled_about(&self, pivot: Coord, factor: f64) -> Result<Self, GeometryError> {
        if !(factor.is_finite() && factor > 0.0) {
            return Err(GeometryError::InvalidFactor(factor));
        }
        let scale = |c: Coord| {
            Coord::new(
                pivot.x + (c.x - pivot.x) * factor,
                pivot.y + (c.y - pivot.y) * factor,
            )
        };
        Self::new(scale(self.top_left), scale(self.bottom_right))
    }

    /// Converts into a `kurbo` rectangle.
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::from_points(self.top_left.to_point(), self.bottom_right.to_point())
    }
}

impl TryFrom<Rect> for BoundingBox {
    type Error = GeometryError;

    fn try_from(rect: Rect) -> Result<Self, Self::Error> {
        Self::from_rect(rect)
    }
}

impl From<BoundingBox> for Rect {
    fn from(bbox: BoundingBox) -> Self {
        bbox.to_rect()
    }
}

fn check_finite(c: Coord) -> Result<(), GeometryError> {
    if c.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::NonFinite(c))
    }
}

/// Unvalidated wire form of a [`BoundingBox`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct Corners {
    top_left: Coord,
    bottom_right: Coord,
}

#[cfg(feature = "serde")]
impl TryFrom<Corners> for BoundingBox {
    type Error = GeometryError;

    fn try_from(c: Corners) -> Result<Self, Self::Error> {
        Self::new(c.top_left, c.bottom_right)
    }
}

#[cfg(feature = "serde")]
impl From<BoundingBox> for Corners {
    fn from(b: BoundingBox) -> Self {
        Self {
            top_left: b.top_left,
            bottom_right: b.bottom_right,
        }
    }
}
