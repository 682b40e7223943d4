// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use kurbo::{Point, Vec2};

/// A point in natural image-pixel space.
///
/// Equality, ordering and hashing use the IEEE 754 total order of each
/// component, so `Coord` can be used as a map key. Signed zeros compare equal
/// and all NaNs compare equal to each other (and greater than every number).
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    /// Horizontal position in image pixels.
    pub x: f64,
    /// Vertical position in image pixels.
    pub y: f64,
}

impl Coord {
    /// The image-space origin.
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Creates a new coordinate.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns `true` if both components are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Converts into a `kurbo` point with the same components.
    #[must_use]
    pub const fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the vector from the origin to this coordinate.
    #[must_use]
    pub const fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Returns this coordinate translated by `delta`.
    #[must_use]
    pub fn translate(self, delta: Vec2) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y)
    }
}

impl From<Point> for Coord {
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Coord> for Point {
    fn from(c: Coord) -> Self {
        c.to_point()
    }
}

impl From<(f64, f64)> for Coord {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl PartialEq for Coord {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Coord {}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> Ordering {
        canonical(self.x)
            .total_cmp(&canonical(other.x))
            .then_with(|| canonical(self.y).total_cmp(&canonical(other.y)))
    }
}

impl Hash for Coord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical(self.x).to_bits().hash(state);
        canonical(self.y).to_bits().hash(state);
    }
}

/// Folds `-0.0` into `0.0` and every NaN into the canonical NaN.
fn canonical(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else if v.is_nan() {
        f64::NAN
    } else {
        v
    }
}
