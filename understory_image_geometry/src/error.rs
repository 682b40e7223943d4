// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::Coord;

/// Errors produced when constructing or transforming image-space geometry.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// The top-left corner lies right of or below the bottom-right corner.
    #[error("invalid bounding box: top-left {top_left:?} is not above and left of bottom-right {bottom_right:?}")]
    InvalidBoundingBox {
        /// The offending top-left corner.
        top_left: Coord,
        /// The offending bottom-right corner.
        bottom_right: Coord,
    },
    /// A coordinate component was NaN or infinite.
    #[error("coordinate {0:?} is not finite")]
    NonFinite(Coord),
    /// A scale factor was zero, negative, or not finite.
    #[error("scale factor must be positive and finite, got {0}")]
    InvalidFactor(f64),
}
