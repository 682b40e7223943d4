// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_image_geometry --heading-base-level=0

//! Understory Image Geometry: value types for natural image-pixel space.
//!
//! This crate provides the small, `Copy` geometry vocabulary shared by the
//! scaled image and thumbnail crates:
//! - [`Coord`]: a point measured in natural image pixels.
//! - [`BoundingBox`]: a validated crop/selection rectangle in image pixels.
//! - [`PixelSize`]: integral pixel dimensions, with rounding coercions from
//!   floating-point sizes.
//!
//! All three types convert to and from their `kurbo` counterparts so callers
//! can mix them with affine transforms and rectangles.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_image_geometry::{BoundingBox, Coord, PixelSize};
//!
//! let natural = PixelSize::new(400, 349);
//! let crop = BoundingBox::new(Coord::new(10.0, 20.0), Coord::new(110.0, 70.0)).unwrap();
//!
//! assert_eq!(crop.width(), 100.0);
//! assert_eq!(crop.center(), Coord::new(60.0, 45.0));
//! assert!(crop.contains(Coord::new(10.0, 20.0)));
//!
//! // Inverted corners are rejected rather than silently normalized.
//! assert!(BoundingBox::new(Coord::new(5.0, 5.0), Coord::new(0.0, 0.0)).is_err());
//!
//! // ...unless normalization is what you asked for.
//! let drawn = BoundingBox::from_corners(Coord::new(5.0, 5.0), Coord::new(0.0, 0.0)).unwrap();
//! assert_eq!(drawn.top_left(), Coord::new(0.0, 0.0));
//!
//! assert!((natural.aspect_ratio() - 400.0 / 349.0).abs() < 1e-12);
//! ```
//!
//! ## Ordering
//!
//! [`Coord`] and [`BoundingBox`] are totally ordered (lexicographically, using
//! the IEEE 754 total order for each component) so they can be used as keys
//! in ordered maps and compared in tests.
//!
//! This crate is `no_std`.

#![no_std]

mod bounding_box;
mod coord;
mod error;
mod pixel_size;

pub use bounding_box::BoundingBox;
pub use coord::Coord;
pub use error::GeometryError;
pub use pixel_size::PixelSize;
