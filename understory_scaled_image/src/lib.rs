// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_scaled_image --heading-base-level=0

//! Understory Scaled Image: a headless scaled, offset, and cropped image.
//!
//! A [`ScaledImage`] renders a source image of known natural size inside a
//! fixed-size container. Three independent knobs shape what is visible:
//! - an inner **scale**, multiplied by a caller-supplied **top-level scale**;
//! - an **offset** (in image pixels) of the visible window inside the container;
//! - an optional **crop** [`BoundingBox`] selecting a sub-region of the image.
//!
//! The crate does **not** build any elements or draw pixels. Instead it
//! computes, for every render cycle, a [`ScaledImageLayout`] with the position
//! and size of the container, the cropping window, and the image element, and
//! it converts pointer and wheel input from screen space into natural
//! image-pixel space. Consumers only ever observe image-space coordinates.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use understory_image_geometry::{Coord, PixelSize};
//! use understory_scaled_image::{ImageEvent, PointerInput, PointerKind, ScaledImage};
//!
//! let mut image = ScaledImage::new("photo.png");
//! image.on_load(PixelSize::new(400, 300));
//! image.set_top_level_scale(2.0).unwrap();
//! image.set_offset(Vec2::new(10.0, 0.0));
//!
//! // The container tracks the natural size times the top-level scale.
//! assert_eq!(image.container_size(), PixelSize::new(800, 600));
//!
//! // Screen and image space are exact inverses of each other.
//! let screen = image.image_to_screen(Coord::new(50.0, 50.0));
//! assert_eq!(screen, Point::new(120.0, 100.0));
//! assert_eq!(image.screen_to_image(screen), Coord::new(50.0, 50.0));
//!
//! // Raw pointer input is localized against the element origin first.
//! let event = image.handle_pointer(PointerInput {
//!     kind: PointerKind::Click,
//!     client: Point::new(220.0, 200.0),
//!     element_origin: Point::new(100.0, 100.0),
//! });
//! assert_eq!(event, ImageEvent::Pointer { kind: PointerKind::Click, at: Coord::new(50.0, 50.0) });
//! ```
//!
//! ## Cropping
//!
//! Crops are expressed in natural image pixels, so cropping a 10×10 image to
//! its top-left quarter always shows exactly a quarter of the picture,
//! whatever the absolute pixel scale:
//!
//! ```rust
//! use understory_image_geometry::{BoundingBox, Coord, PixelSize};
//! use understory_scaled_image::ScaledImage;
//!
//! let mut image = ScaledImage::new("tile.png");
//! image.on_load(PixelSize::new(10, 10));
//! image.set_crop(Some(BoundingBox::new(Coord::new(0.0, 0.0), Coord::new(5.0, 5.0)).unwrap()));
//! image.set_top_level_scale(3.0).unwrap();
//!
//! let layout = image.layout();
//! assert_eq!(layout.crop_region.size.width * 2.0, layout.image.size.width);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.
//!
//! [`BoundingBox`]: understory_image_geometry::BoundingBox

#![no_std]

extern crate alloc;

mod config;
mod events;
mod image;
mod layout;

pub use config::{ConfigError, ScaledImageConfig};
pub use events::{ImageEvent, PointerInput, PointerKind, WheelInput};
pub use image::{ImageSource, ScaledImage, ScaledImageDebugInfo};
pub use layout::{ElementBox, ScaledImageLayout};
