// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_thumbnail --heading-base-level=0

//! Understory Thumbnail: a pan/zoom image navigator driven by a reducer.
//!
//! This crate keeps the _state_ of a zoomable image view in one plain
//! [`Model`] (focus point, zoom, container geometry, natural size, and a set of
//! keyed sub-regions with at most one selected) and changes it only through
//! [`apply_model_update`], a pure function over a closed set of
//! [`ModelUpdate`]s.
//!
//! On top of that sits [`Thumbnail`], the widget wiring:
//! - a **big picture**, a [`ScaledImage`] scaled by the zoom and offset so the
//!   focus stays centered;
//! - a **navigator**, the whole image at a quarter of the container scale.
//!   Clicking it re-centers the big picture.
//!
//! Input from independent streams (image load, resize, pointer) is queued in
//! an [`UpdateQueue`] and reduced in a deterministic order on
//! [`Thumbnail::flush`], after which the pictures are rebuilt once.
//!
//! The coordinate helpers ([`model_offset`], [`image_to_widget`],
//! [`widget_to_image`], ...) are pure functions of the model and are never
//! stored.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use understory_image_geometry::{Coord, PixelSize};
//! use understory_scaled_image::WheelInput;
//! use understory_thumbnail::{Thumbnail, ThumbnailConfig, model_offset};
//!
//! let mut thumbnail = Thumbnail::new(ThumbnailConfig::new("scan.png")).unwrap();
//! thumbnail.on_image_loaded(PixelSize::new(400, 349));
//! thumbnail.on_resize(PixelSize::new(800, 600));
//! thumbnail.flush();
//!
//! // The container keeps the image's aspect ratio and the focus starts centered.
//! let model = thumbnail.model();
//! assert_eq!(model.container_geometry(), PixelSize::new(800, 698));
//! assert_eq!(model.focus(), Coord::new(200.0, 174.5));
//! assert_eq!(model_offset(model), Vec2::ZERO);
//!
//! // Scrolling the big picture zooms toward the cursor.
//! thumbnail.on_big_picture_wheel(WheelInput {
//!     delta_y: 100.0,
//!     client: Point::new(400.0, 349.0),
//!     element_origin: Point::ORIGIN,
//! });
//! thumbnail.flush();
//! assert_eq!(thumbnail.model().zoom(), 1.5);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.
//!
//! [`ScaledImage`]: understory_scaled_image::ScaledImage

#![no_std]

extern crate alloc;

mod model;
mod queue;
mod thumbnail;
mod transform;
mod update;

pub use model::{MIN_ZOOM, Model, Region, RegionKey};
pub use queue::{UpdateQueue, UpdateSource};
pub use thumbnail::{Thumbnail, ThumbnailConfig, ThumbnailDebugInfo, WHEEL_ZOOM_DIVISOR};
pub use transform::{
    container_scale, image_space_to_widget_space, image_to_widget, model_offset,
    widget_space_to_image_space, widget_to_image,
};
pub use update::{ModelUpdate, apply_model_update};
