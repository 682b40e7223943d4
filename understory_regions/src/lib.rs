// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_regions --heading-base-level=0

//! Understory Regions: a sub-region overlay for thumbnails.
//!
//! A [`RegionOverlay`] sits on top of a thumbnail's big picture. It turns
//! image-space gestures into [`ModelUpdate`]s (select, deselect, add, resize,
//! delete) and builds one cropped [`ScaledImage`] per region for rendering.
//! It never mutates the model; the host feeds the returned updates back into
//! the thumbnail, which reduces them on its next flush.
//!
//! Drawing a region by dragging uses [`DrawState`], a small press-drag-release
//! tracker that yields a normalized [`BoundingBox`].
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_image_geometry::{Coord, PixelSize};
//! use understory_regions::RegionOverlay;
//! use understory_thumbnail::{ModelUpdate, Thumbnail, ThumbnailConfig};
//!
//! let mut thumbnail = Thumbnail::new(ThumbnailConfig::new("map.png")).unwrap();
//! thumbnail.on_image_loaded(PixelSize::new(400, 300));
//! thumbnail.on_resize(PixelSize::new(800, 600));
//! thumbnail.flush();
//!
//! let overlay = RegionOverlay::new("map.png");
//!
//! // Double-click adds a region a quarter of the container in size.
//! let add = overlay.on_double_click(thumbnail.model(), Coord::new(200.0, 150.0)).unwrap();
//! thumbnail.dispatch(add);
//! assert_eq!(thumbnail.model().region_count(), 1);
//!
//! // Clicking inside it selects it.
//! let select = overlay.on_click(thumbnail.model(), Coord::new(200.0, 150.0)).unwrap();
//! thumbnail.dispatch(select);
//! assert!(thumbnail.model().selected().is_some());
//!
//! // Delete removes it and clears the selection.
//! let delete = overlay.delete_selected(thumbnail.model()).unwrap();
//! assert!(matches!(delete, ModelUpdate::DeleteSubregion(_)));
//! thumbnail.dispatch(delete);
//! assert_eq!(thumbnail.model().region_count(), 0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.
//!
//! [`ModelUpdate`]: understory_thumbnail::ModelUpdate
//! [`ScaledImage`]: understory_scaled_image::ScaledImage
//! [`BoundingBox`]: understory_image_geometry::BoundingBox

#![no_std]

extern crate alloc;

mod draw;
mod overlay;

pub use draw::DrawState;
pub use overlay::{NEW_REGION_FRACTION, RegionOverlay, RegionView};
