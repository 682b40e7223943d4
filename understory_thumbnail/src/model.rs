// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::BTreeMap;
use core::fmt;

use understory_image_geometry::{BoundingBox, Coord, PixelSize};

/// The smallest zoom factor: the natural size fills the container.
pub const MIN_ZOOM: f64 = 1.0;

/// Identifier of a sub-region within one thumbnail.
///
/// Keys are allocated as one more than the largest key in use (or `0` for the
/// first region), so they increase monotonically while the highest region
/// survives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionKey(pub u32);

impl fmt::Display for RegionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "region #{}", self.0)
    }
}

/// Read-only view of one sub-region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    /// The region's key.
    pub key: RegionKey,
    /// The region's rectangle in natural image pixels.
    pub bounds: BoundingBox,
    /// Whether this region is the model's selection.
    pub selected: bool,
}

/// State of a thumbnail widget.
///
/// A `Model` only changes through [`apply_model_update`](crate::apply_model_update);
/// every derived quantity (offsets, transforms, layouts) is recomputed from it
/// on demand.
///
/// The default model is the zero/identity state of a widget whose image has
/// not loaded yet: focus at the origin, zoom `1`, no selection, a zero-sized
/// container, and a `1×1` natural size.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Model {
    pub(crate) focus: Coord,
    pub(crate) zoom: f64,
    pub(crate) selected: Option<RegionKey>,
    pub(crate) container_geometry: PixelSize,
    pub(crate) natural_size: PixelSize,
    pub(crate) regions: BTreeMap<RegionKey, BoundingBox>,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            focus: Coord::ORIGIN,
            zoom: MIN_ZOOM,
            selected: None,
            container_geometry: PixelSize::ZERO,
            natural_size: PixelSize::UNIT,
            regions: BTreeMap::new(),
        }
    }
}

impl Model {
    /// Creates a model with an explicit view, for restoring state and tests.
    ///
    /// `zoom` is clamped to at least [`MIN_ZOOM`] (non-finite zooms become
    /// `MIN_ZOOM`) and zero natural dimensions are coerced to `1`. The
    /// container geometry is taken as given.
    #[must_use]
    pub fn with_view(
        natural_size: PixelSize,
        container_geometry: PixelSize,
        focus: Coord,
        zoom: f64,
    ) -> Self {
        Self {
            focus,
            zoom: clamp_zoom(zoom),
            natural_size: natural_size.at_least_one(),
            container_geometry,
            ..Self::default()
        }
    }

    /// Returns the image-space point kept centered in the viewport.
    #[must_use]
    pub fn focus(&self) -> Coord {
        self.focus
    }

    /// Returns the zoom factor (always at least [`MIN_ZOOM`]).
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Returns the selected region key, if any.
    #[must_use]
    pub fn selected(&self) -> Option<RegionKey> {
        self.selected
    }

    /// Returns the container geometry in widget pixels.
    #[must_use]
    pub fn container_geometry(&self) -> PixelSize {
        self.container_geometry
    }

    /// Returns the natural image size (`1×1` until the image has loaded).
    #[must_use]
    pub fn natural_size(&self) -> PixelSize {
        self.natural_size
    }

    /// Returns the number of sub-regions.
    #[must_use]
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Returns the bounds of the region with `key`.
    #[must_use]
    pub fn region_bounds(&self, key: RegionKey) -> Option<BoundingBox> {
        self.regions.get(&key).copied()
    }

    /// Returns the region with `key`, with its derived selection flag.
    #[must_use]
    pub fn region(&self, key: RegionKey) -> Option<Region> {
        self.region_bounds(key).map(|bounds| self.view(key, bounds))
    }

    /// Iterates over all regions in ascending key order.
    pub fn regions(&self) -> impl DoubleEndedIterator<Item = Region> + '_ {
        self.regions
            .iter()
            .map(|(&key, &bounds)| self.view(key, bounds))
    }

    /// Returns the key the next added region will receive, or `None` once the
    /// key space is exhausted.
    #[must_use]
    pub fn next_region_key(&self) -> Option<RegionKey> {
        match self.regions.last_key_value() {
            None => Some(RegionKey(0)),
            Some((last, _)) => last.0.checked_add(1).map(RegionKey),
        }
    }

    fn view(&self, key: RegionKey, bounds: BoundingBox) -> Region {
        Region {
            key,
            bounds,
            selected: self.selected == Some(key),
        }
    }
}

/// Clamps a zoom factor into `[MIN_ZOOM, ∞)`, mapping NaN to `MIN_ZOOM`.
pub(crate) fn clamp_zoom(zoom: f64) -> f64 {
    if zoom.is_nan() {
        MIN_ZOOM
    } else {
        zoom.max(MIN_ZOOM)
    }
}
