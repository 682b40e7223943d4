// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed set of model updates and the reducer that applies them.
//!
//! Every transition is pure and total: any [`ModelUpdate`] applied to any
//! [`Model`] yields a new `Model`. Updates that cannot take effect (an unknown
//! region key, a zoom delta that is non-finite or would overflow the zoom)
//! leave the model unchanged and are logged at `warn` level.

use kurbo::Size;
use understory_image_geometry::{BoundingBox, Coord, PixelSize};

use crate::model::{Model, RegionKey, clamp_zoom};

/// A single command against a thumbnail [`Model`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModelUpdate {
    /// Remove a region. Always clears the selection.
    DeleteSubregion(RegionKey),
    /// Insert a region under a freshly allocated key.
    AddSubregion(BoundingBox),
    /// Replace the bounds of an existing region.
    ModifySubregion(RegionKey, BoundingBox),
    /// Make `key` the selection. Unknown keys are ignored.
    SelectSubregion(RegionKey),
    /// Clear the selection.
    DeselectAll,
    /// Multiply the zoom by `1 + delta`, never going below `1`.
    SetZoom(f64),
    /// Center the viewport on an image-space point.
    SetFocus(Coord),
    /// Zoom by `1 + delta` while keeping `pivot` at the same screen position.
    ZoomAbout {
        /// Relative zoom change.
        delta: f64,
        /// Image-space point that must not move on screen.
        pivot: Coord,
    },
    /// A new container size was requested (typically from a resize).
    SetGeometry(PixelSize),
    /// The image reported its natural size.
    SetNaturalSize(PixelSize),
}

/// Applies one update to a model, returning the new model.
///
/// ```rust
/// use understory_image_geometry::{Coord, PixelSize};
/// use understory_thumbnail::{Model, ModelUpdate, apply_model_update};
///
/// let model = apply_model_update(Model::default(), &ModelUpdate::SetNaturalSize(PixelSize::new(400, 349)));
/// let model = apply_model_update(model, &ModelUpdate::SetGeometry(PixelSize::new(800, 600)));
///
/// // The container grows to keep the image's aspect ratio.
/// assert_eq!(model.container_geometry(), PixelSize::new(800, 698));
/// assert_eq!(model.focus(), Coord::new(200.0, 174.5));
///
/// // Zoom never drops below 1.
/// let model = apply_model_update(model, &ModelUpdate::SetZoom(-0.5));
/// assert_eq!(model.zoom(), 1.0);
/// ```
#[must_use]
pub fn apply_model_update(mut model: Model, update: &ModelUpdate) -> Model {
    log::trace!("applying {update:?}");
    match *update {
        ModelUpdate::SetFocus(focus) => model.focus = focus,
        ModelUpdate::SetZoom(delta) => {
            if let Some(zoom) = next_zoom(model.zoom, delta) {
                model.zoom = zoom;
            }
        }
        ModelUpdate::ZoomAbout { delta, pivot } => {
            if let Some(zoom) = next_zoom(model.zoom, delta) {
                zoom_about(&mut model, zoom, pivot);
            }
        }
        ModelUpdate::SetGeometry(requested) => {
            model.container_geometry = fit_aspect(requested, model.natural_size);
            model.focus = model.natural_size.center();
            log::debug!(
                "container geometry {}x{} (requested {}x{})",
                model.container_geometry.width,
                model.container_geometry.height,
                requested.width,
                requested.height
            );
        }
        ModelUpdate::SetNaturalSize(size) => {
            model.natural_size = size.at_least_one();
            model.container_geometry = fit_aspect(model.container_geometry, model.natural_size);
            model.focus = model.natural_size.center();
            log::debug!(
                "natural size {}x{}, container geometry {}x{}",
                model.natural_size.width,
                model.natural_size.height,
                model.container_geometry.width,
                model.container_geometry.height
            );
        }
        ModelUpdate::SelectSubregion(key) => {
            if model.regions.contains_key(&key) {
                model.selected = Some(key);
            } else {
                log::warn!("selecting unknown {key}");
            }
        }
        ModelUpdate::DeselectAll => model.selected = None,
        ModelUpdate::DeleteSubregion(key) => {
            if model.regions.remove(&key).is_none() {
                log::warn!("deleting unknown {key}");
            }
            model.selected = None;
        }
        ModelUpdate::AddSubregion(bounds) => match model.next_region_key() {
            Some(key) => {
                log::debug!("adding {key} at {bounds:?}");
                model.regions.insert(key, bounds);
            }
            None => log::warn!("region keys exhausted, dropping {bounds:?}"),
        },
        ModelUpdate::ModifySubregion(key, bounds) => match model.regions.get_mut(&key) {
            Some(slot) => *slot = bounds,
            None => log::warn!("modifying unknown {key}"),
        },
    }
    model
}

/// Returns `zoom * (1 + delta)` clamped to [`MIN_ZOOM`], or `None` if the
/// delta or the resulting zoom is not finite.
///
/// [`MIN_ZOOM`]: crate::MIN_ZOOM
fn next_zoom(zoom: f64, delta: f64) -> Option<f64> {
    if !delta.is_finite() {
        log::warn!("ignoring non-finite zoom delta {delta}");
        return None;
    }
    let next = zoom * (1.0 + delta);
    if next.is_finite() {
        Some(clamp_zoom(next))
    } else {
        log::warn!("ignoring zoom delta {delta}: zoom {zoom} would overflow");
        None
    }
}

/// Zooms to `zoom` about `pivot`.
///
/// The focus is moved by the factor actually applied after clamping, so the
/// pivot keeps its screen position even when the zoom hits the floor.
fn zoom_about(model: &mut Model, zoom: f64, pivot: Coord) {
    let applied = zoom / model.zoom;
    model.focus = Coord::new(
        pivot.x - (pivot.x - model.focus.x) / applied,
        pivot.y - (pivot.y - model.focus.y) / applied,
    );
    model.zoom = zoom;
}

/// Grows `requested` along one axis so it has the aspect ratio of `natural`.
fn fit_aspect(requested: PixelSize, natural: PixelSize) -> PixelSize {
    let aspect = natural.at_least_one().aspect_ratio();
    let alternate = PixelSize::round_from(Size::new(
        f64::from(requested.height) * aspect,
        f64::from(requested.width) / aspect,
    ));
    PixelSize::new(
        requested.width.max(alternate.width),
        requested.height.max(alternate.height),
    )
}
