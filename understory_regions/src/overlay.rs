// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Size;
use understory_image_geometry::{BoundingBox, Coord, PixelSize};
use understory_scaled_image::{ImageEvent, ImageSource, PointerKind, ScaledImage};
use understory_thumbnail::{
    Model, ModelUpdate, RegionKey, WHEEL_ZOOM_DIVISOR, container_scale, model_offset,
};

use crate::draw::DrawState;

/// Fraction of the zoomed container a double-click region spans on each axis.
pub const NEW_REGION_FRACTION: f64 = 0.25;

/// One sub-region prepared for rendering.
#[derive(Clone, Debug)]
pub struct RegionView {
    /// The region's key.
    pub key: RegionKey,
    /// Whether this region is the model's selection.
    pub selected: bool,
    /// The region's rectangle in natural image pixels.
    pub bounds: BoundingBox,
    /// The big picture, cropped to `bounds`.
    pub picture: ScaledImage,
}

/// Sub-region overlay on top of a thumbnail's big picture.
///
/// The overlay only ever reads a [`Model`]. Every gesture is answered with at
/// most one [`ModelUpdate`] for the host to feed back into the thumbnail:
///
/// | Gesture (image space)                   | Update                         |
/// |-----------------------------------------|--------------------------------|
/// | click on an unselected region           | `SelectSubregion`              |
/// | click on the selected region            | `DeselectAll`                  |
/// | click on empty space while selected     | `DeselectAll`                  |
/// | double-click with nothing selected      | `AddSubregion` (fixed size)    |
/// | drag on empty space, nothing selected   | `AddSubregion` (drawn box)     |
/// | wheel over the selected region          | `ModifySubregion` (rescaled)   |
/// | [`RegionOverlay::delete_selected`]      | `DeleteSubregion`              |
///
/// Wheel input that yields no update should go to the thumbnail, which zooms
/// the big picture instead.
#[derive(Clone, Debug)]
pub struct RegionOverlay {
    source: ImageSource,
    draw: DrawState,
}

impl RegionOverlay {
    /// Creates an overlay showing crops of `source`.
    #[must_use]
    pub fn new(source: impl Into<ImageSource>) -> Self {
        Self {
            source: source.into(),
            draw: DrawState::default(),
        }
    }

    /// Returns the image identifier shared with the big picture.
    #[must_use]
    pub fn source(&self) -> &ImageSource {
        &self.source
    }

    /// Replaces the image identifier and abandons any drawing gesture.
    pub fn set_source(&mut self, source: impl Into<ImageSource>) {
        self.source = source.into();
        self.draw.cancel();
    }

    /// Returns the box being drawn, if a drawing gesture is active.
    #[must_use]
    pub fn draw_preview(&self) -> Option<BoundingBox> {
        self.draw.preview()
    }

    /// Builds one cropped picture per region, in ascending key order.
    ///
    /// Each picture shares the big picture's scale, offset, and top-level
    /// scale, so it lines up exactly with the part of the big picture it
    /// covers. While the model still has the placeholder `1x1` natural size
    /// the pictures stay unloaded and report themselves as not visible.
    #[must_use]
    pub fn views(&self, model: &Model) -> Vec<RegionView> {
        model
            .regions()
            .map(|region| RegionView {
                key: region.key,
                selected: region.selected,
                bounds: region.bounds,
                picture: self.picture(model, region.bounds),
            })
            .collect()
    }

    /// Returns the region under an image-space point.
    ///
    /// The selected region wins; otherwise the region with the largest key,
    /// which is drawn last, is on top.
    #[must_use]
    pub fn hit_test(&self, model: &Model, at: Coord) -> Option<RegionKey> {
        model
            .selected()
            .filter(|&key| model.region_bounds(key).is_some_and(|b| b.contains(at)))
            .or_else(|| {
                model
                    .regions()
                    .rev()
                    .find(|region| region.bounds.contains(at))
                    .map(|region| region.key)
            })
    }

    /// Handles a click at an image-space point.
    #[must_use]
    pub fn on_click(&self, model: &Model, at: Coord) -> Option<ModelUpdate> {
        match (self.hit_test(model, at), model.selected()) {
            (Some(key), Some(selected)) if key == selected => Some(ModelUpdate::DeselectAll),
            (Some(key), _) => Some(ModelUpdate::SelectSubregion(key)),
            (None, Some(_)) => Some(ModelUpdate::DeselectAll),
            (None, None) => None,
        }
    }

    /// Handles a double-click at an image-space point.
    ///
    /// Adds a region a quarter of the zoomed container in size, centered on
    /// the click. Nothing is added while a region is selected.
    #[must_use]
    pub fn on_double_click(&self, model: &Model, at: Coord) -> Option<ModelUpdate> {
        if model.selected().is_some() {
            return None;
        }
        let container = model.container_geometry().to_size();
        let size = Size::new(
            container.width / model.zoom() * NEW_REGION_FRACTION,
            container.height / model.zoom() * NEW_REGION_FRACTION,
        );
        match BoundingBox::centered_at(at, size) {
            Ok(bounds) if !bounds.is_degenerate() => Some(ModelUpdate::AddSubregion(bounds)),
            Ok(_) => None,
            Err(err) => {
                log::warn!("not adding region at {at:?}: {err}");
                None
            }
        }
    }

    /// Handles a wheel event at an image-space point.
    ///
    /// Over the selected region, rescales it about the cursor by
    /// `1 + delta_y / 200`. Returns `None` anywhere else, or when the factor
    /// would collapse or flip the region.
    #[must_use]
    pub fn on_wheel(&self, model: &Model, delta_y: f64, at: Coord) -> Option<ModelUpdate> {
        let key = model.selected()?;
        let bounds = model.region_bounds(key)?;
        if !bounds.contains(at) {
            return None;
        }
        match bounds.scaled_about(at, 1.0 + delta_y / WHEEL_ZOOM_DIVISOR) {
            Ok(scaled) => Some(ModelUpdate::ModifySubregion(key, scaled)),
            Err(err) => {
                log::warn!("not resizing {key}: {err}");
                None
            }
        }
    }

    /// Returns the update deleting the selected region, if any.
    #[must_use]
    pub fn delete_selected(&self, model: &Model) -> Option<ModelUpdate> {
        model.selected().map(ModelUpdate::DeleteSubregion)
    }

    /// Routes an image-space event from the big picture to the gesture
    /// handlers above.
    pub fn on_image_event(&mut self, model: &Model, event: ImageEvent) -> Option<ModelUpdate> {
        match event {
            ImageEvent::Wheel { delta_y, at } => self.on_wheel(model, delta_y, at),
            ImageEvent::Pointer { kind, at } => match kind {
                PointerKind::Down => {
                    if model.selected().is_none() && self.hit_test(model, at).is_none() {
                        self.draw.start(at);
                    }
                    None
                }
                PointerKind::Move => {
                    self.draw.update(at);
                    None
                }
                PointerKind::Up => self.draw.finish(at).map(ModelUpdate::AddSubregion),
                PointerKind::Click => self.on_click(model, at),
                PointerKind::DoubleClick => self.on_double_click(model, at),
            },
        }
    }

    fn picture(&self, model: &Model, bounds: BoundingBox) -> ScaledImage {
        let mut picture = ScaledImage::new(self.source.clone());
        // The placeholder natural size means the image has not loaded yet.
        if model.natural_size() != PixelSize::UNIT {
            picture.on_load(model.natural_size());
        }
        picture.set_offset(model_offset(model));
        picture.set_crop(Some(bounds));
        let results = [
            picture.set_scale(model.zoom()),
            picture.set_top_level_scale(container_scale(model)),
        ];
        for result in results {
            if let Err(err) = result {
                log::warn!("region picture keeps default scale: {err}");
            }
        }
        picture
    }
}
