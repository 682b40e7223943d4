// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use understory_image_geometry::PixelSize;
use understory_scaled_image::{
    ConfigError, ImageEvent, ImageSource, PointerInput, PointerKind, ScaledImage,
    ScaledImageConfig, ScaledImageDebugInfo, WheelInput,
};

use crate::model::{Model, Region};
use crate::queue::{UpdateQueue, UpdateSource};
use crate::transform::{container_scale, model_offset};
use crate::update::{ModelUpdate, apply_model_update};

/// Wheel `delta_y` units per unit of zoom delta.
pub const WHEEL_ZOOM_DIVISOR: f64 = 200.0;

/// Construction-time configuration of a [`Thumbnail`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ThumbnailConfig {
    /// Image identifier shared by the big picture, navigator, and overlays.
    pub source: String,
    /// Style-attribute overrides for the big picture.
    pub style: Vec<(String, String)>,
    /// How much smaller the navigator is than the big picture.
    pub navigator_divisor: f64,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            source: String::new(),
            style: Vec::new(),
            navigator_divisor: 4.0,
        }
    }
}

impl ThumbnailConfig {
    /// Creates a configuration for `source` with a quarter-size navigator.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }
}

/// A pan/zoom widget: a big picture plus a picture-in-picture navigator.
///
/// The thumbnail exclusively owns its [`Model`]. Input is translated into
/// [`ModelUpdate`]s and queued; [`Thumbnail::flush`] reduces the queue in
/// deterministic order and then recomputes the derived pictures once.
///
/// - The **big picture** shows the image at `zoom`, offset by
///   [`model_offset`], with a top-level scale of [`container_scale`].
/// - The **navigator** shows the whole image at the container scale divided
///   by the navigator divisor (4 by default). Clicking it re-centers the big
///   picture.
#[derive(Clone, Debug)]
pub struct Thumbnail {
    model: Model,
    queue: UpdateQueue,
    big_picture: ScaledImage,
    navigator: ScaledImage,
    navigator_divisor: f64,
    revision: u64,
}

impl Thumbnail {
    /// Creates a thumbnail for an image that has not loaded yet.
    ///
    /// Returns [`ConfigError::InvalidConfiguration`] if the navigator divisor
    /// is not positive and finite.
    pub fn new(config: ThumbnailConfig) -> Result<Self, ConfigError> {
        let ThumbnailConfig {
            source,
            style,
            navigator_divisor,
        } = config;
        if !(navigator_divisor.is_finite() && navigator_divisor > 0.0) {
            return Err(ConfigError::InvalidConfiguration {
                field: "navigator_divisor",
                value: navigator_divisor,
            });
        }
        let source = ImageSource::from(source);
        let mut big_config = ScaledImageConfig::new(source.as_str());
        big_config.style = style;
        let big_picture = ScaledImage::from_config(big_config)?;
        let navigator = ScaledImage::new(source);
        let mut thumbnail = Self {
            model: Model::default(),
            queue: UpdateQueue::new(),
            big_picture,
            navigator,
            navigator_divisor,
            revision: 0,
        };
        thumbnail.sync_pictures();
        Ok(thumbnail)
    }

    /// Returns the current model.
    #[must_use]
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Iterates over the model's regions in ascending key order.
    pub fn regions(&self) -> impl DoubleEndedIterator<Item = Region> + '_ {
        self.model.regions()
    }

    /// Returns the big picture.
    #[must_use]
    pub fn big_picture(&self) -> &ScaledImage {
        &self.big_picture
    }

    /// Returns the navigator picture.
    #[must_use]
    pub fn navigator(&self) -> &ScaledImage {
        &self.navigator
    }

    /// Returns a counter that increases whenever a flush changes the model.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the number of updates waiting for the next flush.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Enqueues an update from `source` without reducing it yet.
    pub fn push(&mut self, source: UpdateSource, update: ModelUpdate) {
        self.queue.push(source, update);
    }

    /// Enqueues every update produced by an overlay or other consumer.
    pub fn push_all(&mut self, updates: impl IntoIterator<Item = ModelUpdate>) {
        for update in updates {
            self.queue.push_update(update);
        }
    }

    /// Reduces all pending updates and refreshes the derived pictures.
    ///
    /// Returns `true` if the model changed.
    pub fn flush(&mut self) -> bool {
        if self.queue.is_empty() {
            return false;
        }
        let before = self.model.clone();
        let mut model = core::mem::take(&mut self.model);
        for update in self.queue.drain() {
            model = apply_model_update(model, &update);
        }
        self.model = model;
        if self.model == before {
            return false;
        }
        self.revision += 1;
        self.sync_pictures();
        true
    }

    /// Enqueues `update` on its natural stream and flushes immediately.
    pub fn dispatch(&mut self, update: ModelUpdate) -> bool {
        self.queue.push_update(update);
        self.flush()
    }

    /// Replaces the image shown by every picture. Setting the current source
    /// again does nothing.
    ///
    /// The pictures return to their unloaded state until
    /// [`Thumbnail::on_image_loaded`] reports the new natural size. The model
    /// follows them on the next flush: its natural size goes back to `1x1`.
    pub fn set_source(&mut self, source: impl Into<ImageSource>) {
        let source = source.into();
        if *self.big_picture.source() == source {
            return;
        }
        self.big_picture.set_source(source.clone());
        self.navigator.set_source(source);
        self.queue.push(
            UpdateSource::NaturalSize,
            ModelUpdate::SetNaturalSize(PixelSize::UNIT),
        );
    }

    /// The image resource finished loading with the given natural size.
    pub fn on_image_loaded(&mut self, natural_size: PixelSize) {
        self.big_picture.on_load(natural_size);
        self.navigator.on_load(natural_size);
        self.queue
            .push(UpdateSource::NaturalSize, ModelUpdate::SetNaturalSize(natural_size));
    }

    /// The container was resized to `size` widget pixels.
    pub fn on_resize(&mut self, size: PixelSize) {
        self.queue
            .push(UpdateSource::Resize, ModelUpdate::SetGeometry(size));
    }

    /// Handles pointer input on the navigator.
    ///
    /// A click re-centers the big picture on the clicked image-space point.
    pub fn on_navigator_pointer(&mut self, input: PointerInput) -> ImageEvent {
        let event = self.navigator.handle_pointer(input);
        if let ImageEvent::Pointer {
            kind: PointerKind::Click,
            at,
        } = event
        {
            self.queue
                .push(UpdateSource::Pointer, ModelUpdate::SetFocus(at));
        }
        event
    }

    /// Handles wheel input on the big picture by zooming toward the cursor.
    pub fn on_big_picture_wheel(&mut self, input: WheelInput) -> ImageEvent {
        let event = self.big_picture.handle_wheel(input);
        if let ImageEvent::Wheel { delta_y, at } = event {
            self.queue.push(
                UpdateSource::Pointer,
                ModelUpdate::ZoomAbout {
                    delta: delta_y / WHEEL_ZOOM_DIVISOR,
                    pivot: at,
                },
            );
        }
        event
    }

    /// Converts pointer input on the big picture into image space.
    ///
    /// The thumbnail itself does not react to big-picture clicks; region
    /// overlays consume the returned event.
    #[must_use]
    pub fn on_big_picture_pointer(&self, input: PointerInput) -> ImageEvent {
        self.big_picture.handle_pointer(input)
    }

    /// Snapshot of the model and both pictures for diagnostics.
    #[must_use]
    pub fn debug_info(&self) -> ThumbnailDebugInfo {
        ThumbnailDebugInfo {
            model: self.model.clone(),
            revision: self.revision,
            pending: self.queue.len(),
            big_picture: self.big_picture.debug_info(),
            navigator: self.navigator.debug_info(),
        }
    }

    fn sync_pictures(&mut self) {
        let scale = container_scale(&self.model);
        let offset = model_offset(&self.model);
        let results = [
            self.big_picture.set_scale(self.model.zoom()),
            self.big_picture.set_top_level_scale(scale),
            self.navigator
                .set_top_level_scale(scale / self.navigator_divisor),
        ];
        for result in results {
            if let Err(err) = result {
                log::warn!("keeping previous picture scale: {err}");
            }
        }
        self.big_picture.set_offset(offset);
        log::debug!(
            "pictures rebuilt: zoom {}, container scale {scale}, offset {offset:?}",
            self.model.zoom()
        );
    }
}

/// Debug snapshot of a [`Thumbnail`].
#[derive(Clone, Debug)]
pub struct ThumbnailDebugInfo {
    /// The current model.
    pub model: Model,
    /// Model revision.
    pub revision: u64,
    /// Updates waiting for the next flush.
    pub pending: usize,
    /// Big picture state.
    pub big_picture: ScaledImageDebugInfo,
    /// Navigator state.
    pub navigator: ScaledImageDebugInfo,
}

#[cfg(test)]
mod tests {
    use kurbo::Point;
    use understory_image_geometry::{Coord, PixelSize};
    use understory_scaled_image::{ConfigError, PointerInput, PointerKind, WheelInput};

    use super::{Thumbnail, ThumbnailConfig};
    use crate::update::ModelUpdate;

    fn loaded() -> Thumbnail {
        let mut t = Thumbnail::new(ThumbnailConfig::new("big.png")).unwrap();
        t.on_image_loaded(PixelSize::new(400, 349));
        t.on_resize(PixelSize::new(800, 698));
        assert!(t.flush());
        t
    }

    #[test]
    fn rejects_bad_navigator_divisor() {
        let config = ThumbnailConfig {
            navigator_divisor: 0.0,
            ..ThumbnailConfig::new("x.png")
        };
        assert!(matches!(
            Thumbnail::new(config),
            Err(ConfigError::InvalidConfiguration {
                field: "navigator_divisor",
                ..
            })
        ));
    }

    #[test]
    fn load_and_resize_fit_the_container() {
        let t = loaded();
        assert_eq!(t.model().container_geometry(), PixelSize::new(800, 698));
        assert_eq!(t.model().focus(), Coord::new(200.0, 174.5));
        assert_eq!(t.big_picture().container_size(), PixelSize::new(800, 698));
        assert_eq!(t.navigator().container_size(), PixelSize::new(200, 175));
        assert_eq!(t.revision(), 1);
    }

    #[test]
    fn flush_without_change_keeps_revision() {
        let mut t = loaded();
        assert!(!t.flush());
        assert!(!t.dispatch(ModelUpdate::SetZoom(-0.5)));
        assert_eq!(t.revision(), 1);
    }

    #[test]
    fn navigator_click_sets_focus() {
        let mut t = loaded();
        // Navigator effective scale is 2 / 4 = 0.5.
        t.on_navigator_pointer(PointerInput {
            kind: PointerKind::Click,
            client: Point::new(60.0, 30.0),
            element_origin: Point::new(10.0, 10.0),
        });
        assert_eq!(t.pending(), 1);
        assert!(t.flush());
        assert_eq!(t.model().focus(), Coord::new(100.0, 40.0));
    }

    #[test]
    fn navigator_moves_do_not_pan() {
        let mut t = loaded();
        t.on_navigator_pointer(PointerInput {
            kind: PointerKind::Move,
            client: Point::new(60.0, 30.0),
            element_origin: Point::ORIGIN,
        });
        assert_eq!(t.pending(), 0);
    }

    #[test]
    fn wheel_zooms_about_cursor() {
        let mut t = loaded();
        let pivot_client = Point::new(600.0, 100.0);
        let pivot = t.big_picture().screen_to_image(pivot_client);

        t.on_big_picture_wheel(WheelInput {
            delta_y: 200.0,
            client: pivot_client,
            element_origin: Point::ORIGIN,
        });
        assert!(t.flush());
        assert_eq!(t.model().zoom(), 2.0);
        assert_eq!(t.big_picture().scale(), 2.0);

        let after = t.big_picture().image_to_screen(pivot);
        assert!((after.x - pivot_client.x).abs() < 1e-9);
        assert!((after.y - pivot_client.y).abs() < 1e-9);
    }
}
