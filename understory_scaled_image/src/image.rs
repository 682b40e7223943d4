// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Affine, Point, Size, Vec2};
use understory_image_geometry::{BoundingBox, Coord, PixelSize};

use crate::config::{ConfigError, ScaledImageConfig, positive};
use crate::events::{ImageEvent, PointerInput, WheelInput};
use crate::layout::{ElementBox, ScaledImageLayout};

/// Identifier of the image resource shown by a [`ScaledImage`].
///
/// Cloning is cheap; overlays that show the same picture share one source.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageSource(Arc<str>);

impl ImageSource {
    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageSource {
    fn from(s: &str) -> Self {
        Self(Arc::from(s))
    }
}

impl From<String> for ImageSource {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

/// A source image scaled, offset, and optionally cropped inside a container.
///
/// `ScaledImage` holds the reactive inputs (natural size, source, crop, scale,
/// offset, top-level scale) and rebuilds its screen/image transforms whenever
/// one of them changes. Everything else ([`ScaledImage::layout`],
/// [`ScaledImage::shift`], ...) is derived on demand.
///
/// Screen space here is relative to the container's top-left corner.
#[derive(Clone, Debug)]
pub struct ScaledImage {
    source: ImageSource,
    natural_size: PixelSize,
    loaded: bool,
    crop: Option<BoundingBox>,
    scale: f64,
    offset: Vec2,
    top_level_scale: f64,
    style: Vec<(String, String)>,
    image_to_screen: Affine,
    screen_to_image: Affine,
}

impl ScaledImage {
    /// Creates an unloaded image with identity scale, zero offset, and no crop.
    ///
    /// The natural size is `1×1` until [`ScaledImage::on_load`] reports the
    /// real one.
    #[must_use]
    pub fn new(source: impl Into<ImageSource>) -> Self {
        let mut image = Self {
            source: source.into(),
            natural_size: PixelSize::UNIT,
            loaded: false,
            crop: None,
            scale: 1.0,
            offset: Vec2::ZERO,
            top_level_scale: 1.0,
            style: Vec::new(),
            image_to_screen: Affine::IDENTITY,
            screen_to_image: Affine::IDENTITY,
        };
        image.rebuild_transforms();
        image
    }

    /// Creates an image from a validated configuration.
    ///
    /// Returns [`ConfigError::InvalidConfiguration`] if `scale` or
    /// `top_level_scale` is not positive and finite.
    pub fn from_config(config: ScaledImageConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let ScaledImageConfig {
            source,
            offset,
            scale,
            top_level_scale,
            crop,
            style,
        } = config;
        let mut image = Self::new(source);
        image.offset = offset;
        image.scale = scale;
        image.top_level_scale = top_level_scale;
        image.crop = crop;
        image.style = style;
        image.rebuild_transforms();
        Ok(image)
    }

    /// Returns the image identifier.
    #[must_use]
    pub fn source(&self) -> &ImageSource {
        &self.source
    }

    /// Replaces the image identifier.
    ///
    /// The natural size of the previous image no longer applies, so the image
    /// goes back to its unloaded `1×1` state until the next
    /// [`ScaledImage::on_load`].
    pub fn set_source(&mut self, source: impl Into<ImageSource>) {
        let source = source.into();
        if self.source == source {
            return;
        }
        log::debug!("scaled image source changed to {source}");
        self.source = source;
        self.natural_size = PixelSize::UNIT;
        self.loaded = false;
        self.rebuild_transforms();
    }

    /// Records the natural size reported once the image resource has loaded.
    ///
    /// Zero dimensions are coerced to `1`.
    pub fn on_load(&mut self, natural_size: PixelSize) {
        let natural_size = natural_size.at_least_one();
        log::debug!(
            "scaled image {} loaded at {}x{}",
            self.source,
            natural_size.width,
            natural_size.height
        );
        self.loaded = true;
        if self.natural_size != natural_size {
            self.natural_size = natural_size;
            self.rebuild_transforms();
        }
    }

    /// Returns `true` once the natural size is known.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Returns the natural size (`1×1` until loaded).
    #[must_use]
    pub fn natural_size(&self) -> PixelSize {
        self.natural_size
    }

    /// Returns the current crop, if any.
    #[must_use]
    pub fn crop(&self) -> Option<BoundingBox> {
        self.crop
    }

    /// Sets or clears the crop.
    pub fn set_crop(&mut self, crop: Option<BoundingBox>) {
        if self.crop == crop {
            return;
        }
        self.crop = crop;
        self.rebuild_transforms();
    }

    /// Returns the inner scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sets the inner scale.
    ///
    /// Returns [`ConfigError::InvalidConfiguration`] and leaves the image
    /// untouched if `scale` is not positive and finite.
    pub fn set_scale(&mut self, scale: f64) -> Result<(), ConfigError> {
        let scale = positive("scale", scale)?;
        if self.scale != scale {
            self.scale = scale;
            self.rebuild_transforms();
        }
        Ok(())
    }

    /// Returns the offset of the visible window, in image pixels.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Sets the offset of the visible window, in image pixels.
    pub fn set_offset(&mut self, offset: Vec2) {
        if self.offset == offset {
            return;
        }
        self.offset = offset;
        self.rebuild_transforms();
    }

    /// Returns the top-level scale.
    #[must_use]
    pub fn top_level_scale(&self) -> f64 {
        self.top_level_scale
    }

    /// Sets the top-level scale.
    ///
    /// Returns [`ConfigError::InvalidConfiguration`] and leaves the image
    /// untouched if `top_level_scale` is not positive and finite.
    pub fn set_top_level_scale(&mut self, top_level_scale: f64) -> Result<(), ConfigError> {
        let top_level_scale = positive("top_level_scale", top_level_scale)?;
        if self.top_level_scale != top_level_scale {
            self.top_level_scale = top_level_scale;
            self.rebuild_transforms();
        }
        Ok(())
    }

    /// Returns the style-attribute overrides supplied at construction.
    #[must_use]
    pub fn style(&self) -> &[(String, String)] {
        &self.style
    }

    /// Returns `scale * top_level_scale`.
    #[must_use]
    pub fn effective_scale(&self) -> f64 {
        self.scale * self.top_level_scale
    }

    /// Returns the screen-space translation of the image-space origin.
    ///
    /// This is `(crop_origin + offset) * effective_scale`, where the crop
    /// origin is the crop's top-left corner or `(0, 0)` without a crop.
    #[must_use]
    pub fn shift(&self) -> Vec2 {
        (self.crop_origin().to_vec2() + self.offset) * self.effective_scale()
    }

    /// Returns the container size: natural size times top-level scale,
    /// rounded to whole pixels. Cropping and the inner scale do not affect it.
    #[must_use]
    pub fn container_size(&self) -> PixelSize {
        PixelSize::round_from(self.natural_size.to_size() * self.top_level_scale)
    }

    /// Returns the clipping window, positioned at [`ScaledImage::shift`].
    #[must_use]
    pub fn crop_region(&self) -> ElementBox {
        let scale = self.effective_scale();
        let size = match self.crop {
            Some(crop) => crop.size() * scale,
            None => self.scaled_natural_size(),
        };
        ElementBox::new(self.shift().to_point(), size)
    }

    /// Returns the full image element, positioned so the crop origin sits at
    /// the window origin.
    #[must_use]
    pub fn image_rect(&self) -> ElementBox {
        let position = match self.crop {
            Some(crop) => (-crop.top_left().to_vec2() * self.effective_scale()).to_point(),
            None => Point::ORIGIN,
        };
        ElementBox::new(position, self.scaled_natural_size())
    }

    /// Returns the full render-cycle layout.
    #[must_use]
    pub fn layout(&self) -> ScaledImageLayout {
        ScaledImageLayout {
            container: ElementBox::new(Point::ORIGIN, self.container_size().to_size()),
            crop_region: self.crop_region(),
            image: self.image_rect(),
            visible: self.loaded,
        }
    }

    /// Converts a screen-space point (relative to the container) into natural
    /// image pixels.
    #[must_use]
    pub fn screen_to_image(&self, pt: Point) -> Coord {
        Coord::from(self.screen_to_image * pt)
    }

    /// Converts a natural image-pixel coordinate into screen space (relative
    /// to the container).
    #[must_use]
    pub fn image_to_screen(&self, c: Coord) -> Point {
        self.image_to_screen * c.to_point()
    }

    /// Returns the image → screen transform.
    #[must_use]
    pub fn image_to_screen_transform(&self) -> Affine {
        self.image_to_screen
    }

    /// Localizes a raw pointer event and re-expresses it in image space.
    #[must_use]
    pub fn handle_pointer(&self, input: PointerInput) -> ImageEvent {
        let at = self.screen_to_image(input.local());
        log::trace!("{:?} on {} at {at:?}", input.kind, self.source);
        ImageEvent::Pointer {
            kind: input.kind,
            at,
        }
    }

    /// Localizes a raw wheel event and re-expresses it in image space.
    #[must_use]
    pub fn handle_wheel(&self, input: WheelInput) -> ImageEvent {
        let at = self.screen_to_image(input.local());
        log::trace!("wheel {} on {} at {at:?}", input.delta_y, self.source);
        ImageEvent::Wheel {
            delta_y: input.delta_y,
            at,
        }
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ScaledImageDebugInfo {
        ScaledImageDebugInfo {
            natural_size: self.natural_size,
            loaded: self.loaded,
            crop: self.crop,
            scale: self.scale,
            top_level_scale: self.top_level_scale,
            effective_scale: self.effective_scale(),
            offset: self.offset,
            shift: self.shift(),
            layout: self.layout(),
        }
    }

    fn crop_origin(&self) -> Coord {
        self.crop.map_or(Coord::ORIGIN, |crop| crop.top_left())
    }

    fn scaled_natural_size(&self) -> Size {
        self.natural_size.to_size() * self.effective_scale()
    }

    fn rebuild_transforms(&mut self) {
        // Image → screen: scale into screen pixels, then shift by the crop
        // origin and offset.
        self.image_to_screen = Affine::translate(self.shift()) * Affine::scale(self.effective_scale());
        self.screen_to_image = self.image_to_screen.inverse();
    }
}

/// Debug snapshot of a [`ScaledImage`] state.
#[derive(Clone, Copy, Debug)]
pub struct ScaledImageDebugInfo {
    /// Natural size (`1×1` until loaded).
    pub natural_size: PixelSize,
    /// Whether the natural size is known.
    pub loaded: bool,
    /// Current crop.
    pub crop: Option<BoundingBox>,
    /// Inner scale.
    pub scale: f64,
    /// Top-level scale.
    pub top_level_scale: f64,
    /// Product of the two scales.
    pub effective_scale: f64,
    /// Offset in image pixels.
    pub offset: Vec2,
    /// Screen-space translation of the image origin.
    pub shift: Vec2,
    /// Layout for the current render cycle.
    pub layout: ScaledImageLayout,
}
