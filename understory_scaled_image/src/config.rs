// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Vec2;
use understory_image_geometry::BoundingBox;

/// Errors raised when a scaled image is configured with unusable values.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A scale-like value was zero, negative, or not finite.
    #[error("invalid configuration: `{field}` must be positive and finite, got {value}")]
    InvalidConfiguration {
        /// Name of the offending setting.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Construction-time configuration of a [`ScaledImage`](crate::ScaledImage).
///
/// ```rust
/// use kurbo::Vec2;
/// use understory_scaled_image::{ScaledImage, ScaledImageConfig};
///
/// let config = ScaledImageConfig::new("map.png")
///     .with_scale(2.0)
///     .with_offset(Vec2::new(-5.0, 0.0))
///     .with_style("border", "1px solid black");
/// let image = ScaledImage::from_config(config).unwrap();
/// assert_eq!(image.scale(), 2.0);
///
/// let bad = ScaledImageConfig::new("map.png").with_scale(0.0);
/// assert!(ScaledImage::from_config(bad).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ScaledImageConfig {
    /// Image identifier handed to the rendering collaborator.
    pub source: String,
    /// Initial offset of the visible window, in image pixels.
    pub offset: Vec2,
    /// Initial inner scale.
    pub scale: f64,
    /// Multiplier applied on top of `scale` and to the container size.
    pub top_level_scale: f64,
    /// Initial crop, if any.
    pub crop: Option<BoundingBox>,
    /// Style-attribute overrides, passed through to the renderer verbatim.
    pub style: Vec<(String, String)>,
}

impl Default for ScaledImageConfig {
    fn default() -> Self {
        Self {
            source: String::new(),
            offset: Vec2::ZERO,
            scale: 1.0,
            top_level_scale: 1.0,
            crop: None,
            style: Vec::new(),
        }
    }
}

impl ScaledImageConfig {
    /// Creates a configuration for `source` with identity scale and no crop.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    /// Sets the initial offset.
    #[must_use]
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the initial inner scale.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the top-level scale.
    #[must_use]
    pub fn with_top_level_scale(mut self, top_level_scale: f64) -> Self {
        self.top_level_scale = top_level_scale;
        self
    }

    /// Sets the initial crop.
    #[must_use]
    pub fn with_crop(mut self, crop: BoundingBox) -> Self {
        self.crop = Some(crop);
        self
    }

    /// Adds a style-attribute override.
    #[must_use]
    pub fn with_style(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.push((name.into(), value.into()));
        self
    }

    /// Checks every scale-like field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("scale", self.scale)?;
        positive("top_level_scale", self.top_level_scale)?;
        Ok(())
    }
}

/// Returns `value` if it is positive and finite.
pub(crate) fn positive(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidConfiguration { field, value })
    }
}
