// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

/// Position and size of one rendered element, in pixels.
///
/// Positions are relative to the element's parent: the container is relative
/// to whatever hosts the widget, the crop window is relative to the container,
/// and the image element is relative to the crop window.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementBox {
    /// Top-left corner relative to the parent element.
    pub position: Point,
    /// Width and height.
    pub size: Size,
}

impl ElementBox {
    /// Creates a new element box.
    #[must_use]
    pub const fn new(position: Point, size: Size) -> Self {
        Self { position, size }
    }

    /// Returns the box as a rectangle in its parent's coordinate space.
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }
}

/// Everything a rendering collaborator needs to draw a scaled image for one
/// render cycle.
///
/// The three boxes nest: `image` inside `crop_region` (which clips it) inside
/// `container`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScaledImageLayout {
    /// The fixed-size container, sized to the natural size times the
    /// top-level scale and rounded to whole pixels.
    pub container: ElementBox,
    /// The clipping window showing the (possibly cropped) image.
    pub crop_region: ElementBox,
    /// The full image element, shifted so the crop origin lands on the
    /// window origin.
    pub image: ElementBox,
    /// `false` until the image has reported its natural size.
    pub visible: bool,
}
