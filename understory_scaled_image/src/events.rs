// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw pointer/wheel input and the image-space events derived from it.

use kurbo::Point;
use understory_image_geometry::Coord;

/// The kind of pointer interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// A button was pressed.
    Down,
    /// A button was released.
    Up,
    /// The pointer moved.
    Move,
    /// A press and release on the same element.
    Click,
    /// Two clicks in quick succession.
    DoubleClick,
}

/// A pointer event as reported by the rendering collaborator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    /// What happened.
    pub kind: PointerKind,
    /// Pointer position in client (window) coordinates.
    pub client: Point,
    /// Top-left corner of the image container's on-screen bounding rectangle,
    /// in the same client coordinates.
    pub element_origin: Point,
}

impl PointerInput {
    /// Returns the pointer position relative to the element origin.
    #[must_use]
    pub fn local(&self) -> Point {
        localize(self.client, self.element_origin)
    }
}

/// A wheel event as reported by the rendering collaborator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelInput {
    /// Vertical scroll amount, positive when scrolling down.
    pub delta_y: f64,
    /// Pointer position in client (window) coordinates.
    pub client: Point,
    /// Top-left corner of the image container's on-screen bounding rectangle.
    pub element_origin: Point,
}

impl WheelInput {
    /// Returns the pointer position relative to the element origin.
    #[must_use]
    pub fn local(&self) -> Point {
        localize(self.client, self.element_origin)
    }
}

/// An input event re-expressed in natural image-pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ImageEvent {
    /// A pointer interaction at an image-space position.
    Pointer {
        /// What happened.
        kind: PointerKind,
        /// Where, in image pixels.
        at: Coord,
    },
    /// A wheel interaction at an image-space position.
    Wheel {
        /// Vertical scroll amount, unchanged from the raw input.
        delta_y: f64,
        /// Where, in image pixels.
        at: Coord,
    },
}

impl ImageEvent {
    /// Returns the image-space position of the event.
    #[must_use]
    pub fn at(&self) -> Coord {
        match *self {
            Self::Pointer { at, .. } | Self::Wheel { at, .. } => at,
        }
    }
}

fn localize(client: Point, origin: Point) -> Point {
    (client - origin).to_point()
}
