// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinate transforms derived from a [`Model`].
//!
//! None of these are stored: they are cheap pure functions, recomputed from
//! the model whenever it changes.
//!
//! Two families are provided:
//! - [`image_to_widget`] / [`widget_to_image`] go through [`model_offset`] and
//!   measure the widget side in natural-size units (before the container
//!   scale is applied).
//! - [`image_space_to_widget_space`] / [`widget_space_to_image_space`] are the
//!   same mapping written directly in terms of natural size, container
//!   geometry, zoom and focus, and measure the widget side in container
//!   pixels. They differ from the first family exactly by
//!   [`container_scale`].

use kurbo::{Point, Vec2};
use understory_image_geometry::Coord;

use crate::model::Model;

/// Returns the offset that keeps the focus centered in the big picture.
///
/// Per axis: `natural / 2 * (1 / zoom) - focus`.
#[must_use]
pub fn model_offset(model: &Model) -> Vec2 {
    let scale = 1.0 / model.zoom;
    let half = model.natural_size.to_size() / 2.0;
    Vec2::new(
        half.width * scale - model.focus.x,
        half.height * scale - model.focus.y,
    )
}

/// Returns the ratio of container width to natural width.
///
/// This is the top-level scale of the big picture. While the container has
/// no width yet it is `1`.
#[must_use]
pub fn container_scale(model: &Model) -> f64 {
    if model.container_geometry.width == 0 {
        1.0
    } else {
        f64::from(model.container_geometry.width) / f64::from(model.natural_size.width)
    }
}

/// Maps an image-space point to widget units: `(p - model_offset) / zoom`.
#[must_use]
pub fn image_to_widget(model: &Model, p: Coord) -> Point {
    let offset = model_offset(model);
    Point::new((p.x - offset.x) / model.zoom, (p.y - offset.y) / model.zoom)
}

/// Inverse of [`image_to_widget`]: `zoom * p + model_offset`.
#[must_use]
pub fn widget_to_image(model: &Model, p: Point) -> Coord {
    let offset = model_offset(model);
    Coord::new(model.zoom * p.x + offset.x, model.zoom * p.y + offset.y)
}

/// Maps an image-space point to container pixels without going through
/// [`model_offset`].
#[must_use]
pub fn image_space_to_widget_space(model: &Model, p: Coord) -> Point {
    let zoom = model.zoom;
    let scale = container_scale(model);
    let natural = model.natural_size.to_size();
    let focus = model.focus;
    Point::new(
        scale * (p.x + focus.x - natural.width / (2.0 * zoom)) / zoom,
        scale * (p.y + focus.y - natural.height / (2.0 * zoom)) / zoom,
    )
}

/// Inverse of [`image_space_to_widget_space`].
#[must_use]
pub fn widget_space_to_image_space(model: &Model, p: Point) -> Coord {
    let zoom = model.zoom;
    let scale = container_scale(model);
    let natural = model.natural_size.to_size();
    let focus = model.focus;
    Coord::new(
        zoom * p.x / scale - focus.x + natural.width / (2.0 * zoom),
        zoom * p.y / scale - focus.y + natural.height / (2.0 * zoom),
    )
}
