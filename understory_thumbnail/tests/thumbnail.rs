// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_thumbnail` crate.
//!
//! These drive a `Thumbnail` the way a host would: image load and resize
//! notifications, navigator clicks and big-picture wheel events, checking the
//! model and the derived pictures after each flush.

use kurbo::{Point, Vec2};
use understory_image_geometry::{BoundingBox, Coord, PixelSize};
use understory_scaled_image::{ImageEvent, PointerInput, PointerKind, WheelInput};
use understory_thumbnail::{
    Model, ModelUpdate, RegionKey, Thumbnail, ThumbnailConfig, UpdateSource, apply_model_update,
    image_to_widget, model_offset,
};

fn thumbnail() -> Thumbnail {
    Thumbnail::new(ThumbnailConfig::new("slide.png")).unwrap()
}

fn bbox(x0: f64, y0: f64, x1: f64, y1: f64) -> BoundingBox {
    BoundingBox::new(Coord::new(x0, y0), Coord::new(x1, y1)).unwrap()
}

#[test]
fn reference_scenario() {
    let model = Model::with_view(
        PixelSize::new(400, 349),
        PixelSize::new(800, 698),
        Coord::new(200.0, 174.5),
        1.0,
    );
    assert_eq!(model_offset(&model), Vec2::ZERO);
    assert_eq!(
        image_to_widget(&model, model.focus()),
        Point::new(200.0, 174.5)
    );
    let model = apply_model_update(model, &ModelUpdate::SetZoom(-0.5));
    assert_eq!(model.zoom(), 1.0);
}

#[test]
fn unloaded_thumbnail_is_inert() {
    let t = thumbnail();
    assert_eq!(t.model(), &Model::default());
    assert!(!t.big_picture().is_loaded());
    assert!(!t.big_picture().layout().visible);
    assert_eq!(t.revision(), 0);
}

#[test]
fn load_reported_after_resize_still_wins_precedence() {
    let mut t = thumbnail();
    // Resize arrives first, but natural-size updates are reduced first so the
    // geometry is fitted against the real aspect ratio.
    t.on_resize(PixelSize::new(800, 600));
    t.on_image_loaded(PixelSize::new(400, 349));
    assert_eq!(t.pending(), 2);
    assert!(t.flush());
    assert_eq!(t.model().container_geometry(), PixelSize::new(800, 698));
    assert_eq!(t.big_picture().container_size(), PixelSize::new(800, 698));
}

#[test]
fn pointer_pushed_before_natural_size_is_reduced_after_it() {
    let mut t = thumbnail();
    t.push(UpdateSource::Pointer, ModelUpdate::SetFocus(Coord::new(5.0, 6.0)));
    t.on_image_loaded(PixelSize::new(100, 100));
    t.flush();
    // SetNaturalSize recenters the focus, so the pointer update must come last
    // to survive.
    assert_eq!(t.model().focus(), Coord::new(5.0, 6.0));
}

#[test]
fn navigator_click_recenters_big_picture() {
    let mut t = thumbnail();
    t.on_image_loaded(PixelSize::new(400, 349));
    t.on_resize(PixelSize::new(800, 698));
    t.flush();

    // The navigator shows the whole image at 800 / 400 / 4 = 0.5.
    assert_eq!(t.navigator().effective_scale(), 0.5);
    let event = t.on_navigator_pointer(PointerInput {
        kind: PointerKind::Click,
        client: Point::new(550.0, 25.0),
        element_origin: Point::new(500.0, 0.0),
    });
    assert_eq!(
        event,
        ImageEvent::Pointer {
            kind: PointerKind::Click,
            at: Coord::new(100.0, 50.0)
        }
    );
    t.flush();
    assert_eq!(t.model().focus(), Coord::new(100.0, 50.0));

    // The focus is now in the middle of the big picture.
    let center = t.big_picture().image_to_screen(Coord::new(100.0, 50.0));
    assert_eq!(center, Point::new(400.0, 349.0));
}

#[test]
fn wheel_up_then_down_returns_to_unit_zoom() {
    let mut t = thumbnail();
    t.on_image_loaded(PixelSize::new(200, 100));
    t.on_resize(PixelSize::new(400, 200));
    t.flush();

    let wheel = |delta_y| WheelInput {
        delta_y,
        client: Point::new(300.0, 50.0),
        element_origin: Point::ORIGIN,
    };
    t.on_big_picture_wheel(wheel(200.0));
    t.flush();
    assert_eq!(t.model().zoom(), 2.0);
    assert_eq!(t.big_picture().effective_scale(), 4.0);

    t.on_big_picture_wheel(wheel(-1000.0));
    t.flush();
    assert_eq!(t.model().zoom(), 1.0);
}

#[test]
fn big_picture_pointer_does_not_touch_the_model() {
    let mut t = thumbnail();
    t.on_image_loaded(PixelSize::new(100, 100));
    t.flush();
    let event = t.on_big_picture_pointer(PointerInput {
        kind: PointerKind::Click,
        client: Point::new(10.0, 10.0),
        element_origin: Point::ORIGIN,
    });
    assert!(matches!(event, ImageEvent::Pointer { .. }));
    assert_eq!(t.pending(), 0);
}

#[test]
fn region_updates_flow_through_the_queue() {
    let mut t = thumbnail();
    t.push_all([
        ModelUpdate::AddSubregion(bbox(0.0, 0.0, 10.0, 10.0)),
        ModelUpdate::AddSubregion(bbox(5.0, 5.0, 20.0, 20.0)),
        ModelUpdate::SelectSubregion(RegionKey(1)),
    ]);
    assert!(t.flush());
    let selected: Vec<_> = t.regions().filter(|r| r.selected).map(|r| r.key).collect();
    assert_eq!(selected, [RegionKey(1)]);

    assert!(t.dispatch(ModelUpdate::DeleteSubregion(RegionKey(1))));
    assert_eq!(t.model().selected(), None);
    assert_eq!(t.regions().count(), 1);
    assert_eq!(t.revision(), 2);
}

#[test]
fn set_source_unloads_both_pictures() {
    let mut t = thumbnail();
    t.on_image_loaded(PixelSize::new(100, 100));
    t.flush();
    t.set_source("other.png");
    assert!(!t.big_picture().is_loaded());
    assert!(!t.navigator().is_loaded());
    assert_eq!(t.navigator().source().as_str(), "other.png");

    // The model drops the old natural size along with the pictures.
    t.flush();
    assert_eq!(t.model().natural_size(), PixelSize::UNIT);
    assert_eq!(t.model().natural_size(), t.big_picture().natural_size());

    t.on_image_loaded(PixelSize::new(300, 200));
    t.flush();
    assert_eq!(t.model().natural_size(), PixelSize::new(300, 200));
    assert!(t.big_picture().is_loaded());
}

#[test]
fn debug_info_reports_pending_updates() {
    let mut t = thumbnail();
    t.on_resize(PixelSize::new(10, 10));
    let info = t.debug_info();
    assert_eq!(info.pending, 1);
    assert_eq!(info.revision, 0);
    assert_eq!(info.big_picture.scale, 1.0);
}

#[test]
fn overflowing_zoom_keeps_model_and_picture_in_step() {
    let mut t = thumbnail();
    t.on_image_loaded(PixelSize::new(400, 349));
    t.on_resize(PixelSize::new(800, 698));
    t.flush();

    assert!(t.dispatch(ModelUpdate::SetZoom(1e300)));
    assert!(!t.dispatch(ModelUpdate::SetZoom(1e300)));
    assert_eq!(t.model().zoom(), 1e300);
    assert_eq!(t.big_picture().scale(), t.model().zoom());

    let pivot = Coord::new(100.0, 100.0);
    t.dispatch(ModelUpdate::ZoomAbout { delta: 1e300, pivot });
    t.dispatch(ModelUpdate::ZoomAbout { delta: 0.0, pivot });
    let focus = t.model().focus();
    assert!(focus.x.is_finite() && focus.y.is_finite());
    assert_eq!(t.big_picture().scale(), t.model().zoom());
}
