// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw state helper: turn a press-drag-release gesture into a bounding box.
//!
//! ## Usage
//!
//! 1) Start drawing with [`DrawState::start`] at the image-space press point.
//! 2) On each move, call [`DrawState::update`] to get the normalized preview box.
//! 3) On release, [`DrawState::finish`] returns the final box, unless it has
//!    zero width or height (a plain click).
//!
//! ## Minimal example
//!
//! ```
//! use understory_image_geometry::Coord;
//! use understory_regions::DrawState;
//!
//! let mut draw = DrawState::default();
//! draw.start(Coord::new(30.0, 10.0));
//!
//! // Dragging up-left still yields a well-formed box.
//! let preview = draw.update(Coord::new(10.0, 5.0)).unwrap();
//! assert_eq!(preview.top_left(), Coord::new(10.0, 5.0));
//! assert_eq!(preview.bottom_right(), Coord::new(30.0, 10.0));
//!
//! let done = draw.finish(Coord::new(10.0, 5.0)).unwrap();
//! assert_eq!(done, preview);
//! assert!(!draw.is_drawing());
//! ```

use understory_image_geometry::{BoundingBox, Coord};

/// Tracks an in-progress region drawing gesture in image space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DrawState {
    start: Option<Coord>,
    current: Option<Coord>,
}

impl DrawState {
    /// Starts drawing from `at`, discarding any unfinished gesture.
    pub fn start(&mut self, at: Coord) {
        self.start = Some(at);
        self.current = Some(at);
    }

    /// Moves the free corner to `at` and returns the preview box.
    ///
    /// Returns `None` when no gesture is active.
    pub fn update(&mut self, at: Coord) -> Option<BoundingBox> {
        self.start?;
        self.current = Some(at);
        self.preview()
    }

    /// Returns the box spanned so far.
    #[must_use]
    pub fn preview(&self) -> Option<BoundingBox> {
        let (start, current) = (self.start?, self.current?);
        BoundingBox::from_corners(start, current).ok()
    }

    /// Ends the gesture at `at` and returns the drawn box.
    ///
    /// Returns `None` when no gesture was active, or when the box has no area.
    pub fn finish(&mut self, at: Coord) -> Option<BoundingBox> {
        let start = self.start?;
        self.cancel();
        match BoundingBox::from_corners(start, at) {
            Ok(bounds) if !bounds.is_degenerate() => Some(bounds),
            Ok(_) => None,
            Err(err) => {
                log::warn!("discarding drawn region: {err}");
                None
            }
        }
    }

    /// Abandons the current gesture.
    pub fn cancel(&mut self) {
        self.start = None;
        self.current = None;
    }

    /// Returns `true` while a gesture is active.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.start.is_some()
    }
}
