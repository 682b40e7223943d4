// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Merging independent input streams into one ordered update stream.
//!
//! Image-load, resize and pointer input arrive on separate streams. The queue
//! collects them between flushes and hands them to the reducer ordered by
//! stream precedence first and arrival order second, so updates that arrive
//! "at the same time" are always reduced in the same order:
//!
//! ```rust
//! use understory_image_geometry::{Coord, PixelSize};
//! use understory_thumbnail::{ModelUpdate, UpdateQueue, UpdateSource};
//!
//! let mut queue = UpdateQueue::new();
//! queue.push(UpdateSource::Pointer, ModelUpdate::SetFocus(Coord::new(1.0, 2.0)));
//! queue.push(UpdateSource::Resize, ModelUpdate::SetGeometry(PixelSize::new(10, 10)));
//! queue.push(UpdateSource::NaturalSize, ModelUpdate::SetNaturalSize(PixelSize::new(5, 5)));
//!
//! let order: Vec<_> = queue.drain().collect();
//! assert_eq!(order, [
//!     ModelUpdate::SetNaturalSize(PixelSize::new(5, 5)),
//!     ModelUpdate::SetGeometry(PixelSize::new(10, 10)),
//!     ModelUpdate::SetFocus(Coord::new(1.0, 2.0)),
//! ]);
//! ```

use smallvec::SmallVec;

use crate::update::ModelUpdate;

/// The input stream an update came from.
///
/// Declaration order is merge precedence: natural-size updates are reduced
/// before resizes, which are reduced before pointer input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UpdateSource {
    /// The image finished loading and reported its natural size.
    NaturalSize,
    /// The container was resized.
    Resize,
    /// Click, wheel, or drag input, including region overlay commands.
    Pointer,
}

impl UpdateSource {
    /// Returns the stream an update naturally belongs to.
    #[must_use]
    pub fn of(update: &ModelUpdate) -> Self {
        match update {
            ModelUpdate::SetNaturalSize(_) => Self::NaturalSize,
            ModelUpdate::SetGeometry(_) => Self::Resize,
            _ => Self::Pointer,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Pending {
    source: UpdateSource,
    seq: u64,
    update: ModelUpdate,
}

/// Pending updates awaiting the next flush.
#[derive(Clone, Debug, Default)]
pub struct UpdateQueue {
    pending: SmallVec<[Pending; 8]>,
    next_seq: u64,
}

impl UpdateQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues an update from `source`.
    pub fn push(&mut self, source: UpdateSource, update: ModelUpdate) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Pending {
            source,
            seq,
            update,
        });
    }

    /// Enqueues an update on the stream given by [`UpdateSource::of`].
    pub fn push_update(&mut self, update: ModelUpdate) {
        self.push(UpdateSource::of(&update), update);
    }

    /// Returns `true` if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Returns the number of pending updates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Removes all pending updates in reduction order.
    pub fn drain(&mut self) -> impl Iterator<Item = ModelUpdate> + '_ {
        self.pending
            .sort_unstable_by_key(|pending| (pending.source, pending.seq));
        self.pending.drain(..).map(|pending| pending.update)
    }
}

#[cfg(test)]
mod tests {
    use understory_image_geometry::{Coord, PixelSize};

    use super::{UpdateQueue, UpdateSource};
    use crate::update::ModelUpdate;

    #[test]
    fn same_source_keeps_arrival_order() {
        let mut q = UpdateQueue::new();
        q.push_update(ModelUpdate::SetZoom(0.5));
        q.push_update(ModelUpdate::SetFocus(Coord::ORIGIN));
        q.push_update(ModelUpdate::SetZoom(-0.1));
        assert_eq!(q.len(), 3);

        let mut drained = q.drain();
        assert_eq!(drained.next(), Some(ModelUpdate::SetZoom(0.5)));
        assert_eq!(drained.next(), Some(ModelUpdate::SetFocus(Coord::ORIGIN)));
        assert_eq!(drained.next(), Some(ModelUpdate::SetZoom(-0.1)));
        assert_eq!(drained.next(), None);
        drop(drained);
        assert!(q.is_empty());
    }

    #[test]
    fn precedence_beats_arrival() {
        let mut q = UpdateQueue::new();
        q.push_update(ModelUpdate::DeselectAll);
        q.push_update(ModelUpdate::SetGeometry(PixelSize::new(4, 4)));
        q.push_update(ModelUpdate::SetNaturalSize(PixelSize::new(2, 2)));
        q.push_update(ModelUpdate::SetGeometry(PixelSize::new(8, 8)));

        let sources: alloc::vec::Vec<_> = q.drain().map(|u| UpdateSource::of(&u)).collect();
        assert_eq!(
            sources,
            [
                UpdateSource::NaturalSize,
                UpdateSource::Resize,
                UpdateSource::Resize,
                UpdateSource::Pointer
            ]
        );
    }

    #[test]
    fn explicit_source_overrides_inference() {
        let mut q = UpdateQueue::new();
        q.push(UpdateSource::Pointer, ModelUpdate::SetGeometry(PixelSize::new(1, 1)));
        q.push(UpdateSource::NaturalSize, ModelUpdate::DeselectAll);
        let first = q.drain().next();
        assert_eq!(first, Some(ModelUpdate::DeselectAll));
    }
}
