// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend trait for spatial indexing implementations.

use core::fmt::Debug;

use crate::types::Extent;

/// Spatial backend abstraction used by [`PointIndexGeneric`](crate::PointIndexGeneric).
///
/// Slots are assigned by the index in insertion order and are never reused,
/// so "lowest slot" means "earliest inserted".
pub trait Backend: Debug {
    /// Create an empty backend covering `extent`.
    fn for_extent(extent: Extent) -> Self
    where
        Self: Sized;

    /// Insert a point for `slot`. The index has already checked it against the extent.
    fn insert(&mut self, slot: usize, x: f64, y: f64);

    /// Remove all points.
    fn clear(&mut self);

    /// Slot and squared distance of the point nearest to `(x, y)`, or `None` when empty.
    ///
    /// Among equidistant points the lowest slot wins.
    fn nearest(&self, x: f64, y: f64) -> Option<(usize, f64)>;
}
