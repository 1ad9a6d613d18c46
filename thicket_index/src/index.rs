// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `PointIndex` API and generic implementation over a pluggable backend.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::backend::Backend;
use crate::error::IndexError;
use crate::types::Extent;

/// Stable handle for an inserted point.
///
/// Points are never removed individually, so a key stays valid until
/// [`PointIndexGeneric::clear`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key(u32);

impl Key {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Index keys are intentionally 32-bit; higher bits are truncated by design."
    )]
    const fn new(idx: usize) -> Self {
        Self(idx as u32)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct Entry<P> {
    x: f64,
    y: f64,
    payload: P,
}

/// A generic point index parameterized by a spatial backend.
#[derive(Debug)]
pub struct PointIndexGeneric<P: Copy + Debug, B: Backend> {
    extent: Extent,
    entries: Vec<Entry<P>>,
    backend: B,
}

impl<P, B> PointIndexGeneric<P, B>
where
    P: Copy + Debug,
    B: Backend,
{
    /// Create an empty index over `extent`, building the backend with [`Backend::for_extent`].
    pub fn new(extent: Extent) -> Result<Self, IndexError> {
        Self::check_extent(extent)?;
        Ok(Self {
            extent,
            entries: Vec::new(),
            backend: B::for_extent(extent),
        })
    }

    /// Create an empty index over `extent` with a preconfigured backend.
    ///
    /// The backend must be empty and cover the same extent.
    pub fn with_backend(extent: Extent, backend: B) -> Result<Self, IndexError> {
        Self::check_extent(extent)?;
        Ok(Self {
            extent,
            entries: Vec::new(),
            backend,
        })
    }

    fn check_extent(extent: Extent) -> Result<(), IndexError> {
        if extent.is_valid() {
            Ok(())
        } else {
            Err(IndexError::InvalidExtent {
                width: extent.width(),
                height: extent.height(),
            })
        }
    }

    /// Extent accepted by [`insert`](Self::insert).
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Number of inserted points.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reserve space for at least `n` more points.
    pub fn reserve(&mut self, n: usize) {
        self.entries.reserve(n);
    }

    /// Insert a point with payload. Returns a stable handle `Key`.
    ///
    /// Points outside the closed extent (including NaN coordinates) are rejected
    /// with [`IndexError::OutOfExtent`] and leave the index unchanged.
    pub fn insert(&mut self, x: f64, y: f64, payload: P) -> Result<Key, IndexError> {
        if !self.extent.contains_point(x, y) {
            return Err(IndexError::OutOfExtent { x, y });
        }
        let slot = self.entries.len();
        self.entries.push(Entry { x, y, payload });
        self.backend.insert(slot, x, y);
        Ok(Key::new(slot))
    }

    /// Payload of the point nearest to `(x, y)`.
    ///
    /// Ties go to the earliest inserted point.
    pub fn nearest(&self, x: f64, y: f64) -> Result<(Key, P), IndexError> {
        let (key, payload, _) = self.nearest_with_distance_squared(x, y)?;
        Ok((key, payload))
    }

    /// Like [`nearest`](Self::nearest), also returning the squared Euclidean distance.
    pub fn nearest_with_distance_squared(
        &self,
        x: f64,
        y: f64,
    ) -> Result<(Key, P, f64), IndexError> {
        let (slot, d) = self.backend.nearest(x, y).ok_or(IndexError::Underflow)?;
        let e = self.entries.get(slot).ok_or(IndexError::Underflow)?;
        Ok((Key::new(slot), e.payload, d))
    }

    /// Position and payload for `key`, if it refers to an inserted point.
    pub fn get(&self, key: Key) -> Option<((f64, f64), P)> {
        self.entries
            .get(key.idx())
            .map(|e| ((e.x, e.y), e.payload))
    }

    /// All entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Key, (f64, f64), P)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| (Key::new(i), (e.x, e.y), e.payload))
    }

    /// Remove all points. Existing keys become invalid.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.backend.clear();
    }

    /// Borrow the backend, for diagnostics.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

/// Default index using the quadtree backend.
pub type PointIndex<P> = PointIndexGeneric<P, crate::backends::quadtree::QuadTree>;

/// Index using the linear-scan backend.
pub type LinearIndex<P> = PointIndexGeneric<P, crate::backends::flatvec::FlatVec>;

impl<P: Copy + Debug> PointIndex<P> {
    /// Create a quadtree-backed index with explicit leaf capacity and depth limit.
    pub fn with_quadtree_params(
        extent: Extent,
        bucket_capacity: usize,
        max_depth: u32,
    ) -> Result<Self, IndexError> {
        Self::with_backend(
            extent,
            crate::backends::quadtree::QuadTree::with_params(extent, bucket_capacity, max_depth),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn rejects_invalid_extent() {
        let err = PointIndex::<u32>::new(Extent::from_size(0.0, 10.0)).unwrap_err();
        assert_eq!(
            err,
            IndexError::InvalidExtent {
                width: 0.0,
                height: 10.0
            }
        );
    }

    #[test]
    fn out_of_extent_insert_is_rejected_and_ignored() {
        let mut idx = PointIndex::<u32>::new(Extent::from_size(10.0, 10.0)).unwrap();
        assert_eq!(
            idx.insert(11.0, 5.0, 1),
            Err(IndexError::OutOfExtent { x: 11.0, y: 5.0 })
        );
        assert!(matches!(
            idx.insert(f64::NAN, 5.0, 2),
            Err(IndexError::OutOfExtent { .. })
        ));
        assert!(idx.is_empty());
        assert_eq!(idx.nearest(5.0, 5.0), Err(IndexError::Underflow));
    }

    #[test]
    fn nearest_returns_payload_and_key() {
        let mut idx = PointIndex::<&'static str>::new(Extent::from_size(100.0, 100.0)).unwrap();
        let a = idx.insert(10.0, 10.0, "a").unwrap();
        let b = idx.insert(90.0, 90.0, "b").unwrap();
        assert_eq!(idx.nearest(20.0, 15.0).unwrap(), (a, "a"));
        assert_eq!(idx.nearest(70.0, 99.0).unwrap(), (b, "b"));
        let (_, _, d) = idx.nearest_with_distance_squared(13.0, 14.0).unwrap();
        assert_eq!(d, 25.0);
        assert_eq!(idx.get(b), Some(((90.0, 90.0), "b")));
    }

    #[test]
    fn quadtree_and_linear_indices_agree() {
        let extent = Extent::from_size(640.0, 480.0);
        let mut rng = StdRng::seed_from_u64(42);
        let mut qt = PointIndex::<usize>::with_quadtree_params(extent, 4, 16).unwrap();
        let mut lin = LinearIndex::<usize>::new(extent).unwrap();
        for i in 0..300 {
            // Snap to a coarse lattice so ties actually occur.
            let x = f64::from(rng.random_range(0..=64_u32)) * 10.0;
            let y = f64::from(rng.random_range(0..=48_u32)) * 10.0;
            qt.insert(x, y, i).unwrap();
            lin.insert(x, y, i).unwrap();
            let qx = rng.random_range(0.0..640.0);
            let qy = rng.random_range(0.0..480.0);
            assert_eq!(qt.nearest(qx, qy), lin.nearest(qx, qy));
        }
    }

    #[test]
    fn iter_is_insertion_order_and_clear_empties() {
        let mut idx = PointIndex::<u8>::new(Extent::from_size(10.0, 10.0)).unwrap();
        for i in 0..5_u8 {
            idx.insert(f64::from(i), 1.0, i).unwrap();
        }
        let payloads: Vec<_> = idx.iter().map(|(_, _, p)| p).collect();
        assert_eq!(payloads, [0, 1, 2, 3, 4]);
        idx.clear();
        assert_eq!(idx.len(), 0);
        assert!(idx.backend().is_empty());
    }
}
