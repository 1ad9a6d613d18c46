// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Index: an incremental 2D point index with nearest-neighbor queries.
//!
//! Thicket Index is the spatial building block behind tree-growth planners.
//!
//! - Insert points with user payloads, one at a time, interleaved with queries (no bulk rebuilds).
//! - Query the nearest inserted point to any location, with a deterministic tie-break
//!   (the earliest inserted point wins).
//! - Reject inserts that fall outside the configured extent instead of silently accepting them.
//!
//! Backends are pluggable via a simple trait so you can swap the spatial strategy without API churn.
//! The default backend is a point-region quadtree over the extent.
//! A flat vector backend (linear scan) is provided as a brute-force reference.
//!
//! # Example
//!
//! ```rust
//! use thicket_index::{Extent, IndexError, PointIndex};
//!
//! let mut idx: PointIndex<u32> = PointIndex::new(Extent::from_size(800.0, 600.0))?;
//! let a = idx.insert(50.0, 500.0, 1)?;
//! let _b = idx.insert(400.0, 300.0, 2)?;
//!
//! let (key, payload) = idx.nearest(60.0, 480.0)?;
//! assert_eq!(key, a);
//! assert_eq!(payload, 1);
//!
//! // Points outside the extent are refused.
//! assert!(matches!(idx.insert(900.0, 10.0, 3), Err(IndexError::OutOfExtent { .. })));
//! # Ok::<(), IndexError>(())
//! ```
//!
//! ## Choosing a backend
//!
//! - `QuadTree` (default): expected logarithmic insert and nearest query. Tune the
//!   leaf capacity and depth limit with [`PointIndex::with_quadtree_params`].
//! - `FlatVec`: simplest, linear scans. Good for very small sets and for testing.
//!
//! ### Float semantics
//!
//! Coordinates must be finite. Non-finite points are rejected as out of extent.
//! Distances are compared squared; no square roots are taken.

#![no_std]

extern crate alloc;

pub mod backend;
pub mod backends;
pub mod error;
pub mod index;
pub mod types;

pub use backend::Backend;
pub use backends::flatvec::FlatVec;
pub use backends::quadtree::QuadTree;
pub use error::IndexError;
pub use index::{Key, LinearIndex, PointIndex, PointIndexGeneric};
pub use types::Extent;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_tracks_incremental_inserts() {
        let mut idx: PointIndex<u32> = PointIndex::new(Extent::from_size(100.0, 100.0)).unwrap();
        idx.insert(10.0, 10.0, 0).unwrap();
        assert_eq!(idx.nearest(90.0, 90.0).unwrap().1, 0);
        idx.insert(80.0, 80.0, 1).unwrap();
        assert_eq!(idx.nearest(90.0, 90.0).unwrap().1, 1);
        idx.insert(95.0, 95.0, 2).unwrap();
        assert_eq!(idx.nearest(90.0, 90.0).unwrap().1, 2);
    }

    #[test]
    fn empty_index_underflows() {
        let idx: PointIndex<u32> = PointIndex::new(Extent::from_size(1.0, 1.0)).unwrap();
        assert_eq!(idx.nearest(0.5, 0.5), Err(IndexError::Underflow));
    }
}
