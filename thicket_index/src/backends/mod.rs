// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend implementations for different spatial strategies.
//!
//! - `quadtree`: point-region quadtree over the index extent (default).
//! - `flatvec`: flat vector with linear scans (small, simple, brute-force reference).
//!
//! Nearest search note
//! -------------------
//! The quadtree answers nearest queries best-first: cells are popped from a
//! min-heap keyed by the squared distance from the query to the cell rectangle.
//! The search stops once the closest pending cell is strictly farther than the
//! best point found, so cells at exactly the best distance are still visited and
//! the lowest-slot tie-break matches the flat vector scan.

pub mod flatvec;
pub mod quadtree;
