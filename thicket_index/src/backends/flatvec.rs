// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat vector backend with linear scans. Small and simple; good for tiny sets
//! and as a brute-force reference for the quadtree.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::backend::Backend;
use crate::types::{Extent, distance_squared, improves};

/// Flat vector backend with linear scans.
#[derive(Default)]
pub struct FlatVec {
    entries: Vec<Option<(f64, f64)>>,
}

impl Debug for FlatVec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.entries.len();
        let alive = self.entries.iter().filter(|e| e.is_some()).count();
        f.debug_struct("FlatVec")
            .field("total_slots", &total)
            .field("alive", &alive)
            .finish_non_exhaustive()
    }
}

impl Backend for FlatVec {
    fn for_extent(_extent: Extent) -> Self {
        Self::default()
    }

    fn insert(&mut self, slot: usize, x: f64, y: f64) {
        if self.entries.len() <= slot {
            self.entries.resize_with(slot + 1, || None);
        }
        self.entries[slot] = Some((x, y));
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn nearest(&self, x: f64, y: f64) -> Option<(usize, f64)> {
        let mut best: Option<(f64, usize)> = None;
        for (i, slot) in self.entries.iter().enumerate() {
            if let Some((px, py)) = *slot {
                let d = distance_squared(px, py, x, y);
                if improves(d, i, best) {
                    best = Some((d, i));
                }
            }
        }
        best.map(|(d, i)| (i, d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_no_nearest() {
        let fv = FlatVec::default();
        assert_eq!(fv.nearest(1.0, 1.0), None);
    }

    #[test]
    fn equidistant_points_prefer_lowest_slot() {
        let mut fv = FlatVec::default();
        fv.insert(0, 0.0, 0.0);
        fv.insert(1, 2.0, 0.0);
        assert_eq!(fv.nearest(1.0, 0.0), Some((0, 1.0)));
        assert_eq!(fv.nearest(1.5, 0.0), Some((1, 0.25)));
    }
}
