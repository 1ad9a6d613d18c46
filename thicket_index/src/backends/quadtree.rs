// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point-region quadtree backend.

use alloc::collections::BinaryHeap;
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Reverse;
use core::fmt::Debug;

use ordered_float::OrderedFloat;

use crate::backend::Backend;
use crate::types::{Extent, distance_squared, improves};

/// Default number of points a leaf holds before it splits.
pub const DEFAULT_BUCKET_CAPACITY: usize = 8;

/// Default depth limit. Leaves at this depth grow without splitting,
/// which bounds the work done for coincident points.
pub const DEFAULT_MAX_DEPTH: u32 = 24;

/// Upper bound applied to any requested depth limit.
///
/// Splitting recurses once per level, and a cell at this depth is already far
/// below `f64` resolution for any practical extent.
pub const MAX_DEPTH_CEILING: u32 = 48;

const ROOT: usize = 0;

#[derive(Clone, Debug)]
enum Cell {
    Leaf(Vec<usize>),
    Branch([usize; 4]),
}

#[derive(Clone, Debug)]
struct QuadNode {
    bounds: Extent,
    depth: u32,
    cell: Cell,
}

impl QuadNode {
    fn leaf(bounds: Extent, depth: u32) -> Self {
        Self {
            bounds,
            depth,
            cell: Cell::Leaf(Vec::new()),
        }
    }
}

/// Point-region quadtree covering a fixed extent.
///
/// Cells are stored in an arena; the root cell spans the whole extent and each
/// split replaces a leaf with four equal quadrants. Insertion walks a single
/// root-to-leaf path, so both insert and nearest queries are logarithmic in
/// expectation for well-spread points.
pub struct QuadTree {
    extent: Extent,
    bucket_capacity: usize,
    max_depth: u32,
    nodes: Vec<QuadNode>,
    points: Vec<Option<(f64, f64)>>,
    len: usize,
}

impl QuadTree {
    /// Create a quadtree over `extent` with default tuning.
    pub fn new(extent: Extent) -> Self {
        Self::with_params(extent, DEFAULT_BUCKET_CAPACITY, DEFAULT_MAX_DEPTH)
    }

    /// Create a quadtree with an explicit leaf capacity and depth limit.
    ///
    /// A capacity of zero is treated as one, and `max_depth` is clamped to
    /// [`MAX_DEPTH_CEILING`].
    pub fn with_params(extent: Extent, bucket_capacity: usize, max_depth: u32) -> Self {
        Self {
            extent,
            bucket_capacity: bucket_capacity.max(1),
            max_depth: max_depth.min(MAX_DEPTH_CEILING),
            nodes: vec![QuadNode::leaf(extent, 0)],
            points: Vec::new(),
            len: 0,
        }
    }

    /// Extent covered by the root cell.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Number of points stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no points are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Depth of the deepest cell.
    pub fn depth(&self) -> u32 {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }

    fn point(&self, slot: usize) -> (f64, f64) {
        // Every slot reachable from a leaf was written by `insert`.
        self.points[slot].unwrap_or((f64::NAN, f64::NAN))
    }

    fn leaf_for(&self, x: f64, y: f64) -> usize {
        let mut node = ROOT;
        while let Cell::Branch(children) = &self.nodes[node].cell {
            node = children[self.nodes[node].bounds.quadrant_of(x, y)];
        }
        node
    }

    fn split(&mut self, node: usize) {
        let bounds = self.nodes[node].bounds;
        let depth = self.nodes[node].depth + 1;
        let slots = match core::mem::replace(&mut self.nodes[node].cell, Cell::Branch([0; 4])) {
            Cell::Leaf(slots) => slots,
            branch @ Cell::Branch(_) => {
                self.nodes[node].cell = branch;
                return;
            }
        };

        let first = self.nodes.len();
        for q in 0..4 {
            self.nodes.push(QuadNode::leaf(bounds.quadrant(q), depth));
        }
        let children = [first, first + 1, first + 2, first + 3];
        for slot in slots {
            let (x, y) = self.point(slot);
            let child = children[bounds.quadrant_of(x, y)];
            if let Cell::Leaf(bucket) = &mut self.nodes[child].cell {
                bucket.push(slot);
            }
        }
        self.nodes[node].cell = Cell::Branch(children);

        for child in children {
            if self.should_split(child) {
                self.split(child);
            }
        }
    }

    fn should_split(&self, node: usize) -> bool {
        let n = &self.nodes[node];
        match &n.cell {
            Cell::Leaf(slots) => slots.len() > self.bucket_capacity && n.depth < self.max_depth,
            Cell::Branch(_) => false,
        }
    }
}

impl Backend for QuadTree {
    fn for_extent(extent: Extent) -> Self {
        Self::new(extent)
    }

    fn insert(&mut self, slot: usize, x: f64, y: f64) {
        if self.points.len() <= slot {
            self.points.resize_with(slot + 1, || None);
        }
        self.points[slot] = Some((x, y));
        self.len += 1;

        let leaf = self.leaf_for(x, y);
        if let Cell::Leaf(bucket) = &mut self.nodes[leaf].cell {
            bucket.push(slot);
        }
        if self.should_split(leaf) {
            self.split(leaf);
        }
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(QuadNode::leaf(self.extent, 0));
        self.points.clear();
        self.len = 0;
    }

    fn nearest(&self, x: f64, y: f64) -> Option<(usize, f64)> {
        if self.len == 0 {
            return None;
        }
        let mut best: Option<(f64, usize)> = None;
        let mut heap = BinaryHeap::new();
        heap.push(Reverse((
            OrderedFloat(self.nodes[ROOT].bounds.distance_squared_to(x, y)),
            ROOT,
        )));

        while let Some(Reverse((OrderedFloat(bound), node))) = heap.pop() {
            if let Some((best_d, _)) = best
                && bound > best_d
            {
                break;
            }
            match &self.nodes[node].cell {
                Cell::Leaf(slots) => {
                    for &slot in slots {
                        let (px, py) = self.point(slot);
                        let d = distance_squared(px, py, x, y);
                        if improves(d, slot, best) {
                            best = Some((d, slot));
                        }
                    }
                }
                Cell::Branch(children) => {
                    for &child in children {
                        let b = self.nodes[child].bounds.distance_squared_to(x, y);
                        if best.is_none_or(|(best_d, _)| b <= best_d) {
                            heap.push(Reverse((OrderedFloat(b), child)));
                        }
                    }
                }
            }
        }
        best.map(|(d, slot)| (slot, d))
    }
}

impl Debug for QuadTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let leaves = self
            .nodes
            .iter()
            .filter(|n| matches!(n.cell, Cell::Leaf(_)))
            .count();
        f.debug_struct("QuadTree")
            .field("extent", &self.extent)
            .field("bucket_capacity", &self.bucket_capacity)
            .field("max_depth", &self.max_depth)
            .field("points", &self.len)
            .field("cells", &self.nodes.len())
            .field("leaves", &leaves)
            .finish_non_exhaustive()
    }
}
