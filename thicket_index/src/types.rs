// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

/// Closed axis-aligned rectangle in 2D, used as the extent of an index and
/// as the bounds of quadtree cells.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Extent {
    /// Minimum x (left)
    pub min_x: f64,
    /// Minimum y (top)
    pub min_y: f64,
    /// Maximum x (right)
    pub max_x: f64,
    /// Maximum y (bottom)
    pub max_y: f64,
}

impl Extent {
    /// Create a new extent from min/max corners.
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Create the extent `[0, width] × [0, height]`.
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Width of the extent.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the extent.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// True if both dimensions are finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        let (w, h) = (self.width(), self.height());
        w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0
    }

    /// Whether the closed extent contains the point. NaN coordinates are never contained.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        self.min_x <= x && x <= self.max_x && self.min_y <= y && y <= self.max_y
    }

    /// Squared distance from the point to the nearest point of the rectangle.
    ///
    /// Zero when the point lies inside. This is a lower bound for the squared
    /// distance to any point contained in the rectangle.
    pub fn distance_squared_to(&self, x: f64, y: f64) -> f64 {
        let dx = (self.min_x - x).max(0.0).max(x - self.max_x);
        let dy = (self.min_y - y).max(0.0).max(y - self.max_y);
        dx * dx + dy * dy
    }

    /// Center of the extent.
    pub fn center(&self) -> (f64, f64) {
        (
            0.5 * (self.min_x + self.max_x),
            0.5 * (self.min_y + self.max_y),
        )
    }

    /// Quadrant (0..4) that owns the point: bit 0 is east, bit 1 is south.
    ///
    /// Points on a center line belong to the east/south side.
    pub fn quadrant_of(&self, x: f64, y: f64) -> usize {
        let (cx, cy) = self.center();
        usize::from(x >= cx) | (usize::from(y >= cy) << 1)
    }

    /// Bounds of quadrant `q` as numbered by [`Extent::quadrant_of`].
    pub fn quadrant(&self, q: usize) -> Self {
        let (cx, cy) = self.center();
        let (min_x, max_x) = if q & 1 == 0 {
            (self.min_x, cx)
        } else {
            (cx, self.max_x)
        };
        let (min_y, max_y) = if q & 2 == 0 {
            (self.min_y, cy)
        } else {
            (cy, self.max_y)
        };
        Self::new(min_x, min_y, max_x, max_y)
    }
}

/// Squared Euclidean distance between two points.
#[inline]
pub fn distance_squared(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let dx = ax - bx;
    let dy = ay - by;
    dx * dx + dy * dy
}

/// True if `(d, slot)` beats the current best under the index tie-break:
/// smaller distance wins, and among equal distances the lower slot (earlier insert) wins.
#[inline]
pub(crate) fn improves(d: f64, slot: usize, best: Option<(f64, usize)>) -> bool {
    match best {
        None => true,
        Some((bd, bs)) => d < bd || (d == bd && slot < bs),
    }
}
