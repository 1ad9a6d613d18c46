// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by [`PointIndexGeneric`](crate::PointIndexGeneric).

use thiserror::Error;

/// Failure modes of the point index.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum IndexError {
    /// The extent has a non-positive or non-finite dimension.
    #[error("invalid index extent {width}x{height}: dimensions must be finite and positive")]
    InvalidExtent {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },
    /// An inserted point lies outside the configured extent (or is not finite).
    #[error("point ({x}, {y}) lies outside the index extent")]
    OutOfExtent {
        /// Rejected x coordinate.
        x: f64,
        /// Rejected y coordinate.
        y: f64,
    },
    /// A nearest-neighbor query ran against an empty index.
    ///
    /// Callers that insert a root point before querying never see this; it signals a logic fault.
    #[error("nearest-neighbor query on an empty index")]
    Underflow,
}
