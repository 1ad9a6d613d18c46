// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for tree construction and growth.

use thicket_index::IndexError;
use thiserror::Error;

/// Reasons an [`RrtConfig`](crate::RrtConfig) is rejected.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// A coordinate, dimension, or parameter is NaN or infinite.
    #[error("configuration contains a non-finite value")]
    NonFinite,
    /// Width or height is zero or negative.
    #[error("extent {width}x{height} must have positive dimensions")]
    NonPositiveExtent {
        /// Configured width.
        width: f64,
        /// Configured height.
        height: f64,
    },
    /// The maximum edge length is zero or negative.
    #[error("maximum edge length {0} must be positive")]
    NonPositiveEdgeLength(f64),
    /// The start position lies outside the extent.
    #[error("start ({x}, {y}) lies outside the extent")]
    StartOutsideExtent {
        /// Start x.
        x: f64,
        /// Start y.
        y: f64,
    },
    /// The goal position lies outside the extent.
    #[error("goal ({x}, {y}) lies outside the extent")]
    GoalOutsideExtent {
        /// Goal x.
        x: f64,
        /// Goal y.
        y: f64,
    },
    /// The goal bias is not a probability.
    #[error("goal bias {0} must lie in [0, 1]")]
    GoalBiasOutOfRange(f64),
    /// The sampling margin would leave no room to sample.
    #[error("sampling margin {0} must lie in [0, 0.5)")]
    SamplingMarginOutOfRange(f64),
}

/// Errors reported by [`Rrt`](crate::Rrt).
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum RrtError {
    /// The configuration failed validation. Fatal: nothing was built.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    /// The spatial index refused an operation.
    ///
    /// Under a valid configuration growth never triggers this; an occurrence
    /// means a caller-supplied target escaped the extent or an internal invariant broke.
    #[error(transparent)]
    Index(#[from] IndexError),
}
