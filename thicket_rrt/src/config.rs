// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planning-run configuration.

use kurbo::{Point, Rect, Size};

use crate::error::ConfigError;

/// Probability of sampling the goal when none is configured.
pub const DEFAULT_GOAL_BIAS: f64 = 0.10;

/// Fraction of each extent dimension kept free of samples on every side.
pub const DEFAULT_SAMPLING_MARGIN: f64 = 0.01;

/// Node count at which [`Rrt::is_budget_exhausted`](crate::Rrt::is_budget_exhausted) reports true.
pub const DEFAULT_NODE_BUDGET: usize = 1000;

/// Inputs for one planning run.
///
/// Build with [`RrtConfig::new`] and adjust the optional knobs with the `with_*` methods:
///
/// ```
/// use kurbo::{Point, Size};
/// use thicket_rrt::RrtConfig;
///
/// let config = RrtConfig::new(
///     Point::new(50.0, 500.0),
///     Point::new(750.0, 100.0),
///     Size::new(800.0, 600.0),
///     100.0,
/// )
/// .with_goal_bias(0.05)
/// .with_node_budget(2000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RrtConfig {
    /// Root of the tree.
    pub start: Point,
    /// Position the tree grows toward.
    pub goal: Point,
    /// The region `[0, width] × [0, height]` in which sampling and indexing happen.
    pub extent: Size,
    /// Upper bound on every edge length.
    pub max_edge_length: f64,
    /// Probability in `[0, 1]` that a sample targets the goal.
    pub goal_bias: f64,
    /// Fraction in `[0, 0.5)` of each dimension excluded from free sampling on each side.
    pub sampling_margin: f64,
    /// Node count the driver is expected to stop at. The tree never stops by itself.
    pub node_budget: usize,
}

impl RrtConfig {
    /// Configuration with default goal bias, sampling margin, and node budget.
    pub fn new(start: Point, goal: Point, extent: Size, max_edge_length: f64) -> Self {
        Self {
            start,
            goal,
            extent,
            max_edge_length,
            goal_bias: DEFAULT_GOAL_BIAS,
            sampling_margin: DEFAULT_SAMPLING_MARGIN,
            node_budget: DEFAULT_NODE_BUDGET,
        }
    }

    /// Set the goal-bias probability.
    #[must_use]
    pub fn with_goal_bias(mut self, goal_bias: f64) -> Self {
        self.goal_bias = goal_bias;
        self
    }

    /// Set the sampling margin.
    #[must_use]
    pub fn with_sampling_margin(mut self, sampling_margin: f64) -> Self {
        self.sampling_margin = sampling_margin;
        self
    }

    /// Set the node budget.
    #[must_use]
    pub fn with_node_budget(mut self, node_budget: usize) -> Self {
        self.node_budget = node_budget;
        self
    }

    /// The closed extent rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(Point::ORIGIN, self.extent)
    }

    /// The rectangle free samples are drawn from, inset by the margin.
    pub fn sampling_bounds(&self) -> Rect {
        let m = self.sampling_margin;
        Rect::new(
            m * self.extent.width,
            m * self.extent.height,
            (1.0 - m) * self.extent.width,
            (1.0 - m) * self.extent.height,
        )
    }

    /// Check every constraint. Returns the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            self.start.x,
            self.start.y,
            self.goal.x,
            self.goal.y,
            self.extent.width,
            self.extent.height,
            self.max_edge_length,
            self.goal_bias,
            self.sampling_margin,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(ConfigError::NonFinite);
        }
        if self.extent.width <= 0.0 || self.extent.height <= 0.0 {
            return Err(ConfigError::NonPositiveExtent {
                width: self.extent.width,
                height: self.extent.height,
            });
        }
        if self.max_edge_length <= 0.0 {
            return Err(ConfigError::NonPositiveEdgeLength(self.max_edge_length));
        }
        if !self.contains(self.start) {
            return Err(ConfigError::StartOutsideExtent {
                x: self.start.x,
                y: self.start.y,
            });
        }
        if !self.contains(self.goal) {
            return Err(ConfigError::GoalOutsideExtent {
                x: self.goal.x,
                y: self.goal.y,
            });
        }
        if !(0.0..=1.0).contains(&self.goal_bias) {
            return Err(ConfigError::GoalBiasOutOfRange(self.goal_bias));
        }
        if !(0.0..0.5).contains(&self.sampling_margin) {
            return Err(ConfigError::SamplingMarginOutOfRange(self.sampling_margin));
        }
        Ok(())
    }

    // Closed containment; `Rect::contains` excludes the far edges.
    fn contains(&self, p: Point) -> bool {
        (0.0..=self.extent.width).contains(&p.x) && (0.0..=self.extent.height).contains(&p.y)
    }
}
