// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket RRT: a Kurbo-native, goal-biased Rapidly-exploring Random Tree.
//!
//! Thicket RRT grows a space-filling tree over a rectangular extent, from a start
//! point toward a goal point, for motion-planning-style exploration.
//!
//! - Samples targets uniformly inside a margin-inset extent, or the goal itself with a
//!   fixed probability (goal bias).
//! - Finds the nearest existing node through a quadtree from [`thicket_index`].
//! - Shortens every new edge to at most `max_edge_length`, keeping its heading.
//! - Records each created or newly connected node in a dirty list that a renderer drains.
//!
//! The tree never draws and never paces itself. A driver calls [`Rrt::step`] at whatever
//! cadence it likes, hands [`Rrt::drain_dirty`] output to its renderer, and stops once
//! [`Rrt::is_budget_exhausted`] reports true.
//!
//! ## The goal node
//!
//! The goal is created up front with no parent and is never inserted into the index,
//! so it never becomes a parent: reaching it ends that branch. When a goal-biased
//! sample's nearest node is within `max_edge_length`, the goal is connected: it gains
//! that single parent and is marked dirty. Later goal samples grow ordinary nodes
//! toward the goal from the nearest indexed node.
//!
//! ## API overview
//!
//! - [`RrtConfig`]: start, goal, extent, maximum edge length, goal bias, sampling margin, node budget.
//! - [`Rrt`]: the tree. [`Rrt::sample_location`], [`Rrt::extend`], [`Rrt::step`],
//!   [`Rrt::drain_dirty`], [`Rrt::len`].
//! - [`Sample`]: a growth target, tagged as goal-biased or free.
//! - [`Growth`]: what one extension did.
//! - [`DirtyEntry`]: `(node, position, parent position)` for the renderer.
//! - [`NodeId`] and [`NodeFlags`]: handles and roles.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use thicket_rrt::{Rrt, RrtConfig};
//!
//! let config = RrtConfig::new(
//!     Point::new(50.0, 500.0),
//!     Point::new(750.0, 100.0),
//!     Size::new(800.0, 600.0),
//!     100.0,
//! );
//! let mut rrt = Rrt::from_seed(config, 7)?;
//!
//! while !rrt.is_budget_exhausted() {
//!     rrt.step()?;
//!     for entry in rrt.drain_dirty() {
//!         // Draw a point at `entry.position` and a segment to `entry.parent`.
//!         let _ = (entry.position, entry.parent);
//!     }
//! }
//! assert_eq!(rrt.len(), 1000);
//! # Ok::<(), thicket_rrt::RrtError>(())
//! ```
//!
//! This crate is `no_std` and uses `alloc`. Enable `std` (default) or `libm` for float math.

#![no_std]

extern crate alloc;

mod config;
mod error;
mod tree;
mod types;

pub use config::{DEFAULT_GOAL_BIAS, DEFAULT_NODE_BUDGET, DEFAULT_SAMPLING_MARGIN, RrtConfig};
pub use error::{ConfigError, RrtError};
pub use tree::{Rrt, steer};
pub use types::{DirtyEntry, Growth, Node, NodeFlags, NodeId, Sample};
