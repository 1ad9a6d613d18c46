// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: construction, sampling, extension, and dirty tracking.

use alloc::vec;
use alloc::vec::Vec;
use kurbo::{Point, Vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thicket_index::{Extent, PointIndex};

use crate::config::RrtConfig;
use crate::error::RrtError;
use crate::types::{DirtyEntry, Growth, Node, NodeFlags, NodeId, Sample};

const START: NodeId = NodeId(0);
const GOAL: NodeId = NodeId(1);

// Upper bound on up-front capacity. The node budget is a stop signal, not a size hint.
const PREALLOCATE_LIMIT: usize = 4096;

/// Move from `from` toward `toward`, stopping after at most `max_len`.
///
/// Returns the endpoint and whether it was shortened. A shortened endpoint lies
/// exactly `max_len` from `from` (up to rounding) on the same heading.
pub fn steer(from: Point, toward: Point, max_len: f64) -> (Point, bool) {
    let delta: Vec2 = toward - from;
    let d = delta.hypot();
    if d > max_len {
        (from + delta * (max_len / d), true)
    } else {
        (toward, false)
    }
}

/// A goal-biased Rapidly-exploring Random Tree over a rectangular extent.
///
/// Owns the node arena, the nearest-node index, the dirty list, and the random
/// generator. Each call to [`step`](Self::step) grows the tree by exactly one node
/// (or connects the goal) and records the change for the next
/// [`drain_dirty`](Self::drain_dirty).
pub struct Rrt<R: Rng = StdRng> {
    config: RrtConfig,
    nodes: Vec<Node>, // creation order: start, goal, then grown nodes
    index: PointIndex<NodeId>,
    dirty: Vec<DirtyEntry>,
    rng: R,
}

impl<R: Rng> core::fmt::Debug for Rrt<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Rrt")
            .field("config", &self.config)
            .field("nodes_total", &self.nodes.len())
            .field("connected", &self.len())
            .field("goal_reached", &self.is_goal_reached())
            .field("dirty", &self.dirty.len())
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl Rrt<StdRng> {
    /// Build a tree whose random generator is seeded with `seed`.
    pub fn from_seed(config: RrtConfig, seed: u64) -> Result<Self, RrtError> {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Rrt<R> {
    /// Validate `config`, create the start and goal nodes, and index the start.
    ///
    /// The dirty list initially holds the start and the (unconnected) goal so a
    /// renderer can place both markers on its first drain.
    pub fn new(config: RrtConfig, rng: R) -> Result<Self, RrtError> {
        config.validate()?;
        let extent = Extent::from_size(config.extent.width, config.extent.height);
        let capacity = config.node_budget.min(PREALLOCATE_LIMIT);
        let mut index = PointIndex::new(extent)?;
        index.reserve(capacity);
        index.insert(config.start.x, config.start.y, START)?;

        let mut nodes = Vec::with_capacity(capacity);
        nodes.push(Node::new(config.start, None, NodeFlags::START));
        nodes.push(Node::new(config.goal, None, NodeFlags::GOAL));
        let dirty = vec![
            DirtyEntry {
                node: START,
                position: config.start,
                parent: None,
            },
            DirtyEntry {
                node: GOAL,
                position: config.goal,
                parent: None,
            },
        ];

        tracing::debug!(
            width = config.extent.width,
            height = config.extent.height,
            start = ?config.start,
            goal = ?config.goal,
            max_edge_length = config.max_edge_length,
            goal_bias = config.goal_bias,
            "rrt created"
        );

        Ok(Self {
            config,
            nodes,
            index,
            dirty,
            rng,
        })
    }

    /// The validated configuration.
    pub fn config(&self) -> &RrtConfig {
        &self.config
    }

    /// The root node id.
    pub fn start(&self) -> NodeId {
        START
    }

    /// The goal node id.
    pub fn goal(&self) -> NodeId {
        GOAL
    }

    /// True once the goal has been connected to the tree.
    pub fn is_goal_reached(&self) -> bool {
        self.nodes[GOAL.index()].parent.is_some()
    }

    /// Number of nodes connected to the tree: the start, every grown node,
    /// and the goal once reached. Grows by exactly one per successful extension.
    pub fn len(&self) -> usize {
        self.index.len() + usize::from(self.is_goal_reached())
    }

    /// Always false: the start node is connected from construction on.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// True once [`len`](Self::len) has reached the configured node budget.
    pub fn is_budget_exhausted(&self) -> bool {
        self.len() >= self.config.node_budget
    }

    /// Draw the next growth target.
    ///
    /// With probability `goal_bias` this is [`Sample::Goal`]. Otherwise it is a
    /// uniform point inside the margin-inset extent.
    pub fn sample_location(&mut self) -> Sample {
        if self.rng.random_bool(self.config.goal_bias) {
            return Sample::Goal;
        }
        let r = self.config.sampling_bounds();
        let x = self.rng.random_range(r.x0..=r.x1);
        let y = self.rng.random_range(r.y0..=r.y1);
        Sample::Free(Point::new(x, y))
    }

    /// Grow the tree toward `sample`.
    ///
    /// The nearest indexed node becomes the parent. The edge is shortened to
    /// `max_edge_length` if needed. A goal sample within reach connects the goal
    /// the first time; anything else creates a new node at the (possibly
    /// shortened) target.
    ///
    /// The goal is never indexed, so it never becomes a parent: once reached,
    /// goal samples keep growing ordinary nodes toward it from elsewhere.
    pub fn extend(&mut self, sample: Sample) -> Result<Growth, RrtError> {
        let target = match sample {
            Sample::Goal => self.config.goal,
            Sample::Free(p) => p,
        };
        let (_, parent) = self.index.nearest(target.x, target.y)?;
        let from = self.nodes[parent.index()].position;
        let (point, clamped) = steer(from, target, self.config.max_edge_length);

        if sample == Sample::Goal && !clamped && !self.is_goal_reached() {
            return self.connect_goal(parent);
        }

        let id = NodeId::new(self.nodes.len());
        self.index
            .insert(point.x, point.y, id)
            .inspect_err(|e| tracing::warn!(error = %e, ?point, "rejected growth target"))?;
        self.nodes.push(Node::new(point, Some(parent), NodeFlags::empty()));
        self.nodes[parent.index()].children.push(id);
        self.mark_dirty(id);
        tracing::trace!(node = id.index(), parent = parent.index(), clamped, "extended");
        Ok(Growth::Extended {
            node: id,
            parent,
            clamped,
        })
    }

    /// Grow toward an arbitrary point. Same as `extend(Sample::Free(point))`.
    pub fn extend_toward(&mut self, point: Point) -> Result<Growth, RrtError> {
        self.extend(Sample::Free(point))
    }

    /// One tick: sample a target and extend toward it.
    pub fn step(&mut self) -> Result<Growth, RrtError> {
        let sample = self.sample_location();
        self.extend(sample)
    }

    fn connect_goal(&mut self, parent: NodeId) -> Result<Growth, RrtError> {
        self.nodes[GOAL.index()].parent = Some(parent);
        self.nodes[parent.index()].children.push(GOAL);
        self.mark_dirty(GOAL);
        tracing::debug!(
            parent = parent.index(),
            nodes = self.len(),
            "goal connected"
        );
        Ok(Growth::GoalConnected { goal: GOAL, parent })
    }

    fn mark_dirty(&mut self, id: NodeId) {
        let node = &self.nodes[id.index()];
        let parent = node.parent.map(|p| self.nodes[p.index()].position);
        self.dirty.push(DirtyEntry {
            node: id,
            position: node.position,
            parent,
        });
    }

    /// Take everything created or connected since the last drain, in order.
    pub fn drain_dirty(&mut self) -> Vec<DirtyEntry> {
        core::mem::take(&mut self.dirty)
    }

    /// Number of entries waiting for the next drain.
    pub fn dirty_len(&self) -> usize {
        self.dirty.len()
    }

    /// Look up a node.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Position of a node.
    pub fn position(&self, id: NodeId) -> Option<Point> {
        self.node(id).map(Node::position)
    }

    /// Parent of a node, if it has one.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(Node::parent)
    }

    /// Children of a node in creation order (empty for unknown ids).
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(Node::children).unwrap_or(&[])
    }

    /// Number of parent links from `id` to the start node.
    ///
    /// `None` for unknown ids and for the goal before it is connected.
    pub fn depth(&self, id: NodeId) -> Option<usize> {
        let mut current = id;
        let mut depth = 0;
        while current != START {
            current = self.parent(current)?;
            depth += 1;
            if depth > self.nodes.len() {
                return None;
            }
        }
        Some(depth)
    }

    /// Every node ever created, in creation order (the goal is included even
    /// while unconnected).
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i), n))
    }

    /// Every tree edge as `(parent position, child position)`, in child creation order.
    ///
    /// Useful for a full redraw when incremental output was lost.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.nodes.iter().filter_map(|n| {
            n.parent
                .map(|p| (self.nodes[p.index()].position, n.position))
        })
    }

    /// The nearest-node index, for inspection. Holds every connected node except the goal.
    pub fn index(&self) -> &PointIndex<NodeId> {
        &self.index
    }
}
