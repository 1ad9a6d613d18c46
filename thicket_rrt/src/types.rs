// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the growth tree: node identifiers, flags, samples, and growth events.

use alloc::vec::Vec;
use kurbo::Point;

/// Identifier for a node in the tree.
///
/// A small, copyable handle into the tree's node arena. Nodes are never
/// removed, so an id stays valid for the lifetime of the [`Rrt`](crate::Rrt)
/// that produced it. Ids are assigned in creation order: the start node is
/// slot 0 and the goal node is slot 1.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "NodeId uses 32-bit indices by design."
    )]
    pub(crate) const fn new(idx: usize) -> Self {
        Self(idx as u32)
    }

    /// Position of this node in creation order.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Role flags for a node.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// The root of the tree; never has a parent.
        const START = 0b0000_0001;
        /// The goal; gains its parent lazily when the tree reaches it.
        const GOAL  = 0b0000_0010;
    }
}

/// One vertex of the growth tree.
#[derive(Clone, Debug)]
pub struct Node {
    pub(crate) position: Point,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) flags: NodeFlags,
}

impl Node {
    pub(crate) fn new(position: Point, parent: Option<NodeId>, flags: NodeFlags) -> Self {
        Self {
            position,
            parent,
            children: Vec::new(),
            flags,
        }
    }

    /// Where the node sits. Never changes after creation.
    pub fn position(&self) -> Point {
        self.position
    }

    /// The node this one was grown from.
    ///
    /// `None` for the start node, and for the goal until it is connected.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Nodes grown from this one, in creation order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Role flags.
    pub fn flags(&self) -> NodeFlags {
        self.flags
    }

    /// True for the start node.
    pub fn is_start(&self) -> bool {
        self.flags.contains(NodeFlags::START)
    }

    /// True for the goal node.
    pub fn is_goal(&self) -> bool {
        self.flags.contains(NodeFlags::GOAL)
    }
}

/// A sampled growth target.
///
/// Whether a sample aims at the goal is decided when sampling, so extension
/// never has to compare coordinates against the goal position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Sample {
    /// Goal-biased sample: grow toward the goal's exact position.
    Goal,
    /// Free sample at an arbitrary point.
    Free(Point),
}

/// The single growth event produced by one call to [`Rrt::extend`](crate::Rrt::extend).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Growth {
    /// A new ordinary node was created.
    Extended {
        /// The new node.
        node: NodeId,
        /// Its parent, the nearest existing node to the sample.
        parent: NodeId,
        /// True if the edge was shortened to the maximum edge length.
        clamped: bool,
    },
    /// The goal node was connected to the tree.
    GoalConnected {
        /// The goal node.
        goal: NodeId,
        /// Its new parent.
        parent: NodeId,
    },
}

impl Growth {
    /// The node created or connected by this event.
    pub fn node(&self) -> NodeId {
        match *self {
            Self::Extended { node, .. } => node,
            Self::GoalConnected { goal, .. } => goal,
        }
    }

    /// The parent the node was attached to.
    pub fn parent(&self) -> NodeId {
        match *self {
            Self::Extended { parent, .. } | Self::GoalConnected { parent, .. } => parent,
        }
    }
}

/// One entry of the dirty list handed to a renderer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DirtyEntry {
    /// The node that was created or newly connected.
    pub node: NodeId,
    /// Its position.
    pub position: Point,
    /// Its parent's position at the time it was marked, if any. Draw a segment to it.
    pub parent: Option<Point>,
}
