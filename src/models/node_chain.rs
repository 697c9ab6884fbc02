// src/models/node_chain.rs
//
// The chain of animated nodes.
// Nodes live in one arena; `next` and `prev` are indices into it.

use crate::animation::AnimationState;

/// Overall traversal direction across the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    pub fn sign(self) -> i8 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    index: usize,
    state: AnimationState,
    next: Option<usize>,
    prev: Option<usize>,
}

impl Node {
    fn new(index: usize, prev: Option<usize>, step: f32) -> Self {
        Self {
            index,
            state: AnimationState::new(step),
            next: None,
            prev,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AnimationState {
        &mut self.state
    }

    pub fn next(&self) -> Option<usize> {
        self.next
    }

    pub fn prev(&self) -> Option<usize> {
        self.prev
    }

    pub fn neighbor(&self, direction: Direction) -> Option<usize> {
        match direction {
            Direction::Forward => self.next,
            Direction::Backward => self.prev,
        }
    }
}

/// Outcome of stepping along the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    Moved(usize),
    /// No neighbor in that direction; position is unchanged.
    Boundary(usize),
}

impl Traversal {
    pub fn index(self) -> usize {
        match self {
            Traversal::Moved(index) | Traversal::Boundary(index) => index,
        }
    }

    pub fn is_boundary(self) -> bool {
        matches!(self, Traversal::Boundary(_))
    }
}

#[derive(Debug, Clone)]
pub struct NodeChain {
    nodes: Vec<Node>,
}

impl NodeChain {
    /// Builds the whole chain once. Each node creates its successor and
    /// becomes that successor's `prev`, until the last index.
    pub fn new(len: usize, step: f32) -> Self {
        let mut nodes: Vec<Node> = Vec::with_capacity(len);
        for index in 0..len {
            let prev = index.checked_sub(1);
            if let Some(p) = prev {
                nodes[p].next = Some(index);
            }
            nodes.push(Node::new(index, prev, step));
        }
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn node_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.nodes.get_mut(index)
    }

    pub fn first(&self) -> Option<&Node> {
        self.nodes.first()
    }

    pub fn last(&self) -> Option<&Node> {
        self.nodes.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Neighbor of `index` in `direction`, or `Boundary(index)` at the ends.
    pub fn get_next(&self, index: usize, direction: Direction) -> Traversal {
        match self.node(index).and_then(|node| node.neighbor(direction)) {
            Some(neighbor) => Traversal::Moved(neighbor),
            None => Traversal::Boundary(index),
        }
    }
}
