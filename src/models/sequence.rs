// src/models/sequence.rs
//
// Position and overall direction of the traversal through a NodeChain.
// Only the current node is ever drawn or updated.

use log::debug;
use nannou::Draw;

use crate::animation::StateUpdate;
use crate::config::Palette;
use crate::draw::{draw_node, Geometry};
use crate::models::node_chain::{Direction, Node, NodeChain};

/// Result of one `Sequence::update` tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceUpdate {
    Idle,
    Moving,
    StepComplete {
        from: usize,
        to: usize,
        reversed: bool,
    },
}

#[derive(Debug, Clone)]
pub struct Sequence {
    chain: NodeChain,
    current: usize,
    direction: Direction,
}

impl Sequence {
    /// Starts at the first node heading forward. None for an empty chain.
    pub fn new(chain: NodeChain) -> Option<Self> {
        if chain.is_empty() {
            return None;
        }
        Some(Self {
            chain,
            current: 0,
            direction: Direction::Forward,
        })
    }

    pub fn chain(&self) -> &NodeChain {
        &self.chain
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_node(&self) -> Option<&Node> {
        self.chain.node(self.current)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn draw(&self, draw: &Draw, geometry: &Geometry, palette: &Palette) {
        if let Some(node) = self.current_node() {
            draw_node(
                draw,
                geometry,
                palette.color(node.index()),
                node.state().scale(),
            );
        }
    }

    /// Ticks the current node. When it settles, moves to the neighbor in the
    /// overall direction, reversing that direction at either end.
    pub fn update(&mut self) -> SequenceUpdate {
        let Some(node) = self.chain.node_mut(self.current) else {
            return SequenceUpdate::Idle;
        };

        match node.state_mut().update() {
            StateUpdate::Idle => SequenceUpdate::Idle,
            StateUpdate::Moving => SequenceUpdate::Moving,
            StateUpdate::Completed => {
                let from = self.current;
                let traversal = self.chain.get_next(from, self.direction);
                let reversed = traversal.is_boundary();
                if reversed {
                    self.direction = self.direction.reversed();
                    debug!(
                        "Reached end of chain at node {}, now heading {:?}",
                        from, self.direction
                    );
                }
                self.current = traversal.index();
                SequenceUpdate::StepComplete {
                    from,
                    to: self.current,
                    reversed,
                }
            }
        }
    }

    /// Starts the current node's transition. False if it is already moving.
    pub fn start_updating(&mut self) -> bool {
        self.chain
            .node_mut(self.current)
            .map(|node| node.state_mut().start_updating())
            .unwrap_or(false)
    }
}
