use crate::{Node, Vec2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered waypoints from an actor toward its navigation target.
///
/// Produced by an external path search. Navigation consumers always steer toward the head, so
/// the producer is expected to [`advance`](NodePath::advance) past waypoints the actor reached.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodePath {
    pub nodes: Vec<Node>,
}

impl NodePath {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn first(&self) -> Option<&Node> {
        self.nodes.first()
    }

    pub fn last(&self) -> Option<&Node> {
        self.nodes.last()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drop the head waypoint, returning it.
    pub fn advance(&mut self) -> Option<Node> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(self.nodes.remove(0))
        }
    }

    pub fn world_points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.nodes.iter().map(Node::world_pos)
    }
}

impl FromIterator<Node> for NodePath {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
