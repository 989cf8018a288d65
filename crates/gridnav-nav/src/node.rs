use crate::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One classified cell of a [`NodeGrid`](crate::NodeGrid).
///
/// Nodes are created once during grid construction and never change afterwards. They are `Copy`
/// so paths can carry them by value without borrowing the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node {
    world_pos: Vec2,
    grid_x: i32,
    grid_y: i32,
    walkable: bool,
    distance_from_surface_below: f32,
}

impl Node {
    pub fn new(
        world_pos: Vec2,
        grid_x: i32,
        grid_y: i32,
        walkable: bool,
        distance_from_surface_below: f32,
    ) -> Self {
        Self {
            world_pos,
            grid_x,
            grid_y,
            walkable,
            distance_from_surface_below: if walkable {
                distance_from_surface_below.max(0.0)
            } else {
                0.0
            },
        }
    }

    pub fn world_pos(&self) -> Vec2 {
        self.world_pos
    }

    pub fn grid_x(&self) -> i32 {
        self.grid_x
    }

    pub fn grid_y(&self) -> i32 {
        self.grid_y
    }

    pub fn grid_coords(&self) -> (i32, i32) {
        (self.grid_x, self.grid_y)
    }

    pub fn is_walkable(&self) -> bool {
        self.walkable
    }

    /// Vertical distance to the nearest surface below. Always zero for blocked nodes.
    pub fn distance_from_surface_below(&self) -> f32 {
        self.distance_from_surface_below
    }
}
