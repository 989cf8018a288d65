use thiserror::Error;

use crate::{LayerMask, Vec2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sampling parameters for a [`NodeGrid`](crate::NodeGrid).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridConfig {
    /// World-space center of the sampled region.
    pub center: Vec2,
    /// Full width and height of the sampled region.
    pub world_size: Vec2,
    /// Half the side of one cell.
    pub node_radius: f32,
    /// Layers that count as solid surfaces.
    #[cfg_attr(feature = "serde", serde(default = "default_surfaces"))]
    pub surfaces: LayerMask,
}

#[cfg(feature = "serde")]
fn default_surfaces() -> LayerMask {
    LayerMask::layer(0)
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GridConfigError {
    #[error("node radius must be finite and > 0 (got {0})")]
    InvalidNodeRadius(f32),
    #[error("world size must be finite and > 0 on both axes (got {0:?})")]
    InvalidWorldSize(Vec2),
    #[error("center must be finite (got {0:?})")]
    InvalidCenter(Vec2),
    #[error("grid of {size_x}x{size_y} cells is empty; world size is smaller than one node")]
    EmptyGrid { size_x: i32, size_y: i32 },
    #[error("grid of {size_x}x{size_y} cells exceeds the limit of {max_nodes} nodes")]
    TooLarge {
        size_x: f64,
        size_y: f64,
        max_nodes: usize,
    },
}

impl GridConfig {
    /// Largest node count a grid may hold.
    pub const MAX_NODES: usize = 1 << 24;

    pub fn new(center: Vec2, world_size: Vec2, node_radius: f32, surfaces: LayerMask) -> Self {
        Self {
            center,
            world_size,
            node_radius,
            surfaces,
        }
    }

    pub fn node_diameter(&self) -> f32 {
        self.node_radius * 2.0
    }

    /// Cell counts along x and y: world extents over diameter, rounded to nearest.
    ///
    /// Saturates for configs that [`validate`](Self::validate) rejects as too large.
    pub fn dimensions(&self) -> (i32, i32) {
        let (x, y) = self.cell_counts();
        (x as i32, y as i32)
    }

    fn cell_counts(&self) -> (f64, f64) {
        let d = f64::from(self.node_radius) * 2.0;
        (
            (f64::from(self.world_size.x) / d).round(),
            (f64::from(self.world_size.y) / d).round(),
        )
    }

    pub fn validate(&self) -> Result<(), GridConfigError> {
        if !self.node_radius.is_finite() || self.node_radius <= 0.0 {
            return Err(GridConfigError::InvalidNodeRadius(self.node_radius));
        }
        if !self.world_size.is_finite() || self.world_size.x <= 0.0 || self.world_size.y <= 0.0 {
            return Err(GridConfigError::InvalidWorldSize(self.world_size));
        }
        if !self.center.is_finite() {
            return Err(GridConfigError::InvalidCenter(self.center));
        }
        let (size_x, size_y) = self.cell_counts();
        let too_large = GridConfigError::TooLarge {
            size_x,
            size_y,
            max_nodes: Self::MAX_NODES,
        };
        if !size_x.is_finite()
            || !size_y.is_finite()
            || size_x > f64::from(i32::MAX)
            || size_y > f64::from(i32::MAX)
        {
            return Err(too_large);
        }
        if size_x < 1.0 || size_y < 1.0 {
            return Err(GridConfigError::EmptyGrid {
                size_x: size_x as i32,
                size_y: size_y as i32,
            });
        }
        if size_x * size_y > Self::MAX_NODES as f64 {
            return Err(too_large);
        }
        Ok(())
    }
}
