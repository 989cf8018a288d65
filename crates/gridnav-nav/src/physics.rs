use crate::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bitmask of collision layers a query should consider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const NONE: Self = Self(0);
    pub const ALL: Self = Self(u32::MAX);

    /// Mask containing only layer `index`. Indices past 31 name no layer and yield [`NONE`](Self::NONE).
    pub const fn layer(index: u32) -> Self {
        if index < 32 {
            Self(1 << index)
        } else {
            Self::NONE
        }
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RaycastHit {
    pub point: Vec2,
    pub distance: f32,
}

/// Physics queries the node grid needs from the host engine.
pub trait CollisionQuery {
    /// Whether any collider on `layers` overlaps the axis-aligned box of `size` centered at
    /// `center`.
    fn overlap_box(&self, center: Vec2, size: Vec2, layers: LayerMask) -> bool;

    /// Nearest collider on `layers` hit by a ray from `origin` along `direction`, within
    /// `max_distance` (use `f32::INFINITY` for unbounded).
    fn raycast(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        layers: LayerMask,
    ) -> Option<RaycastHit>;
}

impl<T: CollisionQuery + ?Sized> CollisionQuery for &T {
    fn overlap_box(&self, center: Vec2, size: Vec2, layers: LayerMask) -> bool {
        (**self).overlap_box(center, size, layers)
    }

    fn raycast(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        layers: LayerMask,
    ) -> Option<RaycastHit> {
        (**self).raycast(origin, direction, max_distance, layers)
    }
}
