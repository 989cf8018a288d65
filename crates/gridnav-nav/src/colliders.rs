use crate::{CollisionQuery, LayerMask, RaycastHit, Vec2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned box collider.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxCollider {
    pub center: Vec2,
    pub size: Vec2,
    #[cfg_attr(feature = "serde", serde(default = "default_layers"))]
    pub layers: LayerMask,
}

#[cfg(feature = "serde")]
fn default_layers() -> LayerMask {
    LayerMask::layer(0)
}

impl BoxCollider {
    pub fn new(center: Vec2, size: Vec2, layers: LayerMask) -> Self {
        Self {
            center,
            size,
            layers,
        }
    }

    /// Collider spanning `min..max`.
    pub fn from_corners(min: Vec2, max: Vec2, layers: LayerMask) -> Self {
        Self::new((min + max) * 0.5, (max - min).abs(), layers)
    }

    pub fn min(&self) -> Vec2 {
        self.center - self.size.abs() * 0.5
    }

    pub fn max(&self) -> Vec2 {
        self.center + self.size.abs() * 0.5
    }

    fn overlaps(&self, min: Vec2, max: Vec2) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        a_min.x <= max.x && a_max.x >= min.x && a_min.y <= max.y && a_max.y >= min.y
    }

    /// Entry distance of a ray with unit `dir`, or `None` if it misses. Rays starting inside
    /// report zero.
    fn ray_entry(&self, origin: Vec2, dir: Vec2) -> Option<f32> {
        let (min, max) = (self.min(), self.max());
        let mut t_min = f32::NEG_INFINITY;
        let mut t_max = f32::INFINITY;

        for (o, d, lo, hi) in [(origin.x, dir.x, min.x, max.x), (origin.y, dir.y, min.y, max.y)] {
            if d.abs() <= f32::EPSILON {
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }
            let t1 = (lo - o) / d;
            let t2 = (hi - o) / d;
            t_min = t_min.max(t1.min(t2));
            t_max = t_max.min(t1.max(t2));
        }

        let entry = t_min.max(0.0);
        (t_max >= entry).then_some(entry)
    }
}

/// In-memory collision backend made of static axis-aligned boxes.
///
/// Stands in for the host physics engine in tools and tests; level geometry in the game is
/// tile-aligned, so boxes cover it exactly.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StaticColliders {
    colliders: Vec<BoxCollider>,
}

impl StaticColliders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, collider: BoxCollider) -> Self {
        self.push(collider);
        self
    }

    pub fn push(&mut self, collider: BoxCollider) {
        self.colliders.push(collider);
    }

    pub fn colliders(&self) -> &[BoxCollider] {
        &self.colliders
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }
}

impl FromIterator<BoxCollider> for StaticColliders {
    fn from_iter<I: IntoIterator<Item = BoxCollider>>(iter: I) -> Self {
        Self {
            colliders: iter.into_iter().collect(),
        }
    }
}

impl CollisionQuery for StaticColliders {
    fn overlap_box(&self, center: Vec2, size: Vec2, layers: LayerMask) -> bool {
        let half = size.abs() * 0.5;
        let (min, max) = (center - half, center + half);
        self.colliders
            .iter()
            .any(|c| c.layers.intersects(layers) && c.overlaps(min, max))
    }

    fn raycast(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        layers: LayerMask,
    ) -> Option<RaycastHit> {
        let dir = direction.normalized();
        if dir == Vec2::ZERO {
            return None;
        }

        self.colliders
            .iter()
            .filter(|c| c.layers.intersects(layers))
            .filter_map(|c| c.ray_entry(origin, dir))
            .filter(|&t| t <= max_distance)
            .min_by(|a, b| a.total_cmp(b))
            .map(|distance| RaycastHit {
                point: origin + dir * distance,
                distance,
            })
    }
}
