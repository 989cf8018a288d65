use tracing::{debug, debug_span};

use crate::{
    ActivePath, CollisionQuery, GridConfig, GridConfigError, GridObserver, LayerMask, Node,
    NullObserver, Vec2,
};

/// Side of the walkability test box relative to the node diameter. Slightly under one so that
/// surfaces flush against a cell edge do not block the neighbouring cell.
const WALKABLE_TEST_SCALE: f32 = 0.9;

/// Uniform grid of classified nodes covering a rectangular world region.
///
/// Built once from static geometry; dimensions and cell size never change afterwards. The only
/// mutable part is the shared [`ActivePath`] slot.
#[derive(Debug, Clone)]
pub struct NodeGrid {
    center: Vec2,
    world_size: Vec2,
    node_radius: f32,
    node_diameter: f32,
    surfaces: LayerMask,
    size_x: i32,
    size_y: i32,
    // Indexed `x * size_y + y`, i.e. construction order.
    nodes: Vec<Node>,
    active_path: ActivePath,
}

impl NodeGrid {
    pub fn new(config: GridConfig, physics: &impl CollisionQuery) -> Result<Self, GridConfigError> {
        Self::with_observer(config, physics, &mut NullObserver)
    }

    /// Build the grid, reporting each classified node to `observer`.
    pub fn with_observer(
        config: GridConfig,
        physics: &impl CollisionQuery,
        observer: &mut impl GridObserver,
    ) -> Result<Self, GridConfigError> {
        config.validate()?;

        let node_radius = config.node_radius;
        let node_diameter = config.node_diameter();
        let (size_x, size_y) = config.dimensions();

        let span = debug_span!("node_grid.build", size_x, size_y, node_diameter).entered();

        let bottom_left = config.center - config.world_size * 0.5;
        let test_box = Vec2::splat(node_diameter * WALKABLE_TEST_SCALE);

        let mut nodes: Vec<Node> = Vec::with_capacity((size_x as usize) * (size_y as usize));
        for x in 0..size_x {
            for y in 0..size_y {
                let world_point = bottom_left
                    + Vec2::new(
                        x as f32 * node_diameter + node_radius,
                        y as f32 * node_diameter + node_radius,
                    );
                let walkable = !physics.overlap_box(world_point, test_box, config.surfaces);

                let mut clearance = 0.0;
                if walkable {
                    // The node directly below is the previous one pushed in this column.
                    let below = if y > 0 { nodes.last() } else { None };
                    clearance = match below {
                        Some(below) if below.is_walkable() => {
                            below.distance_from_surface_below() + node_diameter
                        }
                        _ => physics
                            .raycast(world_point, Vec2::DOWN, f32::INFINITY, config.surfaces)
                            .map(|hit| hit.distance)
                            .unwrap_or(0.0),
                    };
                }

                let node = Node::new(world_point, x, y, walkable, clearance);
                observer.on_node(&node);
                nodes.push(node);
            }
        }

        let grid = Self {
            center: config.center,
            world_size: config.world_size,
            node_radius,
            node_diameter,
            surfaces: config.surfaces,
            size_x,
            size_y,
            nodes,
            active_path: ActivePath::new(),
        };

        debug!(
            walkable = grid.walkable_count(),
            total = grid.len(),
            "node grid built"
        );
        drop(span);

        observer.finished(&grid);
        Ok(grid)
    }

    pub fn config(&self) -> GridConfig {
        GridConfig::new(
            self.center,
            self.world_size,
            self.node_radius,
            self.surfaces,
        )
    }

    pub fn size_x(&self) -> i32 {
        self.size_x
    }

    pub fn size_y(&self) -> i32 {
        self.size_y
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn world_size(&self) -> Vec2 {
        self.world_size
    }

    pub fn node_radius(&self) -> f32 {
        self.node_radius
    }

    pub fn node_diameter(&self) -> f32 {
        self.node_diameter
    }

    pub fn bottom_left(&self) -> Vec2 {
        self.center - self.world_size * 0.5
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.size_x && y < self.size_y
    }

    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some((x * self.size_y + y) as usize)
    }

    pub fn node(&self, x: i32, y: i32) -> Option<&Node> {
        self.idx(x, y).map(|idx| &self.nodes[idx])
    }

    /// All nodes in construction order (x outer, y inner).
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter()
    }

    pub fn walkable_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_walkable()).count()
    }

    /// Node whose cell contains `point`, clamped to the grid edges.
    pub fn node_from_world_point(&self, point: Vec2) -> &Node {
        let local = (point - self.bottom_left()) / self.node_diameter;
        let x = (local.x.floor() as i32).clamp(0, self.size_x - 1);
        let y = (local.y.floor() as i32).clamp(0, self.size_y - 1);
        &self.nodes[(x * self.size_y + y) as usize]
    }

    /// In-bounds 8-connected neighbours, in a fixed order for deterministic searches.
    pub fn neighbours(&self, node: &Node) -> impl Iterator<Item = &Node> + '_ {
        let (cx, cy) = node.grid_coords();
        (-1..=1)
            .flat_map(|dx| (-1..=1).map(move |dy| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter_map(move |(dx, dy)| self.node(cx + dx, cy + dy))
    }

    /// Shared slot for the path currently being followed. Clone the handle to hand it to a
    /// path search running elsewhere.
    pub fn active_path(&self) -> &ActivePath {
        &self.active_path
    }
}
