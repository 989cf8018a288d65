use tracing::trace;

use crate::{Node, NodeGrid};

/// Receives every node as the grid classifies it.
///
/// Construction calls [`on_node`](GridObserver::on_node) in construction order (x outer, y
/// inner, bottom to top) and [`finished`](GridObserver::finished) once the grid is complete.
/// Debug labels, gizmo-style overlays and statistics hang off this hook so the classification
/// itself stays free of presentation concerns.
pub trait GridObserver {
    fn on_node(&mut self, node: &Node);

    fn finished(&mut self, _grid: &NodeGrid) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl GridObserver for NullObserver {
    fn on_node(&mut self, _node: &Node) {}
}

/// Emits a trace event for each walkable node with its clearance, two decimals.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl GridObserver for TracingObserver {
    fn on_node(&mut self, node: &Node) {
        if node.is_walkable() {
            trace!(
                x = node.grid_x(),
                y = node.grid_y(),
                clearance = %format_args!("{:.2}", node.distance_from_surface_below()),
                "walkable node"
            );
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CountingObserver {
    pub walkable: usize,
    pub blocked: usize,
    pub finished: bool,
}

impl GridObserver for CountingObserver {
    fn on_node(&mut self, node: &Node) {
        if node.is_walkable() {
            self.walkable += 1;
        } else {
            self.blocked += 1;
        }
    }

    fn finished(&mut self, _grid: &NodeGrid) {
        self.finished = true;
    }
}

impl<O: GridObserver + ?Sized> GridObserver for &mut O {
    fn on_node(&mut self, node: &Node) {
        (**self).on_node(node);
    }

    fn finished(&mut self, grid: &NodeGrid) {
        (**self).finished(grid);
    }
}
