//! Text rendering of a node grid, standing in for in-editor debug overlays.

use std::fmt::Write;

use gridnav_nav::{NodeGrid, NodePath};

/// Render the grid top row first.
///
/// `#` is a blocked node, `*` a path node. Walkable nodes show `.`, or with `clearance` the
/// number of whole cells between the node and the surface below it (capped at 9).
pub fn render_map(grid: &NodeGrid, path: Option<&NodePath>, clearance: bool) -> String {
    let on_path = |x: i32, y: i32| {
        path.is_some_and(|p| p.nodes().iter().any(|n| n.grid_coords() == (x, y)))
    };

    let mut out = String::with_capacity(((grid.size_x() + 1) * grid.size_y()) as usize);
    for y in (0..grid.size_y()).rev() {
        for x in 0..grid.size_x() {
            let Some(node) = grid.node(x, y) else { continue };
            let ch = if !node.is_walkable() {
                '#'
            } else if on_path(x, y) {
                '*'
            } else if clearance {
                let cells = (node.distance_from_surface_below() / grid.node_diameter()).floor();
                char::from_digit(cells.clamp(0.0, 9.0) as u32, 10).unwrap_or('9')
            } else {
                '.'
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

/// One-line summary of the grid.
pub fn describe(grid: &NodeGrid) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "{}x{} nodes ({} walkable), diameter {:.2}, bottom-left ({:.2}, {:.2})",
        grid.size_x(),
        grid.size_y(),
        grid.walkable_count(),
        grid.node_diameter(),
        grid.bottom_left().x,
        grid.bottom_left().y,
    );
    out
}
