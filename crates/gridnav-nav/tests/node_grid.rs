use gridnav_nav::{
    BoxCollider, CountingObserver, GridConfig, GridConfigError, LayerMask, NodeGrid,
    StaticColliders, Vec2,
};

const SURFACES: LayerMask = LayerMask::layer(0);

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-4
}

fn config(center: Vec2, world_size: Vec2, node_radius: f32) -> GridConfig {
    GridConfig::new(center, world_size, node_radius, SURFACES)
}

#[test]
fn cell_count_and_positions_follow_rounded_dimensions() {
    let cases = [
        (Vec2::new(4.0, 6.0), 0.5, (4, 6)),
        (Vec2::new(5.2, 3.4), 0.5, (5, 3)),
        (Vec2::new(2.6, 1.0), 0.5, (3, 1)),
        (Vec2::new(3.0, 3.0), 0.25, (6, 6)),
    ];

    for (world_size, radius, (sx, sy)) in cases {
        let center = Vec2::new(1.0, -2.0);
        let grid = NodeGrid::new(config(center, world_size, radius), &StaticColliders::new())
            .expect("valid config");

        assert_eq!((grid.size_x(), grid.size_y()), (sx, sy));
        assert_eq!(grid.len(), (sx * sy) as usize);

        let d = radius * 2.0;
        let bottom_left = center - world_size * 0.5;
        for x in 0..sx {
            for y in 0..sy {
                let node = grid.node(x, y).expect("in bounds");
                assert_eq!(node.grid_coords(), (x, y));
                let expected = bottom_left + Vec2::new(x as f32 * d + radius, y as f32 * d + radius);
                assert!(approx(node.world_pos().x, expected.x));
                assert!(approx(node.world_pos().y, expected.y));
            }
        }
        assert!(grid.node(sx, 0).is_none());
        assert!(grid.node(0, -1).is_none());
    }
}

#[test]
fn nodes_iterate_in_construction_order() {
    let grid = NodeGrid::new(
        config(Vec2::ZERO, Vec2::new(2.0, 3.0), 0.5),
        &StaticColliders::new(),
    )
    .unwrap();

    let coords: Vec<_> = grid.nodes().map(|n| n.grid_coords()).collect();
    assert_eq!(coords, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
}

#[test]
fn open_column_without_surfaces_accumulates_clearance() {
    let diameter = 0.5;
    let grid = NodeGrid::new(
        config(Vec2::ZERO, Vec2::new(1.0, 4.0), diameter / 2.0),
        &StaticColliders::new(),
    )
    .unwrap();

    for x in 0..grid.size_x() {
        for y in 0..grid.size_y() {
            let node = grid.node(x, y).unwrap();
            assert!(node.is_walkable());
            assert!(approx(node.distance_from_surface_below(), y as f32 * diameter));
        }
    }
}

#[test]
fn floor_hit_seeds_clearance_then_propagates_upward() {
    // Floor slab directly under the sampled region.
    let colliders = StaticColliders::new().with(BoxCollider::from_corners(
        Vec2::new(-2.0, -4.0),
        Vec2::new(2.0, -3.0),
        SURFACES,
    ));
    let grid = NodeGrid::new(config(Vec2::ZERO, Vec2::new(4.0, 6.0), 0.5), &colliders).unwrap();

    for x in 0..4 {
        let bottom = grid.node(x, 0).unwrap();
        assert!(bottom.is_walkable());
        assert!(approx(bottom.distance_from_surface_below(), 0.5));
        for y in 1..6 {
            let node = grid.node(x, y).unwrap();
            assert!(approx(node.distance_from_surface_below(), 0.5 + y as f32));
        }
    }
}

#[test]
fn blocked_cells_have_zero_clearance_and_reseed_cells_above() {
    // One solid tile at grid cell (2, 3): world (0, 0)..(1, 1) for this layout.
    let colliders = StaticColliders::new()
        .with(BoxCollider::from_corners(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 1.0),
            SURFACES,
        ))
        .with(BoxCollider::from_corners(
            Vec2::new(-2.0, -4.0),
            Vec2::new(2.0, -3.0),
            SURFACES,
        ));
    let mut counter = CountingObserver::default();
    let grid = NodeGrid::with_observer(
        config(Vec2::ZERO, Vec2::new(4.0, 6.0), 0.5),
        &colliders,
        &mut counter,
    )
    .unwrap();

    let blocked = grid.node(2, 3).unwrap();
    assert!(!blocked.is_walkable());
    assert_eq!(blocked.distance_from_surface_below(), 0.0);

    // Above the tile: no walkable node below, so the downward ray measures to the tile top.
    let above = grid.node(2, 4).unwrap();
    assert!(above.is_walkable());
    assert!(approx(above.distance_from_surface_below(), 0.5));
    assert!(approx(
        grid.node(2, 5).unwrap().distance_from_surface_below(),
        1.5
    ));

    // Neighbouring cells are untouched by the tile thanks to the shrunken test box.
    assert!(grid.node(1, 3).unwrap().is_walkable());
    assert!(grid.node(3, 3).unwrap().is_walkable());
    assert!(grid.node(2, 2).unwrap().is_walkable());
    assert!(approx(
        grid.node(2, 2).unwrap().distance_from_surface_below(),
        2.5
    ));

    assert!(counter.finished);
    assert_eq!(counter.blocked, 1);
    assert_eq!(counter.walkable, 23);
    assert_eq!(grid.walkable_count(), 23);
}

#[test]
fn colliders_on_other_layers_are_ignored() {
    let colliders = StaticColliders::new().with(BoxCollider::from_corners(
        Vec2::new(-1.0, -1.0),
        Vec2::new(1.0, 1.0),
        LayerMask::layer(3),
    ));
    let grid = NodeGrid::new(config(Vec2::ZERO, Vec2::new(2.0, 2.0), 0.5), &colliders).unwrap();
    assert_eq!(grid.walkable_count(), grid.len());
}

#[test]
fn world_point_lookup_clamps_to_edges() {
    let grid = NodeGrid::new(
        config(Vec2::ZERO, Vec2::new(4.0, 4.0), 0.5),
        &StaticColliders::new(),
    )
    .unwrap();

    assert_eq!(grid.node_from_world_point(Vec2::new(-1.9, -1.9)).grid_coords(), (0, 0));
    assert_eq!(grid.node_from_world_point(Vec2::new(0.2, 1.7)).grid_coords(), (2, 3));
    assert_eq!(grid.node_from_world_point(Vec2::new(50.0, -50.0)).grid_coords(), (3, 0));
}

#[test]
fn neighbours_stay_in_bounds() {
    let grid = NodeGrid::new(
        config(Vec2::ZERO, Vec2::new(3.0, 3.0), 0.5),
        &StaticColliders::new(),
    )
    .unwrap();

    let corner = *grid.node(0, 0).unwrap();
    let centre = *grid.node(1, 1).unwrap();
    assert_eq!(grid.neighbours(&corner).count(), 3);
    assert_eq!(grid.neighbours(&centre).count(), 8);
    assert!(grid.neighbours(&centre).all(|n| n.grid_coords() != (1, 1)));
}

#[test]
fn invalid_configs_are_rejected() {
    let empty = StaticColliders::new();

    let err = NodeGrid::new(config(Vec2::ZERO, Vec2::new(4.0, 4.0), 0.0), &empty).unwrap_err();
    assert_eq!(err, GridConfigError::InvalidNodeRadius(0.0));

    let err = NodeGrid::new(config(Vec2::ZERO, Vec2::new(-1.0, 4.0), 0.5), &empty).unwrap_err();
    assert!(matches!(err, GridConfigError::InvalidWorldSize(_)));

    let err = NodeGrid::new(config(Vec2::ZERO, Vec2::new(0.4, 4.0), 0.5), &empty).unwrap_err();
    assert_eq!(err, GridConfigError::EmptyGrid { size_x: 0, size_y: 4 });
}

#[test]
fn oversized_grids_are_rejected_before_allocating() {
    let empty = StaticColliders::new();

    // Cell counts past i32::MAX on both axes.
    let huge = config(Vec2::ZERO, Vec2::new(1e12, 1e12), 1e-3);
    assert!(matches!(huge.validate(), Err(GridConfigError::TooLarge { .. })));
    let err = NodeGrid::new(huge, &empty).unwrap_err();
    assert!(matches!(err, GridConfigError::TooLarge { .. }));

    // Each axis fits in i32 but the node count does not fit under the cap.
    let wide = config(Vec2::ZERO, Vec2::new(10_000.0, 10_000.0), 0.5);
    let err = NodeGrid::new(wide, &empty).unwrap_err();
    assert_eq!(
        err,
        GridConfigError::TooLarge {
            size_x: 10_000.0,
            size_y: 10_000.0,
            max_nodes: GridConfig::MAX_NODES,
        }
    );

    let at_cap = config(Vec2::ZERO, Vec2::new(4096.0, 4096.0), 0.5);
    assert_eq!(at_cap.validate(), Ok(()));
    assert_eq!(at_cap.dimensions(), (4096, 4096));
}
