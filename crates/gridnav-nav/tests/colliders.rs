use gridnav_nav::{BoxCollider, CollisionQuery, LayerMask, StaticColliders, Vec2};

const SOLID: LayerMask = LayerMask::layer(0);

fn world() -> StaticColliders {
    [
        BoxCollider::from_corners(Vec2::new(-5.0, -1.0), Vec2::new(5.0, 0.0), SOLID),
        BoxCollider::from_corners(Vec2::new(1.0, 2.0), Vec2::new(2.0, 3.0), SOLID),
        BoxCollider::from_corners(Vec2::new(-5.0, 5.0), Vec2::new(5.0, 6.0), LayerMask::layer(4)),
    ]
    .into_iter()
    .collect()
}

#[test]
fn downward_ray_reports_nearest_surface() {
    let colliders = world();

    let hit = colliders
        .raycast(Vec2::new(1.5, 4.0), Vec2::DOWN, f32::INFINITY, SOLID)
        .expect("hits the ledge");
    assert!((hit.distance - 1.0).abs() < 1e-5);
    assert!((hit.point.y - 3.0).abs() < 1e-5);

    let hit = colliders
        .raycast(Vec2::new(-3.0, 4.0), Vec2::DOWN, f32::INFINITY, SOLID)
        .expect("hits the floor");
    assert!((hit.distance - 4.0).abs() < 1e-5);
}

#[test]
fn ray_respects_max_distance_layers_and_direction() {
    let colliders = world();

    assert!(colliders
        .raycast(Vec2::new(-3.0, 4.0), Vec2::DOWN, 3.5, SOLID)
        .is_none());
    assert!(colliders
        .raycast(Vec2::new(-3.0, 4.0), Vec2::new(0.0, 1.0), f32::INFINITY, SOLID)
        .is_none());
    assert!(colliders
        .raycast(
            Vec2::new(-3.0, 4.0),
            Vec2::new(0.0, 1.0),
            f32::INFINITY,
            LayerMask::layer(4)
        )
        .is_some());
    assert!(colliders
        .raycast(Vec2::new(-3.0, 4.0), Vec2::ZERO, f32::INFINITY, SOLID)
        .is_none());
}

#[test]
fn ray_starting_inside_collider_hits_at_zero() {
    let hit = world()
        .raycast(Vec2::new(0.0, -0.5), Vec2::DOWN, f32::INFINITY, SOLID)
        .unwrap();
    assert_eq!(hit.distance, 0.0);
}

#[test]
fn overlap_box_checks_extent_and_layers() {
    let colliders = world();

    assert!(colliders.overlap_box(Vec2::new(1.5, 2.5), Vec2::splat(0.2), SOLID));
    assert!(!colliders.overlap_box(Vec2::new(0.5, 2.5), Vec2::splat(0.9), SOLID));
    assert!(colliders.overlap_box(Vec2::new(0.5, 2.5), Vec2::splat(1.2), SOLID));
    assert!(!colliders.overlap_box(Vec2::new(0.0, 5.5), Vec2::splat(0.5), SOLID));
    assert!(colliders.overlap_box(Vec2::new(0.0, 5.5), Vec2::splat(0.5), LayerMask::ALL));
    assert!(!colliders.overlap_box(Vec2::new(0.0, 5.5), Vec2::splat(0.5), LayerMask::NONE));
}

#[test]
fn layer_mask_set_operations() {
    let a = LayerMask::layer(0).union(LayerMask::layer(2));
    assert!(a.contains(LayerMask::layer(2)));
    assert!(!a.contains(LayerMask::layer(1)));
    assert!(a.intersects(LayerMask::layer(0).union(LayerMask::layer(1))));
    assert!(LayerMask::ALL.contains(a));
}

#[test]
fn out_of_range_layers_select_nothing() {
    assert_eq!(LayerMask::layer(31), LayerMask(1 << 31));
    assert_eq!(LayerMask::layer(32), LayerMask::NONE);
    assert_eq!(LayerMask::layer(33), LayerMask::NONE);

    // Layer 33 must not alias layer 1.
    let colliders = StaticColliders::new().with(BoxCollider::from_corners(
        Vec2::new(-1.0, -1.0),
        Vec2::new(1.0, 1.0),
        LayerMask::layer(1),
    ));
    assert!(!colliders.overlap_box(Vec2::ZERO, Vec2::splat(0.5), LayerMask::layer(33)));
    assert!(colliders.overlap_box(Vec2::ZERO, Vec2::splat(0.5), LayerMask::layer(1)));
}
