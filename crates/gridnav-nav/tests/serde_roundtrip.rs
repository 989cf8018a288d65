#![cfg(feature = "serde")]

use gridnav_nav::{
    BoxCollider, GridConfig, LayerMask, Node, NodeGrid, NodePath, StaticColliders, Vec2,
};

#[test]
fn grid_config_roundtrips_and_defaults_surfaces() {
    let json = r#"{ "center": { "x": 0.0, "y": 1.0 }, "world_size": { "x": 8.0, "y": 4.0 }, "node_radius": 0.5 }"#;
    let config: GridConfig = serde_json::from_str(json).expect("deserialize config");
    assert_eq!(config.surfaces, LayerMask::layer(0));

    let back: GridConfig =
        serde_json::from_str(&serde_json::to_string(&config).unwrap()).unwrap();
    assert_eq!(config, back);
}

#[test]
fn colliders_and_paths_roundtrip() {
    let colliders = StaticColliders::new().with(BoxCollider::from_corners(
        Vec2::new(-4.0, -3.0),
        Vec2::new(4.0, -1.0),
        LayerMask::layer(0),
    ));
    let json = serde_json::to_string(&colliders).unwrap();
    let back: StaticColliders = serde_json::from_str(&json).unwrap();
    assert_eq!(back.colliders(), colliders.colliders());

    let config = GridConfig::new(Vec2::new(0.0, 1.0), Vec2::new(8.0, 4.0), 0.5, LayerMask::layer(0));
    let grid = NodeGrid::new(config, &back).unwrap();
    let path: NodePath = grid.nodes().copied().take(4).collect();

    let json = serde_json::to_string(&path).unwrap();
    let back: NodePath = serde_json::from_str(&json).unwrap();
    assert_eq!(back, path);

    let node: Node = serde_json::from_str(&serde_json::to_string(&path.nodes[0]).unwrap()).unwrap();
    assert_eq!(node, path.nodes[0]);
}
