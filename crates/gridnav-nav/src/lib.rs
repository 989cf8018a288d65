//! Node grid construction, collision queries and movement capabilities.
//!
//! A [`NodeGrid`] samples a rectangular world region once, classifies every cell as walkable or
//! blocked through a [`CollisionQuery`] backend and records how far each walkable cell sits above
//! the nearest surface. External path searches consume the grid and hand [`NodePath`]s to
//! navigation consumers, which drive actors through the [`Movement`] capability.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod active_path;
pub mod colliders;
pub mod config;
pub mod grid;
pub mod math;
pub mod movement;
pub mod node;
pub mod observer;
pub mod path;
pub mod physics;
pub mod world;

pub use active_path::ActivePath;
pub use colliders::{BoxCollider, StaticColliders};
pub use config::{GridConfig, GridConfigError};
pub use grid::NodeGrid;
pub use math::Vec2;
pub use movement::{
    FlightMovement, GroundMovement, Movement, MovementMode, MovementSettings, MovementSpeed,
};
pub use node::Node;
pub use observer::{CountingObserver, GridObserver, NullObserver, TracingObserver};
pub use path::NodePath;
pub use physics::{CollisionQuery, LayerMask, RaycastHit};
pub use world::{NavWorldMut, NavWorldView};
