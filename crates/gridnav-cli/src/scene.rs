//! Scene files: grid settings, static level geometry and an optional navigating actor.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use gridnav_nav::{GridConfig, MovementSettings, Node, NodeGrid, NodePath, StaticColliders, Vec2};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub grid: GridConfig,

    /// Level geometry on the grid's surface layers.
    #[serde(default)]
    pub colliders: StaticColliders,

    #[serde(default)]
    pub actor: Option<ActorSpec>,

    /// Navigation target; defaults to the last path node.
    #[serde(default)]
    pub target: Option<Vec2>,

    /// Path as grid coordinates, head first.
    #[serde(default)]
    pub path: Vec<[i32; 2]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorKind {
    Ground,
    Flight,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorSpec {
    pub kind: ActorKind,
    pub position: Vec2,

    #[serde(default)]
    pub movement: MovementSettings,

    #[serde(default)]
    pub use_stopping_distance: bool,

    /// Blackboard override for the stopping distance.
    #[serde(default)]
    pub stopping_distance: Option<f32>,

    /// Fail when the path head is farther away than this.
    #[serde(default)]
    pub stale_path_distance: Option<f32>,
}

#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("path node ({x}, {y}) lies outside the {size_x}x{size_y} grid")]
    PathOutsideGrid {
        x: i32,
        y: i32,
        size_x: i32,
        size_y: i32,
    },
    #[error("scene has no actor to simulate")]
    MissingActor,
    #[error("scene has neither a target nor a path to derive one from")]
    MissingTarget,
}

impl Scene {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scene {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid scene {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        let scene: Scene = serde_yaml::from_str(text).context("failed to parse scene YAML")?;
        scene.grid.validate().context("invalid grid settings")?;
        Ok(scene)
    }

    pub fn build_grid(&self) -> Result<NodeGrid> {
        Ok(NodeGrid::with_observer(
            self.grid,
            &self.colliders,
            &mut gridnav_nav::TracingObserver,
        )?)
    }

    /// Resolve the scene path against a built grid.
    pub fn resolve_path(&self, grid: &NodeGrid) -> Result<NodePath, SceneError> {
        self.path
            .iter()
            .map(|&[x, y]| {
                grid.node(x, y)
                    .copied()
                    .ok_or(SceneError::PathOutsideGrid {
                        x,
                        y,
                        size_x: grid.size_x(),
                        size_y: grid.size_y(),
                    })
            })
            .collect::<Result<Vec<Node>, _>>()
            .map(NodePath::new)
    }

    pub fn resolve_target(&self, path: &NodePath) -> Result<Vec2, SceneError> {
        self.target
            .or_else(|| path.last().map(|n| n.world_pos()))
            .ok_or(SceneError::MissingTarget)
    }

    pub fn actor(&self) -> Result<&ActorSpec, SceneError> {
        self.actor.as_ref().ok_or(SceneError::MissingActor)
    }
}
