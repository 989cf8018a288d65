//! Headless navigation run: one actor, one behavior tree, a scripted path producer.

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use gridnav_bt::keys::{NAV_STATUS, NAV_TARGET, NAV_TARGET_PATH, NAV_TARGET_STOPPING_DISTANCE};
use gridnav_bt::{BtPolicy, BtStatus, GoToNavTargetNode};
use gridnav_core::{Brain, TickContext, WorldMut, WorldView};
use gridnav_nav::{
    FlightMovement, GroundMovement, Movement, MovementMode, NavWorldMut, NavWorldView, NodeGrid,
    Vec2,
};

use crate::scene::{ActorKind, ActorSpec, Scene};

const ACTOR: u64 = 1;

pub enum Actor {
    Ground(GroundMovement),
    Flight(FlightMovement),
}

impl Actor {
    pub fn from_spec(spec: &ActorSpec) -> Self {
        match spec.kind {
            ActorKind::Ground => Actor::Ground(GroundMovement::new(spec.position, spec.movement)),
            ActorKind::Flight => Actor::Flight(FlightMovement::new(spec.position, spec.movement)),
        }
    }

    pub fn step(&mut self, dt: f32) {
        match self {
            Actor::Ground(m) => m.step(dt),
            Actor::Flight(m) => m.step(dt),
        }
    }

    pub fn movement(&self) -> &dyn Movement {
        match self {
            Actor::Ground(m) => m,
            Actor::Flight(m) => m,
        }
    }

    pub fn movement_mut(&mut self) -> &mut dyn Movement {
        match self {
            Actor::Ground(m) => m,
            Actor::Flight(m) => m,
        }
    }
}

pub struct SimWorld {
    pub grid: NodeGrid,
    pub actor: Actor,
}

impl WorldView for SimWorld {
    type Agent = u64;
}

impl WorldMut for SimWorld {}

impl NavWorldView for SimWorld {
    fn grid(&self) -> &NodeGrid {
        &self.grid
    }

    fn movement(&self, agent: u64) -> Option<&dyn Movement> {
        (agent == ACTOR).then(|| self.actor.movement())
    }
}

impl NavWorldMut for SimWorld {
    fn movement_mut(&mut self, agent: u64) -> Option<&mut dyn Movement> {
        if agent == ACTOR {
            Some(self.actor.movement_mut())
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimReport {
    pub ticks: u64,
    pub status: BtStatus,
    pub position: Vec2,
    pub mode: MovementMode,
}

/// Tick the scene's actor until the navigation action finishes or `ticks` run out.
///
/// Waypoints within one node radius of the actor are dropped from the head of the path before
/// every tick, except the final one.
pub fn simulate(scene: &Scene, ticks: u64, dt: f32) -> Result<SimReport> {
    let grid = scene.build_grid()?;
    let mut remaining = scene.resolve_path(&grid)?;
    let target = scene.resolve_target(&remaining)?;
    let spec = scene.actor()?;

    let mut node = GoToNavTargetNode::new(spec.use_stopping_distance);
    if let Some(max) = spec.stale_path_distance {
        node = node.with_stale_path_distance(max);
    }

    let reach = grid.node_radius();
    let mut world = SimWorld {
        grid,
        actor: Actor::from_spec(spec),
    };
    let policy = BtPolicy::<SimWorld>::new(Box::new(node)).with_status_key(NAV_STATUS);
    let mut brain = Brain::new(ACTOR, Box::new(policy));
    brain.blackboard.set(NAV_TARGET, target);
    if let Some(stop) = spec.stopping_distance {
        brain.blackboard.set(NAV_TARGET_STOPPING_DISTANCE, stop);
    }

    info!(
        target_x = target.x,
        target_y = target.y,
        waypoints = remaining.len(),
        "simulation start"
    );

    let mut ctx = TickContext::new(0, dt);
    let mut status = BtStatus::Running;
    let mut ran = 0;
    for _ in 0..ticks {
        let pos = world.actor.movement().position();
        while remaining.len() > 1
            && remaining
                .first()
                .is_some_and(|n| n.world_pos().distance(pos) <= reach)
        {
            if let Some(reached) = remaining.advance() {
                debug!(node = ?reached.grid_coords(), "waypoint reached");
            }
        }
        if !remaining.is_empty() {
            brain
                .blackboard
                .set(NAV_TARGET_PATH, Arc::new(remaining.clone()));
        }

        brain.tick(&ctx, &mut world);
        status = brain
            .blackboard
            .get_copied(NAV_STATUS)
            .unwrap_or(BtStatus::Running);
        world.actor.step(dt);
        ran += 1;

        let movement = world.actor.movement();
        debug!(
            tick = ctx.tick,
            ?status,
            x = movement.position().x,
            y = movement.position().y,
            mode = ?movement.movement_mode(),
            "tick"
        );
        if status.is_done() {
            break;
        }
        ctx = ctx.next();
    }

    let movement = world.actor.movement();
    Ok(SimReport {
        ticks: ran,
        status,
        position: movement.position(),
        mode: movement.movement_mode(),
    })
}
