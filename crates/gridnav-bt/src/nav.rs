use gridnav_core::{Blackboard, TickContext};
use gridnav_nav::{MovementMode, NavWorldMut};
use tracing::{trace, warn};

use crate::bt::{BtNode, BtStatus};
use crate::keys::{NAV_TARGET, NAV_TARGET_PATH, NAV_TARGET_STOPPING_DISTANCE};

/// Arrival radius when the stopping-distance policy is off.
pub const ARRIVAL_EPSILON: f32 = 0.01;

/// Moves the actor toward [`NAV_TARGET`] along the path stored under [`NAV_TARGET_PATH`].
///
/// - `Success`: the actor is within the arrival radius of the target. Checked first, so an
///   actor that has arrived succeeds even without a path.
/// - `Failure`: no path (or an empty one), no target on the blackboard, or the actor has no
///   movement component.
/// - `Running`: a movement delta toward the path's first node was issued this tick.
///
/// The node never searches or trims the path: it always steers toward the head and relies on
/// the path producer to advance it as waypoints are reached. It keeps no state between ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoToNavTargetNode {
    use_stopping_distance: bool,
    stale_path_distance: Option<f32>,
}

impl GoToNavTargetNode {
    /// With `use_stopping_distance`, arrival means being within the stopping distance (from
    /// [`NAV_TARGET_STOPPING_DISTANCE`], else the actor's own). Otherwise the actor has to be
    /// within [`ARRIVAL_EPSILON`] of the target.
    pub fn new(use_stopping_distance: bool) -> Self {
        Self {
            use_stopping_distance,
            stale_path_distance: None,
        }
    }

    /// Fail instead of steering when the path head is farther than `distance` from the actor,
    /// e.g. after a teleport left the published path behind.
    pub fn with_stale_path_distance(mut self, distance: f32) -> Self {
        self.stale_path_distance = Some(distance);
        self
    }

    pub fn uses_stopping_distance(&self) -> bool {
        self.use_stopping_distance
    }

    fn arrival_radius(&self, blackboard: &Blackboard, fallback: f32) -> f32 {
        if self.use_stopping_distance {
            blackboard
                .get_copied(NAV_TARGET_STOPPING_DISTANCE)
                .unwrap_or(fallback)
        } else {
            ARRIVAL_EPSILON
        }
    }
}

/// Single-threshold speed selection: run while farther than the threshold, walk otherwise.
fn next_movement_mode(current: MovementMode, distance: f32, threshold: f32) -> Option<MovementMode> {
    let far = distance > threshold;
    match current {
        MovementMode::Slow if far => Some(MovementMode::Fast),
        MovementMode::Fast if !far => Some(MovementMode::Slow),
        _ => None,
    }
}

impl<W> BtNode<W> for GoToNavTargetNode
where
    W: NavWorldMut + 'static,
{
    fn tick(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> BtStatus {
        let Some(target) = blackboard.get_copied(NAV_TARGET) else {
            warn!(?agent, "go_to_nav_target: no navigation target on the blackboard");
            return BtStatus::Failure;
        };

        let Some((position, mode, walk_threshold, stopping_distance)) =
            world.movement(agent).map(|m| {
                (
                    m.position(),
                    m.movement_mode(),
                    m.nav_target_walk_distance_threshold(),
                    m.stopping_distance(),
                )
            })
        else {
            warn!(?agent, "go_to_nav_target: agent has no movement component");
            return BtStatus::Failure;
        };

        let distance = position.distance(target);
        if distance <= self.arrival_radius(blackboard, stopping_distance) {
            trace!(?agent, tick = ctx.tick, distance, "go_to_nav_target: arrived");
            return BtStatus::Success;
        }

        let path = blackboard.get(NAV_TARGET_PATH).cloned();
        world.grid().active_path().publish(path.clone());

        let Some(path) = path else {
            trace!(?agent, tick = ctx.tick, "go_to_nav_target: no path");
            return BtStatus::Failure;
        };
        let Some(next) = path.first().copied() else {
            trace!(?agent, tick = ctx.tick, "go_to_nav_target: empty path");
            return BtStatus::Failure;
        };

        let next_pos = next.world_pos();
        if let Some(max) = self.stale_path_distance {
            if position.distance(next_pos) > max {
                warn!(
                    ?agent,
                    head = ?next.grid_coords(),
                    "go_to_nav_target: path head is too far from the actor"
                );
                return BtStatus::Failure;
            }
        }

        let Some(movement) = world.movement_mut(agent) else {
            return BtStatus::Failure;
        };
        if let Some(mode) = next_movement_mode(mode, distance, walk_threshold) {
            movement.set_movement_mode(mode);
        }

        let delta = next_pos - position;
        movement.update_movement(delta);
        trace!(
            ?agent,
            tick = ctx.tick,
            distance,
            head = ?next.grid_coords(),
            dx = delta.x,
            dy = delta.y,
            "go_to_nav_target: moving"
        );
        BtStatus::Running
    }

    fn reset(&mut self) {}
}
