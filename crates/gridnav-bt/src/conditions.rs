//! Predicates for [`Condition`](crate::Condition) leaves in navigation trees.

use gridnav_core::{Blackboard, TickContext};
use gridnav_nav::NavWorldView;

use crate::keys::{NAV_TARGET, NAV_TARGET_PATH, NAV_TARGET_STOPPING_DISTANCE};

/// The agent is within its stopping distance of [`NAV_TARGET`].
///
/// Uses [`NAV_TARGET_STOPPING_DISTANCE`] when set, else the movement's own stopping distance.
/// False without a target or a movement component.
pub fn at_nav_target<W: NavWorldView>(
    _ctx: &TickContext,
    agent: W::Agent,
    world: &W,
    blackboard: &Blackboard,
) -> bool {
    let Some(target) = blackboard.get_copied(NAV_TARGET) else {
        return false;
    };
    let Some(movement) = world.movement(agent) else {
        return false;
    };
    let stop = blackboard
        .get_copied(NAV_TARGET_STOPPING_DISTANCE)
        .unwrap_or_else(|| movement.stopping_distance());
    movement.position().distance(target) <= stop
}

/// A non-empty path is stored under [`NAV_TARGET_PATH`].
pub fn has_nav_path<W: NavWorldView>(
    _ctx: &TickContext,
    _agent: W::Agent,
    _world: &W,
    blackboard: &Blackboard,
) -> bool {
    blackboard
        .get(NAV_TARGET_PATH)
        .is_some_and(|path| !path.is_empty())
}
