//! Blackboard keys shared between navigation producers (target pickers, path searches) and the
//! navigation action.

use std::sync::Arc;

use gridnav_core::BbKey;
use gridnav_nav::{NodePath, Vec2};

use crate::BtStatus;

/// World position the actor should navigate to.
pub const NAV_TARGET: BbKey<Vec2> = BbKey::named(0x6E41_7600_0000_0001, "nav_target");

/// Path from the actor toward [`NAV_TARGET`]. An absent key means no path exists.
pub const NAV_TARGET_PATH: BbKey<Arc<NodePath>> =
    BbKey::named(0x6E41_7600_0000_0002, "nav_target_path");

/// Arrival radius for nodes that use a stopping distance. Falls back to the actor's configured
/// stopping distance when absent.
pub const NAV_TARGET_STOPPING_DISTANCE: BbKey<f32> =
    BbKey::named(0x6E41_7600_0000_0003, "nav_target_stopping_distance");

/// Status of the agent's navigation tree on its last think, written by
/// [`BtPolicy::with_status_key`](crate::BtPolicy::with_status_key). Path producers read it to
/// re-plan after a `Failure`.
pub const NAV_STATUS: BbKey<BtStatus> = BbKey::named(0x6E41_7600_0000_0004, "nav_status");
