use gridnav_core::{Blackboard, TickContext, WorldMut};

/// Outcome of one tick of a behavior node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BtStatus {
    /// The actor is still on its way; tick again next frame.
    Running,
    Success,
    /// Recoverable: the caller decides whether to pick a new target or request a new path.
    Failure,
}

impl BtStatus {
    pub fn is_done(self) -> bool {
        !matches!(self, BtStatus::Running)
    }
}

impl From<bool> for BtStatus {
    fn from(passed: bool) -> Self {
        if passed {
            BtStatus::Success
        } else {
            BtStatus::Failure
        }
    }
}

/// A node in a navigation tree, ticked with the agent it drives.
///
/// Nodes reach the agent's movement and the grid through `world`, and per-agent inputs such as
/// the target and path through `blackboard`. `reset` is called when a parent abandons the node.
pub trait BtNode<W>: 'static
where
    W: WorldMut + 'static,
{
    fn tick(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> BtStatus;

    fn reset(&mut self);
}
