use gridnav_core::{BbKey, Blackboard, Policy, TickContext, WorldMut};
use tracing::debug;

use crate::bt::{BtNode, BtStatus};

/// Brain policy driving a navigation tree from its root.
///
/// After `Success` or `Failure` the tree is reset so the next think starts from the first
/// branch. With [`with_status_key`](Self::with_status_key) each tick's status is also written
/// to the agent's blackboard, where a path producer can see a `Failure` and request a new path.
pub struct BtPolicy<W>
where
    W: WorldMut + 'static,
{
    root: Box<dyn BtNode<W>>,
    status_key: Option<BbKey<BtStatus>>,
    last: BtStatus,
}

impl<W> BtPolicy<W>
where
    W: WorldMut + 'static,
{
    pub fn new(root: Box<dyn BtNode<W>>) -> Self {
        Self {
            root,
            status_key: None,
            last: BtStatus::Running,
        }
    }

    pub fn with_status_key(mut self, key: BbKey<BtStatus>) -> Self {
        self.status_key = Some(key);
        self
    }

    pub fn last_status(&self) -> BtStatus {
        self.last
    }
}

impl<W> Policy<W> for BtPolicy<W>
where
    W: WorldMut + 'static,
{
    fn tick(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) {
        let status = self.root.tick(ctx, agent, world, blackboard);
        if let Some(key) = self.status_key {
            blackboard.set(key, status);
        }
        if status.is_done() {
            debug!(?agent, tick = ctx.tick, ?status, "navigation tree finished");
            self.root.reset();
        }
        self.last = status;
    }
}
