use gridnav_core::{Blackboard, TickContext, WorldMut};
use tracing::debug;

use crate::bt::{BtNode, BtStatus};

struct Branch<W>
where
    W: WorldMut + 'static,
{
    label: &'static str,
    node: Box<dyn BtNode<W>>,
}

/// Priority selector re-evaluated from the first branch on every tick.
///
/// Navigation trees put guards ("already arrived", "path missing") ahead of the movement branch,
/// so a guard that starts passing takes over from a branch that was still running. The branch
/// that loses control is reset and the handover is logged with both labels.
pub struct Selector<W>
where
    W: WorldMut + 'static,
{
    branches: Vec<Branch<W>>,
    running: Option<usize>,
}

impl<W> Default for Selector<W>
where
    W: WorldMut + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Selector<W>
where
    W: WorldMut + 'static,
{
    pub fn new() -> Self {
        Self {
            branches: Vec::new(),
            running: None,
        }
    }

    /// Appends a branch at the lowest priority so far.
    pub fn branch(mut self, label: &'static str, node: impl BtNode<W>) -> Self {
        self.branches.push(Branch {
            label,
            node: Box::new(node),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    /// Label of the branch that returned `Running` on the last tick.
    pub fn running_branch(&self) -> Option<&'static str> {
        self.running.map(|i| self.branches[i].label)
    }

    fn hand_over(&mut self, agent: W::Agent, tick: u64, to: usize) {
        let Some(prev) = self.running.replace(to) else {
            return;
        };
        if prev == to {
            return;
        }
        debug!(
            ?agent,
            tick,
            from = self.branches[prev].label,
            to = self.branches[to].label,
            "selector: branch preempted"
        );
        self.branches[prev].node.reset();
    }
}

impl<W> BtNode<W> for Selector<W>
where
    W: WorldMut + 'static,
{
    fn tick(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> BtStatus {
        let mut decided = None;
        for (i, branch) in self.branches.iter_mut().enumerate() {
            let status = branch.node.tick(ctx, agent, world, blackboard);
            if status != BtStatus::Failure {
                decided = Some((i, status));
                break;
            }
        }

        match decided {
            Some((i, BtStatus::Running)) => {
                self.hand_over(agent, ctx.tick, i);
                BtStatus::Running
            }
            Some((i, status)) => {
                if let Some(prev) = self.running.filter(|prev| *prev != i) {
                    debug!(
                        ?agent,
                        tick = ctx.tick,
                        from = self.branches[prev].label,
                        to = self.branches[i].label,
                        "selector: branch preempted"
                    );
                }
                self.reset();
                status
            }
            None => {
                self.reset();
                BtStatus::Failure
            }
        }
    }

    fn reset(&mut self) {
        self.running = None;
        for branch in &mut self.branches {
            branch.node.reset();
        }
    }
}

/// Stateless leaf: `Success` while the predicate holds, `Failure` otherwise.
pub struct Condition<F> {
    label: &'static str,
    predicate: F,
}

impl<F> Condition<F> {
    pub fn new(label: &'static str, predicate: F) -> Self {
        Self { label, predicate }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl<F, W> BtNode<W> for Condition<F>
where
    F: FnMut(&TickContext, W::Agent, &W, &Blackboard) -> bool + 'static,
    W: WorldMut + 'static,
{
    fn tick(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> BtStatus {
        BtStatus::from((self.predicate)(ctx, agent, world, blackboard))
    }

    fn reset(&mut self) {}
}
