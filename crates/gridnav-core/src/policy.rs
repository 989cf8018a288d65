use crate::{Blackboard, TickContext, WorldMut};

/// Decision logic invoked by a [`Brain`](crate::Brain) on its think ticks.
pub trait Policy<W>: 'static
where
    W: WorldMut + 'static,
{
    fn tick(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    );
}
