use tracing::trace;

use crate::{AgentId, Blackboard, Policy, TickContext, WorldMut};

/// How often a [`Brain`] runs its policy.
///
/// Movement-driving policies usually think every fixed-step tick; expensive ones can be spread
/// across agents with [`BrainConfig::deterministic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrainConfig {
    pub think_every_ticks: u32,
    pub think_offset_ticks: u32,
}

impl Default for BrainConfig {
    fn default() -> Self {
        Self {
            think_every_ticks: 1,
            think_offset_ticks: 0,
        }
    }
}

impl BrainConfig {
    pub fn deterministic(agent: impl AgentId, think_every_ticks: u32) -> Self {
        let every = think_every_ticks.max(1);
        let offset = (agent.stable_id() % (every as u64)) as u32;
        Self {
            think_every_ticks: every,
            think_offset_ticks: offset,
        }
    }

    pub fn should_think(&self, tick: u64) -> bool {
        let every = self.think_every_ticks.max(1) as u64;
        ((tick + (self.think_offset_ticks as u64)) % every) == 0
    }
}

/// One agent's decision state: its blackboard plus the policy that reads it.
pub struct Brain<W>
where
    W: WorldMut + 'static,
{
    pub agent: W::Agent,
    pub config: BrainConfig,
    pub blackboard: Blackboard,
    pub policy: Box<dyn Policy<W>>,
}

impl<W> Brain<W>
where
    W: WorldMut + 'static,
{
    pub fn new(agent: W::Agent, policy: Box<dyn Policy<W>>) -> Self {
        Self {
            agent,
            config: BrainConfig::default(),
            blackboard: Blackboard::new(),
            policy,
        }
    }

    pub fn with_config(mut self, config: BrainConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the policy if this tick is a think tick. Returns whether it ran.
    pub fn tick(&mut self, ctx: &TickContext, world: &mut W) -> bool {
        if !self.config.should_think(ctx.tick) {
            return false;
        }
        trace!(agent = ?self.agent, tick = ctx.tick, "brain think");
        self.policy
            .tick(ctx, self.agent, world, &mut self.blackboard);
        true
    }
}

/// Tick every brain once, in stable agent order.
pub fn tick_brains<W>(ctx: &TickContext, world: &mut W, brains: &mut [Brain<W>])
where
    W: WorldMut + 'static,
{
    brains.sort_by_key(|b| b.agent.stable_id());
    for brain in brains.iter_mut() {
        brain.tick(ctx, world);
    }
}
