use core::fmt::Debug;

/// Stable identifier for an agent.
///
/// Brains are ticked in `stable_id` order and think offsets are derived from it, so the id must
/// not change for the lifetime of the agent.
pub trait AgentId: Copy + Ord + Eq + Debug {
    fn stable_id(self) -> u64;
}

macro_rules! unsigned_agent_id {
    ($($ty:ty),*) => {
        $(
            impl AgentId for $ty {
                fn stable_id(self) -> u64 {
                    self as u64
                }
            }
        )*
    };
}

unsigned_agent_id!(u16, u32, u64, usize);

/// Read-only world access, keyed by agent.
///
/// Navigation extends this with grid and movement queries; see `gridnav_nav::NavWorldView`.
pub trait WorldView {
    type Agent: AgentId;
}

/// World that behavior nodes may mutate (movement requests, published paths).
pub trait WorldMut: WorldView {}
