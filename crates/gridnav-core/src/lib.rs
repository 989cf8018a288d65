//! Engine-agnostic tick kernel for grid navigation agents.
//!
//! The kernel owns nothing game-specific: it provides stable agent ids, a typed blackboard,
//! a tick context and a `Brain` that invokes a `Policy` at a configurable cadence. Navigation
//! crates layer their own world queries on top of [`WorldView`] / [`WorldMut`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod blackboard;
pub mod brain;
pub mod policy;
pub mod tick;
pub mod world;

pub use blackboard::{BbKey, Blackboard};
pub use brain::{tick_brains, Brain, BrainConfig};
pub use policy::Policy;
pub use tick::TickContext;
pub use world::{AgentId, WorldMut, WorldView};
