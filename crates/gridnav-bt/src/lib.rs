//! Behavior tree runtime built on `gridnav-core`, plus the navigation action that walks an actor
//! along a precomputed node path.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod bt;
pub mod conditions;
pub mod keys;
pub mod nav;
pub mod nodes;
pub mod policy;

pub use bt::{BtNode, BtStatus};
pub use nav::{GoToNavTargetNode, ARRIVAL_EPSILON};
pub use nodes::{Condition, Selector};
pub use policy::BtPolicy;
