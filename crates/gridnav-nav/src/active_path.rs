use std::sync::{Arc, RwLock};

use crate::NodePath;

/// Shared slot holding the path currently being followed.
///
/// A path search publishes here and navigation consumers republish what they steer along, so
/// debug tooling can draw it. Writers swap in a whole immutable snapshot; readers clone the
/// `Arc` out and never observe a half-written path. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct ActivePath {
    slot: Arc<RwLock<Option<Arc<NodePath>>>>,
}

impl ActivePath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active path. `None` marks "no path".
    pub fn publish(&self, path: Option<Arc<NodePath>>) {
        // The slot only ever holds a complete value, so a poisoned lock is still consistent.
        let mut slot = self.slot.write().unwrap_or_else(|e| e.into_inner());
        *slot = path;
    }

    pub fn clear(&self) {
        self.publish(None);
    }

    pub fn snapshot(&self) -> Option<Arc<NodePath>> {
        self.slot
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn is_set(&self) -> bool {
        self.slot
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }

    /// Whether two handles refer to the same slot.
    pub fn shares_slot_with(&self, other: &ActivePath) -> bool {
        Arc::ptr_eq(&self.slot, &other.slot)
    }
}
