//! Serializable pool state for host-provided persistence.
//!
//! The pool itself does not persist anything. A host that survives process
//! restarts captures a snapshot after its cycle and restores it before the
//! next one.

use serde::{Deserialize, Serialize};

use crate::errors::PoolError;
use crate::status::StatusValue;

use super::StatusPool;

/// One slot's persisted state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSnapshot {
    pub name: String,
    pub priority: Option<i32>,
    pub value: StatusValue,
}

/// Full pool state, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PoolSnapshot {
    pub slots: Vec<SlotSnapshot>,
}

impl StatusPool {
    /// Capture every registered slot, in insertion order.
    pub fn snapshot(&self) -> PoolSnapshot {
        PoolSnapshot {
            slots: self
                .slots
                .iter()
                .map(|slot| SlotSnapshot {
                    name: slot.name().to_string(),
                    priority: slot.explicit_priority(),
                    value: slot.get().clone(),
                })
                .collect(),
        }
    }

    /// Replay a snapshot into this pool: values of already-registered slots
    /// are restored, slots the template does not know are re-added in
    /// snapshot order. One commit follows when auto-commit is configured.
    pub fn restore(&mut self, snapshot: &PoolSnapshot) -> Result<(), PoolError> {
        for entry in &snapshot.slots {
            if !self.contains(&entry.name) {
                self.insert_slot(entry.name.clone(), entry.priority);
            }
            self.get_status_mut(&entry.name)?.set(entry.value.clone());
        }
        tracing::debug!(slots = snapshot.slots.len(), "pool state restored");
        self.maybe_auto_commit()
    }
}
