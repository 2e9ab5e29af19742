//! Recording sink for tests and observing hosts.

use std::sync::{Arc, Mutex};

use super::CommitSink;
use crate::errors::SinkError;
use crate::status::{StatusKind, StatusValue};

/// Appends every committed value to a shared log. Clones share the same log,
/// so a host can keep one handle and give the other to the pool.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    writes: Arc<Mutex<Vec<StatusValue>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All writes observed so far, oldest first.
    pub fn writes(&self) -> Vec<StatusValue> {
        self.writes.lock().expect("sink log poisoned").clone()
    }

    /// The currently displayed value, if any commit has happened.
    pub fn last(&self) -> Option<StatusValue> {
        self.writes.lock().expect("sink log poisoned").last().cloned()
    }

    pub fn write_count(&self) -> usize {
        self.writes.lock().expect("sink log poisoned").len()
    }
}

impl CommitSink for RecordingSink {
    fn set_display_status(
        &mut self,
        kind: StatusKind,
        message: Option<&str>,
    ) -> Result<(), SinkError> {
        self.writes
            .lock()
            .expect("sink log poisoned")
            .push(StatusValue {
                kind,
                message: message.map(str::to_string),
            });
        Ok(())
    }
}
