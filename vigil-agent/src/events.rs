//! Typed unit events delivered by the host, one at a time.

use serde::{Deserialize, Serialize};
use vigil_core::errors::error_code::{self, VigilErrorCode};

/// The discrete events this dispatcher understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum UnitEvent {
    /// The unit's workload has started.
    Start,
    /// A remote unit joined a relation.
    RelationJoined {
        relation: String,
        remote_unit: String,
    },
    /// Data changed on a relation; every listed remote unit is re-evaluated.
    RelationChanged {
        relation: String,
        remote_units: Vec<String>,
    },
    /// A remote unit departed a relation.
    RelationDeparted {
        relation: String,
        remote_unit: String,
    },
    /// External request to set one slot: `kind` is the raw status-kind
    /// string and is validated before any pool mutation; `"unknown"` means
    /// unset.
    SetStatus {
        name: String,
        kind: String,
        #[serde(default)]
        message: Option<String>,
    },
}

impl UnitEvent {
    /// Decode an event from the host's JSON payload.
    pub fn from_json(payload: &str) -> Result<Self, EventDecodeError> {
        serde_json::from_str(payload).map_err(|e| EventDecodeError {
            message: e.to_string(),
        })
    }
}

/// The host handed us a payload that is not a unit event.
#[derive(Debug, thiserror::Error)]
#[error("Malformed unit event payload: {message}")]
pub struct EventDecodeError {
    pub message: String,
}

impl VigilErrorCode for EventDecodeError {
    fn error_code(&self) -> &'static str {
        error_code::MALFORMED_EVENT
    }
}
