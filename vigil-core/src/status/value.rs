//! Immutable (kind, message) pairs held by slots.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::StatusError;
use crate::status::StatusKind;

/// A single status report. Slots replace their value wholesale; a value is
/// never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusValue {
    pub kind: StatusKind,
    pub message: Option<String>,
}

impl StatusValue {
    pub fn new(kind: StatusKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: Some(message.into()),
        }
    }

    /// The default value of every slot: no kind, no message.
    pub fn unknown() -> Self {
        Self {
            kind: StatusKind::Unknown,
            message: None,
        }
    }

    pub fn active(message: impl Into<String>) -> Self {
        Self::new(StatusKind::Active, message)
    }

    pub fn waiting(message: impl Into<String>) -> Self {
        Self::new(StatusKind::Waiting, message)
    }

    pub fn maintenance(message: impl Into<String>) -> Self {
        Self::new(StatusKind::Maintenance, message)
    }

    pub fn blocked(message: impl Into<String>) -> Self {
        Self::new(StatusKind::Blocked, message)
    }

    /// Build a value from the external request surface: a raw kind string plus
    /// an optional message. `"unknown"` yields the bare unknown value (the
    /// message is dropped; an unknown slot carries no report). Any string
    /// outside the enumerated set fails without producing a value.
    pub fn parse(kind: &str, message: Option<&str>) -> Result<Self, StatusError> {
        let kind: StatusKind = kind.parse()?;
        if kind.is_unknown() {
            return Ok(Self::unknown());
        }
        Ok(Self {
            kind,
            message: message.map(str::to_string),
        })
    }

    pub fn is_unknown(&self) -> bool {
        self.kind.is_unknown()
    }
}

impl Default for StatusValue {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for StatusValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) if !message.is_empty() => {
                write!(f, "{}: {}", self.kind, message)
            }
            _ => write!(f, "{}", self.kind),
        }
    }
}
