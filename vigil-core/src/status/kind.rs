//! The five status kinds and their total severity order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::StatusError;

/// Discrete severity tag of a status value.
///
/// `Unknown` is the default for every freshly registered slot and never wins
/// resolution while any other kind is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Unknown,
    Active,
    Waiting,
    Maintenance,
    Blocked,
}

impl StatusKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Active => "active",
            Self::Waiting => "waiting",
            Self::Maintenance => "maintenance",
            Self::Blocked => "blocked",
        }
    }

    pub fn all() -> &'static [StatusKind] {
        &[
            Self::Unknown,
            Self::Active,
            Self::Waiting,
            Self::Maintenance,
            Self::Blocked,
        ]
    }

    /// Severity rank used by implicit-priority resolution. Higher outranks lower.
    pub fn severity(&self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Active => 1,
            Self::Waiting => 2,
            Self::Maintenance => 3,
            Self::Blocked => 4,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl Default for StatusKind {
    fn default() -> Self {
        Self::Unknown
    }
}

impl FromStr for StatusKind {
    type Err = StatusError;

    /// Parses one of `unknown | active | waiting | maintenance | blocked`.
    /// Anything else fails; there is no implicit coercion.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unknown" => Ok(Self::Unknown),
            "active" => Ok(Self::Active),
            "waiting" => Ok(Self::Waiting),
            "maintenance" => Ok(Self::Maintenance),
            "blocked" => Ok(Self::Blocked),
            other => Err(StatusError::UnknownKind {
                kind: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
