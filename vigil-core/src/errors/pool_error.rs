//! Status pool errors.

use super::error_code::{self, VigilErrorCode};
use super::sink_error::SinkError;
use super::status_error::StatusError;

/// Errors raised by pool operations. Sink and validation failures pass
/// through transparently so callers see the original error text.
#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    #[error("No status slot named '{name}' is registered")]
    SlotNotFound { name: String },

    #[error("A status slot named '{name}' is already registered")]
    DuplicateSlot { name: String },

    #[error("Pool mixes priority modes: {explicit} slot(s) carry an explicit priority, {implicit} do not")]
    MixedPriorityModes { explicit: usize, implicit: usize },

    #[error(transparent)]
    Status(#[from] StatusError),

    #[error(transparent)]
    Sink(#[from] SinkError),
}

impl VigilErrorCode for PoolError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::SlotNotFound { .. } => error_code::SLOT_NOT_FOUND,
            Self::DuplicateSlot { .. } => error_code::DUPLICATE_SLOT,
            Self::MixedPriorityModes { .. } => error_code::MIXED_PRIORITY,
            Self::Status(e) => e.error_code(),
            Self::Sink(e) => e.error_code(),
        }
    }
}
