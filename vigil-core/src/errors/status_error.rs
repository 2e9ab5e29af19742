//! Status value validation errors.

use super::error_code::{self, VigilErrorCode};

/// Errors raised while validating externally supplied status data.
#[derive(Debug, thiserror::Error)]
pub enum StatusError {
    #[error("Unknown status kind '{kind}' (expected one of: unknown, active, waiting, maintenance, blocked)")]
    UnknownKind { kind: String },
}

impl VigilErrorCode for StatusError {
    fn error_code(&self) -> &'static str {
        error_code::UNKNOWN_KIND
    }
}
