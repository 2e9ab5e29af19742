//! Commit sink errors.

use super::error_code::{self, VigilErrorCode};

/// Failure modes of the external display facility. Raised only inside
/// `commit()`, and propagated to the caller unmodified.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("Display sink unavailable: {message}")]
    Unavailable { message: String },

    #[error("Display sink rejected the status: {message}")]
    Rejected { message: String },
}

impl VigilErrorCode for SinkError {
    fn error_code(&self) -> &'static str {
        error_code::SINK_ERROR
    }
}
