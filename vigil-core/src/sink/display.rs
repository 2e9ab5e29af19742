//! Tracing-backed display sink.

use super::CommitSink;
use crate::errors::SinkError;
use crate::status::StatusKind;

/// Writes the resolved status to the `tracing` subscriber. This is the
/// display facility a headless host actually has; embedders with a real
/// status surface implement [`CommitSink`] themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl CommitSink for TracingSink {
    fn set_display_status(
        &mut self,
        kind: StatusKind,
        message: Option<&str>,
    ) -> Result<(), SinkError> {
        tracing::info!(
            kind = kind.as_str(),
            message = message.unwrap_or(""),
            "display status"
        );
        Ok(())
    }
}
