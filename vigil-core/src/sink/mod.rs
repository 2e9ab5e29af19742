//! Commit sink abstraction — where resolved statuses are displayed.

pub mod display;
pub mod recording;

use crate::errors::SinkError;
use crate::status::StatusKind;

pub use display::TracingSink;
pub use recording::RecordingSink;

/// The host's status-display facility. `commit()` performs exactly one call
/// per invocation; each call unconditionally overwrites the previously
/// displayed value.
pub trait CommitSink: Send {
    fn set_display_status(
        &mut self,
        kind: StatusKind,
        message: Option<&str>,
    ) -> Result<(), SinkError>;
}
