//! vigil-core: compound status aggregation for a managed unit
//!
//! Many independent conditions (workload health, peer relationships,
//! dependencies) report into named slots; the pool collapses the current
//! slot set into one representative value with a deterministic priority
//! rule and pushes exactly that value to the host's display sink on commit.
//!
//! - Status: the five kinds and their severity order, immutable values
//! - Pool: slot lifecycle, winner resolution, the commit protocol
//! - Sink: the display abstraction written to once per commit
//! - Config: declarative template slots, auto-commit, fallback message
//! - Errors: one enum per failure family with host-boundary codes
//! - Tracing: `VIGIL_LOG`-filtered observability setup

pub mod config;
pub mod constants;
pub mod errors;
pub mod pool;
pub mod sink;
pub mod status;
pub mod tracing;

// Re-exports for convenience
pub use config::{PoolConfig, SlotSpec};
pub use errors::{ConfigError, PoolError, SinkError, StatusError, VigilErrorCode};
pub use pool::{PoolSnapshot, PriorityMode, Resolution, SlotSnapshot, StatusPool, StatusSlot};
pub use sink::{CommitSink, RecordingSink, TracingSink};
pub use status::{StatusKind, StatusValue};
