//! vigil-agent: reference unit-event dispatcher for a Vigil status pool
//!
//! The aggregator core treats the event dispatcher as an external
//! collaborator; this crate is that collaborator for hosts that deliver
//! discrete unit events (start, relation lifecycle, set-status requests).
//! Each event becomes a sequence of pool operations, with the commit
//! protocol honored once per cycle.

pub mod dispatcher;
pub mod events;
pub mod health;
pub mod naming;

pub use dispatcher::UnitAgent;
pub use events::{EventDecodeError, UnitEvent};
pub use health::{HealthProbe, StaticProbe};
pub use naming::slot_name_for_unit;
