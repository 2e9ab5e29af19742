//! Event dispatch — maps unit events to pool operations, one cycle per event.

use vigil_core::constants::WORKLOAD_SLOT;
use vigil_core::errors::PoolError;
use vigil_core::pool::StatusPool;
use vigil_core::status::StatusValue;

use crate::events::UnitEvent;
use crate::health::HealthProbe;
use crate::naming::slot_name_for_unit;

/// Drives a status pool from discrete unit events.
///
/// One `handle_event` call is one cycle. When the pool is not
/// auto-committing, the cycle commits exactly once on its success path; an
/// error aborts the cycle before commit, so the previously displayed value
/// stays untouched. With auto-commit configured the pool has already
/// committed after each mutation and the dispatcher adds nothing.
pub struct UnitAgent {
    pool: StatusPool,
    probe: Box<dyn HealthProbe>,
    workload_slot: String,
}

impl UnitAgent {
    pub fn new(pool: StatusPool, probe: Box<dyn HealthProbe>) -> Self {
        Self {
            pool,
            probe,
            workload_slot: WORKLOAD_SLOT.to_string(),
        }
    }

    /// Use a template slot other than `workload` for start events.
    pub fn with_workload_slot(mut self, name: impl Into<String>) -> Self {
        self.workload_slot = name.into();
        self
    }

    pub fn pool(&self) -> &StatusPool {
        &self.pool
    }

    pub fn pool_mut(&mut self) -> &mut StatusPool {
        &mut self.pool
    }

    /// Process one event as one cycle.
    pub fn handle_event(&mut self, event: &UnitEvent) -> Result<(), PoolError> {
        tracing::debug!(?event, "handling unit event");
        self.dispatch(event)?;
        if !self.pool.auto_commit() {
            self.pool.commit()?;
        }
        Ok(())
    }

    fn dispatch(&mut self, event: &UnitEvent) -> Result<(), PoolError> {
        match event {
            UnitEvent::Start => self
                .pool
                .set_status(&self.workload_slot, StatusValue::active("started")),

            UnitEvent::RelationJoined {
                relation,
                remote_unit,
            } => {
                let slot = slot_name_for_unit(relation, remote_unit);
                self.pool.add_status(&slot, None)?;
                self.pool
                    .set_status(&slot, StatusValue::maintenance("setting up"))
            }

            UnitEvent::RelationChanged {
                relation,
                remote_units,
            } => {
                for unit in remote_units {
                    let slot = slot_name_for_unit(relation, unit);
                    let value = if self.probe.is_healthy(relation, unit) {
                        StatusValue::active(format!("{unit} is ready"))
                    } else {
                        StatusValue::blocked(format!("{unit} is failing"))
                    };
                    self.pool.set_status(&slot, value)?;
                }
                Ok(())
            }

            UnitEvent::RelationDeparted {
                relation,
                remote_unit,
            } => {
                let slot = slot_name_for_unit(relation, remote_unit);
                self.pool.remove_status(&slot)
            }

            UnitEvent::SetStatus {
                name,
                kind,
                message,
            } => {
                // Validate before any pool call so a bad kind string leaves
                // the pool untouched.
                let value = StatusValue::parse(kind, message.as_deref())?;
                if value.is_unknown() {
                    self.pool.unset_status(name)
                } else {
                    self.pool.set_status(name, value)
                }
            }
        }
    }
}
