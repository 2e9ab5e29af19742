//! The status pool — ordered slot collection, resolution, and commit.

pub mod resolve;
pub mod slot;
pub mod snapshot;

use rustc_hash::FxHashMap;

use crate::config::PoolConfig;
use crate::errors::PoolError;
use crate::sink::CommitSink;
use crate::status::StatusValue;

pub use resolve::Resolution;
pub use slot::{PriorityMode, StatusSlot};
pub use snapshot::{PoolSnapshot, SlotSnapshot};

/// An ordered collection of named status slots, owning the slots and the
/// sink they are committed to.
///
/// All operations are synchronous and single-writer: the host guarantees at
/// most one mutation sequence is in flight at a time. Commit is the only
/// operation with an externally visible side effect.
pub struct StatusPool {
    slots: Vec<StatusSlot>,
    index: FxHashMap<String, usize>,
    next_insertion: u32,
    auto_commit: bool,
    fallback_message: Option<String>,
    sink: Box<dyn CommitSink>,
}

impl StatusPool {
    /// An empty implicit-priority pool with manual commit.
    pub fn new(sink: Box<dyn CommitSink>) -> Self {
        Self {
            slots: Vec::new(),
            index: FxHashMap::default(),
            next_insertion: 0,
            auto_commit: false,
            fallback_message: None,
            sink,
        }
    }

    /// Build a pool from a validated configuration, registering template
    /// slots in list order. Registration at construction is not a mutation
    /// event: nothing is committed until the first operation or an explicit
    /// `commit()`.
    pub fn from_config(
        config: &PoolConfig,
        sink: Box<dyn CommitSink>,
    ) -> Result<Self, crate::errors::ConfigError> {
        config.validate()?;
        let mut pool = Self::new(sink);
        pool.auto_commit = config.auto_commit;
        pool.fallback_message = config.fallback_message.clone();
        for spec in &config.slots {
            // Uniqueness and priority uniformity were checked by validate().
            pool.insert_slot(spec.name.clone(), spec.priority);
        }
        Ok(pool)
    }

    pub fn auto_commit(&self) -> bool {
        self.auto_commit
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Registered slot names in insertion order.
    pub fn slot_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.slots.iter().map(StatusSlot::name)
    }

    /// Register a new slot, initially unknown. Fails if the name is taken.
    pub fn add_status(&mut self, name: &str, priority: Option<i32>) -> Result<(), PoolError> {
        if self.index.contains_key(name) {
            return Err(PoolError::DuplicateSlot {
                name: name.to_string(),
            });
        }
        self.insert_slot(name.to_string(), priority);
        tracing::debug!(slot = name, "status slot added");
        self.maybe_auto_commit()
    }

    /// Look up a slot for reading.
    pub fn get_status(&self, name: &str) -> Result<&StatusSlot, PoolError> {
        self.index
            .get(name)
            .map(|&i| &self.slots[i])
            .ok_or_else(|| PoolError::SlotNotFound {
                name: name.to_string(),
            })
    }

    /// Look up a slot for direct mutation. Edits through the handle are
    /// slot-local; they become visible at the next commit and do not trigger
    /// auto-commit.
    pub fn get_status_mut(&mut self, name: &str) -> Result<&mut StatusSlot, PoolError> {
        match self.index.get(name) {
            Some(&i) => Ok(&mut self.slots[i]),
            None => Err(PoolError::SlotNotFound {
                name: name.to_string(),
            }),
        }
    }

    /// Replace a slot's value.
    pub fn set_status(&mut self, name: &str, value: StatusValue) -> Result<(), PoolError> {
        let kind = value.kind;
        self.get_status_mut(name)?.set(value);
        tracing::debug!(slot = name, kind = kind.as_str(), "status set");
        self.maybe_auto_commit()
    }

    /// Reset a slot to unknown. The slot stays registered.
    pub fn unset_status(&mut self, name: &str) -> Result<(), PoolError> {
        self.get_status_mut(name)?.unset();
        tracing::debug!(slot = name, "status unset");
        self.maybe_auto_commit()
    }

    /// Permanently delete a slot. Resolution afterwards proceeds as if the
    /// slot never existed.
    pub fn remove_status(&mut self, name: &str) -> Result<(), PoolError> {
        let pos = self
            .index
            .remove(name)
            .ok_or_else(|| PoolError::SlotNotFound {
                name: name.to_string(),
            })?;
        self.slots.remove(pos);
        for (i, slot) in self.slots.iter().enumerate().skip(pos) {
            self.index.insert(slot.name().to_string(), i);
        }
        tracing::debug!(slot = name, "status slot removed");
        self.maybe_auto_commit()
    }

    /// The value a commit would write right now, without touching the sink.
    pub fn resolve(&self) -> Result<Resolution, PoolError> {
        resolve::resolve(&self.slots, self.fallback_message.as_deref())
    }

    /// Resolve the winning slot and push its value to the sink in a single
    /// write. Fails before the write on mixed priority modes; sink failures
    /// propagate unmodified.
    pub fn commit(&mut self) -> Result<(), PoolError> {
        let resolution = self.resolve()?;
        self.sink.set_display_status(
            resolution.value.kind,
            resolution.value.message.as_deref(),
        )?;
        tracing::info!(
            winner = resolution.winner.as_deref().unwrap_or("<none>"),
            kind = resolution.value.kind.as_str(),
            "status committed"
        );
        Ok(())
    }

    fn insert_slot(&mut self, name: String, priority: Option<i32>) {
        let slot = StatusSlot::new(name.clone(), priority, self.next_insertion);
        self.next_insertion += 1;
        self.slots.push(slot);
        self.index.insert(name, self.slots.len() - 1);
    }

    fn maybe_auto_commit(&mut self) -> Result<(), PoolError> {
        if self.auto_commit {
            self.commit()?;
        }
        Ok(())
    }
}
