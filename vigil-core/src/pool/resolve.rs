//! Winner resolution — collapse the slot set to one representative value.

use std::cmp::Reverse;

use crate::errors::PoolError;
use crate::status::StatusValue;

use super::slot::{PriorityMode, StatusSlot};

/// Outcome of resolving the current slot set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Name of the winning slot; `None` when every slot is unknown (or the
    /// pool is empty) and the fallback value applies.
    pub winner: Option<String>,
    /// The value a commit would write to the sink.
    pub value: StatusValue,
}

/// Resolve the slot set. Pure: depends only on the slots and the configured
/// fallback message.
pub(crate) fn resolve(
    slots: &[StatusSlot],
    fallback_message: Option<&str>,
) -> Result<Resolution, PoolError> {
    let mode = priority_mode(slots)?;

    let winner = slots
        .iter()
        .filter(|slot| !slot.is_unknown())
        .min_by_key(|slot| {
            let primary = match mode {
                // mode is Explicit only when every slot carries a priority
                PriorityMode::Explicit => i64::from(slot.explicit_priority().unwrap_or(i32::MIN)),
                PriorityMode::Implicit => i64::from(slot.get().kind.severity()),
            };
            (Reverse(primary), slot.insertion_index())
        });

    match winner {
        Some(slot) => Ok(Resolution {
            winner: Some(slot.name().to_string()),
            value: slot.get().clone(),
        }),
        None => Ok(Resolution {
            winner: None,
            value: StatusValue {
                kind: crate::status::StatusKind::Unknown,
                message: fallback_message.map(str::to_string),
            },
        }),
    }
}

/// Determine the pool-wide priority mode, failing fast on a mix. An empty
/// pool counts as implicit.
pub(crate) fn priority_mode(slots: &[StatusSlot]) -> Result<PriorityMode, PoolError> {
    let explicit = slots
        .iter()
        .filter(|s| s.priority_mode() == PriorityMode::Explicit)
        .count();
    let implicit = slots.len() - explicit;

    if explicit != 0 && implicit != 0 {
        return Err(PoolError::MixedPriorityModes { explicit, implicit });
    }
    if explicit != 0 {
        Ok(PriorityMode::Explicit)
    } else {
        Ok(PriorityMode::Implicit)
    }
}
