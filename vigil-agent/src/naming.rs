//! Slot-key derivation from opaque remote unit identifiers.

/// Derive a stable, identifier-safe slot key for a remote unit of a
/// relation. The aggregator only requires that keys are stable, unique
/// strings; this is the convention this dispatcher uses.
///
/// `slot_name_for_unit("db", "db/0")` → `"db_db_0"`.
pub fn slot_name_for_unit(relation: &str, unit: &str) -> String {
    let sanitized = unit.replace(['-', '/'], "_");
    format!("{relation}_{sanitized}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitizes_separators() {
        assert_eq!(slot_name_for_unit("db", "db/0"), "db_db_0");
        assert_eq!(
            slot_name_for_unit("cache", "redis-replica/12"),
            "cache_redis_replica_12"
        );
    }

    #[test]
    fn distinct_units_get_distinct_keys() {
        assert_ne!(
            slot_name_for_unit("db", "db/0"),
            slot_name_for_unit("db", "db/1")
        );
    }
}
