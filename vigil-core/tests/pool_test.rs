//! Tests for slot lifecycle, resolution, and the commit protocol.

use vigil_core::errors::{PoolError, SinkError};
use vigil_core::sink::CommitSink;
use vigil_core::status::{StatusKind, StatusValue};
use vigil_core::{PoolConfig, RecordingSink, SlotSpec, StatusPool};

/// Sink that fails every write, for commit-failure behavior.
struct FailingSink;

impl CommitSink for FailingSink {
    fn set_display_status(
        &mut self,
        _kind: StatusKind,
        _message: Option<&str>,
    ) -> Result<(), SinkError> {
        Err(SinkError::Unavailable {
            message: "display backend is down".to_string(),
        })
    }
}

fn implicit_pool(sink: &RecordingSink, names: &[&str]) -> StatusPool {
    let mut config = PoolConfig::default();
    for name in names {
        config = config.slot(SlotSpec::new(*name));
    }
    StatusPool::from_config(&config, Box::new(sink.clone())).unwrap()
}

#[test]
fn all_unknown_resolves_to_unknown() {
    let sink = RecordingSink::new();
    let mut pool = implicit_pool(&sink, &["workload", "tls", "database"]);

    pool.commit().unwrap();

    let written = sink.last().unwrap();
    assert_eq!(written.kind, StatusKind::Unknown);
    assert_eq!(sink.write_count(), 1);
}

#[test]
fn fallback_message_applies_when_everything_is_unknown() {
    let sink = RecordingSink::new();
    let config = PoolConfig {
        fallback_message: Some("no conditions reported".to_string()),
        ..PoolConfig::default()
    }
    .slot(SlotSpec::new("workload"));
    let mut pool = StatusPool::from_config(&config, Box::new(sink.clone())).unwrap();

    pool.commit().unwrap();

    let written = sink.last().unwrap();
    assert_eq!(written.kind, StatusKind::Unknown);
    assert_eq!(written.message.as_deref(), Some("no conditions reported"));
}

#[test]
fn winner_is_never_unknown_while_any_slot_reports() {
    let sink = RecordingSink::new();
    let mut pool = implicit_pool(&sink, &["a", "b", "c"]);

    pool.set_status("b", StatusValue::active("running")).unwrap();
    pool.commit().unwrap();

    assert_eq!(sink.last().unwrap().kind, StatusKind::Active);
}

#[test]
fn commit_is_idempotent_without_intervening_mutation() {
    let sink = RecordingSink::new();
    let mut pool = implicit_pool(&sink, &["workload", "tls"]);
    pool.set_status("tls", StatusValue::waiting("handshake")).unwrap();

    pool.commit().unwrap();
    pool.commit().unwrap();

    let writes = sink.writes();
    assert_eq!(writes.len(), 2);
    assert_eq!(writes[0], writes[1]);
}

#[test]
fn insertion_order_breaks_ties_in_implicit_mode() {
    let sink = RecordingSink::new();
    let mut pool = implicit_pool(&sink, &["a", "b", "c"]);

    pool.set_status("b", StatusValue::active("b up")).unwrap();
    pool.commit().unwrap();
    assert_eq!(sink.last().unwrap().message.as_deref(), Some("b up"));

    let resolution = pool.resolve().unwrap();
    assert_eq!(resolution.winner.as_deref(), Some("b"));
}

#[test]
fn earlier_declaration_wins_among_equal_severity() {
    let sink = RecordingSink::new();
    let mut pool = implicit_pool(&sink, &["workload", "tls", "database"]);

    pool.set_status("workload", StatusValue::blocked("disk full"))
        .unwrap();
    pool.set_status("tls", StatusValue::blocked("cert expired"))
        .unwrap();
    pool.commit().unwrap();

    let resolution = pool.resolve().unwrap();
    assert_eq!(resolution.winner.as_deref(), Some("workload"));
    assert_eq!(sink.last().unwrap().message.as_deref(), Some("disk full"));
}

#[test]
fn higher_severity_beats_earlier_declaration() {
    let sink = RecordingSink::new();
    let mut pool = implicit_pool(&sink, &["workload", "tls"]);

    pool.set_status("workload", StatusValue::active("running"))
        .unwrap();
    pool.set_status("tls", StatusValue::maintenance("rotating certs"))
        .unwrap();
    pool.commit().unwrap();

    assert_eq!(sink.last().unwrap().kind, StatusKind::Maintenance);
}

#[test]
fn explicit_priority_overrides_severity() {
    let sink = RecordingSink::new();
    let config = PoolConfig::default()
        .slot(SlotSpec::with_priority("low", 1))
        .slot(SlotSpec::with_priority("high", 10));
    let mut pool = StatusPool::from_config(&config, Box::new(sink.clone())).unwrap();

    // The low-priority slot holds the higher-severity kind; explicit
    // priority decides anyway.
    pool.set_status("low", StatusValue::blocked("broken")).unwrap();
    pool.set_status("high", StatusValue::active("fine")).unwrap();
    pool.commit().unwrap();

    assert_eq!(sink.last().unwrap().kind, StatusKind::Active);
}

#[test]
fn explicit_priority_ties_fall_back_to_declaration_order() {
    let sink = RecordingSink::new();
    let config = PoolConfig::default()
        .slot(SlotSpec::with_priority("first", 5))
        .slot(SlotSpec::with_priority("second", 5));
    let mut pool = StatusPool::from_config(&config, Box::new(sink.clone())).unwrap();

    pool.set_status("first", StatusValue::waiting("one")).unwrap();
    pool.set_status("second", StatusValue::waiting("two")).unwrap();

    assert_eq!(pool.resolve().unwrap().winner.as_deref(), Some("first"));
}

#[test]
fn mixed_priority_modes_fail_commit() {
    let sink = RecordingSink::new();
    let mut pool = StatusPool::new(Box::new(sink.clone()));
    pool.add_status("a", None).unwrap();
    pool.add_status("b", Some(5)).unwrap();

    let err = pool.commit().unwrap_err();
    assert!(matches!(
        err,
        PoolError::MixedPriorityModes {
            explicit: 1,
            implicit: 1
        }
    ));
    // Failure happened before the sink write.
    assert_eq!(sink.write_count(), 0);
}

#[test]
fn unset_slot_cannot_win() {
    let sink = RecordingSink::new();
    let mut pool = implicit_pool(&sink, &["x", "y"]);

    pool.set_status("x", StatusValue::blocked("worst")).unwrap();
    pool.set_status("y", StatusValue::active("fine")).unwrap();
    pool.unset_status("x").unwrap();
    pool.commit().unwrap();

    assert_eq!(sink.last().unwrap().kind, StatusKind::Active);
    // The slot is still registered.
    assert!(pool.contains("x"));
    assert!(pool.get_status("x").unwrap().is_unknown());
}

#[test]
fn removed_slot_is_gone() {
    let sink = RecordingSink::new();
    let mut pool = implicit_pool(&sink, &["workload"]);
    pool.add_status("db_unit_1", None).unwrap();
    pool.set_status("db_unit_1", StatusValue::blocked("down")).unwrap();

    pool.remove_status("db_unit_1").unwrap();

    assert!(matches!(
        pool.get_status("db_unit_1"),
        Err(PoolError::SlotNotFound { .. })
    ));
    pool.set_status("workload", StatusValue::active("running"))
        .unwrap();
    pool.commit().unwrap();
    assert_eq!(sink.last().unwrap().kind, StatusKind::Active);
}

#[test]
fn duplicate_names_are_rejected() {
    let sink = RecordingSink::new();
    let mut pool = implicit_pool(&sink, &["workload"]);

    let err = pool.add_status("workload", None).unwrap_err();
    assert!(matches!(err, PoolError::DuplicateSlot { name } if name == "workload"));
    assert_eq!(pool.len(), 1);
}

#[test]
fn auto_commit_writes_after_every_mutation() {
    let sink = RecordingSink::new();
    let config = PoolConfig {
        auto_commit: true,
        ..PoolConfig::default()
    }
    .slot(SlotSpec::new("workload"));
    let mut pool = StatusPool::from_config(&config, Box::new(sink.clone())).unwrap();

    // Construction alone commits nothing.
    assert_eq!(sink.write_count(), 0);

    pool.set_status("workload", StatusValue::active("running"))
        .unwrap();
    pool.add_status("db", None).unwrap();
    pool.unset_status("workload").unwrap();
    pool.remove_status("db").unwrap();

    assert_eq!(sink.write_count(), 4);
    assert_eq!(sink.last().unwrap().kind, StatusKind::Unknown);
}

#[test]
fn manual_mode_accumulates_until_commit() {
    let sink = RecordingSink::new();
    let mut pool = implicit_pool(&sink, &["workload", "tls"]);

    pool.set_status("workload", StatusValue::active("running"))
        .unwrap();
    pool.set_status("tls", StatusValue::blocked("no cert")).unwrap();
    assert_eq!(sink.write_count(), 0);

    pool.commit().unwrap();
    assert_eq!(sink.write_count(), 1);
    assert_eq!(sink.last().unwrap().kind, StatusKind::Blocked);
}

#[test]
fn slot_handle_edits_surface_at_next_commit() {
    let sink = RecordingSink::new();
    let mut pool = implicit_pool(&sink, &["workload"]);

    pool.get_status_mut("workload")
        .unwrap()
        .set(StatusValue::waiting("warming up"));
    assert_eq!(sink.write_count(), 0);

    pool.commit().unwrap();
    assert_eq!(sink.last().unwrap().kind, StatusKind::Waiting);
}

#[test]
fn sink_errors_propagate_unmodified() {
    let mut pool = StatusPool::new(Box::new(FailingSink));
    pool.add_status("workload", None).unwrap();
    pool.set_status("workload", StatusValue::active("running"))
        .unwrap();

    let err = pool.commit().unwrap_err();
    assert!(matches!(
        err,
        PoolError::Sink(SinkError::Unavailable { .. })
    ));
    assert_eq!(err.to_string(), "Display sink unavailable: display backend is down");
}

#[test]
fn snapshot_restore_round_trip() {
    let sink = RecordingSink::new();
    let mut pool = implicit_pool(&sink, &["workload", "tls"]);
    pool.add_status("db_db_0", None).unwrap();
    pool.set_status("workload", StatusValue::active("running"))
        .unwrap();
    pool.set_status("db_db_0", StatusValue::maintenance("setting up"))
        .unwrap();

    let snapshot = pool.snapshot();

    // A fresh pool built from the same template knows nothing about the
    // dynamic slot until the snapshot is replayed.
    let sink2 = RecordingSink::new();
    let mut restored = implicit_pool(&sink2, &["workload", "tls"]);
    restored.restore(&snapshot).unwrap();

    assert!(restored.contains("db_db_0"));
    assert_eq!(
        restored.resolve().unwrap(),
        pool.resolve().unwrap()
    );
}

#[test]
fn snapshot_survives_json_round_trip() {
    let sink = RecordingSink::new();
    let mut pool = implicit_pool(&sink, &["workload", "tls"]);
    pool.add_status("db_db_0", None).unwrap();
    pool.set_status("workload", StatusValue::active("running"))
        .unwrap();
    pool.set_status("db_db_0", StatusValue::blocked("db/0 is failing"))
        .unwrap();

    // Hosts persist snapshots through their own storage; JSON is the
    // common wire shape.
    let json = serde_json::to_string(&pool.snapshot()).unwrap();
    let decoded: vigil_core::PoolSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, pool.snapshot());

    let sink2 = RecordingSink::new();
    let mut restored = implicit_pool(&sink2, &["workload", "tls"]);
    restored.restore(&decoded).unwrap();

    assert_eq!(restored.resolve().unwrap(), pool.resolve().unwrap());
}

#[test]
fn dynamic_membership_end_to_end() {
    let sink = RecordingSink::new();
    let mut pool = implicit_pool(&sink, &["workload", "tls", "database"]);

    pool.set_status("workload", StatusValue::active("running"))
        .unwrap();
    pool.add_status("db_unit_1", None).unwrap();
    pool.set_status("db_unit_1", StatusValue::maintenance("setting up"))
        .unwrap();
    pool.commit().unwrap();

    // Maintenance outranks Active.
    let written = sink.last().unwrap();
    assert_eq!(written.kind, StatusKind::Maintenance);
    assert_eq!(pool.resolve().unwrap().winner.as_deref(), Some("db_unit_1"));

    pool.remove_status("db_unit_1").unwrap();
    pool.commit().unwrap();

    let written = sink.last().unwrap();
    assert_eq!(written.kind, StatusKind::Active);
    assert_eq!(written.message.as_deref(), Some("running"));
}
