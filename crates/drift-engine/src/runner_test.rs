//! Tests for the migration runner: completeness, idempotence, ordering,
//! batch numbering, and fail-fast abort.

use super::*;
use crate::definition::SqlMigration;
use crate::source::RegistryMigrations;

fn registry(entries: &[(&str, &str)]) -> RegistryMigrations {
    let mut r = RegistryMigrations::new();
    for (id, up) in entries {
        let body = format!("-- drift:up\n{up}\n");
        r = r.with(MigrationId::new(*id), move || {
            Box::new(SqlMigration::parse(&body).unwrap())
        });
    }
    r
}

fn recorded_batch(db: &DriftDb, identity: &str) -> Option<i64> {
    db.conn()
        .query_row(
            "SELECT batch FROM drift_migrations WHERE identity = ?",
            duckdb::params![identity],
            |row| row.get(0),
        )
        .ok()
}

fn ledger_rows(db: &DriftDb) -> i64 {
    db.conn()
        .query_row("SELECT COUNT(*) FROM drift_migrations", [], |row| row.get(0))
        .unwrap()
}

fn table_exists(db: &DriftDb, name: &str) -> bool {
    let count: i64 = db
        .conn()
        .query_row(
            &format!(
                "SELECT COUNT(*) FROM information_schema.tables WHERE table_name = '{name}'"
            ),
            [],
            |row| row.get(0),
        )
        .unwrap();
    count > 0
}

#[test]
fn applies_all_pending_with_one_batch() {
    let db = DriftDb::open_memory().unwrap();
    let source = registry(&[
        ("2025_01_01_000000_a", "CREATE TABLE a (id INTEGER);"),
        ("2025_01_02_000000_b", "CREATE TABLE b (id INTEGER);"),
    ]);

    let report = MigrationRunner::new(&db, &source).run().unwrap();

    assert_eq!(report.batch, Some(1));
    assert_eq!(report.applied.len(), 2);
    assert_eq!(recorded_batch(&db, "2025_01_01_000000_a"), Some(1));
    assert_eq!(recorded_batch(&db, "2025_01_02_000000_b"), Some(1));
    assert!(table_exists(&db, "a"));
    assert!(table_exists(&db, "b"));
}

#[test]
fn second_run_is_a_noop() {
    let db = DriftDb::open_memory().unwrap();
    let source = registry(&[("2025_01_01_000000_a", "CREATE TABLE a (id INTEGER);")]);
    let runner = MigrationRunner::new(&db, &source);

    runner.run().unwrap();
    let report = runner.run().unwrap();

    assert!(report.nothing_to_do());
    assert_eq!(report.batch, None);
    assert_eq!(ledger_rows(&db), 1);
}

#[test]
fn later_invocations_get_strictly_greater_batches() {
    let db = DriftDb::open_memory().unwrap();

    let first = registry(&[("2025_01_01_000000_a", "CREATE TABLE a (id INTEGER);")]);
    MigrationRunner::new(&db, &first).run().unwrap();

    let second = registry(&[
        ("2025_01_01_000000_a", "CREATE TABLE a (id INTEGER);"),
        ("2025_01_02_000000_b", "CREATE TABLE b (id INTEGER);"),
        ("2025_01_03_000000_c", "CREATE TABLE c (id INTEGER);"),
    ]);
    let report = MigrationRunner::new(&db, &second).run().unwrap();

    // Only the new migrations run, and they share the new batch.
    assert_eq!(report.batch, Some(2));
    assert_eq!(report.applied.len(), 2);
    assert_eq!(recorded_batch(&db, "2025_01_01_000000_a"), Some(1));
    assert_eq!(recorded_batch(&db, "2025_01_02_000000_b"), Some(2));
    assert_eq!(recorded_batch(&db, "2025_01_03_000000_c"), Some(2));
}

#[test]
fn pending_migrations_apply_in_identity_order() {
    let db = DriftDb::open_memory().unwrap();
    // Registered out of order on purpose; identities sort chronologically.
    let source = registry(&[
        ("2025_01_02_000000_b", "INSERT INTO trace VALUES ('b');"),
        ("2025_01_01_000000_a", "CREATE TABLE trace (step VARCHAR); INSERT INTO trace VALUES ('a');"),
    ]);

    let report = MigrationRunner::new(&db, &source).run().unwrap();

    let order: Vec<&str> = report.applied.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(order, ["2025_01_01_000000_a", "2025_01_02_000000_b"]);
    // b's INSERT only works because a ran first and created the table.
    let steps: i64 = db
        .conn()
        .query_row("SELECT COUNT(*) FROM trace", [], |row| row.get(0))
        .unwrap();
    assert_eq!(steps, 2);
}

#[test]
fn fail_fast_aborts_remaining_migrations() {
    let db = DriftDb::open_memory().unwrap();
    let source = registry(&[
        ("2025_01_01_000000_a", "CREATE TABLE a (id INTEGER);"),
        ("2025_01_02_000000_b", "THIS IS NOT SQL;"),
        ("2025_01_03_000000_c", "CREATE TABLE c (id INTEGER);"),
    ]);

    let err = MigrationRunner::new(&db, &source).run().unwrap_err();

    match err {
        EngineError::MigrationFailed { identity, .. } => {
            assert_eq!(identity, "2025_01_02_000000_b");
        }
        other => panic!("expected MigrationFailed, got {other}"),
    }
    // 1 recorded with the new batch, 2 not recorded, 3 never attempted.
    assert_eq!(recorded_batch(&db, "2025_01_01_000000_a"), Some(1));
    assert_eq!(recorded_batch(&db, "2025_01_02_000000_b"), None);
    assert_eq!(recorded_batch(&db, "2025_01_03_000000_c"), None);
    assert!(table_exists(&db, "a"));
    assert!(!table_exists(&db, "c"));
}

#[test]
fn retry_after_failure_applies_the_remainder() {
    let db = DriftDb::open_memory().unwrap();
    let broken = registry(&[
        ("2025_01_01_000000_a", "CREATE TABLE a (id INTEGER);"),
        ("2025_01_02_000000_b", "THIS IS NOT SQL;"),
    ]);
    MigrationRunner::new(&db, &broken).run().unwrap_err();

    // Operator fixes the definition and re-runs.
    let fixed = registry(&[
        ("2025_01_01_000000_a", "CREATE TABLE a (id INTEGER);"),
        ("2025_01_02_000000_b", "CREATE TABLE b (id INTEGER);"),
    ]);
    let report = MigrationRunner::new(&db, &fixed).run().unwrap();

    assert_eq!(report.applied.len(), 1);
    assert_eq!(report.batch, Some(2));
    assert_eq!(recorded_batch(&db, "2025_01_02_000000_b"), Some(2));
}

#[test]
fn failed_migration_rolls_back_its_own_partial_work() {
    let db = DriftDb::open_memory().unwrap();
    // First statement succeeds, second fails; the definition-level
    // transaction must discard the first statement's effect.
    let source = registry(&[(
        "2025_01_01_000000_partial",
        "CREATE TABLE partial (id INTEGER); THIS IS NOT SQL;",
    )]);

    MigrationRunner::new(&db, &source).run().unwrap_err();
    assert!(!table_exists(&db, "partial"));
    assert_eq!(ledger_rows(&db), 0);
}

#[test]
fn run_bootstraps_the_ledger() {
    let db = DriftDb::open_memory().unwrap();
    let source = registry(&[]);
    let report = MigrationRunner::new(&db, &source).run().unwrap();

    assert!(report.nothing_to_do());
    assert_eq!(ledger_rows(&db), 0);
}
