//! End-to-end flows over real directories: scaffold → discover → migrate →
//! seed, the way the CLI drives the engine.

use drift_core::scaffold;
use drift_engine::{
    DirectoryMigrations, DirectorySeeders, DriftDb, MigrationRunner, SeedReport, SeederRunner,
};
use std::fs;
use std::path::Path;

/// Fill the up section of a scaffolded migration stub with `sql`.
fn fill_up_section(path: &Path, sql: &str) {
    let content = fs::read_to_string(path).unwrap();
    let content = content.replace("-- drift:up\n", &format!("-- drift:up\n{sql}\n"));
    fs::write(path, content).unwrap();
}

fn ledger_identities(db: &DriftDb) -> Vec<String> {
    let mut stmt = db
        .conn()
        .prepare("SELECT identity FROM drift_migrations ORDER BY identity")
        .unwrap();
    let rows = stmt.query_map([], |row| row.get::<_, String>(0)).unwrap();
    rows.map(Result::unwrap).collect()
}

#[test]
fn scaffolded_migration_applies_end_to_end() {
    let project = tempfile::tempdir().unwrap();
    let migrations = project.path().join("migrations");

    let path = scaffold::scaffold_migration(&migrations, "CreateAirportsTable").unwrap();
    fill_up_section(&path, "CREATE TABLE airports (code VARCHAR);");

    let db = DriftDb::open_memory().unwrap();
    let source = DirectoryMigrations::new(&migrations);
    let report = MigrationRunner::new(&db, &source).run().unwrap();

    assert_eq!(report.batch, Some(1));
    assert_eq!(report.applied.len(), 1);
    assert!(report.applied[0].id.ends_with("_createairportstable"));

    let identities = ledger_identities(&db);
    assert_eq!(identities.len(), 1);
    assert!(identities[0].ends_with("_createairportstable"));

    // Second run over the same directory is a no-op.
    let report = MigrationRunner::new(&db, &source).run().unwrap();
    assert!(report.nothing_to_do());
}

#[test]
fn migrate_then_seed_against_the_same_target() {
    let project = tempfile::tempdir().unwrap();
    let migrations = project.path().join("migrations");
    let seeders = project.path().join("seeders");

    fs::create_dir_all(&migrations).unwrap();
    fs::write(
        migrations.join("2025_07_21_114952_createairportstable.sql"),
        "-- drift:up\nCREATE TABLE airports (code VARCHAR);\n-- drift:down\nDROP TABLE airports;\n",
    )
    .unwrap();

    fs::create_dir_all(&seeders).unwrap();
    fs::write(
        seeders.join("AirportSeeder.sql"),
        "INSERT INTO airports VALUES ('LHR'), ('JFK');\n",
    )
    .unwrap();

    let db = DriftDb::open_memory().unwrap();
    let migration_source = DirectoryMigrations::new(&migrations);
    MigrationRunner::new(&db, &migration_source).run().unwrap();

    let seeder_source = DirectorySeeders::new(&seeders);
    let report = SeederRunner::new(&db, &seeder_source).run(None).unwrap();
    match report {
        SeedReport::Executed(executed) => assert_eq!(executed.len(), 1),
        other => panic!("expected Executed, got {other:?}"),
    }

    let count: i64 = db
        .conn()
        .query_row("SELECT COUNT(*) FROM airports", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 2);
}

#[test]
fn seed_filter_miss_over_directory_source() {
    let project = tempfile::tempdir().unwrap();
    let seeders = project.path().join("seeders");
    fs::create_dir_all(&seeders).unwrap();
    fs::write(seeders.join("AirportSeeder.sql"), "SELECT 1;\n").unwrap();

    let db = DriftDb::open_memory().unwrap();
    let source = DirectorySeeders::new(&seeders);
    let report = SeederRunner::new(&db, &source)
        .run(Some("NonExistentSeeder"))
        .unwrap();

    assert!(matches!(report, SeedReport::NoMatch { .. }));
}

#[test]
fn failed_run_leaves_a_retryable_ledger() {
    let project = tempfile::tempdir().unwrap();
    let migrations = project.path().join("migrations");
    fs::create_dir_all(&migrations).unwrap();

    fs::write(
        migrations.join("2025_01_01_000000_first.sql"),
        "-- drift:up\nCREATE TABLE first (id INTEGER);\n-- drift:down\n",
    )
    .unwrap();
    fs::write(
        migrations.join("2025_01_02_000000_second.sql"),
        "-- drift:up\nTHIS IS NOT SQL;\n-- drift:down\n",
    )
    .unwrap();

    let db = DriftDb::open_memory().unwrap();
    let source = DirectoryMigrations::new(&migrations);
    MigrationRunner::new(&db, &source).run().unwrap_err();
    assert_eq!(ledger_identities(&db), ["2025_01_01_000000_first"]);

    // Operator fixes the broken file and retries; only the remainder runs.
    fs::write(
        migrations.join("2025_01_02_000000_second.sql"),
        "-- drift:up\nCREATE TABLE second (id INTEGER);\n-- drift:down\n",
    )
    .unwrap();
    let report = MigrationRunner::new(&db, &source).run().unwrap();
    assert_eq!(report.batch, Some(2));
    assert_eq!(report.applied.len(), 1);
    assert_eq!(
        ledger_identities(&db),
        ["2025_01_01_000000_first", "2025_01_02_000000_second"]
    );
}
