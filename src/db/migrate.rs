use rusqlite::{Connection, OptionalExtension, Result};

/// One versioned schema step. Applied steps are recorded in the `log` table
/// as `operation = 'migration_applied'`, `target = version`.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20260101_0001_create_attendance_logs",
        description: "Created attendance_logs table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS attendance_logs (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id  TEXT NOT NULL,
            timestamp    TEXT NOT NULL,
            source       TEXT NOT NULL DEFAULT 'import',
            created_at   TEXT NOT NULL,
            UNIQUE(employee_id, timestamp)
        );

        CREATE INDEX IF NOT EXISTS idx_attendance_logs_ts ON attendance_logs(timestamp);
        CREATE INDEX IF NOT EXISTS idx_attendance_logs_emp_ts ON attendance_logs(employee_id, timestamp);
        "#,
    },
    Migration {
        version: "20260101_0002_create_shift_table",
        description: "Created shift_table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS shift_table (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            name          TEXT NOT NULL,
            start_time    TEXT NOT NULL,
            end_time      TEXT NOT NULL,
            is_overnight  INTEGER NOT NULL DEFAULT 0,
            is_active     INTEGER NOT NULL DEFAULT 1
        );
        "#,
    },
    Migration {
        version: "20260101_0003_create_work_days",
        description: "Created work_days table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS work_days (
            employee_id       TEXT NOT NULL,
            work_date         TEXT NOT NULL,
            check_in          TEXT,
            check_out         TEXT,
            status            TEXT NOT NULL,
            late_minutes      INTEGER NOT NULL DEFAULT 0,
            worked_hours      REAL NOT NULL DEFAULT 0,
            matched_shift_id  INTEGER,
            raw_scan_count    INTEGER NOT NULL DEFAULT 0,
            anomalies         INTEGER NOT NULL DEFAULT 0,
            updated_at        TEXT NOT NULL,
            PRIMARY KEY (employee_id, work_date)
        );

        CREATE INDEX IF NOT EXISTS idx_work_days_date ON work_days(work_date);
        "#,
    },
];

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> Result<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(m.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;
    tx.commit()?;

    log::info!("migration applied: {} ({})", m.version, m.description);
    Ok(())
}

/// Versions already recorded in the `log` table, oldest first.
pub fn applied_versions(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log
         WHERE operation = 'migration_applied'
         ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.collect()
}

/// Public entry point: run all pending migrations, in order.
/// Returns how many were applied.
///
/// Invocata da db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }
        apply(conn, m)?;
        applied += 1;
    }
    Ok(applied)
}
