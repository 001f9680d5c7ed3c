use crate::core::feed::{ScanFeed, ShiftFeed};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{RawScan, ScanRecord, Shift, WorkDay};
use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat};
use chrono_tz::Tz;
use rusqlite::{OptionalExtension, Row, params};

/// Local wall-clock prefix used for range filters on `attendance_logs.timestamp`.
const LOCAL_KEY_FMT: &str = "%Y-%m-%dT%H:%M:%S";

/// Stored form of a scan instant: RFC 3339 in the organization timezone,
/// so that the first 19 characters are the local wall-clock time.
pub fn storage_timestamp(ts: &DateTime<Tz>) -> String {
    ts.fixed_offset().to_rfc3339_opts(SecondsFormat::Secs, false)
}

// ---------------------------------------------------------------------------
// attendance_logs
// ---------------------------------------------------------------------------

/// Insert validated scans. Rows already present (same employee and instant)
/// are skipped. Returns `(inserted, skipped)`.
pub fn insert_scans(pool: &mut DbPool, scans: &[RawScan]) -> AppResult<(usize, usize)> {
    let now = Local::now().to_rfc3339();
    let tx = pool.conn.transaction()?;

    let mut inserted = 0;
    {
        let mut stmt = tx.prepare_cached(
            "INSERT OR IGNORE INTO attendance_logs (employee_id, timestamp, source, created_at)
             VALUES (?1, ?2, ?3, ?4)",
        )?;

        for s in scans {
            let source = s.source.as_deref().unwrap_or("import");
            inserted += stmt.execute(params![
                s.employee_id,
                storage_timestamp(&s.timestamp),
                source,
                now
            ])?;
        }
    }

    tx.commit()?;
    Ok((inserted, scans.len() - inserted))
}

fn map_scan_row(row: &Row) -> rusqlite::Result<ScanRecord> {
    Ok(ScanRecord {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        timestamp: row.get("timestamp")?,
        source: row.get("source")?,
    })
}

/// Raw rows whose local timestamp falls in `[from, to)`.
pub fn load_scan_records(
    pool: &DbPool,
    from: NaiveDateTime,
    to: NaiveDateTime,
    employee: Option<&str>,
) -> AppResult<Vec<ScanRecord>> {
    let from_key = from.format(LOCAL_KEY_FMT).to_string();
    let to_key = to.format(LOCAL_KEY_FMT).to_string();

    let mut stmt = pool.conn.prepare(
        "SELECT id, employee_id, timestamp, source
         FROM attendance_logs
         WHERE substr(timestamp, 1, 19) >= ?1
           AND substr(timestamp, 1, 19) < ?2
           AND (?3 IS NULL OR employee_id = ?3)
         ORDER BY timestamp ASC, employee_id ASC, id ASC",
    )?;

    let rows = stmt.query_map(params![from_key, to_key, employee], map_scan_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Every employee that ever scanned, sorted.
pub fn list_employees(pool: &DbPool) -> AppResult<Vec<String>> {
    let mut stmt = pool.conn.prepare(
        "SELECT DISTINCT employee_id FROM attendance_logs ORDER BY employee_id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// shift_table
// ---------------------------------------------------------------------------

fn map_shift_row(row: &Row) -> rusqlite::Result<(Shift, bool)> {
    let id: i64 = row.get("id")?;
    let name: String = row.get("name")?;
    let start: String = row.get("start_time")?;
    let end: String = row.get("end_time")?;
    let overnight: bool = row.get::<_, i64>("is_overnight")? != 0;
    let active: bool = row.get::<_, i64>("is_active")? != 0;

    let shift = Shift::parse(id, &name, &start, &end, overnight).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;
    Ok((shift, active))
}

pub fn insert_shift(pool: &mut DbPool, shift: &Shift) -> AppResult<i64> {
    pool.conn.execute(
        "INSERT INTO shift_table (name, start_time, end_time, is_overnight, is_active)
         VALUES (?1, ?2, ?3, ?4, 1)",
        params![
            shift.name,
            shift.start_str(),
            shift.end_str(),
            shift.is_overnight as i64
        ],
    )?;
    Ok(pool.conn.last_insert_rowid())
}

/// All shifts with their active flag, ordered by start time.
pub fn list_shifts(pool: &DbPool) -> AppResult<Vec<(Shift, bool)>> {
    let mut stmt = pool.conn.prepare(
        "SELECT id, name, start_time, end_time, is_overnight, is_active
         FROM shift_table
         ORDER BY start_time ASC, id ASC",
    )?;
    let rows = stmt.query_map([], map_shift_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn set_shift_active(pool: &mut DbPool, id: i64, active: bool) -> AppResult<Shift> {
    let found = pool
        .conn
        .query_row(
            "SELECT id, name, start_time, end_time, is_overnight, is_active
             FROM shift_table WHERE id = ?1",
            [id],
            map_shift_row,
        )
        .optional()?;

    let (shift, _) = found.ok_or(AppError::ShiftNotFound(id))?;

    pool.conn.execute(
        "UPDATE shift_table SET is_active = ?1 WHERE id = ?2",
        params![active as i64, id],
    )?;
    Ok(shift)
}

// ---------------------------------------------------------------------------
// work_days
// ---------------------------------------------------------------------------

/// Insert or replace the reconciled rows, keyed by `(employee_id, work_date)`.
pub fn upsert_work_days(pool: &mut DbPool, days: &[WorkDay]) -> AppResult<usize> {
    let now = Local::now().to_rfc3339();
    let tx = pool.conn.transaction()?;

    {
        let mut stmt = tx.prepare_cached(
            "INSERT INTO work_days (
                employee_id, work_date, check_in, check_out, status, late_minutes,
                worked_hours, matched_shift_id, raw_scan_count, anomalies, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
             ON CONFLICT(employee_id, work_date) DO UPDATE SET
                check_in = excluded.check_in,
                check_out = excluded.check_out,
                status = excluded.status,
                late_minutes = excluded.late_minutes,
                worked_hours = excluded.worked_hours,
                matched_shift_id = excluded.matched_shift_id,
                raw_scan_count = excluded.raw_scan_count,
                anomalies = excluded.anomalies,
                updated_at = excluded.updated_at",
        )?;

        for d in days {
            stmt.execute(params![
                d.employee_id,
                d.work_date_str(),
                d.check_in.as_ref().map(storage_timestamp),
                d.check_out.as_ref().map(storage_timestamp),
                d.status.code(),
                d.late_minutes,
                d.worked_hours,
                d.matched_shift_id,
                d.raw_scan_count as i64,
                d.anomalies.len() as i64,
                now
            ])?;
        }
    }

    tx.commit()?;
    Ok(days.len())
}

// ---------------------------------------------------------------------------
// feeds
// ---------------------------------------------------------------------------

impl ScanFeed for DbPool {
    fn load_scans(
        &mut self,
        from: NaiveDateTime,
        to: NaiveDateTime,
        employee: Option<&str>,
    ) -> AppResult<Vec<ScanRecord>> {
        load_scan_records(self, from, to, employee)
    }
}

impl ShiftFeed for DbPool {
    fn load_active_shifts(&mut self) -> AppResult<Vec<Shift>> {
        Ok(list_shifts(self)?
            .into_iter()
            .filter(|(_, active)| *active)
            .map(|(s, _)| s)
            .collect())
    }
}
