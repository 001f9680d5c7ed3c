use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

fn count(pool: &DbPool, sql: &str) -> rusqlite::Result<i64> {
    pool.conn.query_row(sql, [], |row| row.get(0))
}

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTALS
    //
    let scans = count(pool, "SELECT COUNT(*) FROM attendance_logs")?;
    let employees = count(pool, "SELECT COUNT(DISTINCT employee_id) FROM attendance_logs")?;
    let shifts = count(pool, "SELECT COUNT(*) FROM shift_table WHERE is_active = 1")?;
    let days = count(pool, "SELECT COUNT(*) FROM work_days")?;

    println!("{}• Total scans:{} {}{}{}", CYAN, RESET, GREEN, scans, RESET);
    println!("{}• Employees:{} {}", CYAN, RESET, employees);
    println!("{}• Active shifts:{} {}", CYAN, RESET, shifts);
    println!("{}• Saved work-days:{} {}", CYAN, RESET, days);

    //
    // 3) SCAN RANGE (local wall clock)
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT substr(timestamp, 1, 19) FROM attendance_logs ORDER BY timestamp ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;
    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT substr(timestamp, 1, 19) FROM attendance_logs ORDER BY timestamp DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt = |v: Option<String>| v.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Scan range:{}", CYAN, RESET);
    println!("    from: {}", fmt(first));
    println!("    to:   {}", fmt(last));

    println!();
    Ok(())
}
