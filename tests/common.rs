#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;
use rattendance::core::ReconcileRules;
use rattendance::models::{RawScan, Shift};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const TZ: Tz = chrono_tz::Asia::Bangkok;

/// Raw device dump shipped with the attendance terminals (employee 20062, January 2026).
pub const SAMPLE_DUMP: &str = "20062   01-01-2026 11:02
20062   01-01-2026 19:16
20062   02-01-2026 10:56
20062   02-01-2026 19:14
20062   03-01-2026 11:20
20062   03-01-2026 19:25
20062   05-01-2026 11:12
20062   05-01-2026 19:24
20062   06-01-2026 10:48
20062   07-01-2026 03:00
20062   07-01-2026 10:52
20062   08-01-2026 03:28
20062   08-01-2026 11:52
20062   08-01-2026 19:21
20062   09-01-2026 11:50
20062   09-01-2026 19:51
20062   10-01-2026 19:38
20062   12-01-2026 11:05
20062   12-01-2026 16:16
20062   12-01-2026 16:35
20062   12-01-2026 16:38
20062   12-01-2026 16:43
20062   12-01-2026 16:45
20062   12-01-2026 16:46
20062   12-01-2026 19:31
20062   13-01-2026 12:11
20062   14-01-2026 03:06
20062   14-01-2026 12:20
20062   16-01-2026 13:22
20062   16-01-2026 19:53
20062   17-01-2026 11:13
20062   17-01-2026 19:23
20062   19-01-2026 11:20
20062   20-01-2026 03:03
20062   20-01-2026 12:15
20062   21-01-2026 03:02
20062   21-01-2026 11:09
20062   24-01-2026 11:55
";

pub fn rti() -> Command {
    cargo_bin_cmd!("rattendance")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a temporary input file and return its path
pub fn temp_input(name: &str, ext: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_in.{}", name, ext));
    fs::write(&path, content).expect("write input file");
    path.to_string_lossy().to_string()
}

/// Initialize a DB and load the sample dump into it
pub fn init_db_with_sample(db_path: &str, name: &str) {
    rti()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    let input = temp_input(name, "txt", SAMPLE_DUMP);
    rti()
        .args(["--db", db_path, "import", "--file", &input, "--format", "dump"])
        .assert()
        .success();
}

// ---------------------------------------------------------------------------
// library helpers
// ---------------------------------------------------------------------------

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
}

/// `"2026-01-12 11:05"` → naive local datetime
pub fn local(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("valid datetime")
}

/// `"2026-01-12 11:05"` in Asia/Bangkok
pub fn bkk(s: &str) -> DateTime<Tz> {
    TZ.from_local_datetime(&local(s)).single().expect("unambiguous")
}

pub fn scan(employee: &str, s: &str) -> RawScan {
    RawScan::new(employee, bkk(s))
}

pub fn scans(employee: &str, times: &[&str]) -> Vec<RawScan> {
    times.iter().map(|t| scan(employee, t)).collect()
}

pub fn shift(id: i64, start: &str, end: &str) -> Shift {
    Shift::parse(id, &format!("shift-{id}"), start, end, false).expect("valid shift")
}

pub fn rules() -> ReconcileRules {
    ReconcileRules::default()
}
