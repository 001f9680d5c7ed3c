use super::day_status::{DayStatus, ScanRole};
use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use serde::Serialize;

/// A scan together with the role it played in its work-day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedScan {
    pub timestamp: DateTime<Tz>,
    pub source: Option<String>,
    pub role: ScanRole,
}

/// One employee's reconciled record for one logical work-date.
///
/// Always recomputable from the raw scans and the shift table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkDay {
    pub employee_id: String,
    pub work_date: NaiveDate,
    pub check_in: Option<DateTime<Tz>>,
    pub check_out: Option<DateTime<Tz>>,
    pub status: DayStatus,
    pub late_minutes: i64,
    pub worked_hours: f64,
    pub matched_shift_id: Option<i64>,
    pub raw_scan_count: usize,
    pub anomalies: Vec<DateTime<Tz>>,
    pub extra_scans: Vec<DateTime<Tz>>,
    pub scans: Vec<ClassifiedScan>,
}

impl WorkDay {
    pub fn work_date_str(&self) -> String {
        self.work_date.format("%Y-%m-%d").to_string()
    }

    pub fn check_in_str(&self) -> String {
        fmt_opt_time(self.check_in.as_ref())
    }

    pub fn check_out_str(&self) -> String {
        fmt_opt_time(self.check_out.as_ref())
    }

    pub fn has_both_ends(&self) -> bool {
        self.check_in.is_some() && self.check_out.is_some()
    }
}

/// `HH:MM`, or `--:--` when absent.
fn fmt_opt_time(t: Option<&DateTime<Tz>>) -> String {
    match t {
        Some(dt) => dt.format("%H:%M").to_string(),
        None => "--:--".to_string(),
    }
}
