// src/export/model.rs

use crate::models::WorkDay;
use crate::ui::labels::{Language, status_label};
use serde::Serialize;

const TS_FMT: &str = "%Y-%m-%d %H:%M:%S";

/// Struttura “piatta” per export dei work-day.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct WorkDayExport {
    pub employee_id: String,
    pub work_date: String,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub status: String,
    pub status_label: String,
    pub late_minutes: i64,
    pub worked_hours: f64,
    pub matched_shift_id: Option<i64>,
    pub raw_scan_count: usize,
    pub anomalies: usize,
}

impl WorkDayExport {
    pub fn from_work_day(day: &WorkDay, lang: Language) -> Self {
        Self {
            employee_id: day.employee_id.clone(),
            work_date: day.work_date_str(),
            check_in: day.check_in.as_ref().map(|t| t.format(TS_FMT).to_string()),
            check_out: day.check_out.as_ref().map(|t| t.format(TS_FMT).to_string()),
            status: day.status.code().to_string(),
            status_label: status_label(day.status, lang).to_string(),
            late_minutes: day.late_minutes,
            worked_hours: day.worked_hours,
            matched_shift_id: day.matched_shift_id,
            raw_scan_count: day.raw_scan_count,
            anomalies: day.anomalies.len(),
        }
    }
}
