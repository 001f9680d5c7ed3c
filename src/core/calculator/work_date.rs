//! Work-date resolution: which logical business day a scan belongs to.
//!
//! This is the only place where the midnight rule is implemented; grouping,
//! range loading and tests all go through [`resolve_work_date`].

use crate::core::rules::{ReconcileRules, WorkDateRule};
use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// Resolve the work-date of a scan.
///
/// - `local`: civil time of the scan in the organization timezone
/// - `ordinal`: 0-based rank of the scan among the same employee's scans on
///   the same calendar date, in chronological order
pub fn resolve_work_date(local: NaiveDateTime, ordinal: usize, rules: &ReconcileRules) -> NaiveDate {
    let date = local.date();

    if belongs_to_previous_day(local.hour(), ordinal, rules) {
        date.pred_opt().unwrap_or(date)
    } else {
        date
    }
}

fn belongs_to_previous_day(hour: u32, ordinal: usize, rules: &ReconcileRules) -> bool {
    let cutoff = hour < rules.early_morning_cutoff_hour;

    match rules.work_date_rule {
        WorkDateRule::Uniform => cutoff,
        WorkDateRule::FirstScanCarveOut => {
            if in_overnight_boundary(hour, rules) {
                ordinal == 0
            } else {
                cutoff
            }
        }
    }
}

/// `[start_hour, end_hour)` of the overnight boundary window.
pub fn in_overnight_boundary(hour: u32, rules: &ReconcileRules) -> bool {
    hour >= rules.overnight_boundary_start_hour && hour < rules.overnight_boundary_end_hour
}
