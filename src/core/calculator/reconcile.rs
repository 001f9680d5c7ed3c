//! Day reconciliation: one (employee, work-date) scan group → one WorkDay.

use crate::core::calculator::shift_match::{find_best_shift, late_minutes, minute_of_day};
use crate::core::rules::ReconcileRules;
use crate::models::day_status::{DayStatus, ScanRole};
use crate::models::scan::RawScan;
use crate::models::shift::Shift;
use crate::models::work_day::{ClassifiedScan, WorkDay};
use chrono::{DateTime, NaiveDate, NaiveTime, Timelike};
use chrono_tz::Tz;

/// Reconcile one scan group.
///
/// `scans` must be the chronologically sorted, de-duplicated group produced by
/// the grouper. An empty group is a bug in the caller and panics.
pub fn reconcile_day(
    employee_id: &str,
    work_date: NaiveDate,
    scans: &[RawScan],
    shifts: &[Shift],
    rules: &ReconcileRules,
) -> WorkDay {
    assert!(
        !scans.is_empty(),
        "reconcile_day: empty scan group for {employee_id} on {work_date}"
    );
    debug_assert!(scans.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));

    let mut classified: Vec<ClassifiedScan> = Vec::with_capacity(scans.len());
    let mut check_in: Option<DateTime<Tz>> = None;
    let mut check_out: Option<DateTime<Tz>> = None;

    // -----------------------------
    // Single scan: AM → in, PM → out.
    // A lone early-morning scan carried over from the next calendar day
    // closes the previous day's work.
    // -----------------------------
    if let [only] = scans {
        let carried_over = only.calendar_date() > work_date;
        let role = if !carried_over && only.local().hour() < rules.single_scan_noon_hour {
            check_in = Some(only.timestamp);
            ScanRole::CheckIn
        } else {
            check_out = Some(only.timestamp);
            ScanRole::CheckOut
        };
        classified.push(classify(only, role));
    } else {
        // -----------------------------
        // First scan is always the check-in
        // -----------------------------
        let first = &scans[0];
        check_in = Some(first.timestamp);
        classified.push(classify(first, ScanRole::CheckIn));

        let separation = rules.min_shift_separation();

        for scan in &scans[1..] {
            let role = if scan.timestamp - first.timestamp < separation {
                ScanRole::Anomalous
            } else if check_out.is_none() {
                check_out = Some(scan.timestamp);
                ScanRole::CheckOut
            } else {
                ScanRole::Extra
            };
            classified.push(classify(scan, role));
        }
    }

    // -----------------------------
    // Shift + lateness (needs a check-in)
    // -----------------------------
    let shift = check_in.and_then(|ci| {
        find_best_shift(
            ci.naive_local().time(),
            shifts,
            rules.shift_match_tolerance_minutes,
        )
    });

    let late = match (check_in, shift) {
        (Some(ci), Some(s)) => late_minutes(ci.naive_local().time(), s),
        _ => 0,
    };

    let overtime = check_out
        .map(|co| in_overtime_window(co.naive_local().time(), rules))
        .unwrap_or(false);

    let status = match (check_in, check_out) {
        (None, Some(_)) => DayStatus::MissingIn,
        (Some(_), None) => DayStatus::MissingOut,
        (Some(_), Some(_)) if overtime => DayStatus::Overtime,
        (Some(_), Some(_)) if late > rules.late_threshold_minutes => DayStatus::Late,
        (Some(_), Some(_)) => DayStatus::Complete,
        (None, None) => DayStatus::Anomalous,
    };

    let worked_hours = match (check_in, check_out) {
        (Some(ci), Some(co)) => round2((co - ci).num_seconds() as f64 / 3600.0),
        _ => 0.0,
    };

    let anomalies = timestamps_with_role(&classified, ScanRole::Anomalous);
    let extra_scans = timestamps_with_role(&classified, ScanRole::Extra);

    log::debug!(
        "reconciled {employee_id} {work_date}: {} scans, status={}, late={late}, hours={worked_hours}",
        scans.len(),
        status.code()
    );

    WorkDay {
        employee_id: employee_id.to_string(),
        work_date,
        check_in,
        check_out,
        status,
        late_minutes: late,
        worked_hours,
        matched_shift_id: shift.map(|s| s.id),
        raw_scan_count: scans.len(),
        anomalies,
        extra_scans,
        scans: classified,
    }
}

/// Inclusive window on minutes of the day; a window whose start is after its
/// end wraps around midnight.
pub fn in_overtime_window(t: NaiveTime, rules: &ReconcileRules) -> bool {
    let m = minute_of_day(t);
    let start = minute_of_day(rules.overtime_window_start);
    let end = minute_of_day(rules.overtime_window_end);

    if start <= end {
        m >= start && m <= end
    } else {
        m >= start || m <= end
    }
}

pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn classify(scan: &RawScan, role: ScanRole) -> ClassifiedScan {
    ClassifiedScan {
        timestamp: scan.timestamp,
        source: scan.source.clone(),
        role,
    }
}

fn timestamps_with_role(scans: &[ClassifiedScan], role: ScanRole) -> Vec<DateTime<Tz>> {
    scans
        .iter()
        .filter(|c| c.role == role)
        .map(|c| c.timestamp)
        .collect()
}
