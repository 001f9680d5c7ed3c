//! Period statistics over reconciled work-days.

use crate::core::calculator::reconcile::round2;
use crate::models::period_stats::{AbsentDay, EmployeeStats, PeriodStats};
use crate::models::work_day::WorkDay;
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

/// Aggregate the work-days whose work-date falls in `[period_start, period_end]`.
pub fn summarize(work_days: &[WorkDay], period_start: NaiveDate, period_end: NaiveDate) -> PeriodStats {
    let mut by_employee: BTreeMap<&str, EmployeeStats> = BTreeMap::new();
    let mut total_days = 0;
    let mut complete_like_days = 0;

    for day in in_period(work_days, period_start, period_end) {
        let stats = by_employee
            .entry(day.employee_id.as_str())
            .or_insert_with(|| EmployeeStats::new(&day.employee_id));

        stats.days_recorded += 1;
        stats.bump(day.status);
        stats.total_worked_hours += day.worked_hours;
        stats.total_late_minutes += day.late_minutes;

        total_days += 1;
        if day.status.is_complete_like() {
            complete_like_days += 1;
        }
    }

    let employees: Vec<EmployeeStats> = by_employee
        .into_values()
        .map(|mut s| {
            s.total_worked_hours = round2(s.total_worked_hours);
            s
        })
        .collect();

    let completion_rate = if total_days == 0 {
        0.0
    } else {
        complete_like_days as f64 / total_days as f64
    };

    PeriodStats {
        period_start,
        period_end,
        employees,
        total_days,
        complete_like_days,
        completion_rate,
    }
}

/// Calendar dates of the period on which a roster employee has no work-day.
///
/// With an empty `roster` the employees found in `work_days` are used.
pub fn find_absent_days(
    work_days: &[WorkDay],
    roster: &[String],
    period_start: NaiveDate,
    period_end: NaiveDate,
) -> Vec<AbsentDay> {
    let present: BTreeSet<(&str, NaiveDate)> = in_period(work_days, period_start, period_end)
        .map(|d| (d.employee_id.as_str(), d.work_date))
        .collect();

    let employees: BTreeSet<&str> = if roster.is_empty() {
        work_days.iter().map(|d| d.employee_id.as_str()).collect()
    } else {
        roster.iter().map(String::as_str).collect()
    };

    let mut out = Vec::new();
    for emp in employees {
        for date in period_start.iter_days().take_while(|d| *d <= period_end) {
            if !present.contains(&(emp, date)) {
                out.push(AbsentDay {
                    employee_id: emp.to_string(),
                    date,
                });
            }
        }
    }
    out
}

fn in_period(
    work_days: &[WorkDay],
    start: NaiveDate,
    end: NaiveDate,
) -> impl Iterator<Item = &WorkDay> {
    work_days
        .iter()
        .filter(move |d| d.work_date >= start && d.work_date <= end)
}
