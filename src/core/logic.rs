use crate::core::calculator::grouping::{DuplicateScan, group_by_work_date};
use crate::core::calculator::{outcomes, reconcile, summary};
use crate::core::feed::{ScanFeed, ShiftFeed};
use crate::core::rules::ReconcileRules;
use crate::core::validate::{RejectedScan, validate_records};
use crate::errors::AppResult;
use crate::models::{
    AbsentDay, AttendanceOutcome, PeriodStats, RawScan, ScanRecord, Shift, WorkDay,
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconcileWarning {
    /// No active shift: nobody can be matched, lateness is not computed.
    EmptyShiftTable,
}

/// Everything a reconciliation run produces.
#[derive(Debug, Default, Serialize)]
pub struct ReconcileReport {
    pub work_days: Vec<WorkDay>,
    pub accepted_scans: usize,
    pub rejected: Vec<RejectedScan>,
    pub duplicates: Vec<DuplicateScan>,
    /// Accepted scans whose work-date fell outside the requested period.
    pub out_of_period_scans: usize,
    pub outcomes: Vec<AttendanceOutcome>,
    pub warnings: Vec<ReconcileWarning>,
}

impl ReconcileReport {
    /// Keep only the work-days dated inside `[start, end]` (with their
    /// outcomes and duplicates). Scans of the dropped days are counted in
    /// `out_of_period_scans`.
    pub fn retain_period(&mut self, start: NaiveDate, end: NaiveDate) {
        let in_period = |d: NaiveDate| d >= start && d <= end;

        let dropped_scans: usize = self
            .work_days
            .iter()
            .filter(|d| !in_period(d.work_date))
            .map(|d| d.raw_scan_count)
            .sum();
        let dropped_duplicates = self
            .duplicates
            .iter()
            .filter(|d| !in_period(d.work_date))
            .count();

        self.work_days.retain(|d| in_period(d.work_date));
        self.duplicates.retain(|d| in_period(d.work_date));
        self.outcomes.retain(|o| in_period(o.work_date()));
        self.out_of_period_scans += dropped_scans + dropped_duplicates;
    }
}

pub struct Core;

impl Core {
    /// Validate, group and reconcile a raw batch.
    pub fn reconcile(records: &[ScanRecord], shifts: &[Shift], rules: &ReconcileRules) -> ReconcileReport {
        let (scans, rejected) = validate_records(records, rules.timezone);
        let mut report = Self::reconcile_scans(scans, shifts, rules);
        report.rejected = rejected;
        report
    }

    /// Reconcile scans that already passed validation.
    pub fn reconcile_scans(scans: Vec<RawScan>, shifts: &[Shift], rules: &ReconcileRules) -> ReconcileReport {
        let accepted_scans = scans.len();
        let grouped = group_by_work_date(scans, rules);

        let mut warnings = Vec::new();
        if shifts.is_empty() {
            log::warn!("shift table is empty: lateness will not be computed");
            warnings.push(ReconcileWarning::EmptyShiftTable);
        }

        let work_days: Vec<WorkDay> = grouped
            .groups
            .iter()
            .map(|((employee_id, work_date), group)| {
                reconcile::reconcile_day(employee_id, *work_date, group, shifts, rules)
            })
            .collect();

        let outcomes = work_days
            .iter()
            .flat_map(|d| outcomes::outcomes_for(d, rules))
            .collect();

        log::info!(
            "reconciled {} scans into {} work-days ({} duplicates, rule {})",
            accepted_scans,
            work_days.len(),
            grouped.duplicates.len(),
            rules.work_date_rule.as_str()
        );

        ReconcileReport {
            work_days,
            accepted_scans,
            rejected: Vec::new(),
            duplicates: grouped.duplicates,
            out_of_period_scans: 0,
            outcomes,
            warnings,
        }
    }

    /// Load from the feeds the scans needed for work-dates `[start, end]` and
    /// reconcile them. Work-days outside the period are dropped.
    pub fn reconcile_period<F>(
        feed: &mut F,
        start: NaiveDate,
        end: NaiveDate,
        employee: Option<&str>,
        rules: &ReconcileRules,
    ) -> AppResult<ReconcileReport>
    where
        F: ScanFeed + ShiftFeed,
    {
        let (from, to) = Self::scan_window(start, end, rules);
        let records = feed.load_scans(from, to, employee)?;
        let shifts = feed.load_active_shifts()?;

        let mut report = Self::reconcile(&records, &shifts, rules);
        report.retain_period(start, end);
        Ok(report)
    }

    /// Local `[start 00:00, end+1 cutoff)`: the day after `end` contributes its
    /// early-morning scans, which belong to `end`.
    pub fn scan_window(start: NaiveDate, end: NaiveDate, rules: &ReconcileRules) -> (NaiveDateTime, NaiveDateTime) {
        let from = start.and_time(NaiveTime::MIN);
        let cutoff = NaiveTime::from_hms_opt(rules.early_morning_cutoff_hour, 0, 0)
            .unwrap_or(NaiveTime::MIN);
        let to = (end + TimeDelta::days(1)).and_time(cutoff);
        (from, to)
    }

    pub fn summarize(work_days: &[WorkDay], start: NaiveDate, end: NaiveDate) -> PeriodStats {
        summary::summarize(work_days, start, end)
    }

    pub fn absent_days(
        work_days: &[WorkDay],
        roster: &[String],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<AbsentDay> {
        summary::find_absent_days(work_days, roster, start, end)
    }
}
