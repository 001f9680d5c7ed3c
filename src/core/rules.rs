//! Reconciliation parameters.
//!
//! Every boundary used by the engine lives here as a named constant, and the
//! values actually applied are carried by [`ReconcileRules`], which callers
//! build from the configuration file (see `Config::rules`).

use chrono::{NaiveTime, TimeDelta};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Bangkok;

/// First hour (inclusive) of the overnight boundary window.
pub const OVERNIGHT_BOUNDARY_START_HOUR: u32 = 2;
/// Last hour (exclusive) of the overnight boundary window.
pub const OVERNIGHT_BOUNDARY_END_HOUR: u32 = 3;
/// Scans before this hour are attributed to the previous work-date.
pub const EARLY_MORNING_CUTOFF_HOUR: u32 = 6;
/// A lone scan before this hour is a check-in, from this hour on a check-out.
pub const SINGLE_SCAN_NOON_HOUR: u32 = 12;

pub const LATE_THRESHOLD_MINUTES: i64 = 15;
pub const MIN_SHIFT_SEPARATION_HOURS: u32 = 6;
pub const SHIFT_MATCH_TOLERANCE_MINUTES: i64 = 120;

/// 02:50 and 03:30, both inclusive.
pub const OVERTIME_WINDOW_START: (u32, u32) = (2, 50);
pub const OVERTIME_WINDOW_END: (u32, u32) = (3, 30);

/// Which variant of the midnight rule decides the work-date of an early scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkDateRule {
    /// Boundary-window scans (02:00–02:59) move to the previous date only when
    /// they are the first scan of their calendar day. Every other scan before
    /// the cutoff hour moves to the previous date.
    #[default]
    FirstScanCarveOut,
    /// Every scan before the cutoff hour moves to the previous date.
    Uniform,
}

impl WorkDateRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkDateRule::FirstScanCarveOut => "first_scan_carve_out",
            WorkDateRule::Uniform => "uniform",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReconcileRules {
    pub timezone: Tz,
    pub work_date_rule: WorkDateRule,
    pub overnight_boundary_start_hour: u32,
    pub overnight_boundary_end_hour: u32,
    pub early_morning_cutoff_hour: u32,
    pub single_scan_noon_hour: u32,
    pub late_threshold_minutes: i64,
    pub min_shift_separation_hours: u32,
    pub shift_match_tolerance_minutes: i64,
    pub overtime_window_start: NaiveTime,
    pub overtime_window_end: NaiveTime,
}

impl Default for ReconcileRules {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE,
            work_date_rule: WorkDateRule::default(),
            overnight_boundary_start_hour: OVERNIGHT_BOUNDARY_START_HOUR,
            overnight_boundary_end_hour: OVERNIGHT_BOUNDARY_END_HOUR,
            early_morning_cutoff_hour: EARLY_MORNING_CUTOFF_HOUR,
            single_scan_noon_hour: SINGLE_SCAN_NOON_HOUR,
            late_threshold_minutes: LATE_THRESHOLD_MINUTES,
            min_shift_separation_hours: MIN_SHIFT_SEPARATION_HOURS,
            shift_match_tolerance_minutes: SHIFT_MATCH_TOLERANCE_MINUTES,
            overtime_window_start: hm(OVERTIME_WINDOW_START),
            overtime_window_end: hm(OVERTIME_WINDOW_END),
        }
    }
}

impl ReconcileRules {
    pub fn min_shift_separation(&self) -> TimeDelta {
        TimeDelta::hours(self.min_shift_separation_hours as i64)
    }

    pub fn with_work_date_rule(mut self, rule: WorkDateRule) -> Self {
        self.work_date_rule = rule;
        self
    }

    pub fn with_timezone(mut self, tz: Tz) -> Self {
        self.timezone = tz;
        self
    }
}

fn hm((h, m): (u32, u32)) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or(NaiveTime::MIN)
}
