use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use serde::Serialize;

/// Noteworthy fact produced by a reconciliation run.
///
/// The engine only reports these; dispatching (printing, the internal log
/// table, notifications) is done by the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AttendanceOutcome {
    LateArrival {
        employee_id: String,
        work_date: NaiveDate,
        late_minutes: i64,
        shift_id: Option<i64>,
    },
    MissingCheckIn {
        employee_id: String,
        work_date: NaiveDate,
        check_out: DateTime<Tz>,
    },
    MissingCheckOut {
        employee_id: String,
        work_date: NaiveDate,
        check_in: DateTime<Tz>,
    },
    Overtime {
        employee_id: String,
        work_date: NaiveDate,
        check_out: DateTime<Tz>,
        worked_hours: f64,
    },
    AnomalousScans {
        employee_id: String,
        work_date: NaiveDate,
        count: usize,
    },
}

impl AttendanceOutcome {
    pub fn operation(&self) -> &'static str {
        match self {
            AttendanceOutcome::LateArrival { .. } => "late",
            AttendanceOutcome::MissingCheckIn { .. } => "missing_in",
            AttendanceOutcome::MissingCheckOut { .. } => "missing_out",
            AttendanceOutcome::Overtime { .. } => "overtime",
            AttendanceOutcome::AnomalousScans { .. } => "anomalous",
        }
    }

    pub fn employee_id(&self) -> &str {
        match self {
            AttendanceOutcome::LateArrival { employee_id, .. }
            | AttendanceOutcome::MissingCheckIn { employee_id, .. }
            | AttendanceOutcome::MissingCheckOut { employee_id, .. }
            | AttendanceOutcome::Overtime { employee_id, .. }
            | AttendanceOutcome::AnomalousScans { employee_id, .. } => employee_id,
        }
    }

    pub fn work_date(&self) -> NaiveDate {
        match self {
            AttendanceOutcome::LateArrival { work_date, .. }
            | AttendanceOutcome::MissingCheckIn { work_date, .. }
            | AttendanceOutcome::MissingCheckOut { work_date, .. }
            | AttendanceOutcome::Overtime { work_date, .. }
            | AttendanceOutcome::AnomalousScans { work_date, .. } => *work_date,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            AttendanceOutcome::LateArrival {
                employee_id,
                work_date,
                late_minutes,
                ..
            } => format!("{employee_id} arrived {late_minutes} min late on {work_date}"),
            AttendanceOutcome::MissingCheckIn {
                employee_id,
                work_date,
                check_out,
            } => format!(
                "{employee_id} has no check-in on {work_date} (check-out {})",
                check_out.format("%H:%M")
            ),
            AttendanceOutcome::MissingCheckOut {
                employee_id,
                work_date,
                check_in,
            } => format!(
                "{employee_id} has no check-out on {work_date} (check-in {})",
                check_in.format("%H:%M")
            ),
            AttendanceOutcome::Overtime {
                employee_id,
                work_date,
                check_out,
                worked_hours,
            } => format!(
                "{employee_id} worked overtime on {work_date} until {} ({worked_hours:.2} h)",
                check_out.format("%H:%M")
            ),
            AttendanceOutcome::AnomalousScans {
                employee_id,
                work_date,
                count,
            } => format!("{employee_id} has {count} ignored scan(s) on {work_date}"),
        }
    }
}
