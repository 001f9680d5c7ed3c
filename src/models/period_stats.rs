use super::day_status::DayStatus;
use chrono::NaiveDate;
use serde::Serialize;

/// Aggregated figures for one employee over a period.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmployeeStats {
    pub employee_id: String,
    pub days_recorded: usize,
    pub complete: usize,
    pub late: usize,
    pub overtime: usize,
    pub missing_in: usize,
    pub missing_out: usize,
    pub anomalous: usize,
    pub total_worked_hours: f64,
    pub total_late_minutes: i64,
}

impl EmployeeStats {
    pub fn new(employee_id: &str) -> Self {
        Self {
            employee_id: employee_id.to_string(),
            ..Default::default()
        }
    }

    pub fn count(&self, status: DayStatus) -> usize {
        match status {
            DayStatus::Complete => self.complete,
            DayStatus::Late => self.late,
            DayStatus::Overtime => self.overtime,
            DayStatus::MissingIn => self.missing_in,
            DayStatus::MissingOut => self.missing_out,
            DayStatus::Anomalous => self.anomalous,
        }
    }

    pub(crate) fn bump(&mut self, status: DayStatus) {
        let slot = match status {
            DayStatus::Complete => &mut self.complete,
            DayStatus::Late => &mut self.late,
            DayStatus::Overtime => &mut self.overtime,
            DayStatus::MissingIn => &mut self.missing_in,
            DayStatus::MissingOut => &mut self.missing_out,
            DayStatus::Anomalous => &mut self.anomalous,
        };
        *slot += 1;
    }

    pub fn complete_like_days(&self) -> usize {
        self.complete + self.late + self.overtime
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodStats {
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub employees: Vec<EmployeeStats>,
    pub total_days: usize,
    pub complete_like_days: usize,
    pub completion_rate: f64,
}

/// A roster employee with no work-day on a calendar date of the period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AbsentDay {
    pub employee_id: String,
    pub date: NaiveDate,
}
