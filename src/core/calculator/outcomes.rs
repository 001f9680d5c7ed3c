use crate::core::rules::ReconcileRules;
use crate::models::day_status::DayStatus;
use crate::models::outcome::AttendanceOutcome;
use crate::models::work_day::WorkDay;

/// Facts worth notifying about for a single work-day.
pub fn outcomes_for(day: &WorkDay, rules: &ReconcileRules) -> Vec<AttendanceOutcome> {
    let mut out = Vec::new();
    let employee_id = day.employee_id.clone();
    let work_date = day.work_date;

    if day.check_in.is_some() && day.late_minutes > rules.late_threshold_minutes {
        out.push(AttendanceOutcome::LateArrival {
            employee_id: employee_id.clone(),
            work_date,
            late_minutes: day.late_minutes,
            shift_id: day.matched_shift_id,
        });
    }

    match (day.status, day.check_in, day.check_out) {
        (DayStatus::MissingIn, _, Some(check_out)) => out.push(AttendanceOutcome::MissingCheckIn {
            employee_id: employee_id.clone(),
            work_date,
            check_out,
        }),
        (DayStatus::MissingOut, Some(check_in), _) => {
            out.push(AttendanceOutcome::MissingCheckOut {
                employee_id: employee_id.clone(),
                work_date,
                check_in,
            })
        }
        (DayStatus::Overtime, _, Some(check_out)) => out.push(AttendanceOutcome::Overtime {
            employee_id: employee_id.clone(),
            work_date,
            check_out,
            worked_hours: day.worked_hours,
        }),
        _ => {}
    }

    if !day.anomalies.is_empty() {
        out.push(AttendanceOutcome::AnomalousScans {
            employee_id,
            work_date,
            count: day.anomalies.len(),
        });
    }

    out
}
