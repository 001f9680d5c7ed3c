use crate::models::shift::Shift;
use chrono::{NaiveTime, Timelike};

pub fn minute_of_day(t: NaiveTime) -> i64 {
    (t.hour() * 60 + t.minute()) as i64
}

/// Nearest shift by start time, within `tolerance_minutes`.
///
/// On equal distance the first shift in `shifts` wins, so callers must pass
/// the table in a stable order.
pub fn find_best_shift(check_in: NaiveTime, shifts: &[Shift], tolerance_minutes: i64) -> Option<&Shift> {
    let candidate = minute_of_day(check_in);
    let mut best: Option<(i64, &Shift)> = None;

    for shift in shifts {
        let diff = (candidate - minute_of_day(shift.start_time)).abs();
        if diff > tolerance_minutes {
            continue;
        }
        match best {
            Some((best_diff, _)) if diff >= best_diff => {}
            _ => best = Some((diff, shift)),
        }
    }

    best.map(|(_, shift)| shift)
}

/// `max(0, check_in - shift start)` in whole minutes of the day.
pub fn late_minutes(check_in: NaiveTime, shift: &Shift) -> i64 {
    (minute_of_day(check_in) - minute_of_day(shift.start_time)).max(0)
}
