mod common;
use common::{bkk, date, hm, rules, scan, scans, shift};
use rattendance::core::calculator::outcomes::outcomes_for;
use rattendance::core::calculator::reconcile::{in_overtime_window, reconcile_day};
use rattendance::models::{AttendanceOutcome, DayStatus, ScanRole};

#[test]
fn test_single_morning_scan_is_missing_out() {
    let day = reconcile_day("E1", date(2026, 1, 13), &scans("E1", &["2026-01-13 09:00"]), &[], &rules());

    assert_eq!(day.status, DayStatus::MissingOut);
    assert_eq!(day.check_in, Some(bkk("2026-01-13 09:00")));
    assert_eq!(day.check_out, None);
    assert_eq!(day.worked_hours, 0.0);
    assert_eq!(day.raw_scan_count, 1);
}

#[test]
fn test_single_evening_scan_is_missing_in() {
    // scenario 3
    let day = reconcile_day("E1", date(2026, 1, 10), &scans("E1", &["2026-01-10 19:38"]), &[], &rules());

    assert_eq!(day.status, DayStatus::MissingIn);
    assert_eq!(day.check_in, None);
    assert_eq!(day.check_out, Some(bkk("2026-01-10 19:38")));
    assert_eq!(day.matched_shift_id, None);
    assert_eq!(day.late_minutes, 0);
}

#[test]
fn test_single_carried_over_scan_is_a_check_out() {
    let day = reconcile_day("E1", date(2026, 1, 6), &scans("E1", &["2026-01-07 03:00"]), &[], &rules());

    assert_eq!(day.status, DayStatus::MissingIn);
    assert_eq!(day.check_out, Some(bkk("2026-01-07 03:00")));
    assert_eq!(day.scans[0].role, ScanRole::CheckOut);
}

#[test]
fn test_second_scan_under_six_hours_is_anomalous() {
    let day = reconcile_day(
        "E1",
        date(2026, 1, 12),
        &scans("E1", &["2026-01-12 08:00", "2026-01-12 13:30"]),
        &[],
        &rules(),
    );

    assert_eq!(day.status, DayStatus::MissingOut);
    assert_eq!(day.check_out, None);
    assert_eq!(day.anomalies, vec![bkk("2026-01-12 13:30")]);
    assert_eq!(day.scans[1].role, ScanRole::Anomalous);
}

#[test]
fn test_exactly_six_hours_qualifies_as_check_out() {
    let day = reconcile_day(
        "E1",
        date(2026, 1, 12),
        &scans("E1", &["2026-01-12 08:00", "2026-01-12 14:00"]),
        &[],
        &rules(),
    );

    assert_eq!(day.status, DayStatus::Complete);
    assert_eq!(day.check_out, Some(bkk("2026-01-12 14:00")));
    assert_eq!(day.worked_hours, 6.0);
    assert!(day.anomalies.is_empty());
}

#[test]
fn test_later_qualifying_scans_are_extra() {
    let day = reconcile_day(
        "E1",
        date(2026, 1, 12),
        &scans("E1", &["2026-01-12 08:00", "2026-01-12 14:00", "2026-01-12 17:00"]),
        &[],
        &rules(),
    );

    assert_eq!(day.check_out, Some(bkk("2026-01-12 14:00")));
    assert_eq!(day.extra_scans, vec![bkk("2026-01-12 17:00")]);
    assert_eq!(day.scans[2].role, ScanRole::Extra);
}

#[test]
fn test_scenario_late_arrival_with_wide_tolerance() {
    // scenario 1: 11:05 is 185 minutes after an 08:00 start
    let mut r = rules();
    r.shift_match_tolerance_minutes = 240;
    let shifts = [shift(1, "08:00", "17:00")];

    let day = reconcile_day(
        "E1",
        date(2026, 1, 12),
        &scans("E1", &["2026-01-12 11:05", "2026-01-12 19:31"]),
        &shifts,
        &r,
    );

    assert_eq!(day.check_in, Some(bkk("2026-01-12 11:05")));
    assert_eq!(day.check_out, Some(bkk("2026-01-12 19:31")));
    assert_eq!(day.status, DayStatus::Late);
    assert_eq!(day.late_minutes, 185);
    assert_eq!(day.worked_hours, 8.43);
    assert_eq!(day.matched_shift_id, Some(1));
}

#[test]
fn test_scenario_late_arrival_outside_default_tolerance() {
    let shifts = [shift(1, "08:00", "17:00")];

    let day = reconcile_day(
        "E1",
        date(2026, 1, 12),
        &scans("E1", &["2026-01-12 11:05", "2026-01-12 19:31"]),
        &shifts,
        &rules(),
    );

    assert_eq!(day.matched_shift_id, None);
    assert_eq!(day.late_minutes, 0);
    assert_eq!(day.status, DayStatus::Complete);
}

#[test]
fn test_scenario_many_interior_scans() {
    // scenario 2: the 12-01 burst from the device dump
    let day = reconcile_day(
        "E1",
        date(2026, 1, 12),
        &scans(
            "E1",
            &[
                "2026-01-12 11:05",
                "2026-01-12 16:16",
                "2026-01-12 16:35",
                "2026-01-12 16:38",
                "2026-01-12 16:43",
                "2026-01-12 16:45",
                "2026-01-12 16:46",
                "2026-01-12 19:31",
            ],
        ),
        &[],
        &rules(),
    );

    assert_eq!(day.check_in, Some(bkk("2026-01-12 11:05")));
    assert_eq!(day.check_out, Some(bkk("2026-01-12 19:31")));
    assert_eq!(day.raw_scan_count, 8);
    assert_eq!(day.anomalies.len(), 6);
    assert!(day.extra_scans.is_empty());
    assert_eq!(day.status, DayStatus::Complete);
}

#[test]
fn test_scenario_empty_shift_table_is_never_late() {
    // scenario 5
    let day = reconcile_day(
        "E1",
        date(2026, 1, 12),
        &scans("E1", &["2026-01-12 08:10", "2026-01-12 17:00"]),
        &[],
        &rules(),
    );

    assert_eq!(day.status, DayStatus::Complete);
    assert_eq!(day.matched_shift_id, None);
    assert_eq!(day.late_minutes, 0);
    assert_eq!(day.worked_hours, 8.83);
}

#[test]
fn test_late_threshold_is_exclusive() {
    let shifts = [shift(1, "08:00", "17:00")];

    let on_threshold = reconcile_day(
        "E1",
        date(2026, 1, 12),
        &scans("E1", &["2026-01-12 08:15", "2026-01-12 17:00"]),
        &shifts,
        &rules(),
    );
    assert_eq!(on_threshold.late_minutes, 15);
    assert_eq!(on_threshold.status, DayStatus::Complete);

    let past_threshold = reconcile_day(
        "E1",
        date(2026, 1, 12),
        &scans("E1", &["2026-01-12 08:16", "2026-01-12 17:00"]),
        &shifts,
        &rules(),
    );
    assert_eq!(past_threshold.late_minutes, 16);
    assert_eq!(past_threshold.status, DayStatus::Late);
}

#[test]
fn test_missing_out_keeps_late_minutes() {
    let shifts = [shift(1, "08:00", "17:00")];
    let day = reconcile_day("E1", date(2026, 1, 12), &scans("E1", &["2026-01-12 08:30"]), &shifts, &rules());

    assert_eq!(day.status, DayStatus::MissingOut);
    assert_eq!(day.matched_shift_id, Some(1));
    assert_eq!(day.late_minutes, 30);
}

#[test]
fn test_overtime_check_out_after_midnight() {
    let day = reconcile_day(
        "E1",
        date(2026, 1, 7),
        &scans("E1", &["2026-01-07 11:52", "2026-01-08 03:28"]),
        &[],
        &rules(),
    );

    assert_eq!(day.status, DayStatus::Overtime);
    assert_eq!(day.worked_hours, 15.6);
}

#[test]
fn test_overtime_takes_precedence_over_late() {
    let shifts = [shift(1, "11:00", "20:00")];
    let day = reconcile_day(
        "E1",
        date(2026, 1, 7),
        &scans("E1", &["2026-01-07 11:52", "2026-01-08 03:10"]),
        &shifts,
        &rules(),
    );

    assert_eq!(day.late_minutes, 52);
    assert_eq!(day.status, DayStatus::Overtime);
}

#[test]
fn test_overtime_window_bounds_are_inclusive() {
    let r = rules();
    assert!(in_overtime_window(hm(2, 50), &r));
    assert!(in_overtime_window(hm(3, 0), &r));
    assert!(in_overtime_window(hm(3, 30), &r));
    assert!(!in_overtime_window(hm(2, 49), &r));
    assert!(!in_overtime_window(hm(3, 31), &r));
}

#[test]
fn test_overtime_window_may_wrap_midnight() {
    let mut r = rules();
    r.overtime_window_start = hm(23, 0);
    r.overtime_window_end = hm(1, 0);

    assert!(in_overtime_window(hm(23, 30), &r));
    assert!(in_overtime_window(hm(0, 30), &r));
    assert!(!in_overtime_window(hm(1, 1), &r));
    assert!(!in_overtime_window(hm(22, 59), &r));
}

#[test]
fn test_reconcile_is_idempotent() {
    let input = scans(
        "E1",
        &["2026-01-12 11:05", "2026-01-12 16:16", "2026-01-12 19:31", "2026-01-12 20:00"],
    );
    let shifts = [shift(1, "11:00", "20:00")];

    let a = reconcile_day("E1", date(2026, 1, 12), &input, &shifts, &rules());
    let b = reconcile_day("E1", date(2026, 1, 12), &input, &shifts, &rules());
    assert_eq!(a, b);
}

#[test]
fn test_worked_hours_formula() {
    let day = reconcile_day(
        "E1",
        date(2026, 1, 16),
        &scans("E1", &["2026-01-16 13:22", "2026-01-16 19:53"]),
        &[],
        &rules(),
    );

    let (ci, co) = (day.check_in.unwrap(), day.check_out.unwrap());
    assert!(co > ci);
    let expected = ((co - ci).num_seconds() as f64 / 3600.0 * 100.0).round() / 100.0;
    assert_eq!(day.worked_hours, expected);
    assert_eq!(day.worked_hours, 6.52);
}

#[test]
#[should_panic(expected = "empty scan group")]
fn test_empty_group_panics() {
    reconcile_day("E1", date(2026, 1, 12), &[], &[], &rules());
}

#[test]
fn test_outcomes_for_late_day() {
    let shifts = [shift(1, "08:00", "17:00")];
    let day = reconcile_day(
        "E1",
        date(2026, 1, 12),
        &scans("E1", &["2026-01-12 08:40", "2026-01-12 17:10"]),
        &shifts,
        &rules(),
    );

    let outcomes = outcomes_for(&day, &rules());
    assert_eq!(
        outcomes,
        vec![AttendanceOutcome::LateArrival {
            employee_id: "E1".into(),
            work_date: date(2026, 1, 12),
            late_minutes: 40,
            shift_id: Some(1),
        }]
    );
}

#[test]
fn test_outcomes_for_missing_and_anomalous_days() {
    let missing_out = reconcile_day(
        "E1",
        date(2026, 1, 12),
        &scans("E1", &["2026-01-12 08:00", "2026-01-12 09:00"]),
        &[],
        &rules(),
    );
    let ops: Vec<&str> = outcomes_for(&missing_out, &rules())
        .iter()
        .map(|o| o.operation())
        .collect();
    assert_eq!(ops, vec!["missing_out", "anomalous"]);

    let missing_in = reconcile_day("E1", date(2026, 1, 10), &[scan("E1", "2026-01-10 19:38")], &[], &rules());
    let outcomes = outcomes_for(&missing_in, &rules());
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].operation(), "missing_in");
    assert!(outcomes[0].describe().contains("19:38"));
}
