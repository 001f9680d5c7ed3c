mod common;
use common::{date, local, rules, scans};
use rattendance::core::WorkDateRule;
use rattendance::core::calculator::grouping::group_by_work_date;
use rattendance::core::calculator::work_date::{in_overnight_boundary, resolve_work_date};

#[test]
fn test_daytime_scan_keeps_its_date() {
    let r = rules();
    assert_eq!(resolve_work_date(local("2026-01-07 10:52"), 0, &r), date(2026, 1, 7));
    assert_eq!(resolve_work_date(local("2026-01-07 06:00"), 0, &r), date(2026, 1, 7));
    assert_eq!(resolve_work_date(local("2026-01-07 23:59"), 3, &r), date(2026, 1, 7));
}

#[test]
fn test_early_morning_scan_moves_to_previous_day() {
    let r = rules();
    assert_eq!(resolve_work_date(local("2026-01-07 03:00"), 0, &r), date(2026, 1, 6));
    assert_eq!(resolve_work_date(local("2026-01-07 05:59"), 0, &r), date(2026, 1, 6));
    assert_eq!(resolve_work_date(local("2026-01-07 00:15"), 0, &r), date(2026, 1, 6));
    // outside the boundary window the ordinal does not matter
    assert_eq!(resolve_work_date(local("2026-01-07 01:00"), 1, &r), date(2026, 1, 6));
    assert_eq!(resolve_work_date(local("2026-01-07 04:10"), 2, &r), date(2026, 1, 6));
}

#[test]
fn test_month_and_year_rollover() {
    let r = rules();
    assert_eq!(resolve_work_date(local("2026-02-01 03:10"), 0, &r), date(2026, 1, 31));
    assert_eq!(resolve_work_date(local("2026-01-01 02:00"), 0, &r), date(2025, 12, 31));
}

#[test]
fn test_boundary_scan_first_of_day_goes_to_previous_date() {
    let r = rules();
    assert_eq!(resolve_work_date(local("2026-01-07 02:30"), 0, &r), date(2026, 1, 6));
}

#[test]
fn test_boundary_scan_second_of_day_carve_out() {
    let r = rules();
    assert_eq!(r.work_date_rule, WorkDateRule::FirstScanCarveOut);
    assert_eq!(resolve_work_date(local("2026-01-07 02:30"), 1, &r), date(2026, 1, 7));
}

#[test]
fn test_boundary_scan_second_of_day_uniform_rule() {
    let r = rules().with_work_date_rule(WorkDateRule::Uniform);
    assert_eq!(resolve_work_date(local("2026-01-07 02:30"), 1, &r), date(2026, 1, 6));
    assert_eq!(resolve_work_date(local("2026-01-07 02:30"), 0, &r), date(2026, 1, 6));
}

#[test]
fn test_overnight_boundary_window_is_half_open() {
    let r = rules();
    assert!(!in_overnight_boundary(1, &r));
    assert!(in_overnight_boundary(2, &r));
    assert!(!in_overnight_boundary(3, &r));
}

#[test]
fn test_grouping_counts_ordinal_per_calendar_day() {
    let input = scans("E1", &["2026-01-07 01:40", "2026-01-07 02:30", "2026-01-07 11:00"]);

    let grouped = group_by_work_date(input.clone(), &rules());
    let prev = &grouped.groups[&("E1".to_string(), date(2026, 1, 6))];
    let own = &grouped.groups[&("E1".to_string(), date(2026, 1, 7))];
    assert_eq!(prev.len(), 1);
    assert_eq!(own.len(), 2);
    assert_eq!(own[0], input[1]);

    let uniform = rules().with_work_date_rule(WorkDateRule::Uniform);
    let grouped = group_by_work_date(input, &uniform);
    assert_eq!(grouped.groups[&("E1".to_string(), date(2026, 1, 6))].len(), 2);
    assert_eq!(grouped.groups[&("E1".to_string(), date(2026, 1, 7))].len(), 1);
}

#[test]
fn test_ordinal_is_per_employee() {
    // E2 scanned earlier the same morning; E1's 02:30 is still its first scan
    let mut input = scans("E2", &["2026-01-07 01:10"]);
    input.extend(scans("E1", &["2026-01-07 02:30"]));

    let grouped = group_by_work_date(input, &rules());
    assert!(grouped.groups.contains_key(&("E1".to_string(), date(2026, 1, 6))));
    assert!(grouped.groups.contains_key(&("E2".to_string(), date(2026, 1, 6))));
}

#[test]
fn test_duplicates_are_dropped_and_counted() {
    let mut input = scans("E1", &["2026-01-12 08:00", "2026-01-12 17:00"]);
    let mut dup = input[0].clone();
    dup.source = Some("door-2".to_string());
    input.push(dup);

    let grouped = group_by_work_date(input, &rules());
    assert_eq!(grouped.duplicates.len(), 1);
    assert_eq!(grouped.scan_count(), 2);
}
