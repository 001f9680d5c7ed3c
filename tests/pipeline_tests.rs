mod common;
use common::{SAMPLE_DUMP, bkk, date, rules, scans, shift};
use rattendance::core::validate::parse_scan_timestamp;
use rattendance::core::{Core, ReconcileWarning};
use rattendance::db::pool::DbPool;
use rattendance::db::queries::{insert_scans, insert_shift};
use rattendance::import::parse_dump;
use rattendance::models::{DayStatus, ScanRecord};

fn sample_records() -> Vec<ScanRecord> {
    parse_dump(SAMPLE_DUMP).unwrap().records
}

#[test]
fn test_sample_dump_reconciles_into_expected_days() {
    let report = Core::reconcile(&sample_records(), &[], &rules());

    assert_eq!(report.accepted_scans, 38);
    assert!(report.rejected.is_empty());
    assert!(report.duplicates.is_empty());
    assert_eq!(report.work_days.len(), 18);

    let count = |s: DayStatus| report.work_days.iter().filter(|d| d.status == s).count();
    assert_eq!(count(DayStatus::Complete), 9);
    assert_eq!(count(DayStatus::Overtime), 5);
    assert_eq!(count(DayStatus::MissingIn), 1);
    assert_eq!(count(DayStatus::MissingOut), 3);

    let jan6 = report
        .work_days
        .iter()
        .find(|d| d.work_date == date(2026, 1, 6))
        .unwrap();
    assert_eq!(jan6.check_in, Some(bkk("2026-01-06 10:48")));
    assert_eq!(jan6.check_out, Some(bkk("2026-01-07 03:00")));
    assert_eq!(jan6.worked_hours, 16.2);
}

#[test]
fn test_partition_accounts_for_every_scan() {
    let mut records = sample_records();
    records.push(records[0].clone()); // duplicate
    records.push(ScanRecord::new("", "2026-01-02 09:00")); // no employee
    records.push(ScanRecord::new("20062", "yesterday")); // bad timestamp
    records.push(ScanRecord::default());

    let report = Core::reconcile(&records, &[], &rules());

    let grouped: usize = report.work_days.iter().map(|d| d.raw_scan_count).sum();
    assert_eq!(report.accepted_scans, 39);
    assert_eq!(report.duplicates.len(), 1);
    assert_eq!(grouped + report.duplicates.len(), report.accepted_scans);
    assert_eq!(report.rejected.len(), 3);
    assert_eq!(report.rejected[0].index, 39);
    assert_eq!(
        report.accepted_scans + report.rejected.len(),
        records.len()
    );
}

#[test]
fn test_check_out_always_after_check_in() {
    let report = Core::reconcile(&sample_records(), &[], &rules());
    for d in &report.work_days {
        if let (Some(ci), Some(co)) = (d.check_in, d.check_out) {
            assert!(co > ci, "{} {}", d.employee_id, d.work_date);
        }
    }
}

#[test]
fn test_shuffled_input_gives_identical_work_days() {
    let records = sample_records();
    let shifts = [shift(1, "11:00", "19:00")];
    let baseline = Core::reconcile(&records, &shifts, &rules()).work_days;

    let mut reversed = records.clone();
    reversed.reverse();
    assert_eq!(Core::reconcile(&reversed, &shifts, &rules()).work_days, baseline);

    let mut rotated = records.clone();
    rotated.rotate_left(17);
    assert_eq!(Core::reconcile(&rotated, &shifts, &rules()).work_days, baseline);

    let mut interleaved: Vec<ScanRecord> = records.iter().step_by(2).cloned().collect();
    interleaved.extend(records.iter().skip(1).step_by(2).cloned());
    assert_eq!(Core::reconcile(&interleaved, &shifts, &rules()).work_days, baseline);
}

#[test]
fn test_scenario_boundary_scan_splits_days() {
    // scenario 4
    let report = Core::reconcile_scans(
        scans("E1", &["2026-01-07 03:00", "2026-01-07 10:52"]),
        &[],
        &rules(),
    );

    assert_eq!(report.work_days.len(), 2);
    let (prev, own) = (&report.work_days[0], &report.work_days[1]);

    assert_eq!(prev.work_date, date(2026, 1, 6));
    assert_eq!(prev.status, DayStatus::MissingIn);
    assert_eq!(prev.check_out, Some(bkk("2026-01-07 03:00")));

    assert_eq!(own.work_date, date(2026, 1, 7));
    assert_eq!(own.status, DayStatus::MissingOut);
    assert_eq!(own.check_in, Some(bkk("2026-01-07 10:52")));
}

#[test]
fn test_empty_shift_table_is_reported() {
    let report = Core::reconcile_scans(
        scans("E1", &["2026-01-12 08:10", "2026-01-12 17:00"]),
        &[],
        &rules(),
    );
    assert_eq!(report.warnings, vec![ReconcileWarning::EmptyShiftTable]);

    let report = Core::reconcile_scans(
        scans("E1", &["2026-01-12 08:10", "2026-01-12 17:00"]),
        &[shift(1, "08:00", "17:00")],
        &rules(),
    );
    assert!(report.warnings.is_empty());
}

#[test]
fn test_timestamps_are_pinned_to_the_organization_timezone() {
    let tz = rules().timezone;
    let expected = bkk("2026-01-12 11:05");

    assert_eq!(parse_scan_timestamp("2026-01-12T04:05:00Z", tz).unwrap(), expected);
    assert_eq!(parse_scan_timestamp("2026-01-12T11:05:00+07:00", tz).unwrap(), expected);
    assert_eq!(parse_scan_timestamp("2026-01-12 11:05:00+07", tz).unwrap(), expected);
    assert_eq!(parse_scan_timestamp("2026-01-12 11:05", tz).unwrap(), expected);
    assert_eq!(parse_scan_timestamp("12-01-2026 11:05", tz).unwrap(), expected);
    assert!(parse_scan_timestamp("", tz).is_err());
    assert!(parse_scan_timestamp("2026-13-01 11:05", tz).is_err());
}

#[test]
fn test_outcomes_are_collected_for_the_period() {
    let report = Core::reconcile(&sample_records(), &[], &rules());

    let overtime = report
        .outcomes
        .iter()
        .filter(|o| o.operation() == "overtime")
        .count();
    let anomalous: Vec<_> = report
        .outcomes
        .iter()
        .filter(|o| o.operation() == "anomalous")
        .collect();

    assert_eq!(overtime, 5);
    assert_eq!(anomalous.len(), 1);
    assert_eq!(anomalous[0].work_date(), date(2026, 1, 12));
}

#[test]
fn test_reconcile_period_reads_spill_over_scans() {
    let mut pool = DbPool::in_memory().unwrap();
    let input = scans(
        "E1",
        &[
            "2026-01-06 10:48",
            "2026-01-07 03:00",
            "2026-01-07 10:52",
            "2026-01-08 03:28",
        ],
    );
    let (inserted, skipped) = insert_scans(&mut pool, &input).unwrap();
    assert_eq!((inserted, skipped), (4, 0));

    insert_shift(&mut pool, &shift(0, "10:30", "19:30")).unwrap();

    let report =
        Core::reconcile_period(&mut pool, date(2026, 1, 6), date(2026, 1, 6), None, &rules()).unwrap();

    assert_eq!(report.work_days.len(), 1);
    let day = &report.work_days[0];
    assert_eq!(day.work_date, date(2026, 1, 6));
    assert_eq!(day.status, DayStatus::Overtime);
    assert_eq!(day.late_minutes, 18);
    assert_eq!(day.matched_shift_id, Some(1));
    assert!(report.warnings.is_empty());
}

#[test]
fn test_reconcile_period_counts_scans_of_the_previous_work_date() {
    let mut pool = DbPool::in_memory().unwrap();
    insert_scans(
        &mut pool,
        &scans("E1", &["2026-01-06 03:00", "2026-01-06 10:00", "2026-01-06 18:00"]),
    )
    .unwrap();

    let report =
        Core::reconcile_period(&mut pool, date(2026, 1, 6), date(2026, 1, 6), None, &rules()).unwrap();

    assert_eq!(report.accepted_scans, 3);
    assert_eq!(report.work_days.len(), 1);
    assert_eq!(report.work_days[0].raw_scan_count, 2);
    assert_eq!(report.out_of_period_scans, 1);
}

#[test]
fn test_retain_period_keeps_every_scan_accounted_for() {
    let mut report = Core::reconcile_scans(
        scans(
            "E1",
            &[
                "2026-01-06 03:00",
                "2026-01-06 03:00",
                "2026-01-06 10:00",
                "2026-01-06 10:00",
                "2026-01-06 18:00",
            ],
        ),
        &[],
        &rules(),
    );
    report.retain_period(date(2026, 1, 6), date(2026, 1, 6));

    let grouped: usize = report.work_days.iter().map(|d| d.raw_scan_count).sum();
    assert_eq!(grouped, 2);
    assert_eq!(report.duplicates.len(), 1);
    assert_eq!(report.duplicates[0].work_date, date(2026, 1, 6));
    assert_eq!(report.out_of_period_scans, 2);
    assert_eq!(
        grouped + report.duplicates.len() + report.out_of_period_scans,
        report.accepted_scans
    );
}

#[test]
fn test_reconcile_period_filters_by_employee() {
    let mut pool = DbPool::in_memory().unwrap();
    let mut all = scans("E1", &["2026-01-12 08:00", "2026-01-12 17:00"]);
    all.extend(scans("E2", &["2026-01-12 09:00"]));
    insert_scans(&mut pool, &all).unwrap();

    // same rows again are ignored
    let (inserted, skipped) = insert_scans(&mut pool, &all).unwrap();
    assert_eq!((inserted, skipped), (0, 3));

    let report = Core::reconcile_period(
        &mut pool,
        date(2026, 1, 1),
        date(2026, 1, 31),
        Some("E2"),
        &rules(),
    )
    .unwrap();

    assert_eq!(report.work_days.len(), 1);
    assert_eq!(report.work_days[0].employee_id, "E2");
    assert_eq!(report.work_days[0].status, DayStatus::MissingOut);
}
