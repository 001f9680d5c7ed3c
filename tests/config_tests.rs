use rattendance::config::Config;
use rattendance::core::WorkDateRule;

#[test]
fn test_default_config_builds_rules() {
    let rules = Config::default().rules().unwrap();
    assert_eq!(rules.timezone.name(), "Asia/Bangkok");
    assert_eq!(rules.work_date_rule, WorkDateRule::FirstScanCarveOut);
    assert_eq!(rules.single_scan_noon_hour, 12);
}

#[test]
fn test_hour_values_outside_the_day_are_rejected() {
    let noon_23 = Config {
        single_scan_noon_hour: 23,
        ..Config::default()
    };
    assert!(noon_23.rules().is_ok());

    let noon_24 = Config {
        single_scan_noon_hour: 24,
        ..Config::default()
    };
    let err = noon_24.rules().unwrap_err().to_string();
    assert!(err.contains("0-23"), "{err}");

    let cutoff_24 = Config {
        early_morning_cutoff_hour: 24,
        ..Config::default()
    };
    assert!(cutoff_24.rules().is_err());
}

#[test]
fn test_invalid_timezone_and_overtime_window() {
    let bad_tz = Config {
        timezone: "Mars/Olympus".into(),
        ..Config::default()
    };
    assert!(bad_tz.rules().is_err());

    let bad_window = Config {
        overtime_window: "late".into(),
        ..Config::default()
    };
    assert!(bad_window.rules().is_err());
}
