//! Sorting, de-duplication and grouping of validated scans by
//! (employee, work-date).

use crate::core::calculator::work_date::resolve_work_date;
use crate::core::rules::ReconcileRules;
use crate::models::scan::RawScan;
use chrono::{DateTime, NaiveDate, NaiveTime};
use chrono_tz::Tz;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

pub type GroupKey = (String, NaiveDate);

/// A scan collapsed onto an earlier one with the same local second.
/// `work_date` is the work-date of the scan it was collapsed onto.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuplicateScan {
    pub employee_id: String,
    pub work_date: NaiveDate,
    pub timestamp: DateTime<Tz>,
    pub source: Option<String>,
}

#[derive(Debug, Default)]
pub struct GroupedScans {
    pub groups: BTreeMap<GroupKey, Vec<RawScan>>,
    pub duplicates: Vec<DuplicateScan>,
}

impl GroupedScans {
    pub fn scan_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

/// Total order used before any counting happens: time first, then the
/// remaining fields so that identical instants never depend on input order.
pub fn chronological(a: &RawScan, b: &RawScan) -> Ordering {
    a.timestamp
        .cmp(&b.timestamp)
        .then_with(|| a.employee_id.cmp(&b.employee_id))
        .then_with(|| a.source.cmp(&b.source))
        .then_with(|| a.id.cmp(&b.id))
}

pub fn group_by_work_date(mut scans: Vec<RawScan>, rules: &ReconcileRules) -> GroupedScans {
    scans.sort_by(chronological);

    let mut seen: HashMap<(String, NaiveDate, NaiveTime), NaiveDate> = HashMap::new();
    let mut calendar_counter: HashMap<(String, NaiveDate), usize> = HashMap::new();
    let mut out = GroupedScans::default();

    for scan in scans {
        let calendar_date = scan.calendar_date();

        let key = (scan.employee_id.clone(), calendar_date, scan.time_key());

        // Same employee, same calendar day, same HH:MM:SS → hardware double emission
        if let Some(&work_date) = seen.get(&key) {
            log::warn!(
                "duplicate scan dropped: employee={} at {}",
                scan.employee_id,
                scan.timestamp.to_rfc3339()
            );
            out.duplicates.push(DuplicateScan {
                employee_id: scan.employee_id,
                work_date,
                timestamp: scan.timestamp,
                source: scan.source,
            });
            continue;
        }

        let counter = calendar_counter
            .entry((scan.employee_id.clone(), calendar_date))
            .or_insert(0);
        let ordinal = *counter;
        *counter += 1;

        let work_date = resolve_work_date(scan.local(), ordinal, rules);
        seen.insert(key, work_date);

        out.groups
            .entry((scan.employee_id.clone(), work_date))
            .or_default()
            .push(scan);
    }

    out
}
