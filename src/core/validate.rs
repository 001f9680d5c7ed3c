//! Validation of untrusted scan records.

use crate::errors::{AppError, AppResult};
use crate::models::scan::{RawScan, ScanRecord};
use chrono::{DateTime, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use serde::Serialize;

/// Naive layouts accepted for timestamps without an offset; they are read as
/// civil time in the organization timezone.
const NAIVE_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M",
];

/// Layouts with a short (`+07`) or long (`+07:00`) offset, as Postgres prints them.
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"];

/// A record dropped from a batch, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedScan {
    pub index: usize,
    pub employee_id: Option<String>,
    pub raw_timestamp: Option<String>,
    pub reason: String,
}

pub fn parse_scan_timestamp(raw: &str, tz: Tz) -> AppResult<DateTime<Tz>> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(AppError::InvalidScan("empty timestamp".into()));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&tz));
    }

    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Ok(dt.with_timezone(&tz));
        }
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return tz.from_local_datetime(&naive).earliest().ok_or_else(|| {
                AppError::InvalidScan(format!("'{s}' does not exist in timezone {tz}"))
            });
        }
    }

    Err(AppError::InvalidScan(format!("unparseable timestamp '{s}'")))
}

pub fn validate_record(record: &ScanRecord, tz: Tz) -> AppResult<RawScan> {
    let employee_id = record
        .employee_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::InvalidScan("missing employee id".into()))?;

    let raw_ts = record
        .timestamp
        .as_deref()
        .ok_or_else(|| AppError::InvalidScan("missing timestamp".into()))?;

    let timestamp = parse_scan_timestamp(raw_ts, tz)?;

    Ok(RawScan {
        id: record.id,
        employee_id: employee_id.to_string(),
        timestamp,
        source: record
            .source
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
    })
}

/// Split a batch into valid scans and rejected records. Never fails as a whole.
/// Rejections carry the record's position in `records`.
pub fn validate_records(records: &[ScanRecord], tz: Tz) -> (Vec<RawScan>, Vec<RejectedScan>) {
    validate_indexed(records.iter().enumerate(), tz)
}

/// Same as [`validate_records`], with positions supplied by the caller
/// (e.g. line numbers of an import file).
pub fn validate_indexed<'a, I>(records: I, tz: Tz) -> (Vec<RawScan>, Vec<RejectedScan>)
where
    I: IntoIterator<Item = (usize, &'a ScanRecord)>,
{
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();

    for (index, record) in records {
        match validate_record(record, tz) {
            Ok(scan) => accepted.push(scan),
            Err(e) => {
                let reason = match e {
                    AppError::InvalidScan(msg) => msg,
                    other => other.to_string(),
                };
                log::warn!(
                    "scan #{index} rejected (employee={:?}, timestamp={:?}): {reason}",
                    record.employee_id,
                    record.timestamp
                );
                rejected.push(RejectedScan {
                    index,
                    employee_id: record.employee_id.clone(),
                    raw_timestamp: record.timestamp.clone(),
                    reason,
                });
            }
        }
    }

    (accepted, rejected)
}
