use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Untrusted scan as delivered by a feed or an import file.
/// Every field may be missing; validation turns it into a [`RawScan`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default, alias = "device")]
    pub source: Option<String>,
}

impl ScanRecord {
    pub fn new(employee_id: &str, timestamp: &str) -> Self {
        Self {
            id: None,
            employee_id: Some(employee_id.to_string()),
            timestamp: Some(timestamp.to_string()),
            source: None,
        }
    }

    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }
}

/// One validated badge event, pinned to the organization timezone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawScan {
    pub id: Option<i64>,
    pub employee_id: String,
    pub timestamp: DateTime<Tz>,
    pub source: Option<String>, // opaque, carried through
}

impl RawScan {
    pub fn new(employee_id: &str, timestamp: DateTime<Tz>) -> Self {
        Self {
            id: None,
            employee_id: employee_id.to_string(),
            timestamp,
            source: None,
        }
    }

    pub fn local(&self) -> NaiveDateTime {
        self.timestamp.naive_local()
    }

    pub fn calendar_date(&self) -> NaiveDate {
        self.local().date()
    }

    /// Local time of day truncated to the second (duplicate detection key).
    pub fn time_key(&self) -> NaiveTime {
        let t = self.local().time();
        t.with_nanosecond(0).unwrap_or(t)
    }
}
