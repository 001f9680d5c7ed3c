use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_time;
use chrono::NaiveTime;
use serde::Serialize;

/// Named reference work period, used only for nearest-start lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shift {
    pub id: i64,
    pub name: String,
    #[serde(serialize_with = "crate::utils::time::serialize_hhmm")]
    pub start_time: NaiveTime,
    #[serde(serialize_with = "crate::utils::time::serialize_hhmm")]
    pub end_time: NaiveTime,
    pub is_overnight: bool,
}

impl Shift {
    pub fn new(id: i64, name: &str, start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            id,
            name: name.to_string(),
            start_time: start,
            end_time: end,
            is_overnight: end <= start,
        }
    }

    /// Build a shift from `HH:MM` strings as found in the shift table.
    pub fn parse(id: i64, name: &str, start: &str, end: &str, is_overnight: bool) -> AppResult<Self> {
        let start_time = parse_time(start)
            .ok_or_else(|| AppError::InvalidShift(format!("bad start time '{start}'")))?;
        let end_time =
            parse_time(end).ok_or_else(|| AppError::InvalidShift(format!("bad end time '{end}'")))?;

        if name.trim().is_empty() {
            return Err(AppError::InvalidShift("shift name is empty".into()));
        }

        Ok(Self {
            id,
            name: name.trim().to_string(),
            start_time,
            end_time,
            is_overnight,
        })
    }

    pub fn start_str(&self) -> String {
        self.start_time.format("%H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end_time.format("%H:%M").to_string()
    }
}
