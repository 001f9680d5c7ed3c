//! Time utilities: parsing HH:MM, time windows, formatting hours.

use chrono::NaiveTime;
use serde::Serializer;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .ok()
}

/// Parse `HH:MM-HH:MM` (inclusive bounds).
pub fn parse_time_window(s: &str) -> Option<(NaiveTime, NaiveTime)> {
    let (a, b) = s.split_once('-')?;
    Some((parse_time(a)?, parse_time(b)?))
}

pub fn format_hours(h: f64) -> String {
    format!("{:.2}", h)
}

pub fn serialize_hhmm<S: Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&t.format("%H:%M").to_string())
}
