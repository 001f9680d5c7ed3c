// src/import/parse.rs

use crate::core::validate::RejectedScan;
use crate::errors::{AppError, AppResult};
use crate::models::ScanRecord;
use regex::Regex;
use serde_json::Value;

/// Records read from a file, plus the entries that could not even be split
/// into fields.
///
/// Every entry carries its 0-based position in the source: the line number
/// for dumps and CSV files (header included), the array element for JSON.
/// `positions[i]` is the position of `records[i]`.
#[derive(Debug, Default)]
pub struct ParsedFile {
    pub records: Vec<ScanRecord>,
    pub positions: Vec<usize>,
    pub unreadable: Vec<RejectedScan>,
}

impl ParsedFile {
    fn record(&mut self, index: usize, record: ScanRecord) {
        self.records.push(record);
        self.positions.push(index);
    }

    fn unreadable(&mut self, index: usize, reason: String) {
        log::warn!("import: entry #{index} unreadable: {reason}");
        self.unreadable.push(RejectedScan {
            index,
            employee_id: None,
            raw_timestamp: None,
            reason,
        });
    }

    /// Records paired with their source position.
    pub fn indexed(&self) -> impl Iterator<Item = (usize, &ScanRecord)> {
        self.positions.iter().copied().zip(self.records.iter())
    }
}

/// CSV with a header row: `employee_id,timestamp[,source]`
/// (`device` is accepted for `source`).
pub fn parse_csv(content: &str) -> AppResult<ParsedFile> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = rdr.headers()?.clone();
    if !headers.iter().any(|h| h == "employee_id") || !headers.iter().any(|h| h == "timestamp") {
        return Err(AppError::Import(
            "CSV header must contain 'employee_id' and 'timestamp'".into(),
        ));
    }

    let mut out = ParsedFile::default();
    for (row_index, row) in rdr.records().enumerate() {
        // header sits on line 0
        let fallback = row_index + 1;
        match row {
            Ok(raw) => {
                let index = line_index(raw.position(), fallback);
                match raw.deserialize::<ScanRecord>(Some(&headers)) {
                    Ok(rec) => out.record(index, rec),
                    Err(e) => out.unreadable(index, e.to_string()),
                }
            }
            Err(e) => out.unreadable(line_index(e.position(), fallback), e.to_string()),
        }
    }
    Ok(out)
}

/// 0-based line of a CSV record (csv counts lines from 1).
fn line_index(pos: Option<&csv::Position>, fallback: usize) -> usize {
    pos.map_or(fallback, |p| (p.line() as usize).saturating_sub(1))
}

/// JSON array of objects with `employee_id`, `timestamp` and optional `source`.
/// Numeric employee ids are read as text. Elements that are not objects are
/// reported, not fatal.
pub fn parse_json(content: &str) -> AppResult<ParsedFile> {
    let values: Vec<Value> = serde_json::from_str(content)?;

    let mut out = ParsedFile::default();
    for (index, v) in values.into_iter().enumerate() {
        match serde_json::from_value::<ScanRecord>(employee_id_as_text(v)) {
            Ok(rec) => out.record(index, rec),
            Err(e) => out.unreadable(index, e.to_string()),
        }
    }
    Ok(out)
}

fn employee_id_as_text(mut v: Value) -> Value {
    if let Some(id) = v.get_mut("employee_id")
        && id.is_number()
    {
        let text = id.to_string();
        *id = Value::String(text);
    }
    v
}

/// Device dump, one scan per line: `20062   01-01-2026 11:02`.
/// Blank lines are skipped but still counted.
pub fn parse_dump(content: &str) -> AppResult<ParsedFile> {
    let re = Regex::new(r"^(\S+)\s+(\d{2}-\d{2}-\d{4})\s+(\d{1,2}:\d{2}(?::\d{2})?)$")
        .map_err(|e| AppError::Other(e.to_string()))?;

    let mut out = ParsedFile::default();
    let lines = content
        .lines()
        .map(str::trim)
        .enumerate()
        .filter(|(_, l)| !l.is_empty());

    for (index, line) in lines {
        match re.captures(line) {
            Some(caps) => {
                let ts = format!("{} {}", &caps[2], &caps[3]);
                out.record(index, ScanRecord::new(&caps[1], &ts).with_source("dump"));
            }
            None => out.unreadable(index, format!("unrecognized line '{line}'")),
        }
    }
    Ok(out)
}
