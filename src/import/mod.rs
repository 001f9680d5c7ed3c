// src/import/mod.rs

pub mod logic;
mod parse;

pub use logic::{ImportLogic, ImportSummary};
pub use parse::{ParsedFile, parse_csv, parse_dump, parse_json};

use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ImportFormat {
    Csv,
    Json,
    /// Device dump: `<employee> <DD-MM-YYYY> <HH:MM>` per line
    Dump,
}

impl ImportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportFormat::Csv => "csv",
            ImportFormat::Json => "json",
            ImportFormat::Dump => "dump",
        }
    }

    /// Guess from the file extension; anything unknown is read as a dump.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("csv") => ImportFormat::Csv,
            Some("json") => ImportFormat::Json,
            _ => ImportFormat::Dump,
        }
    }
}
