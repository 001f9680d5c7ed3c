// src/import/logic.rs

use crate::core::rules::ReconcileRules;
use crate::core::validate::{RejectedScan, validate_indexed};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::insert_scans;
use crate::errors::{AppError, AppResult};
use crate::import::{ImportFormat, ParsedFile, parse_csv, parse_dump, parse_json};
use std::fs;
use std::path::Path;

#[derive(Debug, Default)]
pub struct ImportSummary {
    /// Entries found in the file.
    pub read: usize,
    pub inserted: usize,
    /// Valid scans already present in the database.
    pub skipped: usize,
    pub rejected: Vec<RejectedScan>,
}

pub struct ImportLogic;

impl ImportLogic {
    pub fn parse(content: &str, format: ImportFormat) -> AppResult<ParsedFile> {
        match format {
            ImportFormat::Csv => parse_csv(content),
            ImportFormat::Json => parse_json(content),
            ImportFormat::Dump => parse_dump(content),
        }
    }

    /// Read `file`, validate every entry against the organization timezone and
    /// store the valid ones in `attendance_logs`.
    pub fn import(
        pool: &mut DbPool,
        file: &Path,
        format: ImportFormat,
        rules: &ReconcileRules,
    ) -> AppResult<ImportSummary> {
        let content = fs::read_to_string(file)
            .map_err(|e| AppError::Import(format!("{}: {e}", file.display())))?;

        let parsed = Self::parse(&content, format)?;
        let read = parsed.records.len() + parsed.unreadable.len();

        let (scans, mut rejected) = validate_indexed(parsed.indexed(), rules.timezone);
        rejected.extend(parsed.unreadable);
        rejected.sort_by_key(|r| r.index);

        let (inserted, skipped) = insert_scans(pool, &scans)?;

        let target = file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        ttlog(
            &pool.conn,
            "import",
            &target,
            &format!(
                "{} scans imported ({}), {} already present, {} rejected",
                inserted,
                format.as_str(),
                skipped,
                rejected.len()
            ),
        )?;

        log::info!("import {}: read={read} inserted={inserted} skipped={skipped}", file.display());

        Ok(ImportSummary {
            read,
            inserted,
            skipped,
            rejected,
        })
    }
}
