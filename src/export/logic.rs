// src/export/logic.rs

use crate::core::{Core, ReconcileRules};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::WorkDayExport;
use crate::ui::labels::Language;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::path::Path;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Reconcile the stored scans for `[start, end]` and write one row per
    /// work-day. `file` must be an absolute path. Returns the rows written.
    #[allow(clippy::too_many_arguments)]
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        (start, end): (NaiveDate, NaiveDate),
        employee: Option<&str>,
        force: bool,
        rules: &ReconcileRules,
        lang: Language,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let report = Core::reconcile_period(pool, start, end, employee, rules)?;
        let rows: Vec<WorkDayExport> = report
            .work_days
            .iter()
            .map(|d| WorkDayExport::from_work_day(d, lang))
            .collect();

        if rows.is_empty() {
            warning("No work-days found for selected range.");
            return Ok(0);
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        ttlog(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("{} work-days {start}..{end} -> {}", rows.len(), path.display()),
        )?;

        Ok(rows.len())
    }
}
