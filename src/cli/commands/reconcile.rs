use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{Core, ReconcileReport, ReconcileWarning};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::upsert_work_days;
use crate::errors::AppResult;
use crate::models::WorkDay;
use crate::ui::labels::{Language, scan_role_label, status_label};
use crate::ui::messages::{header, info, notice, success, warning};
use crate::utils::colors::{RESET, color_for_status, colorize_in_out, colorize_optional};
use crate::utils::date::resolve_range;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_hours;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reconcile {
        range,
        employee,
        save,
        outcomes,
        scans,
    } = cmd
    {
        let rules = cfg.rules()?;
        let (start, end) = resolve_range(range)?;
        let mut pool = DbPool::open_initialized(&cfg.database)?;

        let report = Core::reconcile_period(&mut pool, start, end, employee.as_deref(), &rules)?;

        header(format!("Work-days {start} → {end}"));
        print_warnings(&report);

        if report.work_days.is_empty() {
            warning("No scans found for selected range.");
            return Ok(());
        }

        print_work_days(&report.work_days, cfg.language);

        if *scans {
            print_scan_roles(&report.work_days, cfg.language);
        }

        info(format!(
            "{} scans, {} work-days, {} duplicates, {} rejected, {} outside period",
            report.accepted_scans,
            report.work_days.len(),
            report.duplicates.len(),
            report.rejected.len(),
            report.out_of_period_scans
        ));

        if *outcomes {
            for o in &report.outcomes {
                notice(o.describe());
                ttlog(&pool.conn, o.operation(), o.employee_id(), &o.describe())?;
            }
        }

        if *save {
            let n = upsert_work_days(&mut pool, &report.work_days)?;
            ttlog(
                &pool.conn,
                "save",
                &format!("{start}:{end}"),
                &format!("{n} work-days saved"),
            )?;
            success(format!("{n} work-days saved."));
        }
    }

    Ok(())
}

fn print_warnings(report: &ReconcileReport) {
    for w in &report.warnings {
        match w {
            ReconcileWarning::EmptyShiftTable => {
                warning("No active shift: late minutes are not computed.")
            }
        }
    }
    for r in &report.rejected {
        warning(format!(
            "Stored scan rejected ({}): {}",
            r.employee_id.as_deref().unwrap_or("?"),
            r.reason
        ));
    }
}

fn print_work_days(days: &[WorkDay], lang: Language) {
    let mut table = Table::new(vec![
        Column::new("EMPLOYEE", 10),
        Column::new("DATE", 10),
        Column::new("IN", 5),
        Column::new("OUT", 5),
        Column::new("STATUS", 18),
        Column::new("LATE", 4),
        Column::new("HOURS", 6),
        Column::new("SHIFT", 5),
        Column::new("SCANS", 5),
    ]);

    for d in days {
        table.add_row(vec![
            d.employee_id.clone(),
            d.work_date_str(),
            d.check_in_str(),
            d.check_out_str(),
            status_label(d.status, lang).to_string(),
            d.late_minutes.to_string(),
            format_hours(d.worked_hours),
            d.matched_shift_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string()),
            d.raw_scan_count.to_string(),
        ]);
    }

    let rendered = table.render_styled(|r, c, cell| match c {
        2 => colorize_in_out(&cell, true),
        3 => colorize_in_out(&cell, false),
        4 => match days.get(r) {
            Some(d) => format!("{}{cell}{RESET}", color_for_status(d.status)),
            None => cell,
        },
        7 => colorize_optional(&cell),
        _ => cell,
    });
    println!("{rendered}");
}

fn print_scan_roles(days: &[WorkDay], lang: Language) {
    for d in days {
        println!("{} {}", d.employee_id, d.work_date_str());
        for s in &d.scans {
            println!(
                "   {}  {}",
                s.timestamp.format("%Y-%m-%d %H:%M:%S"),
                scan_role_label(s.role, lang)
            );
        }
    }
    println!();
}
