use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Core;
use crate::db::pool::DbPool;
use crate::db::queries::list_employees;
use crate::errors::AppResult;
use crate::models::{DayStatus, PeriodStats};
use crate::ui::labels::{Language, status_label};
use crate::ui::messages::{header, info, warning};
use crate::utils::date::resolve_range;
use crate::utils::formatting::{mins2readable, percent};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_hours;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary {
        range,
        employee,
        absent,
    } = cmd
    {
        let rules = cfg.rules()?;
        let (start, end) = resolve_range(range)?;
        let mut pool = DbPool::open_initialized(&cfg.database)?;

        let report = Core::reconcile_period(&mut pool, start, end, employee.as_deref(), &rules)?;
        let stats = Core::summarize(&report.work_days, start, end);

        header(format!("Attendance summary {start} → {end}"));

        if stats.total_days == 0 {
            warning("No work-days found for selected range.");
        } else {
            print_stats(&stats, cfg.language);
        }

        if *absent {
            let roster = match employee {
                Some(e) => vec![e.clone()],
                None => list_employees(&pool)?,
            };
            let days = Core::absent_days(&report.work_days, &roster, start, end);

            if days.is_empty() {
                info("No absent days.");
            } else {
                println!("Absent days ({}):", days.len());
                for d in &days {
                    println!("   {}  {}", d.employee_id, d.date);
                }
            }
        }
    }

    Ok(())
}

fn print_stats(stats: &PeriodStats, lang: Language) {
    let label = |s: DayStatus| status_label(s, lang);

    let mut table = Table::new(vec![
        Column::new("EMPLOYEE", 10),
        Column::new("DAYS", 4),
        Column::new(label(DayStatus::Complete), 8),
        Column::new(label(DayStatus::Late), 6),
        Column::new(label(DayStatus::Overtime), 8),
        Column::new("MISS IN", 7),
        Column::new("MISS OUT", 8),
        Column::new("HOURS", 8),
        Column::new("LATE TOT", 8),
    ]);

    for e in &stats.employees {
        table.add_row(vec![
            e.employee_id.clone(),
            e.days_recorded.to_string(),
            e.complete.to_string(),
            e.late.to_string(),
            e.overtime.to_string(),
            e.missing_in.to_string(),
            e.missing_out.to_string(),
            format_hours(e.total_worked_hours),
            mins2readable(e.total_late_minutes, false, true),
        ]);
    }

    println!("{}", table.render());
    info(format!(
        "{} work-days, {} complete, completion rate {}",
        stats.total_days,
        stats.complete_like_days,
        percent(stats.completion_rate)
    ));
}
