use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_shift, list_shifts, set_shift_active};
use crate::errors::{AppError, AppResult};
use crate::models::Shift;
use crate::ui::messages::{success, warning};
use crate::utils::colors::{GREEN, GREY, RESET};
use crate::utils::table::{Column, Table};
use crate::utils::time::parse_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Shift {
        add,
        start,
        end,
        overnight,
        list,
        disable,
        enable,
    } = cmd
    {
        let mut pool = DbPool::open_initialized(&cfg.database)?;

        if let Some(name) = add {
            let start = require_time("--start", start)?;
            let end = require_time("--end", end)?;

            if name.trim().is_empty() {
                return Err(AppError::InvalidShift("shift name is empty".into()));
            }
            let mut shift = Shift::new(0, name.trim(), start, end);
            shift.is_overnight |= *overnight;

            shift.id = insert_shift(&mut pool, &shift)?;
            ttlog(
                &pool.conn,
                "shift_add",
                &shift.id.to_string(),
                &format!("{} {}-{}", shift.name, shift.start_str(), shift.end_str()),
            )?;
            success(format!(
                "Shift #{} '{}' added ({} → {}{})",
                shift.id,
                shift.name,
                shift.start_str(),
                shift.end_str(),
                if shift.is_overnight { ", overnight" } else { "" }
            ));
        }

        if let Some(id) = disable {
            let shift = set_shift_active(&mut pool, *id, false)?;
            ttlog(&pool.conn, "shift_disable", &id.to_string(), &shift.name)?;
            success(format!("Shift #{} '{}' disabled", id, shift.name));
        }

        if let Some(id) = enable {
            let shift = set_shift_active(&mut pool, *id, true)?;
            ttlog(&pool.conn, "shift_enable", &id.to_string(), &shift.name)?;
            success(format!("Shift #{} '{}' enabled", id, shift.name));
        }

        if *list {
            print_shifts(&pool)?;
        }
    }

    Ok(())
}

fn require_time(flag: &str, value: &Option<String>) -> AppResult<chrono::NaiveTime> {
    let raw = value
        .as_deref()
        .ok_or_else(|| AppError::InvalidShift(format!("{flag} is required with --add")))?;
    parse_time(raw).ok_or_else(|| AppError::InvalidTime(raw.to_string()))
}

fn print_shifts(pool: &DbPool) -> AppResult<()> {
    let shifts = list_shifts(pool)?;
    if shifts.is_empty() {
        warning("No shifts defined. Add one with `rattendance shift --add NAME --start HH:MM --end HH:MM`.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::new("ID", 4),
        Column::new("NAME", 16),
        Column::new("START", 6),
        Column::new("END", 6),
        Column::new("OVERNIGHT", 9),
        Column::new("ACTIVE", 6),
    ]);

    for (s, active) in &shifts {
        table.add_row(vec![
            s.id.to_string(),
            s.name.clone(),
            s.start_str(),
            s.end_str(),
            if s.is_overnight { "yes" } else { "no" }.to_string(),
            if *active { "yes" } else { "no" }.to_string(),
        ]);
    }

    let rendered = table.render_styled(|r, c, cell| match (c, shifts.get(r)) {
        (5, Some((_, true))) => format!("{GREEN}{cell}{RESET}"),
        (_, Some((_, false))) => format!("{GREY}{cell}{RESET}"),
        _ => cell,
    });
    println!("{rendered}");
    Ok(())
}
