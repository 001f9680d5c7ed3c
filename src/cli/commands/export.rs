use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::date::resolve_range;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        employee,
        force,
    } = cmd
    {
        let rules = cfg.rules()?;
        let period = resolve_range(range)?;
        let path = expand_tilde(file);
        let mut pool = DbPool::open_initialized(&cfg.database)?;

        ExportLogic::export(
            &mut pool,
            *format,
            &path.to_string_lossy(),
            period,
            employee.as_deref(),
            *force,
            &rules,
            cfg.language,
        )?;
    }

    Ok(())
}
