use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::import::{ImportFormat, ImportLogic};
use crate::ui::messages::{info, success, warning};
use crate::utils::path::expand_tilde;

/// Rejected entries listed one by one before the output is summarized.
const MAX_REJECTED_SHOWN: usize = 20;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, format } = cmd {
        let rules = cfg.rules()?;
        let path = expand_tilde(file);
        let format = format.unwrap_or_else(|| ImportFormat::from_path(&path));

        info(format!("Importing {} ({})", path.display(), format.as_str()));

        let mut pool = DbPool::open_initialized(&cfg.database)?;
        let summary = ImportLogic::import(&mut pool, &path, format, &rules)?;

        success(format!(
            "{} read, {} imported, {} already present",
            summary.read, summary.inserted, summary.skipped
        ));

        if !summary.rejected.is_empty() {
            warning(format!("{} entries rejected:", summary.rejected.len()));
            for r in summary.rejected.iter().take(MAX_REJECTED_SHOWN) {
                println!("   #{:<5} {}", r.index + 1, r.reason);
            }
            if summary.rejected.len() > MAX_REJECTED_SHOWN {
                println!("   … and {} more", summary.rejected.len() - MAX_REJECTED_SHOWN);
            }
        }
    }

    Ok(())
}
