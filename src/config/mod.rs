use crate::core::rules::{self, ReconcileRules, WorkDateRule};
use crate::errors::{AppError, AppResult};
use crate::ui::labels::Language;
use crate::utils::time::parse_time_window;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_late_threshold")]
    pub late_threshold_minutes: i64,
    #[serde(default = "default_min_separation")]
    pub min_shift_separation_hours: u32,
    #[serde(default = "default_boundary_start")]
    pub overnight_boundary_start_hour: u32,
    #[serde(default = "default_boundary_end")]
    pub overnight_boundary_end_hour: u32,
    #[serde(default = "default_cutoff")]
    pub early_morning_cutoff_hour: u32,
    #[serde(default = "default_noon")]
    pub single_scan_noon_hour: u32,
    #[serde(default = "default_tolerance")]
    pub shift_match_tolerance_minutes: i64,
    #[serde(default = "default_overtime_window")]
    pub overtime_window: String,
    #[serde(default)]
    pub work_date_rule: WorkDateRule,
    #[serde(default)]
    pub language: Language,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_timezone() -> String {
    rules::DEFAULT_TIMEZONE.name().to_string()
}
fn default_late_threshold() -> i64 {
    rules::LATE_THRESHOLD_MINUTES
}
fn default_min_separation() -> u32 {
    rules::MIN_SHIFT_SEPARATION_HOURS
}
fn default_boundary_start() -> u32 {
    rules::OVERNIGHT_BOUNDARY_START_HOUR
}
fn default_boundary_end() -> u32 {
    rules::OVERNIGHT_BOUNDARY_END_HOUR
}
fn default_cutoff() -> u32 {
    rules::EARLY_MORNING_CUTOFF_HOUR
}
fn default_noon() -> u32 {
    rules::SINGLE_SCAN_NOON_HOUR
}
fn default_tolerance() -> i64 {
    rules::SHIFT_MATCH_TOLERANCE_MINUTES
}
fn default_overtime_window() -> String {
    let (sh, sm) = rules::OVERTIME_WINDOW_START;
    let (eh, em) = rules::OVERTIME_WINDOW_END;
    format!("{sh:02}:{sm:02}-{eh:02}:{em:02}")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            timezone: default_timezone(),
            late_threshold_minutes: default_late_threshold(),
            min_shift_separation_hours: default_min_separation(),
            overnight_boundary_start_hour: default_boundary_start(),
            overnight_boundary_end_hour: default_boundary_end(),
            early_morning_cutoff_hour: default_cutoff(),
            single_scan_noon_hour: default_noon(),
            shift_match_tolerance_minutes: default_tolerance(),
            overtime_window: default_overtime_window(),
            work_date_rule: WorkDateRule::default(),
            language: Language::default(),
        }
    }
}

impl Config {
    /// Every key the file may carry, in file order.
    pub const KEYS: [&'static str; 12] = [
        "database",
        "timezone",
        "late_threshold_minutes",
        "min_shift_separation_hours",
        "overnight_boundary_start_hour",
        "overnight_boundary_end_hour",
        "early_morning_cutoff_hour",
        "single_scan_noon_hour",
        "shift_match_tolerance_minutes",
        "overtime_window",
        "work_date_rule",
        "language",
    ];

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rattendance")
        } else {
            let home = dirs::home_dir()
                .or_else(|| env::var("HOME").ok().map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from("."));
            home.join(".rattendance")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rattendance.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| AppError::ConfigLoad(e.to_string()))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))
    }

    /// Build the engine parameters, validating the free-form fields.
    pub fn rules(&self) -> AppResult<ReconcileRules> {
        let timezone: Tz = self
            .timezone
            .parse()
            .map_err(|_| AppError::InvalidTimezone(self.timezone.clone()))?;

        let (overtime_window_start, overtime_window_end) = parse_time_window(&self.overtime_window)
            .ok_or_else(|| {
                AppError::Config(format!("invalid overtime_window '{}'", self.overtime_window))
            })?;

        if self.overnight_boundary_start_hour >= self.overnight_boundary_end_hour
            || self.overnight_boundary_end_hour > 24
        {
            return Err(AppError::Config(format!(
                "invalid overnight boundary {}-{}",
                self.overnight_boundary_start_hour, self.overnight_boundary_end_hour
            )));
        }

        if self.early_morning_cutoff_hour > 23 || self.single_scan_noon_hour > 23 {
            return Err(AppError::Config("hour values must be within 0-23".into()));
        }

        Ok(ReconcileRules {
            timezone,
            work_date_rule: self.work_date_rule,
            overnight_boundary_start_hour: self.overnight_boundary_start_hour,
            overnight_boundary_end_hour: self.overnight_boundary_end_hour,
            early_morning_cutoff_hour: self.early_morning_cutoff_hour,
            single_scan_noon_hour: self.single_scan_noon_hour,
            late_threshold_minutes: self.late_threshold_minutes.max(0),
            min_shift_separation_hours: self.min_shift_separation_hours,
            shift_match_tolerance_minutes: self.shift_match_tolerance_minutes.max(0),
            overtime_window_start,
            overtime_window_end,
        })
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = std::path::Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        // Write config file (skipped in test mode)
        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(db_path)
    }
}
