use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
        println!("📄 Current configuration:\n");
        println!("{}", yaml);
        Ok(())
    }

    /// Keys that the configuration file does not set explicitly.
    pub fn check(path: &std::path::Path) -> AppResult<Vec<&'static str>> {
        let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigLoad(e.to_string()))?;
        let value: serde_yaml::Value =
            serde_yaml::from_str(&content).map_err(|e| AppError::ConfigLoad(e.to_string()))?;

        let missing = Config::KEYS
            .iter()
            .copied()
            .filter(|k| value.get(*k).is_none())
            .collect();
        Ok(missing)
    }

    /// Open the configuration file in an editor, falling back to the platform default.
    pub fn edit(path: &std::path::Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let requested = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&requested).arg(path).status() {
            Ok(s) if s.success() => {
                println!("✅ Configuration file edited successfully using '{}'", requested);
                Ok(())
            }
            _ => {
                eprintln!(
                    "⚠️  Editor '{}' not available, falling back to '{}'",
                    requested, default_editor
                );
                let status = Command::new(&default_editor)
                    .arg(path)
                    .status()
                    .map_err(|e| AppError::Config(e.to_string()))?;
                if status.success() {
                    println!(
                        "✅ Configuration file edited successfully using fallback '{}'",
                        default_editor
                    );
                    Ok(())
                } else {
                    Err(AppError::Config(format!(
                        "failed to edit configuration file using '{}'",
                        default_editor
                    )))
                }
            }
        }
    }
}
