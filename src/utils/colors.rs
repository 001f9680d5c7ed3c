//! ANSI color helper utilities for terminal output.

use crate::models::day_status::DayStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

pub fn color_for_status(status: DayStatus) -> &'static str {
    match status {
        DayStatus::Complete => GREEN,
        DayStatus::Late => YELLOW,
        DayStatus::Overtime => CYAN,
        DayStatus::MissingIn | DayStatus::MissingOut => RED,
        DayStatus::Anomalous => MAGENTA,
    }
}

/// Grey out empty placeholders (`--:--`, `0`, blanks).
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--:--" || v == "-" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn colorize_in_out(value: &str, is_in: bool) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" {
        return format!("{GREY}{value}{RESET}");
    }

    if is_in {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{RED}{value}{RESET}")
    }
}
