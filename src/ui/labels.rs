//! Display layer: status codes → user-facing labels.
//!
//! The engine only knows [`DayStatus`] / [`ScanRole`]; every human string
//! shown by the CLI or written by the exporters goes through here.

use crate::models::day_status::{DayStatus, ScanRole};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Th,
}

pub fn status_label(status: DayStatus, lang: Language) -> &'static str {
    match lang {
        Language::En => match status {
            DayStatus::Complete => "Complete",
            DayStatus::MissingIn => "Missing check-in",
            DayStatus::MissingOut => "Missing check-out",
            DayStatus::Late => "Late",
            DayStatus::Overtime => "Overtime",
            DayStatus::Anomalous => "Anomalous",
        },
        Language::Th => match status {
            DayStatus::Complete => "ปกติ",
            DayStatus::MissingIn => "ขาดลงชื่อเข้า",
            DayStatus::MissingOut => "ขาดลงชื่อออก",
            DayStatus::Late => "มาสาย",
            DayStatus::Overtime => "OT",
            DayStatus::Anomalous => "ระบุไม่ได้ (เวลาใกล้เคียง)",
        },
    }
}

pub fn scan_role_label(role: ScanRole, lang: Language) -> &'static str {
    match lang {
        Language::En => match role {
            ScanRole::CheckIn => "check-in",
            ScanRole::CheckOut => "check-out",
            ScanRole::Anomalous => "ignored (too close)",
            ScanRole::Extra => "extra",
        },
        Language::Th => match role {
            ScanRole::CheckIn => "เข้างาน",
            ScanRole::CheckOut => "ออกงาน",
            ScanRole::Anomalous => "ซ้ำซ้อน/ผิดปกติ",
            ScanRole::Extra => "สแกนเกิน",
        },
    }
}
