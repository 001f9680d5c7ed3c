use serde::{Deserialize, Serialize};

/// Final classification of a reconciled work-day.
///
/// Precedence when several conditions hold:
/// `MissingIn` / `MissingOut` > `Overtime` > `Late` > `Complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayStatus {
    Complete,
    MissingIn,
    MissingOut,
    Late,
    Overtime,
    Anomalous,
}

impl DayStatus {
    pub const ALL: [DayStatus; 6] = [
        DayStatus::Complete,
        DayStatus::MissingIn,
        DayStatus::MissingOut,
        DayStatus::Late,
        DayStatus::Overtime,
        DayStatus::Anomalous,
    ];

    /// Convert enum → DB string
    pub fn code(&self) -> &'static str {
        match self {
            DayStatus::Complete => "COMPLETE",
            DayStatus::MissingIn => "MISSING_IN",
            DayStatus::MissingOut => "MISSING_OUT",
            DayStatus::Late => "LATE",
            DayStatus::Overtime => "OVERTIME",
            DayStatus::Anomalous => "ANOMALOUS",
        }
    }

    /// Convert DB string → enum
    pub fn from_code(s: &str) -> Option<Self> {
        DayStatus::ALL
            .into_iter()
            .find(|st| st.code().eq_ignore_ascii_case(s.trim()))
    }

    /// Has both a check-in and a check-out.
    pub fn is_complete_like(&self) -> bool {
        matches!(
            self,
            DayStatus::Complete | DayStatus::Late | DayStatus::Overtime
        )
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, DayStatus::MissingIn | DayStatus::MissingOut)
    }
}

/// Role a single scan played while its work-day was reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScanRole {
    CheckIn,
    CheckOut,
    /// Too close to the check-in to be a plausible check-out.
    Anomalous,
    /// Qualifying scan seen after the check-out was already chosen.
    Extra,
}

impl ScanRole {
    pub fn code(&self) -> &'static str {
        match self {
            ScanRole::CheckIn => "CHECK_IN",
            ScanRole::CheckOut => "CHECK_OUT",
            ScanRole::Anomalous => "ANOMALOUS",
            ScanRole::Extra => "EXTRA",
        }
    }
}
