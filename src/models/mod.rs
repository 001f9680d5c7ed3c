pub mod day_status;
pub mod outcome;
pub mod period_stats;
pub mod scan;
pub mod shift;
pub mod work_day;

pub use day_status::{DayStatus, ScanRole};
pub use outcome::AttendanceOutcome;
pub use period_stats::{AbsentDay, EmployeeStats, PeriodStats};
pub use scan::{RawScan, ScanRecord};
pub use shift::Shift;
pub use work_day::{ClassifiedScan, WorkDay};
