//! Boundaries towards the data-access layer.
//!
//! The engine never opens a store itself: callers own the connection, load
//! scans and shifts through these traits and hand plain vectors to `Core`.

use crate::errors::AppResult;
use crate::models::scan::ScanRecord;
use crate::models::shift::Shift;
use chrono::NaiveDateTime;

pub trait ScanFeed {
    /// Scans with a local timestamp in `[from, to)`, optionally for one employee.
    fn load_scans(
        &mut self,
        from: NaiveDateTime,
        to: NaiveDateTime,
        employee: Option<&str>,
    ) -> AppResult<Vec<ScanRecord>>;
}

pub trait ShiftFeed {
    /// Active shifts ordered by start time.
    fn load_active_shifts(&mut self) -> AppResult<Vec<Shift>>;
}
