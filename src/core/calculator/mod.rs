pub mod grouping;
pub mod outcomes;
pub mod reconcile;
pub mod shift_match;
pub mod summary;
pub mod work_date;
