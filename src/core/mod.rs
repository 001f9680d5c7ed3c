pub mod calculator;
pub mod config;
pub mod feed;
pub mod log;
pub mod logic;
pub mod rules;
pub mod validate;

pub use logic::{Core, ReconcileReport, ReconcileWarning};
pub use rules::{ReconcileRules, WorkDateRule};
