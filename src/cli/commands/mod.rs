pub mod config;
pub mod db;
pub mod export;
pub mod import;
pub mod init;
pub mod log;
pub mod reconcile;
pub mod shift;
pub mod summary;
