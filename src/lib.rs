//! sheet-catalog - Spreadsheet-backed product catalog CLI
//!
//! Fetches product records from a sheet web-app endpoint, then filters,
//! sorts, aggregates, paginates, and exports them locally.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod filters;
pub mod format;
pub mod paging;
pub mod session;
pub mod sort;
pub mod stats;

pub use catalog::models::Product;
pub use config::Config;
pub use session::{FilterState, Session};
