//! CLI command implementations.

pub mod export;
pub mod list;
pub mod show;
pub mod stats;

pub use export::ExportCommand;
pub use list::ListCommand;
pub use show::ShowCommand;
pub use stats::StatsCommand;
