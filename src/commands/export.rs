//! Export command implementation: write the visible list as CSV.

use crate::catalog::{parse_catalog, CatalogFetch, SheetClient};
use crate::config::{Config, OutputFormat};
use crate::format::Formatter;
use crate::session::{FilterState, Session};
use anyhow::{Context, Result};
use chrono::Local;
use std::path::PathBuf;
use tracing::info;

/// Fetches the catalog, applies the current selections, and writes the
/// visible list to a CSV file.
pub struct ExportCommand {
    config: Config,
    state: FilterState,
    output: Option<PathBuf>,
}

impl ExportCommand {
    /// Creates a new export command.
    pub fn new(config: Config, state: FilterState, output: Option<PathBuf>) -> Self {
        Self { config, state, output }
    }

    /// Executes the export and returns a summary line.
    pub async fn execute(&self) -> Result<String> {
        let client = SheetClient::new(&self.config).context("Failed to create HTTP client")?;
        self.execute_with_client(&client).await
    }

    /// Executes the export with a provided client (for testing).
    pub async fn execute_with_client(&self, client: &impl CatalogFetch) -> Result<String> {
        let body = client.fetch().await?;
        let products = parse_catalog(&body).context("Failed to parse catalog payload")?;

        let session = Session::with_state(products, self.state.clone());
        let visible = session.visible();

        // Exports are always CSV, whatever the display format
        let csv = Formatter::new(OutputFormat::Csv).format_products(&visible);

        let path = self.output.clone().unwrap_or_else(default_export_path);
        std::fs::write(&path, &csv)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        info!("Wrote {} bytes to {}", csv.len(), path.display());
        Ok(format!("Exported {} products to {}", visible.len(), path.display()))
    }
}

/// Default export file name: products_<YYYY-MM-DD>.csv, today's local date.
fn default_export_path() -> PathBuf {
    PathBuf::from(format!("products_{}.csv", Local::now().format("%Y-%m-%d")))
}
