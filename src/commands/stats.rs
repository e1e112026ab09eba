//! Stats command implementation: summary of the visible list.

use crate::catalog::{parse_catalog, CatalogFetch, SheetClient};
use crate::config::Config;
use crate::format::Formatter;
use crate::session::{FilterState, Session};
use anyhow::{Context, Result};

/// Fetches the catalog and summarizes the visible list.
pub struct StatsCommand {
    config: Config,
    state: FilterState,
}

impl StatsCommand {
    /// Creates a new stats command.
    pub fn new(config: Config, state: FilterState) -> Self {
        Self { config, state }
    }

    /// Executes the command and returns formatted output.
    pub async fn execute(&self) -> Result<String> {
        let client = SheetClient::new(&self.config).context("Failed to create HTTP client")?;
        self.execute_with_client(&client).await
    }

    /// Executes the command with a provided client (for testing).
    pub async fn execute_with_client(&self, client: &impl CatalogFetch) -> Result<String> {
        let body = client.fetch().await?;
        let products = parse_catalog(&body).context("Failed to parse catalog payload")?;

        let session = Session::with_state(products, self.state.clone());
        let stats = session.stats();

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_stats(&stats))
    }
}
