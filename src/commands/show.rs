//! Show command implementation: detail view for one product.

use crate::catalog::{parse_catalog, CatalogFetch, SheetClient};
use crate::config::Config;
use crate::format::Formatter;
use crate::session::Session;
use anyhow::{Context, Result};
use tracing::info;

/// Looks up a single product by serial number.
pub struct ShowCommand {
    config: Config,
}

impl ShowCommand {
    /// Creates a new show command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Fetches the catalog and returns the formatted detail view.
    pub async fn execute(&self, serial: &str) -> Result<String> {
        let client = SheetClient::new(&self.config).context("Failed to create HTTP client")?;
        self.execute_with_client(&client, serial).await
    }

    /// Executes the lookup with a provided client (for testing).
    pub async fn execute_with_client(
        &self,
        client: &impl CatalogFetch,
        serial: &str,
    ) -> Result<String> {
        let serial = serial.trim();
        if serial.is_empty() {
            anyhow::bail!("Serial number must not be empty.");
        }

        info!("Looking up product: {}", serial);

        let body = client.fetch().await?;
        let products = parse_catalog(&body).context("Failed to parse catalog payload")?;

        let session = Session::new(products);
        let product = session
            .find_by_serial(serial)
            .with_context(|| format!("No product with serial number '{}'", serial))?;

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_product(product))
    }
}
