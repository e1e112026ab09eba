//! List command implementation.

use crate::catalog::{parse_catalog, CatalogFetch, SheetClient};
use crate::config::{Config, OutputFormat};
use crate::format::Formatter;
use crate::session::{FilterState, Session};
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Fetches the catalog and renders one page of the visible list.
pub struct ListCommand {
    config: Config,
    state: FilterState,
    page: usize,
    page_size: usize,
}

impl ListCommand {
    /// Creates a new list command.
    pub fn new(config: Config, state: FilterState, page: usize, page_size: usize) -> Self {
        Self { config, state, page, page_size }
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
        info!("Fetched {} products", products.len());

        let chain = self.state.chain();
        if !chain.is_empty() {
            debug!("Active filters: {}", chain.descriptions().join(", "));
        }

        let mut session = Session::with_state(products, self.state.clone());
        session.set_page_size(self.page_size);
        session.set_page(self.page);

        let visible = session.visible();
        let rows = session.current_page();

        let formatter = Formatter::new(self.config.format);
        let mut output = formatter.format_products(&rows);

        // Range footer, like the indicator under the catalog table
        if self.config.format == OutputFormat::Table && !rows.is_empty() {
            let first = (self.page - 1) * self.page_size + 1;
            let last = first + rows.len() - 1;
            output.push_str(&format!(
                "\nShowing {} to {} of {} products (page {})",
                first,
                last,
                visible.len(),
                self.page
            ));
        }

        Ok(output)
    }
}
