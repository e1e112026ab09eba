//! Output formatting for products and statistics (table, JSON, markdown, CSV).

use crate::catalog::Product;
use crate::config::OutputFormat;
use crate::stats::CatalogStats;

/// Fixed export header, matching the sheet's column order.
pub const CSV_HEADER: &str = "Serial No,Product Name,Image URL,Price,Points,Extra";

/// Quotes a value iff it contains a comma or a double quote, doubling any
/// interior quotes. Embedded newlines are left alone on purpose: the
/// exporter's output format never quoted them, and that byte-level shape is
/// the compatibility target.
pub fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Formats products for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a single product as a detail view.
    pub fn format_product(&self, product: &Product) -> String {
        match self.format {
            OutputFormat::Json => self.json_single(product),
            OutputFormat::Table => self.table_single(product),
            OutputFormat::Markdown => self.markdown_single(product),
            OutputFormat::Csv => self.csv_products(std::slice::from_ref(product)),
        }
    }

    /// Formats multiple products.
    pub fn format_products(&self, products: &[Product]) -> String {
        if products.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => self.csv_products(&[]),
                _ => "No products found.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => self.json_products(products),
            OutputFormat::Table => self.table_products(products),
            OutputFormat::Markdown => self.markdown_products(products),
            OutputFormat::Csv => self.csv_products(products),
        }
    }

    /// Formats summary statistics.
    pub fn format_stats(&self, stats: &CatalogStats) -> String {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(stats).unwrap_or_else(|_| "{}".to_string())
            }
            OutputFormat::Table => [
                format!("Products:    {}", stats.count),
                format!("Avg price:   {}", stats.average_price),
                format!("Avg points:  {}", stats.average_points),
            ]
            .join("\n"),
            OutputFormat::Markdown => [
                "| Products | Avg Price | Avg Points |".to_string(),
                "|----------|-----------|------------|".to_string(),
                format!(
                    "| {} | {} | {} |",
                    stats.count, stats.average_price, stats.average_points
                ),
            ]
            .join("\n"),
            OutputFormat::Csv => format!(
                "count,average_price,average_points\n{},{},{}\n",
                stats.count, stats.average_price, stats.average_points
            ),
        }
    }

    // JSON formatting

    fn json_single(&self, product: &Product) -> String {
        serde_json::to_string_pretty(product).unwrap_or_else(|_| "{}".to_string())
    }

    fn json_products(&self, products: &[Product]) -> String {
        serde_json::to_string_pretty(products).unwrap_or_else(|_| "[]".to_string())
    }

    // Table formatting

    fn table_single(&self, product: &Product) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Serial:  {}", product.serial_no));
        lines.push(format!("Name:    {}", product.name));

        if !product.image_url.is_empty() {
            lines.push(format!("Image:   {}", product.image_url));
        }

        let price = product.price_display();
        lines.push(format!("Price:   {}", if price.is_empty() { "N/A" } else { &price }));

        let points = product.points_display();
        lines.push(format!("Points:  {}", if points.is_empty() { "N/A" } else { &points }));

        let tags = product.tags();
        if !tags.is_empty() {
            lines.push(format!("Tags:    {}", tags.join(", ")));
        }

        lines.join("\n")
    }

    fn table_products(&self, products: &[Product]) -> String {
        let serial_width = 8;
        let price_width = 10;
        let points_width = 8;
        let name_width = 40;

        let mut lines = Vec::new();

        // Header
        lines.push(format!(
            "{:<serial_width$}  {:<price_width$}  {:<points_width$}  {}",
            "Serial", "Price", "Points", "Name"
        ));
        lines.push(format!(
            "{:-<serial_width$}  {:-<price_width$}  {:-<points_width$}  {:-<name_width$}",
            "", "", "", ""
        ));

        // Rows
        for product in products {
            let price = product.price_display();
            let price = if price.is_empty() { "N/A".to_string() } else { price };

            let points = product.points_display();
            let points = if points.is_empty() { "N/A".to_string() } else { points };

            let mut name = product.name.clone();
            if name.chars().count() > name_width {
                name = name.chars().take(name_width - 3).collect::<String>() + "...";
            }

            let tags = product.tags();
            if !tags.is_empty() {
                name = format!("{} [{}]", name, tags.join(", "));
            }

            lines.push(format!(
                "{:<serial_width$}  {:>price_width$}  {:>points_width$}  {}",
                product.serial_no, price, points, name
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {} products", products.len()));

        lines.join("\n")
    }

    // Markdown formatting

    fn markdown_single(&self, product: &Product) -> String {
        let mut lines = Vec::new();

        lines.push(format!("## {}", product.name));
        lines.push(String::new());

        lines.push(format!("- **Serial:** {}", product.serial_no));

        if !product.image_url.is_empty() {
            lines.push(format!("- **Image:** [view]({})", product.image_url));
        }

        let price = product.price_display();
        if !price.is_empty() {
            lines.push(format!("- **Price:** {}", price));
        }

        let points = product.points_display();
        if !points.is_empty() {
            lines.push(format!("- **Points:** {}", points));
        }

        let tags = product.tags();
        if !tags.is_empty() {
            lines.push(format!("- **Tags:** {}", tags.join(", ")));
        }

        lines.join("\n")
    }

    fn markdown_products(&self, products: &[Product]) -> String {
        let mut lines = Vec::new();

        lines.push("| Serial | Price | Points | Name | Tags |".to_string());
        lines.push("|--------|-------|--------|------|------|".to_string());

        for product in products {
            let price = product.price_display();
            let price = if price.is_empty() { "N/A".to_string() } else { price };

            let points = product.points_display();
            let points = if points.is_empty() { "N/A".to_string() } else { points };

            let name = if product.name.chars().count() > 40 {
                product.name.chars().take(37).collect::<String>() + "..."
            } else {
                product.name.clone()
            };

            lines.push(format!(
                "| {} | {} | {} | {} | {} |",
                product.serial_no,
                price,
                points,
                name,
                product.tags().join(", ")
            ));
        }

        lines.push(String::new());
        lines.push(format!("*{} products found*", products.len()));

        lines.join("\n")
    }

    // CSV formatting
    //
    // Only the name and tag columns are escaped; serial and image URL are
    // assumed clean, and price/points emit their raw value (empty when
    // absent, never the word "undefined").

    fn csv_products(&self, products: &[Product]) -> String {
        let mut out = String::new();
        out.push_str(CSV_HEADER);
        out.push('\n');

        for product in products {
            out.push_str(&format!(
                "{},{},{},{},{},{}\n",
                product.serial_no,
                csv_escape(&product.name),
                product.image_url,
                product.price_display(),
                product.points_display(),
                csv_escape(product.extra_str()),
            ));
        }

        out
    }
}
