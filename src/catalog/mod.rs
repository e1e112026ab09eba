//! Catalog-endpoint modules: HTTP client, payload parsing, and data models.

pub mod client;
pub mod models;
pub mod parser;

pub use client::{CatalogFetch, SheetClient};
pub use models::Product;
pub use parser::{normalize_record, parse_catalog, ParseError};
