//! Session state: one fetched catalog plus the user's current selections.

use crate::catalog::Product;
use crate::filters::{Bucket, ExtraSelector, FilterChain, FilterChainBuilder};
use crate::paging::{self, DEFAULT_PAGE_SIZE};
use crate::sort::{self, SortField, SortSpec};
use crate::stats::{self, CatalogStats};
use std::collections::HashSet;

/// The user's filter and sort selections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub search: String,
    pub price_bucket: Bucket,
    pub points_bucket: Bucket,
    pub extra: ExtraSelector,
    pub sort: Option<SortSpec>,
}

impl FilterState {
    /// Builds the filter chain for the current selections.
    pub fn chain(&self) -> FilterChain {
        FilterChainBuilder::new()
            .search(&self.search)
            .price_bucket(self.price_bucket)
            .points_bucket(self.points_bucket)
            .extra(self.extra.clone())
            .build()
    }
}

/// A single viewing session over one fetched catalog.
///
/// The canonical list is immutable for the life of the session; every view
/// is recomputed from it and the current selections, never cached. Any
/// change to a selection resets the page to 1, since a stale offset on a
/// shorter result set would silently show an empty page.
#[derive(Debug, Clone)]
pub struct Session {
    products: Vec<Product>,
    state: FilterState,
    page: usize,
    page_size: usize,
}

impl Session {
    /// Creates a session over a freshly fetched catalog.
    pub fn new(products: Vec<Product>) -> Self {
        Self::with_state(products, FilterState::default())
    }

    /// Creates a session with initial selections already applied.
    pub fn with_state(products: Vec<Product>, state: FilterState) -> Self {
        Self { products, state, page: 1, page_size: DEFAULT_PAGE_SIZE }
    }

    /// The canonical (unfiltered) product list.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The current selections.
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.state.search = text.into();
        self.page = 1;
    }

    pub fn set_price_bucket(&mut self, bucket: Bucket) {
        self.state.price_bucket = bucket;
        self.page = 1;
    }

    pub fn set_points_bucket(&mut self, bucket: Bucket) {
        self.state.points_bucket = bucket;
        self.page = 1;
    }

    pub fn set_extra(&mut self, selector: ExtraSelector) {
        self.state.extra = selector;
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: Option<SortSpec>) {
        self.state.sort = sort;
        self.page = 1;
    }

    /// Applies a sort click: repeating the current field flips its
    /// direction, a new field starts ascending.
    pub fn toggle_sort(&mut self, field: SortField) {
        self.state.sort = Some(SortSpec::toggled(self.state.sort, field));
        self.page = 1;
    }

    /// Clears every selection back to defaults.
    pub fn reset_filters(&mut self) {
        self.state = FilterState::default();
        self.page = 1;
    }

    /// Jumps to a 1-based page. Out-of-range pages render empty.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size;
        self.page = 1;
    }

    /// The visible list: the canonical list after search, filters, and sort.
    pub fn visible(&self) -> Vec<Product> {
        let filtered = self.state.chain().apply(self.products.clone());
        sort::sort_products(&filtered, self.state.sort)
    }

    /// The current page of the visible list.
    pub fn current_page(&self) -> Vec<Product> {
        let visible = self.visible();
        paging::page_slice(&visible, self.page, self.page_size).to_vec()
    }

    /// Summary statistics over the visible list.
    pub fn stats(&self) -> CatalogStats {
        stats::summarize(&self.visible())
    }

    /// Looks up a product by exact serial number in the canonical list.
    pub fn find_by_serial(&self, serial: &str) -> Option<&Product> {
        let needle = serial.trim();
        self.products.iter().find(|p| p.serial_no == needle)
    }
}

/// Distinct comma-split tags across all products, trimmed, in first-seen
/// order. Recomputed from the canonical list on demand, never cached.
pub fn distinct_extra_tags(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags = Vec::new();

    for product in products {
        for tag in product.tags() {
            if seen.insert(tag.to_string()) {
                tags.push(tag.to_string());
            }
        }
    }

    tags
}
