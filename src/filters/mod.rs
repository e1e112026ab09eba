//! Product filtering system with composable filters.

pub mod extra;
pub mod points;
pub mod price;
pub mod search;

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

pub use extra::{ExtraFilter, ExtraSelector};
pub use points::PointsBucketFilter;
pub use price::PriceBucketFilter;
pub use search::SearchFilter;

/// Trait for filtering products.
pub trait Filter: Send + Sync {
    /// Returns true if the product passes the filter.
    fn matches(&self, product: &Product) -> bool;

    /// Returns a description of this filter.
    fn description(&self) -> String;
}

/// A named numeric range used for categorical filtering of a continuous value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    #[default]
    All,
    Low,
    Medium,
    High,
}

impl Bucket {
    /// Tests a value against the cut points: low < `low_cut`,
    /// medium in [`low_cut`, `high_cut`), high >= `high_cut`.
    pub fn admits(&self, value: f64, low_cut: f64, high_cut: f64) -> bool {
        match self {
            Bucket::All => true,
            Bucket::Low => value < low_cut,
            Bucket::Medium => value >= low_cut && value < high_cut,
            Bucket::High => value >= high_cut,
        }
    }

    /// Returns true when the bucket excludes nothing.
    pub fn is_all(&self) -> bool {
        matches!(self, Bucket::All)
    }
}

impl std::str::FromStr for Bucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Bucket::All),
            "low" => Ok(Bucket::Low),
            "medium" => Ok(Bucket::Medium),
            "high" => Ok(Bucket::High),
            _ => Err(format!("Unknown bucket: {}. Use: all, low, medium, high", s)),
        }
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bucket::All => write!(f, "all"),
            Bucket::Low => write!(f, "low"),
            Bucket::Medium => write!(f, "medium"),
            Bucket::High => write!(f, "high"),
        }
    }
}

/// A chain of filters that must all pass.
pub struct FilterChain {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterChain {
    /// Creates an empty filter chain.
    pub fn new() -> Self {
        Self { filters: Vec::new() }
    }

    /// Adds a filter to the chain.
    pub fn add(&mut self, filter: impl Filter + 'static) -> &mut Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Checks if a product passes all filters.
    pub fn matches(&self, product: &Product) -> bool {
        self.filters.iter().all(|f| f.matches(product))
    }

    /// Filters a collection of products, preserving their order.
    pub fn apply(&self, products: Vec<Product>) -> Vec<Product> {
        products.into_iter().filter(|p| self.matches(p)).collect()
    }

    /// Returns true if no filters are configured.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Returns the number of filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns descriptions of all filters.
    pub fn descriptions(&self) -> Vec<String> {
        self.filters.iter().map(|f| f.description()).collect()
    }
}

impl Default for FilterChain {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing a FilterChain from user selections.
///
/// Pass-through selections (empty search, `all` buckets, `all` tags) add no
/// filter at all, so an untouched state yields an empty chain.
pub struct FilterChainBuilder {
    chain: FilterChain,
}

impl FilterChainBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self { chain: FilterChain::new() }
    }

    /// Adds a search-text filter.
    pub fn search(mut self, text: &str) -> Self {
        if !text.trim().is_empty() {
            self.chain.add(SearchFilter::new(text));
        }
        self
    }

    /// Adds a price bucket filter.
    pub fn price_bucket(mut self, bucket: Bucket) -> Self {
        if !bucket.is_all() {
            self.chain.add(PriceBucketFilter::new(bucket));
        }
        self
    }

    /// Adds a points bucket filter.
    pub fn points_bucket(mut self, bucket: Bucket) -> Self {
        if !bucket.is_all() {
            self.chain.add(PointsBucketFilter::new(bucket));
        }
        self
    }

    /// Adds a tag selector filter.
    pub fn extra(mut self, selector: ExtraSelector) -> Self {
        if selector != ExtraSelector::All {
            self.chain.add(ExtraFilter::new(selector));
        }
        self
    }

    /// Builds the filter chain.
    pub fn build(self) -> FilterChain {
        self.chain
    }
}

impl Default for FilterChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_product(name: &str, price: f64, points: f64, extra: Option<&str>) -> Product {
        Product {
            serial_no: "TEST".to_string(),
            name: name.to_string(),
            image_url: String::new(),
            price: Some(json!(price)),
            points: Some(json!(points)),
            extra: extra.map(String::from),
        }
    }

    // Bucket tests

    #[test]
    fn test_bucket_admits() {
        assert!(Bucket::All.admits(0.0, 500.0, 1500.0));
        assert!(Bucket::All.admits(9999.0, 500.0, 1500.0));

        assert!(Bucket::Low.admits(499.0, 500.0, 1500.0));
        assert!(!Bucket::Low.admits(500.0, 500.0, 1500.0));

        assert!(Bucket::Medium.admits(500.0, 500.0, 1500.0));
        assert!(Bucket::Medium.admits(1499.0, 500.0, 1500.0));
        assert!(!Bucket::Medium.admits(1500.0, 500.0, 1500.0));

        assert!(Bucket::High.admits(1500.0, 500.0, 1500.0));
        assert!(!Bucket::High.admits(1499.0, 500.0, 1500.0));
    }

    #[test]
    fn test_bucket_parsing() {
        assert_eq!("all".parse::<Bucket>().unwrap(), Bucket::All);
        assert_eq!("LOW".parse::<Bucket>().unwrap(), Bucket::Low);
        assert_eq!("Medium".parse::<Bucket>().unwrap(), Bucket::Medium);
        assert_eq!("high".parse::<Bucket>().unwrap(), Bucket::High);

        let err = "huge".parse::<Bucket>().unwrap_err();
        assert!(err.contains("Unknown bucket"));
    }

    #[test]
    fn test_bucket_display() {
        assert_eq!(Bucket::All.to_string(), "all");
        assert_eq!(Bucket::Low.to_string(), "low");
        assert_eq!(Bucket::Medium.to_string(), "medium");
        assert_eq!(Bucket::High.to_string(), "high");
    }

    #[test]
    fn test_bucket_default() {
        assert_eq!(Bucket::default(), Bucket::All);
        assert!(Bucket::default().is_all());
    }

    // FilterChain tests

    #[test]
    fn test_filter_chain_new() {
        let chain = FilterChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);
    }

    #[test]
    fn test_filter_chain_empty_matches_all() {
        let chain = FilterChain::new();
        let product = make_product("Anything", 9999.0, 0.0, None);
        assert!(chain.matches(&product));
    }

    #[test]
    fn test_filter_chain_apply_preserves_order() {
        let mut chain = FilterChain::new();
        chain.add(PriceBucketFilter::new(Bucket::Low));

        let products = vec![
            make_product("C", 100.0, 0.0, None),
            make_product("A", 2000.0, 0.0, None),
            make_product("B", 300.0, 0.0, None),
        ];

        let filtered = chain.apply(products);
        let names: Vec<&str> = filtered.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["C", "B"]);
    }

    #[test]
    fn test_filter_chain_idempotent() {
        let mut chain = FilterChain::new();
        chain.add(SearchFilter::new("mug"));
        chain.add(PointsBucketFilter::new(Bucket::Low));

        let products = vec![
            make_product("Travel Mug", 100.0, 20.0, None),
            make_product("Lamp", 100.0, 20.0, None),
            make_product("Mug Rack", 100.0, 200.0, None),
        ];

        let once = chain.apply(products);
        let twice = chain.apply(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_chain_descriptions() {
        let mut chain = FilterChain::new();
        chain.add(SearchFilter::new("mug"));
        chain.add(PriceBucketFilter::new(Bucket::Low));
        chain.add(PointsBucketFilter::new(Bucket::High));

        let descriptions = chain.descriptions();
        assert_eq!(descriptions.len(), 3);
        assert!(descriptions[0].contains("Search"));
        assert!(descriptions[1].contains("Price"));
        assert!(descriptions[2].contains("Points"));
    }

    // FilterChainBuilder tests

    #[test]
    fn test_builder_all_selections() {
        let chain = FilterChainBuilder::new()
            .search("mug")
            .price_bucket(Bucket::Low)
            .points_bucket(Bucket::Medium)
            .extra(ExtraSelector::Tag("red".to_string()))
            .build();

        assert_eq!(chain.len(), 4);
    }

    #[test]
    fn test_builder_pass_through_selections_add_nothing() {
        let chain = FilterChainBuilder::new()
            .search("")
            .search("   ")
            .price_bucket(Bucket::All)
            .points_bucket(Bucket::All)
            .extra(ExtraSelector::All)
            .build();

        assert!(chain.is_empty());
    }

    #[test]
    fn test_builder_default() {
        let chain = FilterChainBuilder::default().build();
        assert!(chain.is_empty());
    }

    #[test]
    fn test_all_filters_combined() {
        let chain = FilterChainBuilder::new()
            .search("mug")
            .price_bucket(Bucket::Low)
            .points_bucket(Bucket::Low)
            .extra(ExtraSelector::Tag("ceramic".to_string()))
            .build();

        // Passes everything
        let product = make_product("Coffee Mug", 400.0, 30.0, Some("red,ceramic"));
        assert!(chain.matches(&product));

        // Fails search
        let product = make_product("Lamp", 400.0, 30.0, Some("ceramic"));
        assert!(!chain.matches(&product));

        // Fails price bucket
        let product = make_product("Gold Mug", 2500.0, 30.0, Some("ceramic"));
        assert!(!chain.matches(&product));

        // Fails points bucket
        let product = make_product("Loyalty Mug", 400.0, 300.0, Some("ceramic"));
        assert!(!chain.matches(&product));

        // Fails tag selector
        let product = make_product("Steel Mug", 400.0, 30.0, Some("metal"));
        assert!(!chain.matches(&product));
    }
}
