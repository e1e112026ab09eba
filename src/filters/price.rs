//! Price bucket filter.

use super::{Bucket, Filter};
use crate::catalog::Product;

/// Price cut points: low < 500, medium 500-1499, high >= 1500.
const LOW_CUT: f64 = 500.0;
const HIGH_CUT: f64 = 1500.0;

/// Filters products by price bucket.
pub struct PriceBucketFilter {
    bucket: Bucket,
}

impl PriceBucketFilter {
    /// Creates a new price bucket filter.
    pub fn new(bucket: Bucket) -> Self {
        Self { bucket }
    }
}

impl Filter for PriceBucketFilter {
    fn matches(&self, product: &Product) -> bool {
        // Missing or non-numeric prices bucket as 0, for bucketing only
        let price = product.price_number().unwrap_or(0.0);
        self.bucket.admits(price, LOW_CUT, HIGH_CUT)
    }

    fn description(&self) -> String {
        match self.bucket {
            Bucket::All => "Price: any".to_string(),
            Bucket::Low => format!("Price: under {}", LOW_CUT),
            Bucket::Medium => format!("Price: {} - {}", LOW_CUT, HIGH_CUT - 1.0),
            Bucket::High => format!("Price: {} and up", HIGH_CUT),
        }
    }
}
