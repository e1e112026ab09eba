//! Points bucket filter.

use super::{Bucket, Filter};
use crate::catalog::Product;

/// Points cut points: low < 50, medium 50-149, high >= 150.
const LOW_CUT: f64 = 50.0;
const HIGH_CUT: f64 = 150.0;

/// Filters products by points bucket.
pub struct PointsBucketFilter {
    bucket: Bucket,
}

impl PointsBucketFilter {
    /// Creates a new points bucket filter.
    pub fn new(bucket: Bucket) -> Self {
        Self { bucket }
    }
}

impl Filter for PointsBucketFilter {
    fn matches(&self, product: &Product) -> bool {
        // Missing or non-numeric points bucket as 0, for bucketing only
        let points = product.points_number().unwrap_or(0.0);
        self.bucket.admits(points, LOW_CUT, HIGH_CUT)
    }

    fn description(&self) -> String {
        match self.bucket {
            Bucket::All => "Points: any".to_string(),
            Bucket::Low => format!("Points: under {}", LOW_CUT),
            Bucket::Medium => format!("Points: {} - {}", LOW_CUT, HIGH_CUT - 1.0),
            Bucket::High => format!("Points: {} and up", HIGH_CUT),
        }
    }
}
