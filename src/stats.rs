//! Summary statistics over a product list.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Count and integer-rounded averages for a (usually filtered) list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub count: usize,
    pub average_price: i64,
    pub average_points: i64,
}

/// Computes summary statistics. Absent or non-numeric values count as 0 in
/// the sums; an empty list yields zero averages rather than dividing by zero.
pub fn summarize(products: &[Product]) -> CatalogStats {
    let count = products.len();
    if count == 0 {
        return CatalogStats { count: 0, average_price: 0, average_points: 0 };
    }

    let price_sum: f64 = products.iter().map(|p| p.price_number().unwrap_or(0.0)).sum();
    let points_sum: f64 = products.iter().map(|p| p.points_number().unwrap_or(0.0)).sum();

    CatalogStats {
        count,
        average_price: (price_sum / count as f64).round() as i64,
        average_points: (points_sum / count as f64).round() as i64,
    }
}
