//! Stable ordering of the visible list by a chosen field and direction.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;

/// Fields the catalog can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Serial,
    Name,
    Price,
    Points,
    Extra,
}

impl std::str::FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "serial" => Ok(SortField::Serial),
            "name" => Ok(SortField::Name),
            "price" => Ok(SortField::Price),
            "points" => Ok(SortField::Points),
            "extra" | "tags" => Ok(SortField::Extra),
            _ => Err(format!("Unknown sort field: {}. Use: serial, name, price, points, extra", s)),
        }
    }
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortField::Serial => write!(f, "serial"),
            SortField::Name => write!(f, "name"),
            SortField::Price => write!(f, "price"),
            SortField::Points => write!(f, "points"),
            SortField::Extra => write!(f, "extra"),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn flipped(&self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }
}

/// A chosen sort field plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: Direction,
}

impl SortSpec {
    /// Ascending sort on the given field.
    pub fn asc(field: SortField) -> Self {
        Self { field, direction: Direction::Asc }
    }

    /// The selection after clicking `field`: repeating the current field
    /// flips its direction, a new field starts ascending.
    pub fn toggled(current: Option<SortSpec>, field: SortField) -> SortSpec {
        match current {
            Some(spec) if spec.field == field => {
                SortSpec { field, direction: spec.direction.flipped() }
            }
            _ => SortSpec::asc(field),
        }
    }
}

/// Returns a new list ordered by `spec`. The sort is stable, so equal keys
/// keep their relative input order; `None` leaves the input order untouched.
pub fn sort_products(products: &[Product], spec: Option<SortSpec>) -> Vec<Product> {
    let mut sorted = products.to_vec();
    let Some(spec) = spec else {
        return sorted;
    };

    sorted.sort_by(|a, b| {
        let ordering = compare_field(a, b, spec.field);
        match spec.direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    });

    sorted
}

/// Numeric comparison when both sides hold actual numbers, display-string
/// collation otherwise. Absent values resolve to the empty string.
fn compare_field(a: &Product, b: &Product, field: SortField) -> Ordering {
    if let (Some(x), Some(y)) = (numeric_key(a, field), numeric_key(b, field)) {
        return x.partial_cmp(&y).unwrap_or(Ordering::Equal);
    }

    collate(&display_key(a, field), &display_key(b, field))
}

fn numeric_key(product: &Product, field: SortField) -> Option<f64> {
    match field {
        SortField::Price => product.price_number(),
        SortField::Points => product.points_number(),
        _ => None,
    }
}

fn display_key(product: &Product, field: SortField) -> String {
    match field {
        SortField::Serial => product.serial_no.clone(),
        SortField::Name => product.name.clone(),
        SortField::Price => product.price_display(),
        SortField::Points => product.points_display(),
        SortField::Extra => product.extra_str().to_string(),
    }
}

/// Locale-leaning comparison: NFKC case-folded keys first, raw strings as
/// the tie-breaker so the ordering stays total.
fn collate(a: &str, b: &str) -> Ordering {
    let fold = |s: &str| s.nfkc().flat_map(char::to_lowercase).collect::<String>();
    fold(a).cmp(&fold(b)).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_product(serial: &str, name: &str, price: Option<f64>, points: Option<f64>) -> Product {
        Product {
            serial_no: serial.to_string(),
            name: name.to_string(),
            image_url: String::new(),
            price: price.map(|p| json!(p)),
            points: points.map(|p| json!(p)),
            extra: None,
        }
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_sort_by_price_asc() {
        let products = vec![
            make_product("1", "Mid", Some(800.0), None),
            make_product("2", "Cheap", Some(100.0), None),
            make_product("3", "Dear", Some(2000.0), None),
        ];

        let sorted = sort_products(&products, Some(SortSpec::asc(SortField::Price)));
        assert_eq!(names(&sorted), vec!["Cheap", "Mid", "Dear"]);
    }

    #[test]
    fn test_sort_by_price_desc() {
        let products = vec![
            make_product("1", "Mid", Some(800.0), None),
            make_product("2", "Cheap", Some(100.0), None),
            make_product("3", "Dear", Some(2000.0), None),
        ];

        let spec = SortSpec { field: SortField::Price, direction: Direction::Desc };
        let sorted = sort_products(&products, Some(spec));
        assert_eq!(names(&sorted), vec!["Dear", "Mid", "Cheap"]);
    }

    #[test]
    fn test_sort_by_name_is_case_insensitive() {
        let products = vec![
            make_product("1", "banana", None, None),
            make_product("2", "Apple", None, None),
            make_product("3", "cherry", None, None),
        ];

        let sorted = sort_products(&products, Some(SortSpec::asc(SortField::Name)));
        assert_eq!(names(&sorted), vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_no_field_keeps_input_order() {
        let products = vec![
            make_product("3", "C", None, None),
            make_product("1", "A", None, None),
            make_product("2", "B", None, None),
        ];

        let sorted = sort_products(&products, None);
        assert_eq!(names(&sorted), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_input_not_mutated() {
        let products = vec![
            make_product("2", "B", Some(2.0), None),
            make_product("1", "A", Some(1.0), None),
        ];

        let _sorted = sort_products(&products, Some(SortSpec::asc(SortField::Price)));
        assert_eq!(names(&products), vec!["B", "A"]);
    }

    #[test]
    fn test_stability_on_equal_keys() {
        let products = vec![
            make_product("1", "First", Some(100.0), None),
            make_product("2", "Second", Some(100.0), None),
            make_product("3", "Third", Some(100.0), None),
        ];

        let sorted = sort_products(&products, Some(SortSpec::asc(SortField::Price)));
        assert_eq!(names(&sorted), vec!["First", "Second", "Third"]);

        let spec = SortSpec { field: SortField::Price, direction: Direction::Desc };
        let sorted = sort_products(&products, Some(spec));
        assert_eq!(names(&sorted), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_sorting_is_fixed_point() {
        let products = vec![
            make_product("1", "B", Some(300.0), None),
            make_product("2", "A", Some(100.0), None),
            make_product("3", "C", Some(200.0), None),
        ];

        let spec = Some(SortSpec::asc(SortField::Price));
        let once = sort_products(&products, spec);
        let twice = sort_products(&once, spec);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_missing_values_sort_as_empty_string() {
        let products = vec![
            make_product("1", "Priced", Some(100.0), None),
            make_product("2", "Unpriced", None, None),
        ];

        // One side missing forces the string comparison: "" < "100"
        let sorted = sort_products(&products, Some(SortSpec::asc(SortField::Price)));
        assert_eq!(names(&sorted), vec!["Unpriced", "Priced"]);
    }

    #[test]
    fn test_mixed_type_field_falls_back_to_strings() {
        let mut odd = make_product("1", "Odd", None, None);
        odd.price = Some(json!("cheap"));
        let products = vec![odd, make_product("2", "Numeric", Some(42.0), None)];

        // "42" < "cheap" lexicographically
        let sorted = sort_products(&products, Some(SortSpec::asc(SortField::Price)));
        assert_eq!(names(&sorted), vec!["Numeric", "Odd"]);
    }

    #[test]
    fn test_numeric_beats_lexicographic_for_numbers() {
        let products = vec![
            make_product("1", "Nine", Some(9.0), None),
            make_product("2", "Ten", Some(10.0), None),
        ];

        // Lexicographically "10" < "9"; numerically 9 < 10
        let sorted = sort_products(&products, Some(SortSpec::asc(SortField::Price)));
        assert_eq!(names(&sorted), vec!["Nine", "Ten"]);
    }

    #[test]
    fn test_toggle_new_field_starts_ascending() {
        let spec = SortSpec::toggled(None, SortField::Price);
        assert_eq!(spec, SortSpec::asc(SortField::Price));

        let previous = Some(SortSpec::asc(SortField::Name));
        let spec = SortSpec::toggled(previous, SortField::Price);
        assert_eq!(spec, SortSpec::asc(SortField::Price));
    }

    #[test]
    fn test_toggle_same_field_flips_direction() {
        let first = SortSpec::toggled(None, SortField::Price);
        let second = SortSpec::toggled(Some(first), SortField::Price);
        let third = SortSpec::toggled(Some(second), SortField::Price);

        assert_eq!(first.direction, Direction::Asc);
        assert_eq!(second.direction, Direction::Desc);
        assert_eq!(third.direction, Direction::Asc);
    }

    #[test]
    fn test_toggle_twice_restores_order_on_unchanged_data() {
        let products = vec![
            make_product("1", "B", Some(100.0), None),
            make_product("2", "A", Some(100.0), None),
            make_product("3", "C", Some(50.0), None),
        ];

        let asc = SortSpec::toggled(None, SortField::Price);
        let desc = SortSpec::toggled(Some(asc), SortField::Price);
        let again = SortSpec::toggled(Some(desc), SortField::Price);

        let first = sort_products(&products, Some(asc));
        let third = sort_products(&products, Some(again));
        assert_eq!(first, third);
    }

    #[test]
    fn test_sort_field_parsing() {
        assert_eq!("serial".parse::<SortField>().unwrap(), SortField::Serial);
        assert_eq!("NAME".parse::<SortField>().unwrap(), SortField::Name);
        assert_eq!("price".parse::<SortField>().unwrap(), SortField::Price);
        assert_eq!("points".parse::<SortField>().unwrap(), SortField::Points);
        assert_eq!("tags".parse::<SortField>().unwrap(), SortField::Extra);

        let err = "color".parse::<SortField>().unwrap_err();
        assert!(err.contains("Unknown sort field"));
    }

    #[test]
    fn test_direction_flipped() {
        assert_eq!(Direction::Asc.flipped(), Direction::Desc);
        assert_eq!(Direction::Desc.flipped(), Direction::Asc);
    }
}
