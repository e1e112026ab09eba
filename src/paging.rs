//! Page slicing over the visible list.

/// Page sizes the catalog offers.
pub const ALLOWED_PAGE_SIZES: &[usize] = &[5, 10, 20, 50];

/// Default number of products per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Returns the 1-based `page` of `items`, clipped to the list bounds.
/// Out-of-range pages (including page 0) yield an empty slice.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let Some(start) = page.checked_sub(1).and_then(|p| p.checked_mul(page_size)) else {
        return &[];
    };

    if page_size == 0 || start >= items.len() {
        return &[];
    }

    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Validates a page-size value against the allowed sizes (clap value parser).
pub fn parse_page_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|_| format!("Invalid page size: {}", s))?;
    if ALLOWED_PAGE_SIZES.contains(&size) {
        Ok(size)
    } else {
        Err(format!("Page size must be one of 5, 10, 20, 50 (got {})", size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_page() {
        let items: Vec<u32> = (0..23).collect();
        assert_eq!(page_slice(&items, 1, 10), (0..10).collect::<Vec<_>>());
        assert_eq!(page_slice(&items, 2, 10), (10..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_partial_last_page() {
        // 23 items, page size 10: page 3 holds exactly indices 20-22
        let items: Vec<u32> = (0..23).collect();
        assert_eq!(page_slice(&items, 3, 10), vec![20, 21, 22]);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let items: Vec<u32> = (0..23).collect();
        assert!(page_slice(&items, 4, 10).is_empty());
        assert!(page_slice(&items, 100, 10).is_empty());
    }

    #[test]
    fn test_page_zero_is_empty() {
        let items: Vec<u32> = (0..5).collect();
        assert!(page_slice(&items, 0, 10).is_empty());
    }

    #[test]
    fn test_empty_list() {
        let items: Vec<u32> = Vec::new();
        assert!(page_slice(&items, 1, 10).is_empty());
    }

    #[test]
    fn test_exact_multiple() {
        let items: Vec<u32> = (0..20).collect();
        assert_eq!(page_slice(&items, 2, 10).len(), 10);
        assert!(page_slice(&items, 3, 10).is_empty());
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let items: Vec<u32> = (0..5).collect();
        assert!(page_slice(&items, usize::MAX, usize::MAX).is_empty());
    }

    #[test]
    fn test_zero_page_size_is_empty() {
        let items: Vec<u32> = (0..5).collect();
        assert!(page_slice(&items, 1, 0).is_empty());
    }

    #[test]
    fn test_parse_page_size() {
        assert_eq!(parse_page_size("5").unwrap(), 5);
        assert_eq!(parse_page_size("10").unwrap(), 10);
        assert_eq!(parse_page_size("20").unwrap(), 20);
        assert_eq!(parse_page_size("50").unwrap(), 50);

        assert!(parse_page_size("7").unwrap_err().contains("must be one of"));
        assert!(parse_page_size("abc").unwrap_err().contains("Invalid page size"));
    }
}
