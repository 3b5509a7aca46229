//! Pagination meta attached to list responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fixed four-field pagination block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationMeta {
    #[schema(example = 1)]
    pub current_page: i32,
    #[schema(example = 10)]
    pub page_size: i32,
    pub total_records: i32,
    pub total_pages: i32,
}

impl PaginationMeta {
    /// Builds the meta block, deriving `total_pages` from the counts.
    pub fn new(current_page: i32, page_size: i32, total_records: i32) -> Self {
        Self {
            current_page,
            page_size,
            total_records,
            total_pages: total_pages(total_records, page_size),
        }
    }
}

/// Number of pages needed for `total_records` rows at `page_size` rows
/// per page, rounding up. Zero when either count is not positive, so a
/// malformed page size can never panic the response path.
pub fn total_pages(total_records: i32, page_size: i32) -> i32 {
    if total_records <= 0 || page_size <= 0 {
        return 0;
    }
    let pages = (i64::from(total_records) + i64::from(page_size) - 1) / i64::from(page_size);
    pages.min(i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_multiple() {
        assert_eq!(total_pages(100, 10), 10);
    }

    #[test]
    fn test_rounds_up_on_remainder() {
        assert_eq!(total_pages(101, 10), 11);
        assert_eq!(total_pages(9, 10), 1);
    }

    #[test]
    fn test_zero_page_size_yields_zero() {
        assert_eq!(total_pages(50, 0), 0);
        assert_eq!(total_pages(50, -1), 0);
    }

    #[test]
    fn test_zero_records_yields_zero() {
        assert_eq!(total_pages(0, 10), 0);
    }

    #[test]
    fn test_meta_derives_total_pages() {
        let meta = PaginationMeta::new(2, 25, 51);
        assert_eq!(meta.total_pages, 3);
        assert_eq!(meta.page_size, 25);
    }
}
