//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

/// Pagination parameters for list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: u32,

    /// Number of items per page
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

impl Pagination {
    /// Create a new pagination with custom values
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(MIN_LIMIT, MAX_LIMIT),
        }
    }

    /// Pull the page back onto the last page when it points past the data.
    ///
    /// Only applies when the total exceeds a single page; a short result set
    /// keeps the requested page and yields an empty slice.
    pub fn clamp_to_total(self, total: u64) -> Self {
        let limit = u64::from(self.limit);
        let page = u64::from(self.page);
        if total > limit && page > total / limit {
            let last_page = total.div_ceil(limit);
            return Self {
                page: last_page as u32,
                limit: self.limit,
            };
        }
        self
    }

    /// Calculate the offset for database queries
    ///
    /// Computed in `u64` since an unclamped page times the limit can exceed `u32`.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }

    /// Calculate offset as i64 for SQL queries
    pub fn offset_i64(&self) -> i64 {
        i64::try_from(self.offset()).unwrap_or(i64::MAX)
    }

    /// Calculate limit as i64 for SQL queries
    pub fn limit_i64(&self) -> i64 {
        i64::from(self.limit)
    }
}

/// Paginated response wrapper with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// The actual data items
    pub data: Vec<T>,

    /// Current page number
    pub page: u32,

    /// Items per page
    pub limit: u32,

    /// Total number of items
    pub total: u64,

    /// Total number of pages
    pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
    /// Create a new paginated response
    pub fn new(data: Vec<T>, pagination: Pagination, total: u64) -> Self {
        Self {
            data,
            page: pagination.page,
            limit: pagination.limit,
            total,
            total_pages: Self::calculate_total_pages(total, pagination.limit),
        }
    }

    fn calculate_total_pages(total: u64, limit: u32) -> u32 {
        if total == 0 || limit == 0 {
            return 0;
        }
        total.div_ceil(u64::from(limit)) as u32
    }

    /// Transform the data items using a function
    pub fn map<U, F>(self, f: F) -> PaginatedResponse<U>
    where
        F: FnMut(T) -> U,
    {
        PaginatedResponse {
            data: self.data.into_iter().map(f).collect(),
            page: self.page,
            limit: self.limit,
            total: self.total,
            total_pages: self.total_pages,
        }
    }
}

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_LIMIT: u32 = 10;
const MIN_LIMIT: u32 = 1;
const MAX_LIMIT: u32 = 100;

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sanitizes_values() {
        let pagination = Pagination::new(0, 1000);
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.limit, 100);
    }

    #[test]
    fn test_offset() {
        assert_eq!(Pagination::new(1, 10).offset(), 0);
        assert_eq!(Pagination::new(3, 10).offset(), 20);
    }

    #[test]
    fn test_clamp_moves_page_to_last_page() {
        let pagination = Pagination::new(9, 10).clamp_to_total(25);
        assert_eq!(pagination.page, 3);
        assert_eq!(pagination.offset(), 20);
    }

    #[test]
    fn test_clamp_keeps_page_in_range() {
        let pagination = Pagination::new(2, 10).clamp_to_total(25);
        assert_eq!(pagination.page, 2);
    }

    #[test]
    fn test_clamp_ignores_single_page_totals() {
        // total not larger than one page: the requested page is kept
        let pagination = Pagination::new(4, 10).clamp_to_total(7);
        assert_eq!(pagination.page, 4);
    }

    #[test]
    fn test_offset_for_huge_page_on_empty_table() {
        let pagination = Pagination::new(u32::MAX, 100).clamp_to_total(0);
        assert_eq!(pagination.page, u32::MAX);
        assert_eq!(pagination.offset(), u64::from(u32::MAX - 1) * 100);
        assert_eq!(pagination.offset_i64(), 429_496_729_400);
    }

    #[test]
    fn test_total_pages() {
        let response = PaginatedResponse::new(vec![1, 2, 3], Pagination::new(1, 10), 21);
        assert_eq!(response.total_pages, 3);

        let empty: PaginatedResponse<i32> = PaginatedResponse::new(vec![], Pagination::default(), 0);
        assert_eq!(empty.total_pages, 0);
    }
}
