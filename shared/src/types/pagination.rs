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
    /// Create a new pagination, clamping values into the accepted range
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(MIN_LIMIT, MAX_LIMIT),
        }
    }

    /// Calculate the offset for database queries
    pub fn offset(&self) -> u32 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    /// Calculate offset as i64 for SQL queries
    pub fn offset_i64(&self) -> i64 {
        i64::from(self.offset())
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

    /// Whether there's a next page
    pub has_next: bool,

    /// Whether there's a previous page
    pub has_prev: bool,
}

impl<T> PaginatedResponse<T> {
    /// Create a new paginated response
    pub fn new(data: Vec<T>, pagination: Pagination, total: u64) -> Self {
        let total_pages = Self::calculate_total_pages(total, pagination.limit);

        Self {
            data,
            page: pagination.page,
            limit: pagination.limit,
            total,
            total_pages,
            has_next: pagination.page < total_pages,
            has_prev: pagination.page > 1,
        }
    }

    fn calculate_total_pages(total: u64, limit: u32) -> u32 {
        if total == 0 || limit == 0 {
            return 0;
        }
        let pages = total.div_ceil(u64::from(limit));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }
}

/// Default page number
pub const DEFAULT_PAGE: u32 = 1;

/// Default items per page
pub const DEFAULT_LIMIT: u32 = 20;

/// Minimum items per page
pub const MIN_LIMIT: u32 = 1;

/// Maximum items per page
pub const MAX_LIMIT: u32 = 50;

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}
