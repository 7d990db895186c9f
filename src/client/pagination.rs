//! Pagination helpers for API requests
//!
//! Agendor pages are 1-indexed and capped at 100 items.

/// Maximum page size accepted by the Agendor API.
pub const MAX_PAGE_SIZE: usize = 100;

/// Pagination parameters for list requests.
///
/// # Example
/// ```ignore
/// let params = PaginationParams::new().page(2).per_page(50);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationParams {
    /// Page number (1-indexed)
    pub page: Option<usize>,
    /// Number of items per page (max 100)
    pub per_page: Option<usize>,
}

impl PaginationParams {
    /// Create new pagination params with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page number.
    pub fn page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size.
    pub fn per_page(mut self, size: usize) -> Self {
        self.per_page = Some(size);
        self
    }

    /// Convert to query string parameters.
    ///
    /// Page 0 is treated as page 1 and sizes are clamped to `1..=MAX_PAGE_SIZE`.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(page) = self.page {
            params.push(("page", page.max(1).to_string()));
        }

        if let Some(size) = self.per_page {
            params.push(("per_page", size.clamp(1, MAX_PAGE_SIZE).to_string()));
        }

        params
    }
}
