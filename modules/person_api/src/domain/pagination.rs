/// LIMIT/OFFSET window for list queries. Purely mechanical slicing: no total
/// count, no has-more flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: i64,
    page_size: i64,
}

impl Pagination {
    /// `page` is 1-based. Returns None for `page < 1` or `page_size < 0`.
    pub fn new(page: i64, page_size: i64) -> Option<Self> {
        (page >= 1 && page_size >= 0).then_some(Self { page, page_size })
    }

    /// Interpret raw `page` / `pageSize` query values.
    ///
    /// - `pageSize` missing or not an integer: no pagination.
    /// - `page` missing, not an integer, or 0: first page.
    /// - negative `page` or `pageSize`: no pagination.
    pub fn from_query(page: Option<&str>, page_size: Option<&str>) -> Option<Self> {
        let page_size = page_size?.trim().parse::<i64>().ok()?;
        let page = match page.and_then(|p| p.trim().parse::<i64>().ok()) {
            None | Some(0) => 1,
            Some(p) => p,
        };
        Self::new(page, page_size)
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.page_size
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }
}
