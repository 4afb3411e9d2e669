use serde::Serialize;

use crate::domain::query::compute_last_page;

/// One page of search results plus the numbers a client needs to page through them.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PageResult<T> {
    pub data: Vec<T>,
    /// Count of all matching records, regardless of the page.
    pub total: i64,
    pub page: i64,
    pub last_page: i64,
}

impl<T> PageResult<T> {
    pub fn new(data: Vec<T>, total: i64, current_page: i64, page_size: i64) -> Self {
        Self {
            data,
            total,
            page: current_page.max(1),
            last_page: compute_last_page(total, page_size),
        }
    }
}
