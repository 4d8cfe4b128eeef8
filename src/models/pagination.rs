use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: u32,
    pub per_page: u32,
    pub total: i64,
    pub total_pages: i64,
}

impl Pagination {
    pub fn new(current_page: u32, per_page: u32, total: i64) -> Self {
        let per_page_i = i64::from(per_page.max(1));
        Self {
            current_page,
            per_page,
            total,
            total_pages: (total + per_page_i - 1) / per_page_i,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}
