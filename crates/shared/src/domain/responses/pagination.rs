use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct Pagination {
    pub page: i64,
    pub page_size: i64,
    pub total_items: i64,
    pub total_pages: i64,
}

impl Pagination {
    pub fn new(page: i64, page_size: i64, total_items: i64) -> Self {
        let total_pages = if page_size > 0 {
            (total_items + page_size - 1) / page_size
        } else {
            0
        };

        Self {
            page,
            page_size,
            total_items,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(Pagination::new(0, 10, 0).total_pages, 0);
        assert_eq!(Pagination::new(0, 10, 1).total_pages, 1);
        assert_eq!(Pagination::new(0, 10, 10).total_pages, 1);
        assert_eq!(Pagination::new(0, 10, 11).total_pages, 2);
        assert_eq!(Pagination::new(2, 25, 51).total_pages, 3);
    }
}
