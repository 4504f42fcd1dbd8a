//! 分页控件状态

/// 分页位置（只读视图，由已加载的页面推导）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 当前页（从 1 开始）
    pub page: u32,
    /// 总页数
    pub total_pages: u32,
}

impl Pagination {
    pub fn new(page: u32, total_pages: u32) -> Self {
        Self { page, total_pages }
    }

    /// "上一页" 是否可用
    pub fn prev_enabled(self) -> bool {
        self.page > 1
    }

    /// "下一页" 是否可用
    ///
    /// 总数为 0 时总页数也为 0，此时同样不可用。
    pub fn next_enabled(self) -> bool {
        self.page < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_disables_previous() {
        let p = Pagination::new(1, 9);
        assert!(!p.prev_enabled());
        assert!(p.next_enabled());
    }

    #[test]
    fn last_page_disables_next() {
        let p = Pagination::new(9, 9);
        assert!(p.prev_enabled());
        assert!(!p.next_enabled());
    }

    #[test]
    fn single_page_disables_both() {
        let p = Pagination::new(1, 1);
        assert!(!p.prev_enabled());
        assert!(!p.next_enabled());
    }

    #[test]
    fn empty_listing_disables_next() {
        let p = Pagination::new(1, 0);
        assert!(!p.next_enabled());
    }

    #[test]
    fn every_middle_page_enables_both() {
        for page in 2..9 {
            let p = Pagination::new(page, 9);
            assert!(p.prev_enabled(), "page {page}");
            assert!(p.next_enabled(), "page {page}");
        }
    }
}
