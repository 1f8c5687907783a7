// Pager math for a result set
use serde::Serialize;

/// Most page buttons the pager shows at once
pub const MAX_PAGE_BUTTONS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: u32,
    pub page_size: usize,
    pub total: usize,
}

impl Pagination {
    pub fn new(page: u32, page_size: usize, total: usize) -> Self {
        Self {
            page: page.max(1),
            page_size,
            total,
        }
    }

    /// At least 1, even for an empty result set
    pub fn last_page(&self) -> u32 {
        if self.page_size == 0 {
            return 1;
        }
        let pages = ((self.total + self.page_size - 1) / self.page_size).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// A single page of results needs no pager
    pub fn is_visible(&self) -> bool {
        self.total > self.page_size
    }

    /// Page buttons, first ten at most
    pub fn pages(&self) -> Vec<u32> {
        (1..=self.last_page().min(MAX_PAGE_BUTTONS)).collect()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.last_page()
    }

    /// Validate a requested page; `None` when it is out of range
    pub fn go(&self, page: u32) -> Option<u32> {
        (1..=self.last_page()).contains(&page).then_some(page)
    }

    pub fn prev(&self) -> Option<u32> {
        self.go(self.page.saturating_sub(1))
    }

    pub fn next(&self) -> Option<u32> {
        self.go(self.page.saturating_add(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_page() {
        assert_eq!(Pagination::new(1, 12, 0).last_page(), 1);
        assert_eq!(Pagination::new(1, 12, 12).last_page(), 1);
        assert_eq!(Pagination::new(1, 12, 13).last_page(), 2);
        assert_eq!(Pagination::new(1, 12, 18).last_page(), 2);
        assert_eq!(Pagination::new(1, 0, 18).last_page(), 1);
    }

    #[test]
    fn test_visibility_and_buttons() {
        assert!(!Pagination::new(1, 12, 12).is_visible());
        assert!(Pagination::new(1, 12, 18).is_visible());
        assert_eq!(Pagination::new(1, 12, 18).pages(), vec![1, 2]);
        assert_eq!(Pagination::new(1, 1, 50).pages().len(), 10);
    }

    #[test]
    fn test_navigation_bounds() {
        let first = Pagination::new(1, 12, 18);
        assert!(!first.has_prev());
        assert!(first.has_next());
        assert_eq!(first.prev(), None);
        assert_eq!(first.next(), Some(2));

        let last = Pagination::new(2, 12, 18);
        assert_eq!(last.next(), None);
        assert_eq!(last.prev(), Some(1));

        assert_eq!(first.go(0), None);
        assert_eq!(first.go(3), None);
        assert_eq!(first.go(2), Some(2));
    }

    #[test]
    fn test_page_past_the_end() {
        let beyond = Pagination::new(3, 12, 18);
        assert!(beyond.has_prev());
        assert!(!beyond.has_next());
        assert_eq!(beyond.prev(), Some(2));
    }
}
