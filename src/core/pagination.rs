/// 同時顯示的頁碼數量
pub const WINDOW_SIZE: u32 = 5;
const WINDOW_RADIUS: u32 = 2;

/// 分頁列上的一個元素，依畫面順序排列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Previous { enabled: bool },
    Page { number: u32, current: bool },
    Ellipsis,
    Next { enabled: bool },
}

/// 每次渲染時由 `(current, total)` 推導，不保存
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub start: u32,
    pub end: u32,
    pub pages: Vec<u32>,
    pub current: u32,
    pub total: u32,
}

impl PageWindow {
    pub fn compute(current: u32, total: u32) -> Self {
        let mut start = current.saturating_sub(WINDOW_RADIUS).max(1);
        let mut end = current.saturating_add(WINDOW_RADIUS).min(total);

        if end < start || end - start < WINDOW_SIZE - 1 {
            if start == 1 {
                end = WINDOW_SIZE.min(total);
            } else {
                start = end.saturating_sub(WINDOW_SIZE - 1).max(1);
            }
        }

        let pages = if end >= start {
            (start..=end).collect()
        } else {
            Vec::new()
        };

        Self {
            start,
            end,
            pages,
            current,
            total,
        }
    }

    /// 只有一頁 (或沒有結果) 時不顯示分頁列
    pub fn is_hidden(&self) -> bool {
        self.total <= 1
    }

    pub fn shows_first_page(&self) -> bool {
        self.start > 1
    }

    pub fn has_leading_ellipsis(&self) -> bool {
        self.start > 2
    }

    pub fn shows_last_page(&self) -> bool {
        self.end < self.total
    }

    pub fn has_trailing_ellipsis(&self) -> bool {
        self.end.saturating_add(1) < self.total
    }

    pub fn previous_enabled(&self) -> bool {
        self.current != 1
    }

    pub fn next_enabled(&self) -> bool {
        self.current != self.total
    }

    pub fn previous_page(&self) -> Option<u32> {
        self.previous_enabled()
            .then(|| self.current.saturating_sub(1))
            .filter(|page| *page >= 1)
    }

    pub fn next_page(&self) -> Option<u32> {
        self.next_enabled().then(|| self.current.saturating_add(1))
    }

    /// 展開成完整的分頁列；隱藏時回傳空清單
    pub fn items(&self) -> Vec<PageItem> {
        if self.is_hidden() {
            return Vec::new();
        }

        let mut items = vec![PageItem::Previous {
            enabled: self.previous_enabled(),
        }];

        if self.shows_first_page() {
            items.push(PageItem::Page {
                number: 1,
                current: self.current == 1,
            });
            if self.has_leading_ellipsis() {
                items.push(PageItem::Ellipsis);
            }
        }

        items.extend(self.pages.iter().map(|&number| PageItem::Page {
            number,
            current: number == self.current,
        }));

        if self.shows_last_page() {
            if self.has_trailing_ellipsis() {
                items.push(PageItem::Ellipsis);
            }
            items.push(PageItem::Page {
                number: self.total,
                current: self.current == self.total,
            });
        }

        items.push(PageItem::Next {
            enabled: self.next_enabled(),
        });
        items
    }
}

pub fn compute_window(current: u32, total: u32) -> PageWindow {
    PageWindow::compute(current, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_of_many() {
        let window = compute_window(1, 20);

        assert_eq!(window.pages, vec![1, 2, 3, 4, 5]);
        assert!(!window.shows_first_page());
        assert!(!window.has_leading_ellipsis());
        assert!(window.has_trailing_ellipsis());
        assert!(window.shows_last_page());
        assert!(!window.previous_enabled());
        assert!(window.next_enabled());
    }

    #[test]
    fn test_middle_page() {
        let window = compute_window(10, 20);

        assert_eq!(window.pages, vec![8, 9, 10, 11, 12]);
        assert!(window.shows_first_page());
        assert!(window.has_leading_ellipsis());
        assert!(window.shows_last_page());
        assert!(window.has_trailing_ellipsis());
    }

    #[test]
    fn test_last_page() {
        let window = compute_window(20, 20);

        assert_eq!(window.pages, vec![16, 17, 18, 19, 20]);
        assert!(!window.next_enabled());
        assert_eq!(window.next_page(), None);
        assert_eq!(window.previous_page(), Some(19));
        assert!(!window.shows_last_page());
    }

    #[test]
    fn test_boundary_without_ellipsis() {
        // page 1 adjacent to the window: button but no ellipsis
        let window = compute_window(4, 7);
        assert_eq!(window.pages, vec![2, 3, 4, 5, 6]);
        assert!(window.shows_first_page());
        assert!(!window.has_leading_ellipsis());
        assert!(window.shows_last_page());
        assert!(!window.has_trailing_ellipsis());
    }

    #[test]
    fn test_fewer_pages_than_window() {
        let window = compute_window(2, 3);
        assert_eq!(window.pages, vec![1, 2, 3]);
        assert!(!window.shows_first_page());
        assert!(!window.shows_last_page());

        let window = compute_window(3, 3);
        assert_eq!(window.pages, vec![1, 2, 3]);
    }

    #[test]
    fn test_single_page_is_hidden() {
        assert!(compute_window(1, 1).is_hidden());
        assert!(compute_window(1, 0).is_hidden());
        assert!(compute_window(1, 1).items().is_empty());
        assert!(!compute_window(1, 2).is_hidden());
    }

    #[test]
    fn test_current_beyond_total_is_pulled_back() {
        let window = compute_window(25, 20);
        assert_eq!(window.pages, vec![16, 17, 18, 19, 20]);
    }

    #[test]
    fn test_items_layout() {
        let items = compute_window(10, 20).items();

        assert_eq!(items.first(), Some(&PageItem::Previous { enabled: true }));
        assert_eq!(items[1], PageItem::Page { number: 1, current: false });
        assert_eq!(items[2], PageItem::Ellipsis);
        assert_eq!(items[5], PageItem::Page { number: 10, current: true });
        assert_eq!(items[items.len() - 3], PageItem::Ellipsis);
        assert_eq!(items[items.len() - 2], PageItem::Page { number: 20, current: false });
        assert_eq!(items.last(), Some(&PageItem::Next { enabled: true }));
        assert_eq!(items.len(), 11);
    }
}
