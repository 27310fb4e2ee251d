/// One page of a filtered roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number that was requested
    pub current: u32,
    pub total_pages: u32,
    pub total_items: usize,
}

impl<T: Clone> Page<T> {
    /// Slice `items` into page `page` of `page_size` entries.
    ///
    /// Page 0 is read as page 1. A page past the end is empty rather than
    /// clamped to the last page.
    pub fn slice(items: &[T], page: u32, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let current = page.max(1);
        let total_items = items.len();
        let total_pages = total_items.div_ceil(page_size) as u32;

        let start = (current as usize - 1).saturating_mul(page_size);
        let page_items = items
            .iter()
            .skip(start)
            .take(page_size)
            .cloned()
            .collect();

        Self {
            items: page_items,
            current,
            total_pages,
            total_items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
