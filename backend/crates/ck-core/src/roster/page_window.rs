use serde::Serialize;

/// Page-selection control state: a short run of page numbers around the
/// current page, ellipsis markers, and Prev/Next targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub pages: Vec<u32>,
    pub current: u32,
    pub leading_ellipsis: bool,
    pub trailing_ellipsis: bool,
    /// `None` on the first page
    pub prev: Option<u32>,
    /// `None` on the last page
    pub next: Option<u32>,
}

impl PageWindow {
    /// Build the control, or `None` when there is at most one page.
    pub fn new(current: u32, total_pages: u32, max_visible: u32) -> Option<Self> {
        if total_pages <= 1 {
            return None;
        }

        let max_visible = max_visible.max(1);
        let current = current.clamp(1, total_pages);

        let mut start = current.saturating_sub(1).max(1);
        let end = total_pages.min(start + max_visible - 1);
        if end - start < max_visible - 1 {
            start = (end + 1).saturating_sub(max_visible).max(1);
        }

        Some(Self {
            pages: (start..=end).collect(),
            current,
            leading_ellipsis: start > 1,
            trailing_ellipsis: end < total_pages,
            prev: (current > 1).then(|| current - 1),
            next: (current < total_pages).then(|| current + 1),
        })
    }
}
