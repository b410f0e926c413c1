//! Page-link windows for rendering a pagination control.

/// Widths of the visible regions in a pager: the leading/trailing edges and
/// the band around the current page. Elided runs render as `None`.
#[derive(Clone, Copy, Debug)]
pub struct PageWindow {
    pub edge: usize,
    pub before_current: usize,
    pub after_current: usize,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            edge: 2,
            before_current: 2,
            after_current: 4,
        }
    }
}

/// Computes the 1-based page links to render for `current_page` out of
/// `total_pages`, with `None` marking an elided run.
pub fn page_links(
    current_page: usize,
    total_pages: usize,
    window: &PageWindow,
) -> Vec<Option<usize>> {
    if total_pages == 0 {
        return Vec::new();
    }
    let current_page = current_page.clamp(1, total_pages);

    let mut links = Vec::new();

    let left_end = (1 + window.edge).min(total_pages + 1);
    links.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(window.before_current));
    let mid_end = (current_page + window.after_current + 1).min(total_pages + 1);
    if mid_start > left_end {
        links.push(None);
    }
    links.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(total_pages.saturating_sub(window.edge) + 1);
    if right_start > mid_end {
        links.push(None);
    }
    links.extend((right_start..=total_pages).map(Some));

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_pages_no_links() {
        assert!(page_links(1, 0, &PageWindow::default()).is_empty());
    }

    #[test]
    fn short_run_has_no_gaps() {
        let links = page_links(2, 5, &PageWindow::default());
        assert_eq!(links, vec![Some(1), Some(2), Some(3), Some(4), Some(5)]);
    }

    #[test]
    fn middle_page_elides_both_sides() {
        let links = page_links(10, 20, &PageWindow::default());
        assert_eq!(links.first(), Some(&Some(1)));
        assert_eq!(links.last(), Some(&Some(20)));
        assert_eq!(links.iter().filter(|l| l.is_none()).count(), 2);
        assert!(links.contains(&Some(10)));
        // The band around the current page is contiguous.
        for p in 8..=14 {
            assert!(links.contains(&Some(p)));
        }
    }

    #[test]
    fn current_page_is_clamped_into_range() {
        let links = page_links(99, 5, &PageWindow::default());
        assert_eq!(links, vec![Some(1), Some(2), Some(3), Some(4), Some(5)]);
    }
}
