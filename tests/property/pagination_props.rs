//! Page arithmetic invariants.

use geohub::{page_window, PageMarker, Pagination};
use proptest::prelude::*;

proptest! {
    /// Every page is in range and the pages partition the items.
    #[test]
    fn prop_pages_partition_items(page_size in 1usize..20, total in 0usize..200) {
        let base = Pagination::new(page_size, total);
        let mut covered = 0;
        for page in 1..=base.total_pages() {
            let range = base.with_page(page).range();
            prop_assert_eq!(range.start, covered);
            prop_assert!(range.len() <= page_size);
            prop_assert!(!range.is_empty());
            covered = range.end;
        }
        prop_assert_eq!(covered, total);
    }

    /// Any requested page lands inside `1..=max(total_pages, 1)`.
    #[test]
    fn prop_set_page_clamps(page_size in 1usize..20, total in 0usize..200, page in 0usize..100) {
        let mut pagination = Pagination::new(page_size, total);
        let landed = pagination.set_page(page);
        prop_assert!(landed >= 1);
        prop_assert!(landed <= pagination.total_pages().max(1));
        if (1..=pagination.total_pages()).contains(&page) {
            prop_assert_eq!(landed, page);
        }
    }

    /// The window shows first, last and current, and never two gaps in a row.
    #[test]
    fn prop_window_shape(total in 1usize..500, current in 1usize..500) {
        let current = current.min(total);
        let window = page_window(current, total);
        for page in [1, current, total] {
            prop_assert!(window.contains(&PageMarker::Page(page)));
        }
        prop_assert!(window.len() <= 7);
        prop_assert!(!window
            .windows(2)
            .any(|w| w[0] == PageMarker::Ellipsis && w[1] == PageMarker::Ellipsis));
    }
}
