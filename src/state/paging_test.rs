use crate::net::types::PageMeta;

fn meta(page: u64, limit: u64, total: u64, pages: u64) -> PageMeta {
    PageMeta {
        page,
        limit,
        total,
        pages,
    }
}

// =============================================================
// shown_range / shown_label
// =============================================================

#[test]
fn middle_page_range() {
    assert_eq!(meta(2, 20, 45, 3).shown_range(), Some((21, 40)));
}

#[test]
fn middle_page_label() {
    assert_eq!(meta(2, 20, 45, 3).shown_label(), "Showing 21 to 40 of 45");
}

#[test]
fn first_page_starts_at_one() {
    assert_eq!(meta(1, 10, 35, 4).shown_range(), Some((1, 10)));
}

#[test]
fn last_page_clamps_to_total() {
    assert_eq!(meta(3, 20, 45, 3).shown_range(), Some((41, 45)));
}

#[test]
fn exact_multiple_last_page() {
    assert_eq!(meta(2, 10, 20, 2).shown_range(), Some((11, 20)));
}

#[test]
fn single_item() {
    assert_eq!(meta(1, 10, 1, 1).shown_range(), Some((1, 1)));
    assert_eq!(meta(1, 10, 1, 1).shown_label(), "Showing 1 to 1 of 1");
}

#[test]
fn empty_result_set_has_no_range() {
    assert_eq!(meta(1, 10, 0, 0).shown_range(), None);
    assert_eq!(meta(1, 10, 0, 0).shown_label(), "No results");
}

// =============================================================
// prev/next availability
// =============================================================

#[test]
fn prev_disabled_exactly_on_first_page() {
    assert!(!meta(1, 10, 45, 5).has_prev());
    assert!(meta(2, 10, 45, 5).has_prev());
    assert!(meta(5, 10, 45, 5).has_prev());
}

#[test]
fn next_disabled_exactly_on_last_page() {
    assert!(meta(1, 10, 45, 5).has_next());
    assert!(meta(4, 10, 45, 5).has_next());
    assert!(!meta(5, 10, 45, 5).has_next());
}

#[test]
fn single_page_disables_both() {
    let m = meta(1, 10, 7, 1);
    assert!(!m.has_prev());
    assert!(!m.has_next());
}
