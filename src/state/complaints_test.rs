use super::*;

fn pair<'a>(pairs: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.as_str())
}

// =============================================================
// Page reset rules
// =============================================================

#[test]
fn phone_change_resets_page() {
    let mut filter = ComplaintFilter {
        page: 4,
        ..ComplaintFilter::default()
    };
    filter.set_phone("98765".to_owned());
    assert_eq!(filter.page, 1);
}

#[test]
fn date_range_change_resets_page() {
    let mut filter = ComplaintFilter {
        page: 3,
        ..ComplaintFilter::default()
    };
    filter.set_from("2025-01-01".to_owned());
    assert_eq!(filter.page, 1);

    filter.set_page(3);
    filter.set_to("2025-02-01".to_owned());
    assert_eq!(filter.page, 1);
}

#[test]
fn page_navigation_does_not_reset() {
    let mut filter = ComplaintFilter::default();
    filter.set_phone("98765".to_owned());
    filter.set_page(5);
    assert_eq!(filter.page, 5);
    assert_eq!(filter.phone, "98765");
}

#[test]
fn page_is_clamped_to_at_least_one() {
    let mut filter = ComplaintFilter::default();
    filter.set_page(0);
    assert_eq!(filter.page, 1);
}

// =============================================================
// Query pairs
// =============================================================

#[test]
fn default_filter_sends_only_pagination() {
    let pairs = ComplaintFilter::default().query_pairs();
    assert_eq!(pair(&pairs, "page"), Some("1"));
    assert_eq!(pair(&pairs, "limit"), Some("10"));
    assert_eq!(pair(&pairs, "phone"), None);
    assert_eq!(pair(&pairs, "from"), None);
    assert_eq!(pair(&pairs, "to"), None);
}

#[test]
fn blank_and_whitespace_fields_are_omitted() {
    let mut filter = ComplaintFilter::default();
    filter.set_phone("   ".to_owned());
    assert_eq!(pair(&filter.query_pairs(), "phone"), None);
}

#[test]
fn set_fields_are_trimmed_and_sent() {
    let mut filter = ComplaintFilter::default();
    filter.set_phone(" 98765 ".to_owned());
    filter.set_from("2025-01-01".to_owned());
    filter.set_to("2025-01-31".to_owned());
    let pairs = filter.query_pairs();
    assert_eq!(pair(&pairs, "phone"), Some("98765"));
    assert_eq!(pair(&pairs, "from"), Some("2025-01-01"));
    assert_eq!(pair(&pairs, "to"), Some("2025-01-31"));
}

#[test]
fn equal_filters_compare_equal() {
    // Pages refetch on value inequality of the whole filter object.
    let a = ComplaintFilter::default();
    let mut b = ComplaintFilter::default();
    assert_eq!(a, b);
    b.set_phone("1".to_owned());
    assert_ne!(a, b);
}
