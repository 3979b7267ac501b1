use super::*;

fn pair<'a>(pairs: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.as_str())
}

fn on_page(page: u64) -> MenuFilter {
    MenuFilter {
        page,
        ..MenuFilter::default()
    }
}

// =============================================================
// Page reset rules
// =============================================================

#[test]
fn search_change_resets_page() {
    let mut filter = on_page(3);
    filter.set_search("paneer".to_owned());
    assert_eq!(filter.page, 1);
}

#[test]
fn category_and_cuisine_reset_page() {
    let mut filter = on_page(3);
    filter.set_category("lunch".to_owned());
    assert_eq!(filter.page, 1);

    filter.set_page(2);
    filter.set_cuisine("gujarati".to_owned());
    assert_eq!(filter.page, 1);
}

#[test]
fn dietary_and_tag_toggles_reset_page() {
    let mut filter = on_page(2);
    filter.toggle_dietary("vegan");
    assert_eq!(filter.page, 1);

    filter.set_page(2);
    filter.toggle_tag("spicy");
    assert_eq!(filter.page, 1);
}

#[test]
fn availability_change_resets_page() {
    let mut filter = on_page(2);
    filter.set_available(Some(true));
    assert_eq!(filter.page, 1);
}

#[test]
fn sort_change_resets_page() {
    let mut filter = on_page(2);
    filter.sort_by(MenuSortKey::Price);
    assert_eq!(filter.page, 1);
}

#[test]
fn page_navigation_keeps_other_fields() {
    let mut filter = MenuFilter::default();
    filter.set_search("dal".to_owned());
    filter.set_page(4);
    assert_eq!(filter.page, 4);
    assert_eq!(filter.search, "dal");
}

// =============================================================
// Sorting
// =============================================================

#[test]
fn new_sort_key_starts_ascending() {
    let mut filter = MenuFilter::default();
    filter.sort_by(MenuSortKey::Price);
    assert_eq!(filter.sort_key, MenuSortKey::Price);
    assert_eq!(filter.sort_dir, SortDir::Asc);
}

#[test]
fn repeated_sort_key_flips_direction() {
    let mut filter = MenuFilter::default();
    filter.sort_by(MenuSortKey::Price);
    filter.sort_by(MenuSortKey::Price);
    assert_eq!(filter.sort_dir, SortDir::Desc);
    filter.sort_by(MenuSortKey::Price);
    assert_eq!(filter.sort_dir, SortDir::Asc);
}

// =============================================================
// Toggles
// =============================================================

#[test]
fn set_tags_replaces_and_resets_page() {
    let mut filter = on_page(3);
    filter.toggle_tag("mild");
    filter.set_page(3);
    filter.set_tags(vec!["spicy".to_owned(), "new".to_owned()]);
    assert_eq!(filter.tags, vec!["spicy".to_owned(), "new".to_owned()]);
    assert_eq!(filter.page, 1);
}

#[test]
fn dietary_toggle_adds_then_removes() {
    let mut filter = MenuFilter::default();
    filter.toggle_dietary("vegan");
    assert_eq!(filter.dietary, vec!["vegan".to_owned()]);
    filter.toggle_dietary("vegan");
    assert!(filter.dietary.is_empty());
}

// =============================================================
// Query pairs
// =============================================================

#[test]
fn default_filter_sends_pagination_and_sort_only() {
    let pairs = MenuFilter::default().query_pairs();
    assert_eq!(pair(&pairs, "page"), Some("1"));
    assert_eq!(pair(&pairs, "limit"), Some("12"));
    assert_eq!(pair(&pairs, "sortBy"), Some("createdAt"));
    assert_eq!(pair(&pairs, "order"), Some("asc"));
    assert_eq!(pair(&pairs, "search"), None);
    assert_eq!(pair(&pairs, "dietary"), None);
    assert_eq!(pair(&pairs, "available"), None);
}

#[test]
fn multi_value_fields_are_comma_joined() {
    let mut filter = MenuFilter::default();
    filter.toggle_dietary("vegan");
    filter.toggle_dietary("gluten-free");
    filter.toggle_tag("spicy");
    let pairs = filter.query_pairs();
    assert_eq!(pair(&pairs, "dietary"), Some("vegan,gluten-free"));
    assert_eq!(pair(&pairs, "tags"), Some("spicy"));
}

#[test]
fn availability_filter_is_sent_when_set() {
    let mut filter = MenuFilter::default();
    filter.set_available(Some(false));
    assert_eq!(pair(&filter.query_pairs(), "available"), Some("false"));
}
