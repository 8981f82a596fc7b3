use super::*;

#[test]
fn home_link_matches_only_root() {
    assert!(is_active("/", "/"));
    assert!(!is_active("/", "/about"));
}

#[test]
fn section_links_match_themselves_and_sub_paths() {
    assert!(is_active("/collections", "/collections"));
    assert!(is_active("/collections", "/collections/4"));
    assert!(!is_active("/collections", "/collectionsx"));
    assert!(!is_active("/visit", "/"));
}

#[test]
fn nav_lists_six_routes_starting_at_home() {
    assert_eq!(NAV_ITEMS.len(), 6);
    assert_eq!(NAV_ITEMS[0].href, "/");
    assert!(NAV_ITEMS.iter().any(|i| i.label == "Contact" && i.href == "/contact"));
}
