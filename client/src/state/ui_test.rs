use super::*;

// =============================================================
// NavState
// =============================================================

#[test]
fn nav_state_default_menu_closed_and_unscrolled() {
    let nav = NavState::default();
    assert!(!nav.menu_open);
    assert!(!nav.scrolled);
}

#[test]
fn toggle_menu_flips_open_state() {
    let mut nav = NavState::default();
    nav.toggle_menu();
    assert!(nav.menu_open);
    nav.toggle_menu();
    assert!(!nav.menu_open);
}

#[test]
fn close_menu_is_idempotent() {
    let mut nav = NavState { menu_open: true, scrolled: false };
    nav.close_menu();
    nav.close_menu();
    assert!(!nav.menu_open);
}

#[test]
fn scroll_shadow_starts_past_threshold() {
    let mut nav = NavState::default();
    nav.observe_scroll(SCROLL_SHADOW_THRESHOLD);
    assert!(!nav.scrolled);
    nav.observe_scroll(SCROLL_SHADOW_THRESHOLD + 1.0);
    assert!(nav.scrolled);
    nav.observe_scroll(0.0);
    assert!(!nav.scrolled);
}

// =============================================================
// LikedArtworks
// =============================================================

#[test]
fn toggle_like_flips_per_artwork() {
    let mut likes = LikedArtworks::default();
    assert!(likes.toggle("1"));
    assert!(likes.is_liked("1"));
    assert!(!likes.is_liked("2"));
    assert!(!likes.toggle("1"));
    assert!(!likes.is_liked("1"));
}

#[test]
fn likes_are_independent() {
    let mut likes = LikedArtworks::default();
    likes.toggle("1");
    likes.toggle("3");
    likes.toggle("1");
    assert!(!likes.is_liked("1"));
    assert!(likes.is_liked("3"));
}
