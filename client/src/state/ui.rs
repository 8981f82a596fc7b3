//! Local UI chrome state (navigation menu, artwork likes).
//!
//! DESIGN
//! ======
//! Keeps transient presentation toggles out of the content tables so pages
//! can flip them without touching catalog data. Nothing here is persisted.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use std::collections::HashSet;

/// Scroll offset (px) past which the header gains its shadow.
pub const SCROLL_SHADOW_THRESHOLD: f64 = 10.0;

/// Header navigation state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
    pub scrolled: bool,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Following a link in the mobile menu closes it.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn observe_scroll(&mut self, scroll_y: f64) {
        self.scrolled = scroll_y > SCROLL_SHADOW_THRESHOLD;
    }
}

/// Artworks the visitor has liked on the current page.
///
/// Likes are a local flip only; the displayed like counts never change.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LikedArtworks {
    ids: HashSet<&'static str>,
}

impl LikedArtworks {
    /// Flip the like for `id`, returning the new state.
    pub fn toggle(&mut self, id: &'static str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    #[must_use]
    pub fn is_liked(&self, id: &str) -> bool {
        self.ids.contains(id)
    }
}
