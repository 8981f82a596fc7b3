//! Catalog filtering for the collections page and the home gallery.
//!
//! DESIGN
//! ======
//! The filter is a plain value (category selector + raw search text) so the
//! predicate can be tested without a reactive runtime. Components hold it in
//! an `RwSignal<CatalogFilter>` and derive the visible rows from it.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::content::artworks::{ArtCategory, Artwork};

/// Category selector with the `All` sentinel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ArtCategory),
}

impl CategoryFilter {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }

    #[must_use]
    pub fn admits(self, category: ArtCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }

    /// Chip list for a filter bar: `All` followed by `categories`.
    #[must_use]
    pub fn chips(categories: &[ArtCategory]) -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(categories.iter().copied().map(Self::Only))
            .collect()
    }
}

/// Grid or list presentation of the catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// Category selection and search text applied to the artwork list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub category: CategoryFilter,
    /// Raw search text as typed; matched case-insensitively.
    pub query: String,
}

impl CatalogFilter {
    /// Category AND case-insensitive substring of title or artist.
    #[must_use]
    pub fn matches(&self, artwork: &Artwork) -> bool {
        if !self.category.admits(artwork.category) {
            return false;
        }
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        artwork.title.to_lowercase().contains(&needle) || artwork.artist.to_lowercase().contains(&needle)
    }

    /// Matching rows in catalog order.
    #[must_use]
    pub fn apply<'a>(&self, artworks: &'a [Artwork]) -> Vec<&'a Artwork> {
        artworks.iter().filter(|a| self.matches(a)).collect()
    }

    /// Restore both filters to their defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Result line shown above the catalog, e.g.
    /// `Showing 2 artworks in Abstract matching "har"`.
    #[must_use]
    pub fn summary(&self, count: usize) -> String {
        let mut line = format!("Showing {count} artworks");
        if let CategoryFilter::Only(category) = self.category {
            line.push_str(" in ");
            line.push_str(category.label());
        }
        if !self.query.is_empty() {
            line.push_str(&format!(" matching \"{}\"", self.query));
        }
        line
    }
}
