//! Artwork catalog shown on the collections page and the home gallery.

#[cfg(test)]
#[path = "artworks_test.rs"]
mod artworks_test;

/// Catalog category of an artwork.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArtCategory {
    Contemporary,
    Photography,
    Abstract,
    MixedMedia,
    Digital,
    Traditional,
}

impl ArtCategory {
    /// Every category, in the order the filter chips list them.
    pub const ALL: [Self; 6] = [
        Self::Contemporary,
        Self::Photography,
        Self::Abstract,
        Self::MixedMedia,
        Self::Digital,
        Self::Traditional,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Contemporary => "Contemporary",
            Self::Photography => "Photography",
            Self::Abstract => "Abstract",
            Self::MixedMedia => "Mixed Media",
            Self::Digital => "Digital",
            Self::Traditional => "Traditional",
        }
    }
}

/// A read-only catalog row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Artwork {
    pub id: &'static str,
    pub title: &'static str,
    pub artist: &'static str,
    pub year: u16,
    pub medium: &'static str,
    pub dimensions: &'static str,
    pub image: &'static str,
    pub category: ArtCategory,
    pub description: &'static str,
    pub price: Option<&'static str>,
    pub likes: u32,
    pub views: u32,
    pub available: bool,
}

pub const ARTWORKS: &[Artwork] = &[
    Artwork {
        id: "1",
        title: "Serenity in Motion",
        artist: "Elena Rodriguez",
        year: 2023,
        medium: "Oil on Canvas",
        dimensions: "120 x 90 cm",
        image: "/images/l-intro-1733933490.jpg",
        category: ArtCategory::Contemporary,
        description: "A mesmerizing piece that captures the essence of movement and tranquility in perfect harmony.",
        price: Some("$15,000"),
        likes: 124,
        views: 1250,
        available: true,
    },
    Artwork {
        id: "2",
        title: "Urban Reflections",
        artist: "Marcus Chen",
        year: 2022,
        medium: "Digital Photography",
        dimensions: "100 x 70 cm",
        image: "/images/museum.jpg",
        category: ArtCategory::Photography,
        description: "An intimate exploration of city life through the lens of contemporary photography.",
        price: Some("$8,500"),
        likes: 89,
        views: 890,
        available: true,
    },
    Artwork {
        id: "3",
        title: "Abstract Harmony",
        artist: "Sofia Andersson",
        year: 2023,
        medium: "Acrylic on Canvas",
        dimensions: "150 x 100 cm",
        image: "/images/facial-therapy-scaled.jpg",
        category: ArtCategory::Abstract,
        description: "A bold exploration of color and form that challenges traditional artistic boundaries.",
        price: Some("$22,000"),
        likes: 156,
        views: 1680,
        available: false,
    },
    Artwork {
        id: "4",
        title: "Whispers of Time",
        artist: "David Kim",
        year: 2021,
        medium: "Mixed Media",
        dimensions: "80 x 120 cm",
        image: "/images/l-intro-1733933490.jpg",
        category: ArtCategory::MixedMedia,
        description: "A contemplative piece that explores the passage of time through layered textures.",
        price: Some("$12,000"),
        likes: 203,
        views: 2100,
        available: true,
    },
    Artwork {
        id: "5",
        title: "Digital Dreams",
        artist: "Alex Thompson",
        year: 2023,
        medium: "Digital Art",
        dimensions: "60 x 90 cm",
        image: "/images/museum.jpg",
        category: ArtCategory::Digital,
        description: "A futuristic vision that blends technology with artistic expression.",
        price: Some("$6,500"),
        likes: 78,
        views: 650,
        available: true,
    },
    Artwork {
        id: "6",
        title: "Nature's Symphony",
        artist: "Maria Santos",
        year: 2022,
        medium: "Watercolor",
        dimensions: "70 x 50 cm",
        image: "/images/facial-therapy-scaled.jpg",
        category: ArtCategory::Traditional,
        description: "A delicate watercolor that captures the beauty and complexity of natural forms.",
        price: Some("$4,200"),
        likes: 145,
        views: 1320,
        available: true,
    },
];

/// Number of leading catalog rows featured in the home gallery.
pub const FEATURED_COUNT: usize = 3;

/// Categories offered as chips in the home gallery.
pub const FEATURED_CATEGORIES: [ArtCategory; 3] =
    [ArtCategory::Contemporary, ArtCategory::Photography, ArtCategory::Abstract];

/// Artworks featured on the home page.
#[must_use]
pub fn featured() -> &'static [Artwork] {
    &ARTWORKS[..FEATURED_COUNT.min(ARTWORKS.len())]
}
