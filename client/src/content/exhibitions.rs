//! Current and upcoming exhibitions.

#[cfg(test)]
#[path = "exhibitions_test.rs"]
mod exhibitions_test;

use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::{date, format_description};

use super::artworks::ArtCategory;

const DISPLAY_DATE: &[BorrowedFormatItem<'static>] = format_description!("[month repr:short] [day padding:none], [year]");

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Exhibition {
    pub id: &'static str,
    pub title: &'static str,
    pub artist: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub start: Date,
    pub end: Date,
    pub location: &'static str,
    pub category: ArtCategory,
    pub featured: bool,
    pub capacity: u32,
    pub rating: f32,
}

impl Exhibition {
    /// Human date range, e.g. `Jan 15, 2024 - Apr 30, 2024`.
    #[must_use]
    pub fn date_range(&self) -> String {
        format!("{} - {}", format_date(self.start), format_date(self.end))
    }
}

pub const EXHIBITIONS: &[Exhibition] = &[
    Exhibition {
        id: "1",
        title: "Modern Expressions",
        artist: "Various Artists",
        description: "A comprehensive showcase of contemporary art movements from the 21st century, featuring works that challenge traditional boundaries and explore new forms of artistic expression.",
        image: "/images/l-intro-1733933490.jpg",
        start: date!(2024-01-15),
        end: date!(2024-04-30),
        location: "Main Gallery",
        category: ArtCategory::Contemporary,
        featured: true,
        capacity: 150,
        rating: 4.8,
    },
    Exhibition {
        id: "2",
        title: "Urban Landscapes",
        artist: "Marcus Chen",
        description: "An intimate exploration of city life through the lens of photography, capturing the essence of urban environments and the stories they tell.",
        image: "/images/museum.jpg",
        start: date!(2024-02-01),
        end: date!(2024-05-15),
        location: "Photography Wing",
        category: ArtCategory::Photography,
        featured: false,
        capacity: 80,
        rating: 4.6,
    },
    Exhibition {
        id: "3",
        title: "Abstract Dimensions",
        artist: "Sofia Andersson",
        description: "A journey through abstract art forms that push the boundaries of perception and invite viewers to explore new dimensions of creativity.",
        image: "/images/facial-therapy-scaled.jpg",
        start: date!(2024-03-01),
        end: date!(2024-06-30),
        location: "East Wing",
        category: ArtCategory::Abstract,
        featured: true,
        capacity: 120,
        rating: 4.9,
    },
];

/// Format a date as `Mon D, YYYY`.
#[must_use]
pub fn format_date(date: Date) -> String {
    date.format(DISPLAY_DATE).unwrap_or_else(|_| date.to_string())
}

/// The exhibition highlighted in the home hero card.
#[must_use]
pub fn headline() -> Option<&'static Exhibition> {
    EXHIBITIONS.iter().find(|e| e.featured)
}
