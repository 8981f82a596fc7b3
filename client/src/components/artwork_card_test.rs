use super::*;
use crate::content::artworks::ARTWORKS;

#[test]
fn byline_joins_artist_and_year() {
    let first = &ARTWORKS[0];
    assert_eq!(byline(first), format!("by {} \u{2022} {}", first.artist, first.year));
}
