use std::collections::HashSet;

use super::*;

#[test]
fn artwork_ids_are_unique() {
    let ids: HashSet<_> = ARTWORKS.iter().map(|a| a.id).collect();
    assert_eq!(ids.len(), ARTWORKS.len());
}

#[test]
fn every_category_has_at_least_one_artwork() {
    for category in ArtCategory::ALL {
        assert!(
            ARTWORKS.iter().any(|a| a.category == category),
            "no artwork in {category:?}"
        );
    }
}

#[test]
fn featured_is_leading_slice_of_catalog() {
    let featured = featured();
    assert_eq!(featured.len(), FEATURED_COUNT);
    assert_eq!(featured[0].id, "1");
    assert!(featured.iter().all(|a| FEATURED_CATEGORIES.contains(&a.category)));
}

#[test]
fn sold_artwork_is_marked_unavailable() {
    let sold: Vec<_> = ARTWORKS.iter().filter(|a| !a.available).map(|a| a.id).collect();
    assert_eq!(sold, vec!["3"]);
}
