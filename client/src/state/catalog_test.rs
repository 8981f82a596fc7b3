use super::*;
use crate::content::artworks::ARTWORKS;

fn filter(category: CategoryFilter, query: &str) -> CatalogFilter {
    CatalogFilter { category, query: query.to_owned() }
}

fn ids(rows: &[&Artwork]) -> Vec<&'static str> {
    rows.iter().map(|a| a.id).collect()
}

// =============================================================
// Category predicate
// =============================================================

#[test]
fn default_filter_returns_full_catalog() {
    let rows = CatalogFilter::default().apply(ARTWORKS);
    assert_eq!(rows.len(), ARTWORKS.len());
}

#[test]
fn category_filter_returns_only_that_category() {
    for category in ArtCategory::ALL {
        let rows = filter(CategoryFilter::Only(category), "").apply(ARTWORKS);
        assert!(!rows.is_empty());
        assert!(rows.iter().all(|a| a.category == category));
    }
}

#[test]
fn all_admits_every_category() {
    assert!(ArtCategory::ALL.into_iter().all(|c| CategoryFilter::All.admits(c)));
}

// =============================================================
// Search predicate
// =============================================================

#[test]
fn search_matches_title_case_insensitively() {
    let rows = filter(CategoryFilter::All, "URBAN").apply(ARTWORKS);
    assert_eq!(ids(&rows), vec!["2"]);
}

#[test]
fn search_matches_artist_substring() {
    let rows = filter(CategoryFilter::All, "kim").apply(ARTWORKS);
    assert_eq!(ids(&rows), vec!["4"]);
}

#[test]
fn search_results_contain_query_in_title_or_artist() {
    for query in ["a", "on", "DREAM", "santos", "zzz"] {
        let needle = query.to_lowercase();
        for artwork in filter(CategoryFilter::All, query).apply(ARTWORKS) {
            assert!(
                artwork.title.to_lowercase().contains(&needle) || artwork.artist.to_lowercase().contains(&needle),
                "{query:?} matched {}",
                artwork.title
            );
        }
    }
}

#[test]
fn search_does_not_look_at_description_or_medium() {
    assert!(filter(CategoryFilter::All, "watercolor").apply(ARTWORKS).is_empty());
}

#[test]
fn empty_search_returns_whole_category() {
    let rows = filter(CategoryFilter::Only(ArtCategory::Abstract), "").apply(ARTWORKS);
    let expected = ARTWORKS.iter().filter(|a| a.category == ArtCategory::Abstract).count();
    assert_eq!(rows.len(), expected);
}

#[test]
fn category_and_search_combine_with_and() {
    let rows = filter(CategoryFilter::Only(ArtCategory::Photography), "serenity").apply(ARTWORKS);
    assert!(rows.is_empty());
    let rows = filter(CategoryFilter::Only(ArtCategory::Contemporary), "serenity").apply(ARTWORKS);
    assert_eq!(ids(&rows), vec!["1"]);
}

#[test]
fn results_keep_catalog_order() {
    let rows = filter(CategoryFilter::All, "e").apply(ARTWORKS);
    let positions: Vec<_> = rows
        .iter()
        .map(|a| ARTWORKS.iter().position(|b| b.id == a.id).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

// =============================================================
// Reset and summary
// =============================================================

#[test]
fn reset_clears_category_and_query() {
    let mut f = filter(CategoryFilter::Only(ArtCategory::Digital), "nothing matches");
    assert!(f.apply(ARTWORKS).is_empty());
    f.reset();
    assert_eq!(f, CatalogFilter::default());
    assert_eq!(f.apply(ARTWORKS).len(), ARTWORKS.len());
}

#[test]
fn summary_mentions_category_and_query_only_when_set() {
    assert_eq!(CatalogFilter::default().summary(6), "Showing 6 artworks");
    assert_eq!(
        filter(CategoryFilter::Only(ArtCategory::MixedMedia), "").summary(1),
        "Showing 1 artworks in Mixed Media"
    );
    assert_eq!(
        filter(CategoryFilter::All, "har").summary(1),
        "Showing 1 artworks matching \"har\""
    );
}

#[test]
fn chips_start_with_all() {
    let chips = CategoryFilter::chips(&[ArtCategory::Abstract, ArtCategory::Digital]);
    assert_eq!(
        chips,
        vec![
            CategoryFilter::All,
            CategoryFilter::Only(ArtCategory::Abstract),
            CategoryFilter::Only(ArtCategory::Digital),
        ]
    );
    assert_eq!(chips[0].label(), "All");
}

#[test]
fn view_mode_default_is_grid() {
    assert_eq!(ViewMode::default(), ViewMode::Grid);
}
