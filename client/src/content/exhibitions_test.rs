use time::macros::date;

use super::*;

#[test]
fn format_date_uses_short_month_and_unpadded_day() {
    assert_eq!(format_date(date!(2024-01-05)), "Jan 5, 2024");
    assert_eq!(format_date(date!(2024-12-31)), "Dec 31, 2024");
}

#[test]
fn date_range_joins_start_and_end() {
    assert_eq!(EXHIBITIONS[0].date_range(), "Jan 15, 2024 - Apr 30, 2024");
}

#[test]
fn every_exhibition_ends_after_it_starts() {
    for exhibition in EXHIBITIONS {
        assert!(exhibition.end > exhibition.start, "{} ends before it starts", exhibition.title);
    }
}

#[test]
fn ratings_are_on_five_point_scale() {
    for exhibition in EXHIBITIONS {
        assert!((0.0..=5.0).contains(&exhibition.rating));
    }
}

#[test]
fn headline_is_first_featured_exhibition() {
    assert_eq!(headline().map(|e| e.title), Some("Modern Expressions"));
}
