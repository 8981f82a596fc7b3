use super::*;

#[test]
fn stagger_scales_with_index() {
    assert_eq!(stagger(0, STAGGER_STEP_MS), "animation-delay: 0ms");
    assert_eq!(stagger(3, STAGGER_STEP_MS), "animation-delay: 300ms");
    assert_eq!(stagger(2, 200), "animation-delay: 400ms");
}

#[test]
fn stagger_saturates_instead_of_overflowing() {
    assert_eq!(stagger(usize::MAX, 2), format!("animation-delay: {}ms", usize::MAX));
}

#[test]
fn reveal_classes_share_base_class() {
    for reveal in [Reveal::FadeUp, Reveal::FadeIn, Reveal::SlideIn, Reveal::ScaleIn] {
        assert!(reveal.class().starts_with("reveal reveal--"));
    }
    assert_eq!(Reveal::default(), Reveal::FadeUp);
}
