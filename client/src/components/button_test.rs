use super::*;

#[test]
fn button_class_defaults_to_primary_md() {
    assert_eq!(button_class(ButtonVariant::default(), ButtonSize::default(), ""), "btn btn--primary btn--md");
}

#[test]
fn button_class_appends_trimmed_extras() {
    assert_eq!(
        button_class(ButtonVariant::GlassRed, ButtonSize::Lg, "  wide "),
        "btn btn--glass-red btn--lg wide"
    );
}

#[test]
fn every_variant_has_distinct_class() {
    let variants = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Outline,
        ButtonVariant::Ghost,
        ButtonVariant::Glass,
        ButtonVariant::GlassRed,
    ];
    let classes: std::collections::HashSet<_> =
        variants.iter().map(|v| button_class(*v, ButtonSize::Sm, "")).collect();
    assert_eq!(classes.len(), variants.len());
}

#[test]
fn spinner_tracks_button_size() {
    assert_eq!(ButtonSize::Sm.spinner(), SpinnerSize::Sm);
    assert_eq!(ButtonSize::Lg.spinner(), SpinnerSize::Lg);
}
