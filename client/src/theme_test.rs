use super::*;

#[test]
fn with_opacity_converts_brand_red() {
    assert_eq!(with_opacity(colors::RED, 0.5).as_deref(), Some("rgba(179, 35, 46, 0.5)"));
}

#[test]
fn with_opacity_accepts_missing_hash() {
    assert_eq!(with_opacity("171717", 1.0).as_deref(), Some("rgba(23, 23, 23, 1)"));
}

#[test]
fn with_opacity_rejects_malformed_hex() {
    assert_eq!(with_opacity("#FFF", 1.0), None);
    assert_eq!(with_opacity("#GG0000", 1.0), None);
    assert_eq!(with_opacity("#ÅÅÅ", 1.0), None);
    assert_eq!(with_opacity("#+f+f+f", 0.5), None);
    assert_eq!(with_opacity("-12345", 0.5), None);
}

#[test]
fn root_style_declares_every_variable() {
    let style = root_style();
    for (name, value) in CSS_VARIABLES {
        assert!(style.contains(&format!("{name}: {value};")), "missing {name}");
    }
}

#[test]
fn css_variable_names_are_custom_properties() {
    assert!(CSS_VARIABLES.iter().all(|(name, _)| name.starts_with("--")));
}

#[test]
fn font_weights_ascend() {
    assert!(FONT_WEIGHTS.windows(2).all(|w| w[0].1 < w[1].1));
}

#[test]
fn root_style_exposes_type_scale_and_tint() {
    let style = root_style();
    assert!(style.contains("--font-size-base: 1rem;"));
    assert!(style.contains("--font-weight-bold: 700;"));
    assert!(style.contains("--line-height-tight: 1.25;"));
    assert!(style.contains("--letter-spacing-widest: 0.1em;"));
    assert!(style.contains("--color-accent-tint: rgba(179, 35, 46, 0.1);"));
}
