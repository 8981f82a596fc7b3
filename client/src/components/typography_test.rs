use super::*;

#[test]
fn headings_render_heading_tags() {
    assert_eq!(TextVariant::Display.tag(), "h1");
    assert_eq!(TextVariant::H4.tag(), "h4");
    assert_eq!(TextVariant::Caption.tag(), "span");
    assert_eq!(TextVariant::default().tag(), "p");
}

#[test]
fn headings_default_to_display_face() {
    let class = typography_class(TextVariant::H2, TextColor::Primary, None, "");
    assert_eq!(class, "type-h2 font-coanda text-primary");
}

#[test]
fn body_defaults_to_body_face() {
    let class = typography_class(TextVariant::BodySmall, TextColor::Secondary, None, "");
    assert_eq!(class, "type-body-small font-poppins text-secondary");
}

#[test]
fn explicit_font_and_extra_classes_win() {
    let class = typography_class(TextVariant::Body, TextColor::Accent, Some(FontFace::Coanda), " price ");
    assert_eq!(class, "type-body font-coanda text-accent price");
}
