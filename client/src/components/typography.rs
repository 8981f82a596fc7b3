//! Text primitive mapping a type-scale variant onto the right element.

#[cfg(test)]
#[path = "typography_test.rs"]
mod typography_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextVariant {
    Display,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    BodyLarge,
    #[default]
    Body,
    BodySmall,
    Caption,
}

impl TextVariant {
    /// Element rendered when the caller does not override it.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Display | Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
            Self::BodyLarge | Self::Body | Self::BodySmall => "p",
            Self::Caption => "span",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Display => "type-display",
            Self::H1 => "type-h1",
            Self::H2 => "type-h2",
            Self::H3 => "type-h3",
            Self::H4 => "type-h4",
            Self::H5 => "type-h5",
            Self::H6 => "type-h6",
            Self::BodyLarge => "type-body-large",
            Self::Body => "type-body",
            Self::BodySmall => "type-body-small",
            Self::Caption => "type-caption",
        }
    }

    fn default_face(self) -> FontFace {
        match self {
            Self::BodyLarge | Self::Body | Self::BodySmall | Self::Caption => FontFace::Poppins,
            _ => FontFace::Coanda,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextColor {
    #[default]
    Primary,
    Secondary,
    Inverse,
    Accent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontFace {
    Coanda,
    Poppins,
}

#[must_use]
pub fn typography_class(variant: TextVariant, color: TextColor, font: Option<FontFace>, extra: &str) -> String {
    let face = match font.unwrap_or(variant.default_face()) {
        FontFace::Coanda => "font-coanda",
        FontFace::Poppins => "font-poppins",
    };
    let color = match color {
        TextColor::Primary => "text-primary",
        TextColor::Secondary => "text-secondary",
        TextColor::Inverse => "text-inverse",
        TextColor::Accent => "text-accent",
    };
    let mut class = format!("{} {face} {color}", variant.class());
    let extra = extra.trim();
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

#[component]
pub fn Typography(
    #[prop(optional)] variant: TextVariant,
    #[prop(optional)] color: TextColor,
    #[prop(optional)] font: Option<FontFace>,
    #[prop(optional, into)] class: String,
    /// Optional inline style, used for stagger delays.
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let class = typography_class(variant, color, font, &class);
    match variant.tag() {
        "h1" => view! { <h1 class=class style=style>{children()}</h1> }.into_any(),
        "h2" => view! { <h2 class=class style=style>{children()}</h2> }.into_any(),
        "h3" => view! { <h3 class=class style=style>{children()}</h3> }.into_any(),
        "h4" => view! { <h4 class=class style=style>{children()}</h4> }.into_any(),
        "h5" => view! { <h5 class=class style=style>{children()}</h5> }.into_any(),
        "h6" => view! { <h6 class=class style=style>{children()}</h6> }.into_any(),
        "span" => view! { <span class=class style=style>{children()}</span> }.into_any(),
        _ => view! { <p class=class style=style>{children()}</p> }.into_any(),
    }
}
