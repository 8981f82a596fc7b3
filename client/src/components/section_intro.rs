//! Caption + heading + lead block used at the top of page sections.

use leptos::prelude::*;

use super::typography::{TextColor, TextVariant, Typography};

#[component]
pub fn SectionIntro(
    #[prop(optional)] caption: Option<&'static str>,
    title: &'static str,
    #[prop(optional)] lead: Option<&'static str>,
    #[prop(optional)] inverse: bool,
) -> impl IntoView {
    let (heading, body) =
        if inverse { (TextColor::Inverse, TextColor::Inverse) } else { (TextColor::Primary, TextColor::Secondary) };
    view! {
        <div class="section-intro reveal reveal--fade-up">
            {caption.map(|c| view! { <Typography variant=TextVariant::Caption color=TextColor::Accent>{c}</Typography> })}
            <Typography variant=TextVariant::H2 color=heading>{title}</Typography>
            {lead.map(|l| view! { <Typography variant=TextVariant::BodyLarge color=body>{l}</Typography> })}
        </div>
    }
}
