//! Full-bleed image banner opening the inner pages.

use leptos::prelude::*;

use crate::util::motion::Reveal;

#[component]
pub fn PageHero(
    caption: &'static str,
    title: &'static str,
    image: &'static str,
    /// Lead paragraph under the title.
    lead: &'static str,
    /// Optional call-to-action row.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let backdrop = format!("background-image: url('{image}');");
    view! {
        <section class="page-hero" style=backdrop>
            <div class="page-hero__shade"></div>
            <div class=format!("container container--lg pad-md page-hero__body {}", Reveal::FadeUp.class())>
                <span class="type-caption font-poppins text-accent">{caption}</span>
                <h1 class="type-display font-coanda text-inverse">{title}</h1>
                <p class="type-body-large font-poppins text-inverse">{lead}</p>
                {children.map(|actions| view! { <div class="page-hero__actions">{actions()}</div> })}
            </div>
        </section>
    }
}
