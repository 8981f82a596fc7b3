//! Landing page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::gallery::Gallery;
use crate::components::hero::Hero;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Musea - Art Museum"/>
        <Hero/>
        <Gallery/>
    }
}
