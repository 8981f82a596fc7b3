//! Image with a skeleton underlay shown until the bitmap paints over it.

use leptos::prelude::*;

use super::skeleton::Skeleton;

#[component]
pub fn Picture(
    src: &'static str,
    #[prop(into)] alt: String,
    /// Classes for the wrapping frame (aspect ratio, rounding).
    #[prop(optional, into)]
    class: String,
    #[prop(optional)] eager: bool,
) -> impl IntoView {
    view! {
        <div class=format!("picture {class}")>
            <Skeleton class="picture__placeholder"/>
            <img
                class="picture__img"
                src=src
                alt=alt
                loading=if eager { "eager" } else { "lazy" }
                decoding="async"
            />
        </div>
    }
}
