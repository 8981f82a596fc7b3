//! Artwork card in grid (portrait tile) or list (wide row) layout.

#[cfg(test)]
#[path = "artwork_card_test.rs"]
mod artwork_card_test;

use leptos::prelude::*;

use super::button::{Button, ButtonSize, ButtonVariant};
use super::picture::Picture;
use crate::content::artworks::Artwork;
use crate::state::catalog::ViewMode;
use crate::util::motion::{Reveal, STAGGER_STEP_MS, stagger};

/// `by ARTIST • YEAR` line under the title.
#[must_use]
pub fn byline(artwork: &Artwork) -> String {
    format!("by {} \u{2022} {}", artwork.artist, artwork.year)
}

#[component]
pub fn ArtworkCard(
    artwork: &'static Artwork,
    #[prop(optional)] view_mode: ViewMode,
    #[prop(into)] liked: Signal<bool>,
    on_toggle_like: Callback<&'static str>,
    /// Position in the rendered list, for the entry stagger.
    #[prop(optional)]
    index: usize,
) -> impl IntoView {
    let delay = stagger(index, STAGGER_STEP_MS);
    let toggle = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        on_toggle_like.run(artwork.id);
    };
    let sold = (!artwork.available).then(|| view! { <span class="badge badge--sold">"Sold"</span> });
    let price = artwork.price.map(|p| view! { <span class="artwork-card__price font-coanda">{p}</span> });

    match view_mode {
        ViewMode::List => view! {
            <article class=format!("artwork-card artwork-card--list {}", Reveal::SlideIn.class()) style=delay>
                <div class="artwork-card__media">
                    <Picture src=artwork.image alt=artwork.title class="artwork-card__picture"/>
                    {sold}
                </div>
                <div class="artwork-card__body">
                    <div class="artwork-card__head">
                        <div>
                            <h3 class="type-h5 font-coanda text-primary">{artwork.title}</h3>
                            <p class="type-body font-poppins text-accent">{byline(artwork)}</p>
                        </div>
                        {price}
                    </div>
                    <div class="artwork-card__meta">
                        <span>{artwork.medium}</span>
                        <span>"\u{2022}"</span>
                        <span>{artwork.dimensions}</span>
                        <span>"\u{2022}"</span>
                        <span class="badge badge--muted">{artwork.category.label()}</span>
                    </div>
                    <p class="type-body font-poppins text-secondary line-clamp-2">{artwork.description}</p>
                    <div class="artwork-card__footer">
                        <div class="artwork-card__stats">
                            <span class:liked=move || liked.get()>"\u{2665} "{artwork.likes}</span>
                            <span>"\u{25C9} "{artwork.views}</span>
                        </div>
                        <div class="artwork-card__actions">
                            <Button
                                variant=ButtonVariant::Ghost
                                size=ButtonSize::Sm
                                icon="\u{2665}"
                                on_click=Callback::new(toggle)
                            >
                                {move || if liked.get() { "Liked" } else { "Like" }}
                            </Button>
                            <Button variant=ButtonVariant::Ghost size=ButtonSize::Sm icon="\u{2197}">
                                "Share"
                            </Button>
                            <Button size=ButtonSize::Sm>"View Details"</Button>
                        </div>
                    </div>
                </div>
            </article>
        }
        .into_any(),
        ViewMode::Grid => view! {
            <article class=format!("artwork-card artwork-card--grid {}", Reveal::FadeUp.class()) style=delay>
                <div class="artwork-card__media">
                    <Picture src=artwork.image alt=artwork.title class="artwork-card__picture artwork-card__picture--portrait"/>
                    <div class="artwork-card__overlay"></div>
                    {sold}
                    <span class="badge badge--category">{artwork.category.label()}</span>
                    <div class="artwork-card__hover-stats">
                        <button
                            class="artwork-card__like"
                            class:liked=move || liked.get()
                            aria-pressed=move || liked.get().to_string()
                            on:click=toggle
                        >
                            "\u{2665} "{artwork.likes}
                        </button>
                        <span>"\u{25C9} "{artwork.views}</span>
                    </div>
                </div>
                <div class="artwork-card__body">
                    <div class="artwork-card__head">
                        <div>
                            <h3 class="type-h6 font-coanda text-primary">{artwork.title}</h3>
                            <p class="type-body-small font-poppins text-accent">{byline(artwork)}</p>
                        </div>
                        {price}
                    </div>
                    <p class="type-body-small font-poppins text-secondary line-clamp-2">{artwork.description}</p>
                </div>
            </article>
        }
        .into_any(),
    }
}
