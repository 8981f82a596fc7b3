//! Collections page: searchable, filterable catalog of every artwork.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the page-scoped `CatalogFilter`, `ViewMode`, and like set. The
//! visible rows are a memo over the filter so the summary line and the grid
//! agree on the same result.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::artwork_card::ArtworkCard;
use crate::components::button::{Button, ButtonVariant};
use crate::components::category_chips::CategoryChips;
use crate::components::container::{Container, ContainerSize};
use crate::components::page_hero::PageHero;
use crate::content::artworks::{ARTWORKS, ArtCategory, Artwork};
use crate::state::catalog::{CatalogFilter, CategoryFilter, ViewMode};
use crate::state::ui::LikedArtworks;

#[component]
pub fn CollectionsPage() -> impl IntoView {
    let filter = RwSignal::new(CatalogFilter::default());
    let view_mode = RwSignal::new(ViewMode::default());
    let likes = RwSignal::new(LikedArtworks::default());
    let visible: Memo<Vec<&'static Artwork>> = Memo::new(move |_| filter.with(|f| f.apply(ARTWORKS)));

    let on_toggle_like = Callback::new(move |id: &'static str| {
        likes.update(|l| {
            l.toggle(id);
        });
    });

    let mode_button = move |mode: ViewMode, glyph: &'static str, label: &'static str| {
        view! {
            <button
                class="view-toggle__btn"
                class:view-toggle__btn--active=move || view_mode.get() == mode
                aria-label=label
                aria-pressed=move || (view_mode.get() == mode).to_string()
                on:click=move |_| view_mode.set(mode)
            >
                {glyph}
            </button>
        }
    };

    view! {
        <Title text="Collections - Musea"/>
        <PageHero
            caption="Discover Art"
            title="Collections"
            image="/images/museum.jpg"
            lead="Browse our extensive collection of artworks from talented artists around the world. Each piece tells a unique story and represents the pinnacle of artistic achievement."
        />

        <section class="catalog-bar">
            <Container size=ContainerSize::Xl>
                <div class="catalog-bar__row">
                    <label class="search">
                        <span class="search__glyph" aria-hidden="true">"\u{2315}"</span>
                        <input
                            type="search"
                            placeholder="Search artworks or artists..."
                            aria-label="Search artworks or artists"
                            prop:value=move || filter.with(|f| f.query.clone())
                            on:input=move |ev| filter.update(|f| f.query = event_target_value(&ev))
                        />
                    </label>
                    <CategoryChips chips=CategoryFilter::chips(&ArtCategory::ALL) filter=filter/>
                    <div class="view-toggle" role="group" aria-label="View mode">
                        {mode_button(ViewMode::Grid, "\u{25A6}", "Grid view")}
                        {mode_button(ViewMode::List, "\u{2630}", "List view")}
                    </div>
                </div>
                <p class="catalog-bar__summary type-body-small text-secondary">
                    {move || filter.with(|f| f.summary(visible.with(Vec::len)))}
                </p>
            </Container>
        </section>

        <section class="section">
            <Container size=ContainerSize::Xl>
                <Show
                    when=move || visible.with(|rows| !rows.is_empty())
                    fallback=move || {
                        view! {
                            <div class="empty-state reveal reveal--fade-in">
                                <span class="empty-state__glyph" aria-hidden="true">"\u{2315}"</span>
                                <h3 class="type-h4 font-coanda text-primary">"No artworks found"</h3>
                                <p class="type-body font-poppins text-secondary">
                                    "Try adjusting your search criteria or browse all collections."
                                </p>
                                <Button
                                    variant=ButtonVariant::Primary
                                    on_click=Callback::new(move |_| filter.update(CatalogFilter::reset))
                                >
                                    "View All Collections"
                                </Button>
                            </div>
                        }
                    }
                >
                    <div
                        class="artwork-grid"
                        class:artwork-grid--list=move || view_mode.get() == ViewMode::List
                    >
                        {move || {
                            let mode = view_mode.get();
                            visible
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(index, artwork)| {
                                    let id = artwork.id;
                                    view! {
                                        <ArtworkCard
                                            artwork=artwork
                                            view_mode=mode
                                            liked=Signal::derive(move || likes.with(|l| l.is_liked(id)))
                                            on_toggle_like=on_toggle_like
                                            index=index
                                        />
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </Container>
        </section>
    }
}
