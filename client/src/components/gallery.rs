//! Home page gallery: the featured artworks behind a category chip bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shares the catalog filter and like state models with the collections
//! page, scoped to the featured rows and their three headline categories.

use leptos::prelude::*;

use super::artwork_card::ArtworkCard;
use super::button::{ButtonLink, ButtonSize, ButtonVariant};
use super::category_chips::CategoryChips;
use super::section_intro::SectionIntro;
use super::stat_strip::StatStrip;
use crate::content::artworks::{FEATURED_CATEGORIES, featured};
use crate::content::museum::GALLERY_STATS;
use crate::state::catalog::{CatalogFilter, CategoryFilter};
use crate::state::ui::LikedArtworks;

#[component]
pub fn Gallery() -> impl IntoView {
    let filter = RwSignal::new(CatalogFilter::default());
    let likes = RwSignal::new(LikedArtworks::default());
    let on_toggle_like = Callback::new(move |id: &'static str| {
        likes.update(|l| {
            l.toggle(id);
        });
    });

    view! {
        <section class="gallery section">
            <div class="container container--xl pad-md">
                <SectionIntro
                    caption="Featured Collections"
                    title="Curated Masterpieces"
                    lead="Explore our carefully selected collection of contemporary and classical artworks from talented artists around the world."
                />

                <CategoryChips chips=CategoryFilter::chips(&FEATURED_CATEGORIES) filter=filter/>

                <div class="artwork-grid">
                    {move || {
                        filter
                            .with(|f| f.apply(featured()))
                            .into_iter()
                            .enumerate()
                            .map(|(index, artwork)| {
                                let id = artwork.id;
                                view! {
                                    <ArtworkCard
                                        artwork=artwork
                                        liked=Signal::derive(move || likes.with(|l| l.is_liked(id)))
                                        on_toggle_like=on_toggle_like
                                        index=index
                                    />
                                }
                            })
                            .collect_view()
                    }}
                </div>

                <div class="gallery__more">
                    <ButtonLink href="/collections" variant=ButtonVariant::Outline size=ButtonSize::Lg icon="\u{2192}" icon_right=true>
                        "View All Collections"
                    </ButtonLink>
                </div>

                <StatStrip stats=GALLERY_STATS class="gallery__stats"/>
            </div>
        </section>
    }
}
