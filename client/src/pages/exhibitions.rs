//! Exhibitions page: current and upcoming shows.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::button::{Button, ButtonLink, ButtonSize, ButtonVariant};
use crate::components::container::{Container, ContainerSize, Padding};
use crate::components::page_hero::PageHero;
use crate::components::picture::Picture;
use crate::components::section_intro::SectionIntro;
use crate::content::exhibitions::{EXHIBITIONS, Exhibition};
use crate::util::motion::{Reveal, stagger};

#[component]
fn ExhibitionCard(exhibition: &'static Exhibition, index: usize) -> impl IntoView {
    view! {
        <article
            class=format!("exhibition-card {}", Reveal::FadeUp.class())
            class:exhibition-card--featured=exhibition.featured
            style=stagger(index, 200)
        >
            <div class="exhibition-card__media">
                <Picture src=exhibition.image alt=exhibition.title class="exhibition-card__picture"/>
                {exhibition.featured.then(|| view! { <span class="badge badge--featured">"Featured"</span> })}
                <span class="badge badge--category">{exhibition.category.label()}</span>
            </div>
            <div class="exhibition-card__body">
                <h3 class="type-h4 font-coanda text-primary">{exhibition.title}</h3>
                <p class="type-body-small font-poppins text-accent">{format!("by {}", exhibition.artist)}</p>
                <p class="type-body font-poppins text-secondary">{exhibition.description}</p>
                <ul class="exhibition-card__facts">
                    <li>{format!("\u{25A6} {}", exhibition.date_range())}</li>
                    <li>{format!("\u{2316} {}", exhibition.location)}</li>
                    <li>{format!("\u{263A} Capacity {}", exhibition.capacity)}</li>
                    <li>{format!("\u{2605} {:.1}", exhibition.rating)}</li>
                </ul>
                <Button size=ButtonSize::Sm>"View Details"</Button>
            </div>
        </article>
    }
}

#[component]
pub fn ExhibitionsPage() -> impl IntoView {
    view! {
        <Title text="Exhibitions - Musea"/>
        <PageHero
            caption="Current & Upcoming"
            title="Exhibitions"
            image="/images/l-intro-1733933490.jpg"
            lead="Discover our carefully curated exhibitions featuring works from renowned artists and emerging talents. Each exhibition tells a unique story and offers a fresh perspective on art and culture."
        >
            <ButtonLink href="/visit" size=ButtonSize::Lg icon="\u{25A6}">
                "Book Exhibition Tour"
            </ButtonLink>
            <ButtonLink href="/visit" variant=ButtonVariant::Outline size=ButtonSize::Lg class="btn--on-dark">
                "View Schedule"
            </ButtonLink>
        </PageHero>
        <section class="section section--light">
            <Container size=ContainerSize::Xl padding=Padding::Lg>
                <SectionIntro
                    title="Featured Exhibitions"
                    lead="Immerse yourself in our diverse collection of exhibitions, each offering a unique journey through different artistic movements and cultural perspectives."
                />
                <div class="exhibition-grid">
                    {EXHIBITIONS
                        .iter()
                        .enumerate()
                        .map(|(index, exhibition)| view! { <ExhibitionCard exhibition=exhibition index=index/> })
                        .collect_view()}
                </div>

                <div class="cta-card reveal reveal--fade-up">
                    <h2 class="type-h4 font-coanda text-primary">"Don't Miss Out"</h2>
                    <p class="type-body font-poppins text-secondary">
                        "Subscribe to our newsletter to stay updated on upcoming exhibitions and exclusive events."
                    </p>
                    <ButtonLink href="/contact" size=ButtonSize::Lg icon="\u{2192}" icon_right=true>
                        "Subscribe Now"
                    </ButtonLink>
                </div>
            </Container>
        </section>
    }
}
