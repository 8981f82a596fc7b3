//! Home page hero: headline, calls to action, stats, and the featured
//! exhibition card.

use leptos::prelude::*;

use super::button::{ButtonLink, ButtonSize, ButtonVariant};
use super::picture::Picture;
use super::stat_strip::StatStrip;
use super::typography::{TextColor, TextVariant, Typography};
use crate::content::exhibitions;
use crate::content::museum::HERO_STATS;
use crate::util::motion::{Reveal, stagger};

#[component]
pub fn Hero() -> impl IntoView {
    let featured = exhibitions::headline();
    let card_image = featured.map_or("/images/l-intro-1733933490.jpg", |e| e.image);

    view! {
        <section class="hero">
            <div class="hero__backdrop" aria-hidden="true"></div>
            <div class="container container--xl pad-md hero__grid">
                <div class="hero__copy">
                    <Typography
                        variant=TextVariant::Caption
                        color=TextColor::Accent
                        class=format!("eyebrow {}", Reveal::FadeUp.class())
                        style=stagger(2, 100)
                    >
                        "Welcome to Musea"
                    </Typography>
                    <Typography variant=TextVariant::Display class=Reveal::FadeUp.class() style=stagger(4, 100)>
                        "Discover"
                        <br/>
                        <span class="text-accent reveal reveal--scale-in" style=stagger(8, 100)>"Extraordinary"</span>
                        <br/>
                        "Art"
                    </Typography>
                    <Typography
                        variant=TextVariant::BodyLarge
                        color=TextColor::Secondary
                        class=Reveal::FadeUp.class()
                        style=stagger(6, 100)
                    >
                        "Immerse yourself in a world of creativity and culture. Explore our curated collections, "
                        "featuring masterpieces from renowned artists and emerging talents from around the globe."
                    </Typography>

                    <div class="hero__actions reveal reveal--fade-up" style=stagger(8, 100)>
                        <ButtonLink href="/collections" size=ButtonSize::Lg icon="\u{2192}" icon_right=true>
                            "Explore Collections"
                        </ButtonLink>
                        <ButtonLink href="/visit" variant=ButtonVariant::Outline size=ButtonSize::Lg icon="\u{25A6}">
                            "Plan Your Visit"
                        </ButtonLink>
                    </div>

                    <StatStrip stats=HERO_STATS class="hero__stats"/>
                </div>

                <div class="hero__feature reveal reveal--slide-in" style=stagger(4, 100)>
                    <Picture src=card_image alt="Featured artwork" class="hero__picture" eager=true/>
                    {featured
                        .map(|e| {
                            view! {
                                <a href="/exhibitions" class="hero__card reveal reveal--scale-in" style=stagger(8, 100)>
                                    <span class="type-body-small text-secondary">"Currently Featured"</span>
                                    <span class="type-h6 font-coanda text-primary">{e.title}</span>
                                    <span class="type-body-small text-secondary">
                                        {format!("{} Art Collection", e.category.label())}
                                    </span>
                                </a>
                            }
                        })}
                </div>
            </div>

            <div class="hero__scroll" aria-hidden="true">
                <span class="type-caption">"Scroll"</span>
                <span class="hero__scroll-line"></span>
            </div>
        </section>
    }
}
