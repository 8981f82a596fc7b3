//! About page: stats, values, history timeline, team, testimonials.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::button::{ButtonLink, ButtonSize, ButtonVariant};
use crate::components::container::{Container, ContainerSize};
use crate::components::page_hero::PageHero;
use crate::components::picture::Picture;
use crate::components::section_intro::SectionIntro;
use crate::components::stat_strip::StatStrip;
use crate::content::museum::{ABOUT_STATS, HISTORY, TEAM, TESTIMONIALS, VALUES};
use crate::util::motion::{Reveal, STAGGER_STEP_MS, stagger};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About - Musea"/>
        <PageHero
            caption="Our Story"
            title="About Musea"
            image="/images/museum.jpg"
            lead="For over five decades, Musea has been at the forefront of cultural innovation, bringing together the world's finest artworks and most passionate art lovers. We believe that art has the power to transform lives, bridge cultures, and inspire the next generation of creators."
        />

        <section class="section">
            <Container>
                <SectionIntro
                    title="Our Impact"
                    lead="Numbers that reflect our commitment to excellence and our community's trust."
                />
                <StatStrip stats=ABOUT_STATS/>
            </Container>
        </section>

        <section class="section section--light">
            <Container>
                <SectionIntro
                    title="Our Values"
                    lead="The principles that guide everything we do and shape our vision for the future."
                />
                <div class="card-grid card-grid--3">
                    {VALUES
                        .iter()
                        .enumerate()
                        .map(|(i, value)| {
                            view! {
                                <div class=format!("card {}", Reveal::FadeUp.class()) style=stagger(i, 200)>
                                    <h3 class="type-h4 font-coanda text-primary">{value.title}</h3>
                                    <p class="type-body font-poppins text-secondary">{value.body}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Container>
        </section>

        <section class="section">
            <Container size=ContainerSize::Md>
                <SectionIntro title="Our History"/>
                <ol class="timeline">
                    {HISTORY
                        .iter()
                        .enumerate()
                        .map(|(i, milestone)| {
                            view! {
                                <li class=format!("timeline__item {}", Reveal::SlideIn.class()) style=stagger(i, 200)>
                                    <h3 class="type-h5 font-coanda text-accent">{milestone.title}</h3>
                                    <p class="type-body font-poppins text-secondary">{milestone.body}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </Container>
        </section>

        <section class="section section--light">
            <Container>
                <SectionIntro
                    title="Meet Our Team"
                    lead="The passionate individuals who bring our vision to life and make Musea a world-class cultural destination."
                />
                <div class="card-grid card-grid--3">
                    {TEAM
                        .iter()
                        .enumerate()
                        .map(|(i, member)| {
                            view! {
                                <div class=format!("card team-card {}", Reveal::FadeUp.class()) style=stagger(i, STAGGER_STEP_MS * 2)>
                                    <Picture src=member.image alt=member.name class="team-card__picture"/>
                                    <h3 class="type-h5 font-coanda text-primary">{member.name}</h3>
                                    <p class="type-body-small font-poppins text-accent">{member.role}</p>
                                    <p class="type-body-small font-poppins text-secondary">{member.bio}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="section__more">
                    <ButtonLink href="/contact" variant=ButtonVariant::Outline>"View Full Team"</ButtonLink>
                </div>
            </Container>
        </section>

        <section class="section section--dark">
            <Container>
                <SectionIntro
                    title="What People Say"
                    lead="Hear from our visitors, educators, and art enthusiasts about their experiences at Musea."
                    inverse=true
                />
                <div class="card-grid card-grid--3">
                    {TESTIMONIALS
                        .iter()
                        .enumerate()
                        .map(|(i, t)| {
                            view! {
                                <figure class=format!("quote-card {}", Reveal::FadeIn.class()) style=stagger(i, 200)>
                                    <blockquote class="type-body-large font-poppins text-inverse">
                                        {format!("\u{201c}{}\u{201d}", t.quote)}
                                    </blockquote>
                                    <figcaption>
                                        <span class="type-h6 font-coanda text-inverse">{t.author}</span>
                                        <span class="type-body-small text-accent">{t.role}</span>
                                    </figcaption>
                                </figure>
                            }
                        })
                        .collect_view()}
                </div>
            </Container>
        </section>

        <section class="section">
            <Container size=ContainerSize::Md>
                <SectionIntro
                    title="Join Our Journey"
                    lead="Be part of our mission to make art accessible, inspiring, and transformative. Whether you're an art lover, educator, or simply curious, there's a place for you at Musea."
                />
                <div class="cta-row">
                    <ButtonLink href="/visit" size=ButtonSize::Lg>"Plan Your Visit"</ButtonLink>
                    <ButtonLink href="/contact" variant=ButtonVariant::Outline size=ButtonSize::Lg>
                        "Support Our Mission"
                    </ButtonLink>
                </div>
            </Container>
        </section>
    }
}
