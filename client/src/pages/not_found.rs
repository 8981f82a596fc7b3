//! Fallback page for unknown routes. Responds with HTTP 404 during SSR.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::button::{ButtonLink, ButtonSize, ButtonVariant};
use crate::util::motion::{Reveal, stagger};

const POPULAR_SECTIONS: &[(&str, &str)] = &[
    ("Exhibitions", "/exhibitions"),
    ("Collections", "/collections"),
    ("Visit Us", "/visit"),
    ("About", "/about"),
];

/// Decorative dots drifting behind the message: `(left %, top %, delay s)`.
const FLOATERS: &[(u8, u8, f32)] = &[(10, 20, 0.0), (85, 15, 0.5), (20, 80, 1.0), (75, 75, 1.5), (50, 10, 2.0)];

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page Not Found - Musea"/>
        <section class="not-found">
            {FLOATERS
                .iter()
                .map(|(x, y, delay)| {
                    view! {
                        <span
                            class="not-found__floater"
                            style=format!("left: {x}%; top: {y}%; animation-delay: {delay}s;")
                            aria-hidden="true"
                        ></span>
                    }
                })
                .collect_view()}

            <div class="container container--md pad-md not-found__body">
                <h1 class=format!("not-found__code font-coanda text-accent {}", Reveal::ScaleIn.class())>"404"</h1>
                <h2 class=format!("type-h2 font-coanda text-primary {}", Reveal::FadeUp.class()) style=stagger(2, 100)>
                    "Artwork Not Found"
                </h2>
                <p class=format!("type-body-large font-poppins text-secondary {}", Reveal::FadeUp.class()) style=stagger(3, 100)>
                    "It seems the page you're looking for has been moved to a different gallery, "
                    "or perhaps it never existed in our collection."
                </p>

                <div class="cta-row reveal reveal--fade-up" style=stagger(4, 100)>
                    <ButtonLink href="/" size=ButtonSize::Lg icon="\u{2302}">"Return Home"</ButtonLink>
                    <ButtonLink href="/collections" variant=ButtonVariant::Outline size=ButtonSize::Lg icon="\u{2609}">
                        "Explore Collections"
                    </ButtonLink>
                </div>

                <p class="type-body font-poppins text-secondary">
                    "Looking for something specific? Try these popular sections:"
                </p>
                <nav class="not-found__links">
                    {POPULAR_SECTIONS
                        .iter()
                        .enumerate()
                        .map(|(i, (label, href))| {
                            view! {
                                <a href=*href class=format!("chip {}", Reveal::FadeIn.class()) style=stagger(i + 5, 100)>
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>

                <blockquote class="not-found__quote type-body font-poppins text-secondary">
                    "\u{201c}Every great work of art has two faces, one toward its own time and one toward the future, "
                    "toward eternity.\u{201d} \u{2014} Daniel Barenboim"
                </blockquote>
            </div>
        </section>
    }
}
