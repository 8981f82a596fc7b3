//! Row of headline figures.

use leptos::prelude::*;

use crate::content::museum::Stat;
use crate::util::motion::{Reveal, stagger};

#[component]
pub fn StatStrip(stats: &'static [Stat], #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <div class=format!("stat-strip {class}")>
            {stats
                .iter()
                .enumerate()
                .map(|(i, stat)| {
                    view! {
                        <div class=format!("stat {}", Reveal::ScaleIn.class()) style=stagger(i, 150)>
                            <span class="stat__glyph" aria-hidden="true">{stat.glyph}</span>
                            <span class="stat__number font-coanda text-accent">{stat.number}</span>
                            <span class="stat__label type-body-small text-secondary">{stat.label}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
