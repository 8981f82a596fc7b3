//! Site header: logo, primary navigation, and the visit CTA.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once by the app shell above every route. Highlights the link for
//! the current path, collapses into a toggle menu on narrow screens, and
//! gains a shadow once the page scrolls past `SCROLL_SHADOW_THRESHOLD`.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::button::{ButtonLink, ButtonSize, ButtonVariant};
use crate::content::museum::MUSEUM_NAME;
use crate::state::ui::NavState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", href: "/" },
    NavItem { label: "Exhibitions", href: "/exhibitions" },
    NavItem { label: "Collections", href: "/collections" },
    NavItem { label: "Visit", href: "/visit" },
    NavItem { label: "About", href: "/about" },
    NavItem { label: "Contact", href: "/contact" },
];

/// Whether the nav link `href` should be highlighted at `path`.
///
/// `/` only matches itself; other links also match their sub-paths.
#[must_use]
pub fn is_active(href: &str, path: &str) -> bool {
    if href == "/" {
        return path == "/";
    }
    path.strip_prefix(href).is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());
    let pathname = use_location().pathname;

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let y = web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
            nav.update(|n| n.observe_scroll(y));
        });
        on_cleanup(move || handle.remove());
    }

    let link = move |item: &'static NavItem, class: &'static str| {
        view! {
            <a
                href=item.href
                class=class
                class:active=move || is_active(item.href, &pathname.get())
                on:click=move |_| nav.update(NavState::close_menu)
            >
                {item.label}
            </a>
        }
    };

    view! {
        <header class="site-header" class:site-header--scrolled=move || nav.get().scrolled>
            <div class="container container--xl pad-md site-header__bar">
                <a href="/" class="site-header__logo">
                    <span class="site-header__mark">"M"</span>
                    <span class="site-header__name">{MUSEUM_NAME}</span>
                </a>

                <nav class="site-header__nav" aria-label="Primary">
                    {NAV_ITEMS.iter().map(|item| link(item, "site-header__link")).collect_view()}
                </nav>

                <div class="site-header__cta">
                    <ButtonLink href="/visit" variant=ButtonVariant::Primary size=ButtonSize::Sm>
                        "Book Visit"
                    </ButtonLink>
                </div>

                <button
                    class="site-header__toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || nav.get().menu_open.to_string()
                    on:click=move |_| nav.update(NavState::toggle_menu)
                >
                    {move || if nav.get().menu_open { "\u{2715}" } else { "\u{2630}" }}
                </button>
            </div>

            <Show when=move || nav.get().menu_open>
                <nav class="site-header__drawer" aria-label="Mobile">
                    {NAV_ITEMS.iter().map(|item| link(item, "site-header__drawer-link")).collect_view()}
                    <a href="/visit" class="btn btn--primary btn--md" on:click=move |_| nav.update(NavState::close_menu)>
                        "Book Visit"
                    </a>
                </nav>
            </Show>
        </header>
    }
}
