//! Site footer: brand blurb, contact lines, quick links, social links.

use leptos::prelude::*;

use crate::content::museum::{ADDRESS, INFO_EMAIL, MAIN_PHONE, MUSEUM_NAME};

const QUICK_LINKS: &[(&str, &str)] = &[
    ("Exhibitions", "/exhibitions"),
    ("Collections", "/collections"),
    ("Visit Us", "/visit"),
    ("About", "/about"),
    ("Contact", "/contact"),
];

const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("Instagram", "https://instagram.com"),
    ("Facebook", "https://facebook.com"),
    ("Twitter", "https://twitter.com"),
    ("YouTube", "https://youtube.com"),
];

#[component]
pub fn SiteFooter() -> impl IntoView {
    let year = time::OffsetDateTime::now_utc().year();

    view! {
        <footer class="site-footer">
            <div class="container container--xl pad-md site-footer__grid">
                <div class="site-footer__brand">
                    <a href="/" class="site-footer__logo">
                        <span class="site-header__mark">"M"</span>
                        <span>{MUSEUM_NAME}</span>
                    </a>
                    <p>
                        "Discover extraordinary art collections and immerse yourself in the world of creativity. "
                        "Experience masterpieces from renowned artists across different eras and movements."
                    </p>
                    <ul class="site-footer__contact">
                        <li>{ADDRESS}</li>
                        <li>{MAIN_PHONE}</li>
                        <li>{INFO_EMAIL}</li>
                    </ul>
                </div>

                <div>
                    <h3 class="site-footer__heading">"Quick Links"</h3>
                    <ul class="site-footer__links">
                        {QUICK_LINKS
                            .iter()
                            .map(|(label, href)| view! { <li><a href=*href>{*label}</a></li> })
                            .collect_view()}
                    </ul>
                </div>

                <div>
                    <h3 class="site-footer__heading">"Stay Connected"</h3>
                    <p>"Subscribe to our newsletter for the latest exhibitions and events."</p>
                    <form class="site-footer__newsletter" on:submit=|ev| ev.prevent_default()>
                        <input type="email" placeholder="Your email" aria-label="Email address"/>
                        <button type="submit" class="btn btn--primary btn--sm">"Subscribe"</button>
                    </form>
                    <div class="site-footer__social">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|(label, href)| {
                                view! {
                                    <a href=*href target="_blank" rel="noopener noreferrer" aria-label=*label>
                                        {*label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div class="container container--xl pad-md site-footer__legal">
                <p>{format!("\u{a9} {year} Musea Art Museum. Made with \u{2665} for art lovers.")}</p>
                <div>
                    <a href="/privacy">"Privacy Policy"</a>
                    <a href="/terms">"Terms of Service"</a>
                </div>
            </div>
        </footer>
    }
}
