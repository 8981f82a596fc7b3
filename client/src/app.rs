//! Root application component with routing and the page chrome.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::SiteFooter;
use crate::components::header::SiteHeader;
use crate::content::museum::TAGLINE;
use crate::pages::{
    about::AboutPage, collections::CollectionsPage, contact::ContactPage, exhibitions::ExhibitionsPage,
    home::HomePage, not_found::NotFoundPage, visit::VisitPage,
};
use crate::theme;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" style=theme::root_style()>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Every route shares the header and footer; pages own their own state.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/musea.css"/>
        <Title text="Musea - Art Museum"/>
        <Meta name="description" content=TAGLINE/>

        <Router>
            <SiteHeader/>
            <main class="site-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("exhibitions") view=ExhibitionsPage/>
                    <Route path=StaticSegment("collections") view=CollectionsPage/>
                    <Route path=StaticSegment("visit") view=VisitPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                </Routes>
            </main>
            <SiteFooter/>
        </Router>
    }
}
