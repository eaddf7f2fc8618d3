mod cursor;
mod footer;
mod header;
mod hero;
mod homepage;
mod icons;
mod resume;
mod reveal;
mod ui;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::meta::{self, palette, MONO, OPEN_GRAPH, SANS, TWITTER_CARD};
use homepage::PortfolioPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang=meta::LANG>
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="" />
                <link rel="stylesheet" href=meta::fonts_href() />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio.css" />
                <MetaTags />
            </head>
            <body
                class="antialiased"
                style=format!(
                    "{}: '{}', sans-serif; {}: '{}', monospace",
                    SANS.css_var,
                    SANS.family,
                    MONO.css_var,
                    MONO.family,
                )
            >
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <SocialMeta />
        <StructuredData />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

#[component]
fn SocialMeta() -> impl IntoView {
    let image = OPEN_GRAPH.image;
    view! {
        <Meta name="description" content=meta::DESCRIPTION />
        <Meta name="theme-color" content=palette::PAPER />

        <Meta property="og:title" content=OPEN_GRAPH.title />
        <Meta property="og:description" content=OPEN_GRAPH.description />
        <Meta property="og:url" content=OPEN_GRAPH.url />
        <Meta property="og:site_name" content=OPEN_GRAPH.site_name />
        <Meta property="og:image" content=image.url />
        <Meta property="og:image:width" content=image.width.to_string() />
        <Meta property="og:image:height" content=image.height.to_string() />
        <Meta property="og:image:alt" content=image.alt />
        <Meta property="og:locale" content=OPEN_GRAPH.locale />
        <Meta property="og:type" content=OPEN_GRAPH.kind />

        <Meta name="twitter:card" content=TWITTER_CARD.card />
        <Meta name="twitter:title" content=TWITTER_CARD.title />
        <Meta name="twitter:description" content=TWITTER_CARD.description />
        {TWITTER_CARD
            .images
            .iter()
            .map(|src| view! { <Meta name="twitter:image" content=*src /> })
            .collect_view()}
    }
}

#[component]
fn StructuredData() -> impl IntoView {
    match meta::person_json_ld() {
        Ok(json) => Some(view! { <script type="application/ld+json" inner_html=json></script> }),
        Err(e) => {
            log::error!("{e}");
            None
        }
    }
}
