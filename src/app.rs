mod about;
mod blog;
mod contact;
mod footer;
mod hero;
mod homepage;
mod projects;
mod reveal;
mod theme;
mod typewriter;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::SiteConfig;
use homepage::HomePage;
use reveal::NoScriptReveal;
pub use theme::ThemeState;
use theme::use_theme;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="build-time" content={env!("BUILD_TIME")} />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
                <NoScriptReveal />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = SiteConfig::default();
    let theme = use_theme(&config);

    view! {
        <Title text="Akhil Vishnubhotla" />
        <Meta name="color-scheme" content=move || theme.get().as_str() />

        <Router>
            <div class=theme.class(crate::theme::palette::PAGE)>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=move || view! { <HomePage theme config /> } />
                </Routes>
            </div>
        </Router>
    }
}
