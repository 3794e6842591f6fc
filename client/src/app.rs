//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::theme_badge::ThemeBadge;
use crate::pages::home::HomePage;
use crate::state::dark_mode::{DarkMode, WithDarkMode};
use crate::util::seed::{self, SEED_ELEMENT_ID};

/// HTML shell rendered on the server for SSR + hydration.
///
/// The `<html>` element carries the seeded mode and the hydration payload is
/// embedded for the client, so the first paint and the hydrated tree agree.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let payload = seed::load();
    let mode = payload.initial_state().mode().as_str();
    let payload_json = payload.to_script_json();

    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme=mode>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script type="application/json" id=SEED_ELEMENT_ID inner_html=payload_json></script>
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
/// Mounts the dark mode provider from the hydration payload and sets up
/// client-side routing beneath it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let payload = seed::load();
    #[cfg(feature = "hydrate")]
    log::debug!("mounting dark mode provider with seed {:?}", payload.seed);

    view! {
        <Stylesheet id="leptos" href="/pkg/duskmode.css"/>
        <Title text="Duskmode"/>

        <WithDarkMode
            config=payload.config
            seed=payload.seed
            cookie_options=payload.cookie_options
            app=|dark_mode: DarkMode| {
                view! {
                    <Router>
                        <header class="topbar">
                            <span class="topbar__title">"Duskmode"</span>
                            <ThemeBadge dark_mode=dark_mode/>
                        </header>
                        <main>
                            <Routes fallback=|| "Page not found.".into_view()>
                                <Route path=StaticSegment("") view=HomePage/>
                            </Routes>
                        </main>
                    </Router>
                }
            }
        />
    }
}

