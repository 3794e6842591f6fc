//! Landing page demonstrating the dark mode controls.

use leptos::prelude::*;

use crate::components::theme_switcher::ThemeSwitcher;
use crate::state::dark_mode::use_dark_mode;
use crate::util::seed;

/// Home page: explains the active mode and hosts the switcher.
#[component]
pub fn HomePage() -> impl IntoView {
    let provided = use_dark_mode().is_some();
    let rendered_path = seed::load().prop_str("path").map(str::to_owned);

    view! {
        <section class="home">
            <h1>"Duskmode"</h1>
            <p class="home__lede">
                "Your theme choice is stored in two cookies, so the next page load renders in the same mode."
            </p>
            <Show
                when=move || provided
                fallback=|| view! { <p class="home__note">"Theme context is disabled for this app."</p> }
            >
                <ThemeSwitcher/>
            </Show>
            {rendered_path.map(|path| view! { <p class="home__meta">"Server render for " <code>{path}</code></p> })}
        </section>
    }
}
