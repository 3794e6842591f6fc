//! Auto / Dark / Light segmented control.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::dark_mode::use_dark_mode;

#[cfg(test)]
#[path = "theme_switcher_test.rs"]
mod tests;

/// CSS class for one segment of the switcher.
fn segment_class(selected: bool) -> &'static str {
    if selected { "btn theme-switcher__option theme-switcher__option--selected" } else { "btn theme-switcher__option" }
}

/// Three-way theme control bound to the provided dark mode handle.
///
/// Renders nothing when no provider is mounted. "Auto" stays disabled until the
/// OS has reported a theme.
#[component]
pub fn ThemeSwitcher() -> impl IntoView {
    let Some(dark_mode) = use_dark_mode() else {
        return ().into_any();
    };

    let auto_selected = move || dark_mode.auto_mode_active();
    let dark_selected = move || !dark_mode.auto_mode_active() && dark_mode.dark_mode_active();
    let light_selected = move || !dark_mode.auto_mode_active() && !dark_mode.dark_mode_active();

    view! {
        <div class="theme-switcher" role="group" aria-label="Color theme">
            <button
                class=move || segment_class(auto_selected())
                disabled=move || !dark_mode.auto_mode_supported()
                title="Follow the system theme"
                on:click=move |_| dark_mode.switch_to_auto_mode()
            >
                "Auto"
            </button>
            <button
                class=move || segment_class(dark_selected())
                on:click=move |_| dark_mode.switch_to_dark_mode()
            >
                "Dark"
            </button>
            <button
                class=move || segment_class(light_selected())
                on:click=move |_| dark_mode.switch_to_light_mode()
            >
                "Light"
            </button>
        </div>
    }
    .into_any()
}
