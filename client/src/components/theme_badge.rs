//! Compact readout of the current theme state.

use leptos::prelude::*;
use theme::ThemeState;

use crate::state::dark_mode::DarkMode;

#[cfg(test)]
#[path = "theme_badge_test.rs"]
mod tests;

/// Human-readable summary, e.g. `"Dark (following system)"`.
fn describe(state: &ThemeState) -> String {
    let mode = if state.dark_mode_active { "Dark" } else { "Light" };
    let source = match (state.auto_mode_active, state.auto_mode_supported) {
        (true, true) => "following system",
        (true, false) => "waiting for system",
        (false, _) => "manual",
    };
    format!("{mode} ({source})")
}

/// Badge showing the active mode and whether it follows the OS.
#[component]
pub fn ThemeBadge(dark_mode: DarkMode) -> impl IntoView {
    view! {
        <span class="theme-badge" data-mode=move || dark_mode.mode().as_str()>
            {move || describe(&dark_mode.state())}
        </span>
    }
}
