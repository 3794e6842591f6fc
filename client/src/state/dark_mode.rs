//! Reactive dark mode state and the context bridge.
//!
//! DESIGN
//! ======
//! [`DarkMode`] is a `Copy` handle over an `RwSignal<ThemeState>`. Every
//! transition runs inside `maybe_update`, so it is applied to whatever the
//! state is at that moment rather than to a snapshot captured by a closure.
//! The reducer and its cookie writes come from `theme::step`.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`WithDarkMode`] wraps the application view. It owns the state for the
//! mounted tree and (when the config enables it) provides the handle to
//! descendants. After hydration it subscribes to the OS watcher once through
//! [`watch_os_theme`] and unsubscribes when the tree is cleaned up.

use leptos::prelude::*;
use theme::{CookieOptions, Mode, Subscription, ThemeConfig, ThemeEvent, ThemeSeed, ThemeState, ThemeWatcher, step};

use crate::util::cookies::BrowserCookies;
use crate::util::dark_mode::apply;

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod tests;

/// Dark mode state plus its three user transitions.
#[derive(Clone, Copy)]
pub struct DarkMode {
    state: RwSignal<ThemeState>,
    config: StoredValue<ThemeConfig>,
    cookie_options: StoredValue<CookieOptions>,
}

impl DarkMode {
    pub fn new(config: ThemeConfig, seed: Option<ThemeSeed>) -> Self {
        Self::with_cookie_options(config, seed, CookieOptions::default())
    }

    /// Like [`Self::new`], writing cookies with the server's attributes.
    pub fn with_cookie_options(config: ThemeConfig, seed: Option<ThemeSeed>, cookie_options: CookieOptions) -> Self {
        let state = RwSignal::new(ThemeState::from_seed(seed, &config));
        Self {
            state,
            config: StoredValue::new(config),
            cookie_options: StoredValue::new(cookie_options),
        }
    }

    /// Current state (tracked).
    pub fn state(&self) -> ThemeState {
        self.state.get()
    }

    pub fn auto_mode_active(&self) -> bool {
        self.state.with(|s| s.auto_mode_active)
    }

    pub fn auto_mode_supported(&self) -> bool {
        self.state.with(|s| s.auto_mode_supported)
    }

    pub fn browser_mode(&self) -> Mode {
        self.state.with(|s| s.browser_mode)
    }

    pub fn dark_mode_active(&self) -> bool {
        self.state.with(|s| s.dark_mode_active)
    }

    pub fn mode(&self) -> Mode {
        self.state.with(ThemeState::mode)
    }

    pub fn config(&self) -> ThemeConfig {
        self.config.get_value()
    }

    /// Document cookie store carrying this tree's cookie attributes.
    pub fn cookies(&self) -> BrowserCookies {
        BrowserCookies::new(self.cookie_options.get_value())
    }

    /// Follow the OS theme. Ignored until the OS has reported one.
    pub fn switch_to_auto_mode(&self) {
        self.dispatch(ThemeEvent::SwitchToAutoMode);
    }

    pub fn switch_to_dark_mode(&self) {
        self.dispatch(ThemeEvent::SwitchToDarkMode);
    }

    pub fn switch_to_light_mode(&self) {
        self.dispatch(ThemeEvent::SwitchToLightMode);
    }

    /// Apply one transition and persist its cookies to the document.
    pub fn dispatch(&self, event: ThemeEvent) {
        let mut cookies = self.cookies();
        self.config.with_value(|config| {
            self.state.maybe_update(|state| step(state, event, &mut cookies, config));
        });
    }
}

/// Create the handle for one mounted tree, providing it to descendants when
/// `config.provider` is set.
pub fn provide_dark_mode(config: ThemeConfig, seed: Option<ThemeSeed>, cookie_options: CookieOptions) -> DarkMode {
    let provider = config.provider;
    let dark_mode = DarkMode::with_cookie_options(config, seed, cookie_options);
    if provider {
        provide_context(dark_mode);
    }
    dark_mode
}

/// Dark mode handle provided by the nearest [`WithDarkMode`], if any.
pub fn use_dark_mode() -> Option<DarkMode> {
    use_context::<DarkMode>()
}

/// Like [`use_dark_mode`], for views that are always mounted under a provider.
///
/// # Panics
///
/// Panics when no [`WithDarkMode`] with `provider` enabled is an ancestor.
pub fn expect_dark_mode() -> DarkMode {
    expect_context::<DarkMode>()
}

/// Subscribe `dark_mode` to `watcher` for the lifetime of the current owner.
///
/// Subscribes immediately and unsubscribes exactly once when the owner is
/// cleaned up. Call it from a mount effect so the first OS report lands
/// after hydration.
pub fn watch_os_theme<W>(dark_mode: DarkMode, watcher: &W)
where
    W: ThemeWatcher,
    W::Subscription: 'static,
{
    let subscription = watcher.subscribe(Box::new(move |theme| {
        dark_mode.dispatch(ThemeEvent::Os(theme));
    }));
    let subscription = StoredValue::new_local(Some(subscription));
    on_cleanup(move || {
        if let Some(subscription) = subscription.try_update_value(Option::take).flatten() {
            subscription.unsubscribe();
        }
    });
}

/// Owns dark mode state for one mounted tree and renders `app` with it.
///
/// `app` receives the handle directly; descendants can also reach it through
/// [`use_dark_mode`] when `config.provider` is set.
#[component]
pub fn WithDarkMode<F, IV>(
    config: ThemeConfig,
    seed: Option<ThemeSeed>,
    #[prop(optional)] cookie_options: CookieOptions,
    app: F,
) -> impl IntoView
where
    F: FnOnce(DarkMode) -> IV + 'static,
    IV: IntoView + 'static,
{
    let dark_mode = provide_dark_mode(config, seed, cookie_options);

    Effect::new(move |_| apply(dark_mode.mode()));

    // Effects only run in the browser, once, after hydration.
    #[cfg(feature = "hydrate")]
    Effect::new(move |_| watch_os_theme(dark_mode, &crate::util::media_query::MediaQueryWatcher));

    app(dark_mode)
}
