//! OS theme watcher backed by `prefers-color-scheme` media queries.
//!
//! ARCHITECTURE
//! ============
//! Two queries (`dark` and `light`) are evaluated together; a change on
//! either re-classifies the pair. Browsers that do not understand the feature
//! report the query text as `not all`, which maps to
//! [`OsTheme::NotSupported`].

use theme::OsTheme;
#[cfg(feature = "hydrate")]
use theme::{OnChange, Subscription, ThemeWatcher};

#[cfg(test)]
#[path = "media_query_test.rs"]
mod tests;

pub const DARK_QUERY: &str = "(prefers-color-scheme: dark)";
pub const LIGHT_QUERY: &str = "(prefers-color-scheme: light)";

/// Query text browsers report for media features they cannot evaluate.
pub const UNSUPPORTED_MEDIA: &str = "not all";

/// Map the evaluated query pair to the theme event to report.
#[must_use]
pub fn classify(supported: bool, dark_matches: bool, light_matches: bool) -> OsTheme {
    if !supported {
        OsTheme::NotSupported
    } else if dark_matches {
        OsTheme::Dark
    } else if light_matches {
        OsTheme::Light
    } else {
        OsTheme::NoPreference
    }
}

/// Watcher over the current window's color-scheme queries.
#[derive(Clone, Copy, Debug, Default)]
pub struct MediaQueryWatcher;

#[cfg(feature = "hydrate")]
type ChangeListener = wasm_bindgen::closure::Closure<dyn FnMut()>;

/// Registered `change` listeners; removed on unsubscribe or drop.
#[cfg(feature = "hydrate")]
pub struct MediaQuerySubscription {
    listeners: Vec<(web_sys::MediaQueryList, ChangeListener)>,
}

#[cfg(feature = "hydrate")]
impl Drop for MediaQuerySubscription {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;

        for (query, listener) in self.listeners.drain(..) {
            let _ = query.remove_event_listener_with_callback("change", listener.as_ref().unchecked_ref());
        }
    }
}

#[cfg(feature = "hydrate")]
impl Subscription for MediaQuerySubscription {
    fn unsubscribe(self) {
        drop(self);
    }
}

#[cfg(feature = "hydrate")]
fn evaluate(dark: &web_sys::MediaQueryList, light: &web_sys::MediaQueryList) -> OsTheme {
    classify(dark.media() != UNSUPPORTED_MEDIA, dark.matches(), light.matches())
}

#[cfg(feature = "hydrate")]
impl ThemeWatcher for MediaQueryWatcher {
    type Subscription = MediaQuerySubscription;

    fn subscribe(&self, mut on_change: OnChange) -> Self::Subscription {
        use std::cell::RefCell;
        use std::rc::Rc;

        use wasm_bindgen::JsCast;

        let queries = web_sys::window().and_then(|w| {
            let dark = w.match_media(DARK_QUERY).ok().flatten()?;
            let light = w.match_media(LIGHT_QUERY).ok().flatten()?;
            Some((dark, light))
        });
        let Some((dark, light)) = queries else {
            log::debug!("matchMedia unavailable; reporting no OS theme support");
            on_change(OsTheme::NotSupported);
            return MediaQuerySubscription { listeners: Vec::new() };
        };

        on_change(evaluate(&dark, &light));

        let on_change = Rc::new(RefCell::new(on_change));
        let mut listeners = Vec::with_capacity(2);
        for query in [dark.clone(), light.clone()] {
            let on_change = Rc::clone(&on_change);
            let (dark, light) = (dark.clone(), light.clone());
            let listener = ChangeListener::new(move || {
                let theme = evaluate(&dark, &light);
                let mut callback = on_change.borrow_mut();
                (*callback)(theme);
            });
            if query
                .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
                .is_ok()
            {
                listeners.push((query, listener));
            }
        }

        MediaQuerySubscription { listeners }
    }
}
