//! Hydration payload handed from the server render to the client.
//!
//! DESIGN
//! ======
//! The server bootstrap stores a [`HydrationPayload`] in the request
//! extensions; the shell serializes it into a JSON `<script>` block and the
//! hydrating client reads the same block back. Both renders therefore start
//! from identical input and the first client render matches the markup.

use serde::{Deserialize, Serialize};
use theme::{CookieOptions, ThemeConfig, ThemeSeed, ThemeState};

#[cfg(test)]
#[path = "seed_test.rs"]
mod tests;

/// DOM id of the JSON payload script.
pub const SEED_ELEMENT_ID: &str = "dark-mode-seed";

/// Error returned by [`HydrationPayload::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("malformed hydration payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Everything the server render hands to the client.
///
/// `seed` is present only when a server phase ran. `initial_props` is the
/// wrapped page's own props, resolved before the cookies were inspected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HydrationPayload {
    #[serde(default)]
    pub config: ThemeConfig,
    #[serde(default)]
    pub cookie_options: CookieOptions,
    #[serde(default)]
    pub seed: Option<ThemeSeed>,
    #[serde(default)]
    pub initial_props: serde_json::Value,
}

impl HydrationPayload {
    #[must_use]
    pub fn new(config: ThemeConfig, seed: Option<ThemeSeed>) -> Self {
        Self { config, seed, ..Self::default() }
    }

    #[must_use]
    pub fn with_cookie_options(mut self, cookie_options: CookieOptions) -> Self {
        self.cookie_options = cookie_options;
        self
    }

    #[must_use]
    pub fn with_initial_props(mut self, initial_props: serde_json::Value) -> Self {
        self.initial_props = initial_props;
        self
    }

    /// String field of the wrapped page props, if present.
    #[must_use]
    pub fn prop_str(&self, key: &str) -> Option<&str> {
        self.initial_props.get(key).and_then(serde_json::Value::as_str)
    }

    /// State the provider will mount with.
    #[must_use]
    pub fn initial_state(&self) -> ThemeState {
        ThemeState::from_seed(self.seed, &self.config)
    }

    /// JSON safe to embed inside a `<script>` element.
    #[must_use]
    pub fn to_script_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| "{}".to_owned())
            .replace('<', "\\u003c")
    }

    /// Decode a payload previously produced by [`Self::to_script_json`].
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Decode`] when `raw` is not a payload object.
    pub fn from_json(raw: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Payload for the current render.
///
/// On the server this is the value the bootstrap middleware attached to the
/// request; in the browser it is decoded from the shell. Anything missing or
/// malformed degrades to defaults with no seed.
#[cfg(feature = "ssr")]
pub fn load() -> HydrationPayload {
    leptos::prelude::use_context::<http::request::Parts>()
        .and_then(|parts| parts.extensions.get::<HydrationPayload>().cloned())
        .unwrap_or_default()
}

#[cfg(all(feature = "hydrate", not(feature = "ssr")))]
pub fn load() -> HydrationPayload {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(SEED_ELEMENT_ID))
        .and_then(|el| el.text_content());
    let Some(raw) = raw else {
        log::debug!("no hydration payload found; mounting with client defaults");
        return HydrationPayload::default();
    };
    HydrationPayload::from_json(&raw).unwrap_or_else(|e| {
        log::warn!("{e}; mounting with client defaults");
        HydrationPayload::default()
    })
}

#[cfg(not(any(feature = "ssr", feature = "hydrate")))]
pub fn load() -> HydrationPayload {
    HydrationPayload::default()
}
