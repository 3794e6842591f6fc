//! Per-request derivation of the initial preference pair.
//!
//! ARCHITECTURE
//! ============
//! [`compute_initial_state`] is the pure half: cookies in, seed plus repair
//! writes out. [`bootstrap`] is the request-scoped wrapper that awaits the
//! wrapped page's own initial props and, in the server phase only, applies the
//! repairs to the response cookie store.

use std::collections::HashMap;
use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::config::ThemeConfig;
use crate::cookie::{CookieKind, CookieStore, CookieWrite, flag, persist};
use crate::mode::Mode;

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod tests;

/// Preference pair computed on the server and handed to the client for hydration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSeed {
    pub auto_mode: bool,
    pub dark_mode: bool,
}

impl ThemeSeed {
    /// Mode the first paint should use.
    #[must_use]
    pub fn mode(self) -> Mode {
        Mode::from_dark(self.dark_mode)
    }
}

/// Which half of the render cycle is running bootstrap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderPhase {
    /// Server render of a fresh request; cookies are read and repaired.
    Server,
    /// Client-side navigation; cookies were already established by the server.
    Client,
}

/// Output of [`bootstrap`]: the wrapped props plus, on the server, the seed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitialProps<P> {
    pub seed: Option<ThemeSeed>,
    pub initial_props: P,
}

/// Derive the seed from raw cookies and list the writes that repair them.
///
/// Absent or malformed cookies fall back to defaults: auto mode on, and dark
/// mode taken from `config.default_mode`. A repair write is emitted whenever the
/// raw value differs from the canonical `"0"`/`"1"` form of the derived flag.
#[must_use]
pub fn compute_initial_state(cookies: &HashMap<String, String>, config: &ThemeConfig) -> (ThemeSeed, Vec<CookieWrite>) {
    let raw_auto = cookies.get(config.cookie_name(CookieKind::AutoMode)).map(String::as_str);
    let raw_dark = cookies.get(config.cookie_name(CookieKind::DarkMode)).map(String::as_str);

    let auto_mode = raw_auto.map_or(true, |value| value == "1");
    let dark_mode = raw_dark.map_or(config.default_mode.is_dark(), |value| value == "1");

    let mut writes = Vec::with_capacity(2);
    for (write, raw) in [(CookieWrite::auto_mode(auto_mode), raw_auto), (CookieWrite::dark_mode(dark_mode), raw_dark)] {
        if raw != Some(flag(write.enabled)) {
            tracing::debug!(
                cookie = config.cookie_name(write.kind),
                found = ?raw,
                value = write.value(),
                "repairing dark mode cookie"
            );
            writes.push(write);
        }
    }

    (ThemeSeed { auto_mode, dark_mode }, writes)
}

/// Run the bootstrap for one render.
///
/// The wrapped page's initial props are always awaited first. In
/// [`RenderPhase::Server`] the cookie pair is then derived from `store` and any
/// repairs are written back to it; in [`RenderPhase::Client`] the store is
/// left untouched and no seed is returned.
pub async fn bootstrap<S, F>(phase: RenderPhase, store: &mut S, config: &ThemeConfig, wrapped: F) -> InitialProps<F::Output>
where
    S: CookieStore + ?Sized,
    F: Future,
{
    let initial_props = wrapped.await;

    match phase {
        RenderPhase::Server => {
            let (seed, writes) = compute_initial_state(&store.read_all(), config);
            persist(store, config, &writes);
            InitialProps { seed: Some(seed), initial_props }
        }
        RenderPhase::Client => InitialProps { seed: None, initial_props },
    }
}
