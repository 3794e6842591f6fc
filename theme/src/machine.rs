//! Effectful half of the theme reducer.
//!
//! [`step`] is the one place where a transition and its cookie writes are
//! applied together. Hosts call it from wherever they keep the state; the
//! Leptos client calls it from inside a signal update.

use crate::config::ThemeConfig;
use crate::cookie::{CookieStore, persist};
use crate::state::{ThemeEvent, ThemeState, apply_event};

#[cfg(test)]
#[path = "machine_test.rs"]
mod tests;

/// Apply `event` to `state` in place and write the resulting cookies.
///
/// Returns whether any state field changed.
pub fn step<S: CookieStore + ?Sized>(state: &mut ThemeState, event: ThemeEvent, store: &mut S, config: &ThemeConfig) -> bool {
    let transition = apply_event(state, event);
    persist(store, config, &transition.writes);
    let changed = transition.state != *state;
    *state = transition.state;
    changed
}
