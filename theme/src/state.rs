//! Theme state and its pure transition function.
//!
//! DESIGN
//! ======
//! [`apply_event`] never fails and never touches storage. It returns the next
//! state together with the cookie writes that must accompany it; hosts apply
//! both in one step so a dark mode change is never persisted without its
//! state, or vice versa.
//!
//! TRADE-OFFS
//! ==========
//! Once OS reporting is known to work, every concrete OS theme event drives
//! `dark_mode_active`, even while the user has pinned a manual mode. Only the
//! very first observation respects a manual choice. This mirrors the shipped
//! behavior and is kept deliberately until the intended rule is confirmed.

use serde::{Deserialize, Serialize};

use crate::bootstrap::ThemeSeed;
use crate::config::ThemeConfig;
use crate::cookie::CookieWrite;
use crate::mode::{Mode, OsTheme};

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;

/// Reactive preference state owned by one mounted page tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeState {
    /// The user follows the OS theme.
    pub auto_mode_active: bool,
    /// At least one concrete OS theme has been observed since support was last lost.
    pub auto_mode_supported: bool,
    /// Last OS-reported mode; meaningless until `auto_mode_supported`.
    pub browser_mode: Mode,
    /// Whether dark mode is visually active.
    pub dark_mode_active: bool,
}

impl ThemeState {
    /// Initial state at mount.
    ///
    /// Without a seed (no server phase) both flags start off.
    #[must_use]
    pub fn from_seed(seed: Option<ThemeSeed>, config: &ThemeConfig) -> Self {
        let seed = seed.unwrap_or(ThemeSeed { auto_mode: false, dark_mode: false });
        Self {
            auto_mode_active: seed.auto_mode,
            auto_mode_supported: false,
            browser_mode: config.default_mode,
            dark_mode_active: seed.dark_mode,
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        Mode::from_dark(self.dark_mode_active)
    }
}

/// Everything that can move the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeEvent {
    SwitchToAutoMode,
    SwitchToDarkMode,
    SwitchToLightMode,
    Os(OsTheme),
}

/// Result of one transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: ThemeState,
    pub writes: Vec<CookieWrite>,
}

impl Transition {
    fn unchanged(state: ThemeState) -> Self {
        Self { state, writes: Vec::new() }
    }
}

/// Compute the successor of `state` under `event`.
#[must_use]
pub fn apply_event(state: &ThemeState, event: ThemeEvent) -> Transition {
    let mut next = *state;
    match event {
        ThemeEvent::SwitchToAutoMode => {
            if !state.auto_mode_supported {
                tracing::debug!("auto mode requested before OS theme support was observed; ignoring");
                return Transition::unchanged(next);
            }
            next.auto_mode_active = true;
            next.dark_mode_active = state.browser_mode.is_dark();
            Transition { state: next, writes: vec![CookieWrite::auto_mode(true), CookieWrite::dark_mode(next.dark_mode_active)] }
        }
        ThemeEvent::SwitchToDarkMode => manual(next, true),
        ThemeEvent::SwitchToLightMode => manual(next, false),
        ThemeEvent::Os(theme) => match theme.mode() {
            Some(mode) => observe(next, mode),
            None => {
                next.auto_mode_supported = false;
                Transition { state: next, writes: vec![CookieWrite::auto_mode(false)] }
            }
        },
    }
}

fn manual(mut next: ThemeState, dark: bool) -> Transition {
    next.auto_mode_active = false;
    next.dark_mode_active = dark;
    Transition { state: next, writes: vec![CookieWrite::auto_mode(false), CookieWrite::dark_mode(dark)] }
}

fn observe(mut next: ThemeState, mode: Mode) -> Transition {
    let is_dark = mode.is_dark();
    next.browser_mode = mode;

    if next.auto_mode_supported || next.auto_mode_active {
        next.auto_mode_supported = true;
        next.dark_mode_active = is_dark;
        return Transition { state: next, writes: vec![CookieWrite::dark_mode(is_dark)] };
    }

    // First observation while a manual mode is pinned: record support only.
    next.auto_mode_supported = true;
    Transition::unchanged(next)
}
