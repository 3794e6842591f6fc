//! Wrap-time configuration for the dark mode preference pair.

use serde::{Deserialize, Serialize};

use crate::cookie::CookieKind;
use crate::mode::Mode;

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_AUTO_MODE_COOKIE: &str = "autoMode";
pub const DEFAULT_DARK_MODE_COOKIE: &str = "darkMode";

/// Cookie names, fallback mode, and whether the context bridge is mounted.
///
/// Deserializing a partial object fills the missing fields from
/// [`ThemeConfig::default`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub auto_mode_cookie_name: String,
    pub dark_mode_cookie_name: String,
    /// Mode assumed when no dark mode cookie exists yet.
    pub default_mode: Mode,
    /// Provide the dark mode handle to descendants through context.
    pub provider: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            auto_mode_cookie_name: DEFAULT_AUTO_MODE_COOKIE.to_owned(),
            dark_mode_cookie_name: DEFAULT_DARK_MODE_COOKIE.to_owned(),
            default_mode: Mode::Light,
            provider: true,
        }
    }
}

impl ThemeConfig {
    #[must_use]
    pub fn cookie_name(&self, kind: CookieKind) -> &str {
        match kind {
            CookieKind::AutoMode => &self.auto_mode_cookie_name,
            CookieKind::DarkMode => &self.dark_mode_cookie_name,
        }
    }
}
