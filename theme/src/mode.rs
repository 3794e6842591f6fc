//! Theme modes chosen by the user and reported by the OS.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "mode_test.rs"]
mod tests;

/// Error returned when parsing a [`Mode`] from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme mode {0:?} (expected \"dark\" or \"light\")")]
pub struct ParseModeError(pub String);

/// A concrete visual theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Dark,
    #[default]
    Light,
}

impl Mode {
    #[must_use]
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Lowercase name, also used as the `data-theme` attribute value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(ParseModeError(raw.to_owned())),
        }
    }
}

/// One notification from the OS theme watcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OsTheme {
    Dark,
    Light,
    /// The platform supports theme reporting but the user has no preference.
    NoPreference,
    /// The platform cannot report a theme at all.
    NotSupported,
}

impl OsTheme {
    /// The concrete mode carried by this event, if any.
    #[must_use]
    pub fn mode(self) -> Option<Mode> {
        match self {
            Self::Dark => Some(Mode::Dark),
            Self::Light => Some(Mode::Light),
            Self::NoPreference | Self::NotSupported => None,
        }
    }
}
