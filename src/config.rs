//! Server configuration parsed from environment variables.

use theme::{Mode, ParseModeError, ThemeConfig};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {0:?}")]
    InvalidPort(String),
    #[error("invalid DARK_MODE_DEFAULT: {0}")]
    DefaultMode(#[from] ParseModeError),
    #[error("{var} is not a valid cookie name: {value:?}")]
    CookieName { var: &'static str, value: String },
    #[error("{var} must be a boolean word (1/0, true/false, yes/no, on/off), got {value:?}")]
    InvalidBool { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub theme: ThemeConfig,
    /// Mark preference cookies `Secure`.
    pub cookie_secure: bool,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `DARK_MODE_AUTO_COOKIE`: default `autoMode`
    /// - `DARK_MODE_DARK_COOKIE`: default `darkMode`
    /// - `DARK_MODE_DEFAULT`: `light` (default) or `dark`
    /// - `DARK_MODE_PROVIDER`: boolean word, default on
    /// - `COOKIE_SECURE`: boolean word, default off
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let defaults = ThemeConfig::default();
        let theme = ThemeConfig {
            auto_mode_cookie_name: cookie_name(&lookup, "DARK_MODE_AUTO_COOKIE", defaults.auto_mode_cookie_name)?,
            dark_mode_cookie_name: cookie_name(&lookup, "DARK_MODE_DARK_COOKIE", defaults.dark_mode_cookie_name)?,
            default_mode: lookup("DARK_MODE_DEFAULT")
                .map(|raw| raw.parse::<Mode>())
                .transpose()?
                .unwrap_or(defaults.default_mode),
            provider: bool_var(&lookup, "DARK_MODE_PROVIDER", defaults.provider)?,
        };

        let cookie_secure = bool_var(&lookup, "COOKIE_SECURE", false)?;

        Ok(Self { port, theme, cookie_secure })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn bool_var(lookup: &impl Fn(&str) -> Option<String>, var: &'static str, default: bool) -> Result<bool, ConfigError> {
    match lookup(var) {
        Some(value) => parse_bool(&value).ok_or(ConfigError::InvalidBool { var, value }),
        None => Ok(default),
    }
}

fn cookie_name(lookup: &impl Fn(&str) -> Option<String>, var: &'static str, default: String) -> Result<String, ConfigError> {
    let Some(value) = lookup(var) else {
        return Ok(default);
    };
    if is_cookie_token(&value) {
        Ok(value)
    } else {
        Err(ConfigError::CookieName { var, value })
    }
}

/// RFC 6265 cookie-name token: visible ASCII minus separators.
fn is_cookie_token(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_graphic() && !b"()<>@,;:\\\"/[]?={}".contains(&b))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
