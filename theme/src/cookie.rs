//! Cookie pair model and the storage seam.
//!
//! Cookie values are only ever `"0"` or `"1"`: a [`CookieWrite`] carries a
//! `bool` and renders it through [`flag`], so no other value can be produced.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::ThemeConfig;

#[cfg(test)]
#[path = "cookie_test.rs"]
mod tests;

/// Which of the two preference cookies a write targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CookieKind {
    AutoMode,
    DarkMode,
}

/// One pending cookie write produced by a transition or by bootstrap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CookieWrite {
    pub kind: CookieKind,
    pub enabled: bool,
}

impl CookieWrite {
    #[must_use]
    pub const fn auto_mode(enabled: bool) -> Self {
        Self { kind: CookieKind::AutoMode, enabled }
    }

    #[must_use]
    pub const fn dark_mode(enabled: bool) -> Self {
        Self { kind: CookieKind::DarkMode, enabled }
    }

    #[must_use]
    pub fn value(&self) -> &'static str {
        flag(self.enabled)
    }
}

/// String form of a preference flag.
#[must_use]
pub fn flag(enabled: bool) -> &'static str {
    if enabled { "1" } else { "0" }
}

/// Attributes applied to every preference cookie. `SameSite` is always `Lax`.
///
/// The server's options travel to the client in the hydration payload so
/// browser rewrites keep the same attributes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CookieOptions {
    pub path: String,
    pub secure: bool,
}

impl Default for CookieOptions {
    fn default() -> Self {
        Self { path: "/".to_owned(), secure: false }
    }
}

impl CookieOptions {
    /// Attribute suffix for a `document.cookie` assignment.
    #[must_use]
    pub fn attributes(&self) -> String {
        let mut out = format!("Path={}; SameSite=Lax", self.path);
        if self.secure {
            out.push_str("; Secure");
        }
        out
    }
}

/// Durable key/value cookie storage tied to one request/response cycle or
/// one browser document.
///
/// Writes are fire-and-forget: adapters swallow backend failures.
pub trait CookieStore {
    /// Every cookie visible to this store, by name.
    fn read_all(&self) -> HashMap<String, String>;

    /// Set one cookie using the adapter's [`CookieOptions`].
    fn write(&mut self, name: &str, value: &str);
}

/// Perform `writes` against `store`, resolving names through `config`.
pub fn persist<S: CookieStore + ?Sized>(store: &mut S, config: &ThemeConfig, writes: &[CookieWrite]) {
    for write in writes {
        store.write(config.cookie_name(write.kind), write.value());
    }
}

/// In-process cookie store that records every write in order.
#[derive(Clone, Debug, Default)]
pub struct MemoryCookieStore {
    cookies: HashMap<String, String>,
    writes: Vec<(String, String)>,
}

impl MemoryCookieStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing cookies without recording writes.
    #[must_use]
    pub fn with_cookies<I, K, V>(cookies: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            cookies: cookies.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            writes: Vec::new(),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }

    /// Writes performed so far, oldest first.
    #[must_use]
    pub fn writes(&self) -> &[(String, String)] {
        &self.writes
    }

    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }
}

impl CookieStore for MemoryCookieStore {
    fn read_all(&self) -> HashMap<String, String> {
        self.cookies.clone()
    }

    fn write(&mut self, name: &str, value: &str) {
        self.cookies.insert(name.to_owned(), value.to_owned());
        self.writes.push((name.to_owned(), value.to_owned()));
    }
}
