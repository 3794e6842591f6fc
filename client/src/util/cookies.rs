//! `document.cookie` adapter for the theme cookie pair.

use std::collections::HashMap;

use theme::{CookieOptions, CookieStore};

#[cfg(test)]
#[path = "cookies_test.rs"]
mod tests;

/// Cookie store backed by the current document.
///
/// Writes are fire-and-forget; without `hydrate` both operations are inert.
#[derive(Clone, Debug, Default)]
pub struct BrowserCookies {
    options: CookieOptions,
}

impl BrowserCookies {
    #[must_use]
    pub fn new(options: CookieOptions) -> Self {
        Self { options }
    }

    /// Full assignment string for `document.cookie`.
    #[must_use]
    pub fn assignment(&self, name: &str, value: &str) -> String {
        format!("{name}={value}; {}", self.options.attributes())
    }
}

/// Parse a `Cookie`-style header (`a=1; b=2`). Later duplicates win; pairs
/// without `=` are skipped.
#[must_use]
pub fn parse_cookie_string(raw: &str) -> HashMap<String, String> {
    raw.split(';')
        .filter_map(|pair| {
            let (name, value) = pair.split_once('=')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            Some((name.to_owned(), value.trim().to_owned()))
        })
        .collect()
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
}

impl CookieStore for BrowserCookies {
    fn read_all(&self) -> HashMap<String, String> {
        #[cfg(feature = "hydrate")]
        {
            html_document()
                .and_then(|doc| doc.cookie().ok())
                .map(|raw| parse_cookie_string(&raw))
                .unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            HashMap::new()
        }
    }

    fn write(&mut self, name: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let assignment = self.assignment(name, value);
            match html_document() {
                Some(doc) => {
                    if doc.set_cookie(&assignment).is_err() {
                        log::debug!("cookie write rejected: {name}");
                    }
                }
                None => log::debug!("no document; dropping cookie write for {name}"),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name, value);
        }
    }
}
