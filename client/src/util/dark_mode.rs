//! Reflect the active mode on the document root.
//!
//! The server shell renders `data-theme` on `<html>` from the seed so the
//! first paint is already correct. After hydration the provider calls
//! [`apply`] whenever `dark_mode_active` changes.
//!
//! TRADE-OFFS
//! ==========
//! Best-effort browser-only behavior; SSR paths no-op.

use theme::Mode;

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod tests;

/// Attribute on `<html>` carrying the active mode.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Set the `data-theme` attribute on the `<html>` element.
pub fn apply(mode: Mode) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute(THEME_ATTRIBUTE, mode.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}
