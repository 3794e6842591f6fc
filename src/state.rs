//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into the bootstrap middleware via `State`. It holds
//! the wrap-time theme config, the cookie attributes used for repairs, and the
//! wrapped page's own initial-props hook.

use std::fmt;
use std::sync::Arc;

use axum::http::request::Parts;
use futures::FutureExt;
use futures::future::BoxFuture;
use theme::{CookieOptions, ThemeConfig};

use crate::config::ServerConfig;

/// Initial-props hook of the wrapped page. Resolved before the preference
/// cookies are inspected; the result is handed to the client untouched.
pub type InitialPropsHook = Arc<dyn Fn(&Parts) -> BoxFuture<'static, serde_json::Value> + Send + Sync>;

/// Clone is required by Axum; the config is shared behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub theme: Arc<ThemeConfig>,
    pub cookie_options: CookieOptions,
    pub initial_props: InitialPropsHook,
}

impl AppState {
    #[must_use]
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            theme: Arc::new(config.theme.clone()),
            cookie_options: CookieOptions { secure: config.cookie_secure, ..CookieOptions::default() },
            initial_props: Arc::new(page_props),
        }
    }

    /// Replace the wrapped page's initial-props hook.
    #[must_use]
    pub fn with_initial_props<H>(mut self, hook: H) -> Self
    where
        H: Fn(&Parts) -> BoxFuture<'static, serde_json::Value> + Send + Sync + 'static,
    {
        self.initial_props = Arc::new(hook);
        self
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("theme", &self.theme)
            .field("cookie_options", &self.cookie_options)
            .finish_non_exhaustive()
    }
}

/// Default page props: the path being rendered.
pub fn page_props(parts: &Parts) -> BoxFuture<'static, serde_json::Value> {
    let path = parts.uri.path().to_owned();
    async move { serde_json::json!({ "path": path }) }.boxed()
}
