//! Per-request dark mode bootstrap.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs in front of every SSR page. It resolves the page's own initial props,
//! derives the preference pair from the request cookies, attaches the merged
//! hydration payload to the request for the Leptos shell, and appends any
//! repaired cookies to the response.

use std::collections::HashMap;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use client::util::seed::HydrationPayload;
use theme::{CookieOptions, CookieStore, RenderPhase};

use crate::state::AppState;

/// Adapter exposing an axum-extra `CookieJar` as a [`CookieStore`].
///
/// Reads see the request cookies plus anything written so far; only writes end
/// up in the response.
#[derive(Debug)]
pub struct JarCookies {
    jar: CookieJar,
    options: CookieOptions,
}

impl JarCookies {
    #[must_use]
    pub fn new(jar: CookieJar, options: CookieOptions) -> Self {
        Self { jar, options }
    }

    #[must_use]
    pub fn into_jar(self) -> CookieJar {
        self.jar
    }
}

impl CookieStore for JarCookies {
    fn read_all(&self) -> HashMap<String, String> {
        self.jar.iter().map(|c| (c.name().to_owned(), c.value().to_owned())).collect()
    }

    fn write(&mut self, name: &str, value: &str) {
        let cookie = Cookie::build((name.to_owned(), value.to_owned()))
            .path(self.options.path.clone())
            .same_site(SameSite::Lax)
            .secure(self.options.secure);
        self.jar = std::mem::take(&mut self.jar).add(cookie);
    }
}

/// Middleware: bootstrap the theme seed for a server render.
pub async fn theme_bootstrap(State(state): State<AppState>, jar: CookieJar, request: Request, next: Next) -> Response {
    let mut cookies = JarCookies::new(jar, state.cookie_options.clone());
    let (parts, body) = request.into_parts();

    let wrapped = (state.initial_props)(&parts);
    let props = theme::bootstrap(RenderPhase::Server, &mut cookies, &state.theme, wrapped).await;
    tracing::debug!(path = %parts.uri.path(), seed = ?props.seed, "dark mode bootstrap");

    let payload = HydrationPayload::new(state.theme.as_ref().clone(), props.seed)
        .with_cookie_options(state.cookie_options.clone())
        .with_initial_props(props.initial_props);

    let mut request = Request::from_parts(parts, body);
    request.extensions_mut().insert(payload);

    let response = next.run(request).await;
    (cookies.into_jar(), response).into_response()
}

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod tests;
