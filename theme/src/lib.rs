//! Dark mode preference model shared by the SSR server and the hydrated client.
//!
//! This crate owns the reconciliation rules between the persisted cookie
//! pair, explicit user choices, and OS theme notifications. Everything here is
//! framework-free: the server and the Leptos client each plug in their own
//! [`CookieStore`] and [`ThemeWatcher`] adapters.
//!
//! DESIGN
//! ======
//! Transitions are pure (`state -> Transition { state, writes }`); the cookie
//! writes they produce are performed by [`machine::step`]. The caller decides
//! which render phase it is in, nothing in here inspects the environment.

pub mod bootstrap;
pub mod config;
pub mod cookie;
pub mod machine;
pub mod mode;
pub mod state;
pub mod watcher;

pub use bootstrap::{InitialProps, RenderPhase, ThemeSeed, bootstrap, compute_initial_state};
pub use config::ThemeConfig;
pub use cookie::{CookieKind, CookieOptions, CookieStore, CookieWrite, MemoryCookieStore};
pub use machine::step;
pub use mode::{Mode, OsTheme, ParseModeError};
pub use state::{ThemeEvent, ThemeState, Transition, apply_event};
pub use watcher::{OnChange, Subscription, ThemeWatcher};
