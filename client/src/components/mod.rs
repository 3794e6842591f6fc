//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dark mode controls, reading the handle either from a prop
//! or from the context provided by `WithDarkMode`.

pub mod theme_badge;
pub mod theme_switcher;
