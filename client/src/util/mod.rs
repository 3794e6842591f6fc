//! Browser adapters for the dark mode core.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component logic.
//! Every function here compiles without `hydrate` and degrades to a no-op, so
//! SSR and native tests stay deterministic.

pub mod cookies;
pub mod dark_mode;
pub mod media_query;
pub mod seed;
