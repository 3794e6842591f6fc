//! Reactive client state.

pub mod dark_mode;
