//! Seam for OS theme notification sources.

use crate::mode::OsTheme;

/// Callback invoked for each OS theme notification.
pub type OnChange = Box<dyn FnMut(OsTheme)>;

/// Source of OS theme notifications.
///
/// Implementations report the current theme as soon as they are able to and
/// keep reporting changes until the returned subscription is released.
pub trait ThemeWatcher {
    type Subscription: Subscription;

    fn subscribe(&self, on_change: OnChange) -> Self::Subscription;
}

/// Live registration with a [`ThemeWatcher`].
pub trait Subscription {
    /// Stop delivering notifications. Consumes the subscription so it can
    /// only happen once.
    fn unsubscribe(self);
}
