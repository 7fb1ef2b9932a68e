//! Preferences session state and lifecycle notifications.
//!
//! This module provides the non-visual half of the preferences dialog: the
//! session that owns the option bindings, the events it broadcasts, and
//! custom options that need more than the generic bindings.

#[cfg(test)]
mod tests;

pub mod events;
pub mod session;
pub mod version;

pub use {
    events::{PreferencesEvent, PreferencesNotifier},
    session::PreferencesSession,
    version::{CATALOG_VERSION_KEY, TargetVersion, TargetVersionOption},
};
