//! prefsform - Preferences Dialog
//!
//! A preferences dialog that lays out tabbed pages of options bound to a
//! scoped, persistent options store. The binding layer decouples each
//! control from the store key it edits, so pages only declare which key a
//! row shows and how its value is coerced.

pub mod binding;
pub mod config;
pub mod error;
pub mod state;
pub mod ui;

// Re-export key types for convenience
pub use {
    binding::{Binding, OptionRegistry},
    config::{OptionValue, OptionsStore, ScopeKey, StoreError, TypeHint},
    error::{PreferencesError, UiError},
    state::{PreferencesEvent, PreferencesNotifier, PreferencesSession},
    ui::PrefsApplication,
};
