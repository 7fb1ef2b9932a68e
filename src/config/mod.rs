//! Option values, the scoped options store, and static preference data.
//!
//! This module provides the persistent key-value store the preferences
//! dialog reads from and writes to, together with the built-in defaults
//! and per-locale font presets.

pub mod defaults;
pub mod fonts;
pub mod store;
pub mod value;

pub use {
    fonts::{FontOption, FontSet, FontTable},
    store::{OptionsStore, ScopeKey, StoreError, StoredOptions, get_config_path},
    value::{OptionValue, TypeHint},
};
