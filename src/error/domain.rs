//! Domain-specific error types using `thiserror`.
//!
//! This module defines the error enums for the preferences session and
//! the user interface.

use thiserror::Error;

use crate::config::StoreError;

/// Preferences session errors.
#[derive(Error, Debug)]
pub enum PreferencesError {
    /// The options store failed to persist.
    #[error("Options store error: {0}")]
    Store(#[from] StoreError),
    /// An option value could not be interpreted.
    #[error("Invalid value for option {key}: {reason}")]
    InvalidOption { key: String, reason: String },
}

/// UI-related errors.
#[derive(Error, Debug)]
pub enum UiError {
    /// GTK/Libadwaita initialization error.
    #[error("UI initialization error: {0}")]
    InitializationError(String),
}
