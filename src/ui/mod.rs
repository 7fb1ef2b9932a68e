//! GNOME HIG-compliant user interface built entirely with Libadwaita.
//!
//! This module provides the host application window and the preferences
//! dialog with its pages.

pub mod application;
pub mod preferences;

pub use {
    application::PrefsApplication,
    preferences::{OptionGroup, OptionsPage, PreferencesDialog},
};
