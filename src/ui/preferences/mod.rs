//! Preferences dialog implementation following GNOME HIG guidelines.
//!
//! This module provides the preferences dialog with its pages: General,
//! Administration, SQL Editor, Model, MySQL, Diagram and Appearance. Every
//! option row is bound to a store key through the session registry.


pub mod admin_page;
pub mod appearance_page;
pub mod controls;
pub mod diagram_page;
pub mod dialog;
pub mod general_page;
pub mod model_page;
pub mod mysql_page;
pub mod sql_editor_page;
pub mod utils;

pub use {
    admin_page::AdminPreferencesPage, appearance_page::AppearancePreferencesPage,
    diagram_page::DiagramPreferencesPage, dialog::PreferencesDialog,
    general_page::GeneralPreferencesPage, model_page::ModelPreferencesPage,
    mysql_page::MySqlPreferencesPage, sql_editor_page::SqlEditorPreferencesPage,
    utils::{OptionGroup, OptionsPage},
};
