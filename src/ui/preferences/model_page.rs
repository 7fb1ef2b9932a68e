//! Model preferences page implementation.
//!
//! Naming templates and type defaults applied to newly created columns and
//! relationships.

use std::rc::Rc;

use {libadwaita::prelude::WidgetExt, tracing::debug};

use crate::{state::PreferencesSession, ui::preferences::utils::OptionsPage};

/// Model preferences page.
pub struct ModelPreferencesPage {
    /// Page with the column and relationship defaults.
    pub page: OptionsPage,
}

impl ModelPreferencesPage {
    /// Creates a new model preferences page instance.
    pub fn new(session: &Rc<PreferencesSession>) -> Self {
        let mut page = OptionsPage::new(session, "Model", "view-grid-symbolic");

        let columns = page.group(
            "Column Defaults",
            Some("%table% is replaced with the name of the table"),
        );
        columns.entry("PkColumnNameTemplate", "PK Column Name");
        columns.entry("DefaultPkColumnType", "PK Column Type");
        columns.entry("ColumnNameTemplate", "Column Name");
        columns.entry("DefaultColumnType", "Column Type");

        let relationships = page.group(
            "Foreign Key/Relationship Defaults",
            Some(
                "%stable% and %dtable% are the source and destination tables, \
                 %column% is the referenced column",
            ),
        );
        relationships
            .entry("FKNameTemplate", "FK Name")
            .set_tooltip_text(Some("Foreign key names must be unique within the schema"));
        relationships.entry("FKColumnNameTemplate", "Column Name");
        relationships.selector("db.ForeignKey:updateRule", "ON UPDATE", "", false);
        relationships.selector("db.ForeignKey:deleteRule", "ON DELETE", "", false);
        relationships.entry("AuxTableTemplate", "Associative Table Name");

        debug!("ModelPreferencesPage: Created");

        Self { page }
    }
}
