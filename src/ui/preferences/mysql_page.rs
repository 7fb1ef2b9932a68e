//! MySQL model preferences page implementation.
//!
//! In global mode the page edits the default target version of new
//! models. For a model it edits that model's own target version.

use std::rc::Rc;

use {
    libadwaita::{EntryRow, prelude::PreferencesGroupExt},
    tracing::debug,
};

use crate::{
    binding::Binding,
    state::{CATALOG_VERSION_KEY, PreferencesSession, TargetVersionOption},
    ui::preferences::{controls::EntryControl, utils::OptionsPage},
};

/// MySQL model preferences page.
pub struct MySqlPreferencesPage {
    /// Page with the target version and generation options.
    pub page: OptionsPage,
}

impl MySqlPreferencesPage {
    /// Creates a new MySQL preferences page instance.
    pub fn new(session: &Rc<PreferencesSession>) -> Self {
        let mut page = OptionsPage::new(session, "MySQL", "network-server-symbolic");

        let model = page.group("Model", None);
        if session.is_global() {
            model.selector(
                "DefaultTargetMySQLVersion",
                "Default Target MySQL Version",
                "",
                false,
            );
        } else {
            let row = EntryRow::builder().title("Target MySQL Version").build();
            session.bind(
                CATALOG_VERSION_KEY,
                Binding::custom(TargetVersionOption::new(EntryControl::new(&row))),
            );
            model.widget.add(&row);
        }

        let tables = page.group("Model Table Defaults", None);
        tables.selector(
            "db.mysql.Table:tableEngine",
            "Default Storage Engine",
            "",
            false,
        );

        let generation = page.group(
            "Forward Engineering and Synchronization",
            Some("The default value of TRADITIONAL is recommended"),
        );
        generation.entry(
            "SqlGenerator.Mysql:SQL_MODE",
            "SQL_MODE Used in Generated Scripts",
        );

        debug!("MySqlPreferencesPage: Created");

        Self { page }
    }
}
