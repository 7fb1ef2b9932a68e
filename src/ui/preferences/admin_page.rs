//! Administration preferences page implementation.
//!
//! Paths of the external tools used for export and import, and the default
//! dump directory.

use std::rc::Rc;

use tracing::debug;

use crate::{
    binding::PathKind,
    state::PreferencesSession,
    ui::preferences::utils::OptionsPage,
};

/// Administration preferences page.
pub struct AdminPreferencesPage {
    /// Page with the tool path options.
    pub page: OptionsPage,
}

impl AdminPreferencesPage {
    /// Creates a new administration preferences page instance.
    pub fn new(session: &Rc<PreferencesSession>) -> Self {
        let mut page = OptionsPage::new(session, "Administration", "utilities-terminal-symbolic");

        let group = page.group(
            "Data Export and Import",
            Some("Leave a tool path empty to use the bundled tool"),
        );
        group.path("mysqldump", "Path to mysqldump Tool", PathKind::File);
        group.path("mysqlclient", "Path to mysql Tool", PathKind::File);
        group.path(
            "dumpdirectory",
            "Export Directory Path",
            PathKind::Directory,
        );

        debug!("AdminPreferencesPage: Created");

        Self { page }
    }
}
