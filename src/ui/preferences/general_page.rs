//! General preferences page implementation.
//!
//! This module implements the General tab: model and script auto-saving,
//! undo history, SQL editor session restore, and miscellaneous options.

use std::rc::Rc;

use {
    libadwaita::{PreferencesGroup, prelude::PreferencesPageExt},
    tracing::debug,
};

use crate::{
    binding::link_toggles,
    state::PreferencesSession,
    ui::preferences::{controls::SwitchControl, utils::OptionsPage},
};

/// Auto-save intervals offered for models and scripts, in seconds.
const AUTO_SAVE_INTERVALS: &str = "disable:0,10 seconds:10,15 seconds:15,30 seconds:30,\
1 minute:60,5 minutes:300,10 minutes:600,20 minutes:1200";

/// General preferences page.
pub struct GeneralPreferencesPage {
    /// Page with the general option groups.
    pub page: OptionsPage,
}

impl GeneralPreferencesPage {
    /// Creates a new general preferences page instance.
    ///
    /// # Arguments
    ///
    /// * `session` - Session the page's options are bound through
    /// * `header` - Group shown above the options that is never disabled
    ///
    /// # Returns
    ///
    /// A new `GeneralPreferencesPage` instance.
    pub fn new(session: &Rc<PreferencesSession>, header: Option<&PreferencesGroup>) -> Self {
        let mut page = OptionsPage::new(session, "General", "preferences-system-symbolic");
        if let Some(header) = header {
            page.widget.add(header);
        }

        let mut general = Self { page };
        general.setup_model_options();
        general.setup_sql_editor_options();
        general.setup_other_options();

        debug!("GeneralPreferencesPage: Created");

        general
    }

    /// Sets up model undo and auto-save options.
    fn setup_model_options(&mut self) {
        let group = self.page.group("Model", None);

        group.switch(
            "workbench.AutoReopenLastModel",
            "Reopen Previous Model",
            Some("Automatically reopen the previous model at start"),
        );
        group.switch(
            "workbench:ForceSWRendering",
            "Software Rendering",
            Some("Force software based rendering for diagrams"),
        );
        group.numeric("workbench:UndoEntries", "Model Undo History Size", 1, 500);
        group.selector(
            "workbench:AutoSaveModelInterval",
            "Auto-Save Model Interval",
            AUTO_SAVE_INTERVALS,
            true,
        );
    }

    /// Sets up SQL editor session options.
    fn setup_sql_editor_options(&mut self) {
        let group = self.page.group("SQL Editor", None);

        let save_workspace = group.switch(
            "workbench:SaveSQLWorkspaceOnClose",
            "Save Snapshot of Open Editors on Close",
            Some("Open scripts are restored the next time the same connection is opened"),
        );
        group.selector(
            "workbench:AutoSaveScriptsInterval",
            "Auto-Save Scripts Interval",
            AUTO_SAVE_INTERVALS,
            true,
        );
        let discard_unsaved = group.switch(
            "DbSqlEditor:DiscardUnsavedQueryTabs",
            "Don't Warn About Unsaved Query Tabs",
            Some("Unsaved query tabs are discarded silently when the editor closes"),
        );

        // Only user changes are linked; showing stored values leaves both
        // rows as stored.
        let source = SwitchControl::new(&save_workspace);
        let target = SwitchControl::new(&discard_unsaved);
        let session = Rc::downgrade(self.page.session());
        save_workspace.connect_active_notify(move |_| {
            if session.upgrade().is_some_and(|session| !session.is_showing()) {
                link_toggles(&*source, &*target, true, true);
            }
        });
    }

    /// Sets up the shell language and internal schema options.
    fn setup_other_options(&mut self) {
        let group = self.page.group("Others", None);

        group.selector(
            "grtshell:ShellLanguage",
            "Interactive Shell Language",
            "",
            false,
        );
        group.entry("workbench:InternalSchema", "Internal Schema");
    }
}
