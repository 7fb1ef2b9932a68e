//! Main preferences dialog implementation.
//!
//! This module implements the `PreferencesDialog` which lays out the
//! preferences pages for one session. Closing the dialog applies the
//! edited values; the Revert action restores the stored values and closes
//! without saving.

use std::rc::Rc;

use {
    anyhow::Error,
    libadwaita::{
        ActionRow, PreferencesDialog as LibadwaitaPreferencesDialog, PreferencesGroup, SwitchRow,
        Toast,
        gtk::{Align::Center, Button, Widget},
        prelude::{
            ActionRowExt, AdwDialogExt, ButtonExt, PreferencesDialogExt, PreferencesGroupExt,
        },
    },
    tracing::debug,
};

use crate::{
    error::{ErrorReporter, ResultExt},
    state::PreferencesSession,
    ui::preferences::{
        AdminPreferencesPage, AppearancePreferencesPage, DiagramPreferencesPage,
        GeneralPreferencesPage, ModelPreferencesPage, MySqlPreferencesPage,
        SqlEditorPreferencesPage, utils::OptionsPage,
    },
};

/// Preferences dialog bound to one session.
pub struct PreferencesDialog {
    /// The underlying Libadwaita preferences dialog widget.
    pub widget: LibadwaitaPreferencesDialog,
    /// Session the dialog edits.
    session: Rc<PreferencesSession>,
    /// Pages in display order.
    pages: Vec<OptionsPage>,
    /// Font editor, present for the global scope only.
    appearance: Option<AppearancePreferencesPage>,
    /// "Use defaults from global settings" switch, present for a context only.
    use_global: Option<SwitchRow>,
}

impl PreferencesDialog {
    /// Creates a new preferences dialog instance.
    ///
    /// SQL Editor and Appearance pages are only built for the global
    /// scope. For a context, a "use defaults from global settings" switch
    /// is shown above the General options and disables every page while
    /// it is on.
    ///
    /// # Arguments
    ///
    /// * `session` - Session whose options the dialog edits
    ///
    /// # Returns
    ///
    /// A new `PreferencesDialog` instance.
    pub fn new(session: Rc<PreferencesSession>) -> Rc<Self> {
        let global = session.is_global();
        let widget = LibadwaitaPreferencesDialog::builder()
            .title(if global { "Preferences" } else { "Model Options" })
            .build();

        widget.set_content_width(760);
        widget.set_content_height(640);

        let header = PreferencesGroup::new();
        let use_global = (!global).then(|| {
            let row = SwitchRow::builder()
                .title("Use Defaults from Global Settings")
                .subtitle("Ignore the options below and use the global preferences")
                .build();
            header.add(&row);
            row
        });
        let revert = Self::add_revert_row(&header);

        let mut pages = vec![GeneralPreferencesPage::new(&session, Some(&header)).page];
        pages.push(AdminPreferencesPage::new(&session).page);
        if global {
            pages.push(SqlEditorPreferencesPage::new(&session).page);
        }
        pages.push(ModelPreferencesPage::new(&session).page);
        pages.push(MySqlPreferencesPage::new(&session).page);
        pages.push(DiagramPreferencesPage::new(&session).page);
        let appearance = global.then(|| AppearancePreferencesPage::new(&session));
        if let Some(appearance) = &appearance {
            pages.push(appearance.page.clone());
        }

        for page in &pages {
            widget.add(&page.widget);
        }

        debug!("PreferencesDialog: Created with {} pages", pages.len());

        let dialog = Rc::new(Self {
            widget,
            session,
            pages,
            appearance,
            use_global,
        });

        if let Some(use_global) = &dialog.use_global {
            dialog.connect_use_global(use_global);
        }
        dialog.connect_revert(&revert);
        dialog.connect_close_attempt();

        dialog
    }

    fn add_revert_row(header: &PreferencesGroup) -> Button {
        let row = ActionRow::builder()
            .title("Revert Changes")
            .subtitle("Restore the stored values and close without saving")
            .build();
        let button = Button::builder()
            .label("Revert")
            .valign(Center)
            .css_classes(["destructive-action"])
            .build();
        row.add_suffix(&button);
        header.add(&row);
        button
    }

    fn connect_use_global(self: &Rc<Self>, row: &SwitchRow) {
        let weak = Rc::downgrade(self);
        row.connect_active_notify(move |row| {
            if let Some(dialog) = weak.upgrade() {
                dialog.session.set_use_global(row.is_active());
                dialog.set_pages_sensitive(!row.is_active());
            }
        });
    }

    fn connect_revert(self: &Rc<Self>, button: &Button) {
        let weak = Rc::downgrade(self);
        button.connect_clicked(move |_| {
            if let Some(dialog) = weak.upgrade() {
                debug!("PreferencesDialog: Reverting");
                dialog.session.cancel();
                dialog.widget.force_close();
            }
        });
    }

    /// Applies the values when the user closes the dialog. The dialog
    /// stays open with a toast if they cannot be saved.
    fn connect_close_attempt(self: &Rc<Self>) {
        self.widget.set_can_close(false);

        let weak = Rc::downgrade(self);
        self.widget.connect_close_attempt(move |widget| {
            let Some(dialog) = weak.upgrade() else {
                widget.force_close();
                return;
            };

            match dialog
                .session
                .ok()
                .add_context("Failed to save preferences")
            {
                Ok(()) => widget.force_close(),
                Err(e) => dialog.report_save_error(&e),
            }
        });
    }

    fn report_save_error(&self, error: &Error) {
        ErrorReporter::warn(error, "PreferencesDialog");
        self.widget
            .add_toast(Toast::new(&ErrorReporter::to_user_message(error)));
    }

    fn set_pages_sensitive(&self, sensitive: bool) {
        for page in &self.pages {
            page.set_options_sensitive(sensitive);
        }
    }

    /// Shows the stored values in every page.
    pub fn show_values(&self) {
        self.session.announce_will_open();
        if let Some(appearance) = &self.appearance {
            appearance.refresh_fonts();
        }
        if let Some(use_global) = &self.use_global {
            use_global.set_active(self.session.uses_global());
        }
        self.set_pages_sensitive(!self.session.uses_global());
    }

    #[must_use]
    pub fn session(&self) -> &Rc<PreferencesSession> {
        &self.session
    }

    /// Shows the stored values and presents the dialog.
    ///
    /// # Arguments
    ///
    /// * `parent` - Widget the dialog is presented over, if any
    pub fn present(&self, parent: Option<&Widget>) {
        debug!("PreferencesDialog: Presenting");
        self.show_values();
        self.widget.present(parent);
    }
}
