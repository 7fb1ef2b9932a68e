//! Shared builders for preferences pages.
//!
//! An [`OptionsPage`] wraps a Libadwaita page and hands out
//! [`OptionGroup`]s. Every row an option group creates is bound to its store
//! key through the session registry, so pages never read or write the store
//! themselves.

use std::rc::Rc;

use {
    libadwaita::{
        ComboRow, EntryRow, PreferencesGroup, PreferencesPage, SwitchRow,
        gio::{Cancellable, File},
        glib::Error as GlibError,
        gtk::{
            AccessibleRole::Group, Align::Center, Button, FileDialog, Frame, InputPurpose, TextView,
            Window, WrapMode,
        },
        prelude::{
            ActionRowExt, ButtonExt, CastNone, EditableExt, EntryRowExt, FileExt, ObjectExt,
            PreferencesGroupExt, PreferencesPageExt, PreferencesRowExt, WidgetExt,
        },
    },
    tracing::debug,
};

use crate::{
    binding::{Binding, Choices, PathKind},
    state::PreferencesSession,
    ui::preferences::controls::{ComboControl, EntryControl, SwitchControl, TextViewControl},
};

/// A preferences page whose option groups can be disabled together.
#[derive(Clone)]
pub struct OptionsPage {
    /// The underlying Libadwaita preferences page widget.
    pub widget: PreferencesPage,
    session: Rc<PreferencesSession>,
    groups: Vec<PreferencesGroup>,
}

impl OptionsPage {
    /// Creates an empty page.
    ///
    /// # Arguments
    ///
    /// * `session` - Session the page's rows are bound through
    /// * `title` - Page title shown in the view switcher
    /// * `icon_name` - Symbolic icon of the page
    ///
    /// # Returns
    ///
    /// A new `OptionsPage` instance.
    pub fn new(session: &Rc<PreferencesSession>, title: &str, icon_name: &str) -> Self {
        let widget = PreferencesPage::builder()
            .title(title)
            .icon_name(icon_name)
            .accessible_role(Group)
            .build();

        Self {
            widget,
            session: session.clone(),
            groups: Vec::new(),
        }
    }

    #[must_use]
    pub fn session(&self) -> &Rc<PreferencesSession> {
        &self.session
    }

    /// Appends a group of bound options to the page.
    pub fn group(&mut self, title: &str, description: Option<&str>) -> OptionGroup {
        let widget = PreferencesGroup::builder().title(title).build();
        if let Some(description) = description {
            widget.set_description(Some(description));
        }

        self.widget.add(&widget);
        self.groups.push(widget.clone());

        OptionGroup {
            widget,
            session: self.session.clone(),
        }
    }

    /// Enables or disables every option group of the page. Groups added
    /// directly to `widget` are left alone.
    pub fn set_options_sensitive(&self, sensitive: bool) {
        for group in &self.groups {
            group.set_sensitive(sensitive);
        }
    }
}

/// A preferences group whose rows are bound to store keys.
pub struct OptionGroup {
    /// The underlying Libadwaita preferences group widget.
    pub widget: PreferencesGroup,
    session: Rc<PreferencesSession>,
}

impl OptionGroup {
    /// Adds a free text entry.
    pub fn entry(&self, key: &str, title: &str) -> EntryRow {
        let row = EntryRow::builder().title(title).build();
        self.session.bind(key, Binding::text(EntryControl::new(&row)));
        self.widget.add(&row);
        row
    }

    /// Adds a text entry that is stored as a number when it holds one.
    pub fn numeric_text(&self, key: &str, title: &str) -> EntryRow {
        let row = EntryRow::builder()
            .title(title)
            .input_purpose(InputPurpose::Number)
            .build();
        self.session
            .bind(key, Binding::numeric_text(EntryControl::new(&row)));
        self.widget.add(&row);
        row
    }

    /// Adds an integer entry clamped into `[min, max]`.
    pub fn numeric(&self, key: &str, title: &str, min: i64, max: i64) -> EntryRow {
        let row = EntryRow::builder()
            .title(title)
            .input_purpose(InputPurpose::Digits)
            .build();
        row.set_tooltip_text(Some(&format!("Allowed values are {min} to {max}")));
        self.session
            .bind(key, Binding::numeric(EntryControl::new(&row), min, max));
        self.widget.add(&row);
        row
    }

    /// Adds a switch stored as `1`/`0`.
    pub fn switch(&self, key: &str, title: &str, subtitle: Option<&str>) -> SwitchRow {
        let row = switch_row(title, subtitle);
        self.session
            .bind(key, Binding::checkbox(SwitchControl::new(&row)));
        self.widget.add(&row);
        row
    }

    /// Adds a selector.
    ///
    /// # Arguments
    ///
    /// * `key` - Store key of the option
    /// * `title` - Row title
    /// * `choices` - Choice spec such as `"disable:0,1 minute:60"`, or empty
    ///   to use the list stored under `@<key>/Items`
    /// * `as_number` - Store the selected value as an integer
    pub fn selector(&self, key: &str, title: &str, choices: &str, as_number: bool) -> ComboRow {
        let row = ComboRow::builder().title(title).build();
        let choices =
            Choices::parse_or_lookup(choices, key, self.session.store(), &self.session.scope());
        self.session.bind(
            key,
            Binding::selector(ComboControl::new(&row), choices, as_number),
        );
        self.widget.add(&row);
        row
    }

    /// Adds a path entry with a browse button.
    pub fn path(&self, key: &str, title: &str, kind: PathKind) -> EntryRow {
        let row = EntryRow::builder().title(title).build();
        let icon_name = match kind {
            PathKind::File => "document-open-symbolic",
            PathKind::Directory => "folder-open-symbolic",
        };
        let browse = Button::builder()
            .icon_name(icon_name)
            .tooltip_text("Browse")
            .valign(Center)
            .css_classes(["flat"])
            .build();

        let weak_row = row.downgrade();
        browse.connect_clicked(move |_| {
            if let Some(row) = weak_row.upgrade() {
                choose_path(&row, kind);
            }
        });
        row.add_suffix(&browse);

        self.session
            .bind(key, Binding::path(EntryControl::new(&row), kind));
        self.widget.add(&row);
        row
    }

    /// Adds a multi-line text area that always edits the global scope.
    pub fn global_text_area(&self, key: &str) -> TextView {
        let view = TextView::builder()
            .monospace(true)
            .wrap_mode(WrapMode::None)
            .top_margin(6)
            .bottom_margin(6)
            .left_margin(6)
            .right_margin(6)
            .height_request(120)
            .build();
        let frame = Frame::builder().child(&view).build();

        self.session
            .bind_global(key, Binding::text(TextViewControl::new(&view)));
        self.widget.add(&frame);
        view
    }
}

fn switch_row(title: &str, subtitle: Option<&str>) -> SwitchRow {
    let row = SwitchRow::builder().title(title).build();
    if let Some(subtitle) = subtitle {
        row.set_subtitle(subtitle);
    }
    row
}

/// Opens a file or folder chooser and writes the chosen path into `row`.
fn choose_path(row: &EntryRow, kind: PathKind) {
    let dialog = FileDialog::builder().title(row.title()).modal(true).build();
    let parent = row.root().and_downcast::<Window>();

    let weak_row = row.downgrade();
    let on_chosen = move |result: Result<File, GlibError>| match result {
        Ok(file) => {
            if let Some(path) = file.path()
                && let Some(row) = weak_row.upgrade()
            {
                row.set_text(&path.to_string_lossy());
            }
        }
        Err(e) => debug!("Path selection dismissed: {}", e),
    };

    match kind {
        PathKind::File => dialog.open(parent.as_ref(), None::<&Cancellable>, on_chosen),
        PathKind::Directory => {
            dialog.select_folder(parent.as_ref(), None::<&Cancellable>, on_chosen);
        }
    }
}
