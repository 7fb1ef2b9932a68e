//! Appearance preferences page implementation.
//!
//! Only shown for the global scope. Holds the color presets offered for
//! figures and the font table with its per-script presets.

use std::rc::Rc;

use {
    libadwaita::{
        ComboRow, EntryRow,
        gtk::{INVALID_LIST_POSITION, StringList},
        prelude::{ComboRowExt, EditableExt, PreferencesGroupExt},
    },
    tracing::{debug, warn},
};

use crate::{
    config::{FontTable, fonts::font_sets},
    state::PreferencesSession,
    ui::preferences::utils::OptionsPage,
};

/// Appearance preferences page.
pub struct AppearancePreferencesPage {
    /// Page with the color and font groups.
    pub page: OptionsPage,
    /// Font entries keyed by store key, in table order.
    font_rows: Vec<(String, EntryRow)>,
}

impl AppearancePreferencesPage {
    /// Creates a new appearance preferences page instance.
    pub fn new(session: &Rc<PreferencesSession>) -> Self {
        let page = OptionsPage::new(session, "Appearance", "applications-graphics-symbolic");

        let mut appearance = Self {
            page,
            font_rows: Vec::new(),
        };
        appearance.setup_color_presets();
        appearance.setup_fonts();

        debug!("AppearancePreferencesPage: Created");

        appearance
    }

    fn setup_color_presets(&mut self) {
        self.page
            .group(
                "Table Colors",
                Some("Colors available for tables, views etc, one per line"),
            )
            .global_text_area("workbench.model.ObjectFigure:ColorList");
        self.page
            .group(
                "Layer Colors",
                Some("Colors available for layers, notes etc, one per line"),
            )
            .global_text_area("workbench.model.Figure:ColorList");
    }

    /// Sets up the font preset selector and one entry per font option.
    fn setup_fonts(&mut self) {
        let group = self.page.group("Fonts", None);
        let session = self.page.session().clone();

        let preset = ComboRow::builder().title("Configure Fonts For").build();
        let names: Vec<&str> = font_sets().iter().map(|set| set.name).collect();
        preset.set_model(Some(&StringList::new(&names)));
        preset.set_selected(INVALID_LIST_POSITION);
        group.widget.add(&preset);

        // Rows are created for the fonts present now; the table the session
        // loads on show lists the same keys.
        let table = FontTable::load(session.store());
        for option in table.rows() {
            let row = EntryRow::builder().title(option.caption.as_str()).build();

            let key = option.key.clone();
            let session = session.clone();
            row.connect_changed(move |row| {
                session.set_font(&key, &row.text());
            });

            group.widget.add(&row);
            self.font_rows.push((option.key.clone(), row));
        }

        let font_rows = self.font_rows.clone();
        preset.connect_selected_notify(move |preset| {
            let Some(set) = font_sets().get(preset.selected() as usize) else {
                return;
            };
            if let Err(e) = session.apply_font_preset(set.tag) {
                warn!("Failed to apply font preset: {}", e);
                return;
            }
            let table = session.fonts().clone();
            show_fonts(&table, &font_rows);
        });
    }

    /// Shows the session's font table in the font entries.
    pub fn refresh_fonts(&self) {
        let session = self.page.session();
        if !session.is_global() {
            return;
        }
        // Entries write back into the table, so show from a copy.
        let table = session.fonts().clone();
        show_fonts(&table, &self.font_rows);
    }
}

fn show_fonts(table: &FontTable, rows: &[(String, EntryRow)]) {
    for (key, row) in rows {
        if let Some(value) = table.value(key)
            && row.text().as_str() != value
        {
            row.set_text(value);
        }
    }
}
