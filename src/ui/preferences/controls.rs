//! Libadwaita rows as binding controls.
//!
//! Each adapter holds a weak reference to its widget. Once the dialog is
//! destroyed the adapters read as empty and ignore writes.

use std::rc::Rc;

use libadwaita::{
    ComboRow, EntryRow, SwitchRow,
    glib::WeakRef,
    gtk::{INVALID_LIST_POSITION, StringList, TextView},
    prelude::{ComboRowExt, EditableExt, ObjectExt, TextBufferExt, TextViewExt, WidgetExt},
};

use crate::binding::{ChoiceControl, TextControl, ToggleControl};

/// Entry row holding free text, a number or a path.
pub struct EntryControl(WeakRef<EntryRow>);

impl EntryControl {
    pub fn new(row: &EntryRow) -> Rc<Self> {
        Rc::new(Self(row.downgrade()))
    }
}

impl TextControl for EntryControl {
    fn text(&self) -> String {
        self.0
            .upgrade()
            .map(|row| row.text().to_string())
            .unwrap_or_default()
    }

    fn set_text(&self, value: &str) {
        if let Some(row) = self.0.upgrade() {
            row.set_text(value);
        }
    }
}

/// Switch row holding a boolean option.
pub struct SwitchControl(WeakRef<SwitchRow>);

impl SwitchControl {
    pub fn new(row: &SwitchRow) -> Rc<Self> {
        Rc::new(Self(row.downgrade()))
    }
}

impl ToggleControl for SwitchControl {
    fn is_active(&self) -> bool {
        self.0.upgrade().is_some_and(|row| row.is_active())
    }

    fn set_active(&self, active: bool) {
        if let Some(row) = self.0.upgrade() {
            row.set_active(active);
        }
    }

    fn set_enabled(&self, enabled: bool) {
        if let Some(row) = self.0.upgrade() {
            row.set_sensitive(enabled);
        }
    }
}

/// Combo row presenting selector labels.
pub struct ComboControl(WeakRef<ComboRow>);

impl ComboControl {
    pub fn new(row: &ComboRow) -> Rc<Self> {
        Rc::new(Self(row.downgrade()))
    }
}

impl ChoiceControl for ComboControl {
    fn set_items(&self, labels: &[String]) {
        if let Some(row) = self.0.upgrade() {
            let labels: Vec<&str> = labels.iter().map(String::as_str).collect();
            row.set_model(Some(&StringList::new(&labels)));
            row.set_selected(INVALID_LIST_POSITION);
        }
    }

    fn selected(&self) -> Option<usize> {
        let row = self.0.upgrade()?;
        let selected = row.selected();
        (selected != INVALID_LIST_POSITION).then_some(selected as usize)
    }

    fn set_selected(&self, index: Option<usize>) {
        if let Some(row) = self.0.upgrade() {
            let position = index
                .and_then(|index| u32::try_from(index).ok())
                .unwrap_or(INVALID_LIST_POSITION);
            row.set_selected(position);
        }
    }
}

/// Multi-line text view, used for color lists.
pub struct TextViewControl(WeakRef<TextView>);

impl TextViewControl {
    pub fn new(view: &TextView) -> Rc<Self> {
        Rc::new(Self(view.downgrade()))
    }
}

impl TextControl for TextViewControl {
    fn text(&self) -> String {
        self.0
            .upgrade()
            .map(|view| {
                let buffer = view.buffer();
                buffer
                    .text(&buffer.start_iter(), &buffer.end_iter(), false)
                    .to_string()
            })
            .unwrap_or_default()
    }

    fn set_text(&self, value: &str) {
        if let Some(view) = self.0.upgrade() {
            view.buffer().set_text(value);
        }
    }
}
